use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::errors::GatewayError;
use business::domain::product::model::{Product, ProductFields};
use business::domain::product::value_objects::{Price, ProductId, Quantity};

/// Product as the service sends it. Price and quantity may be numbers or strings.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub id: Value,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductPayload {
    pub fn into_domain(self) -> Result<Product, GatewayError> {
        let id = match self.id {
            Value::String(s) if !s.trim().is_empty() => ProductId::new(s),
            Value::Number(n) => ProductId::new(n.to_string()),
            other => {
                return Err(GatewayError::decode(format!(
                    "product id must be a string or number, got {}",
                    other
                )));
            }
        };

        Ok(Product::from_remote(
            id,
            self.barcode.unwrap_or_default(),
            self.description.unwrap_or_default(),
            coerce_price(&self.price),
            coerce_quantity(&self.quantity),
            self.category,
        ))
    }
}

/// Request body for create and update.
#[derive(Debug, Serialize)]
pub struct ProductFieldsPayload<'a> {
    pub barcode: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub quantity: u64,
    pub category: &'a str,
}

impl<'a> From<&'a ProductFields> for ProductFieldsPayload<'a> {
    fn from(fields: &'a ProductFields) -> Self {
        Self {
            barcode: &fields.barcode,
            description: &fields.description,
            price: fields.price,
            quantity: fields.quantity,
            category: fields.category.as_deref().unwrap_or_default(),
        }
    }
}

fn coerce_price(value: &Value) -> Price {
    match value {
        Value::Number(n) => n.as_f64().map(Price::from_number).unwrap_or(Price::Unknown),
        Value::String(s) => Price::from_text(s),
        _ => Price::Unknown,
    }
}

fn coerce_quantity(value: &Value) -> Quantity {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(count) => Quantity::Known(count),
            None => n.as_f64().map(Quantity::from_number).unwrap_or(Quantity::Unknown),
        },
        Value::String(s) => Quantity::from_text(s),
        _ => Quantity::Unknown,
    }
}

/// Decodes a list response: a bare array or an object with a `data` array.
///
/// Any other shape is an error, so a malformed response is never mistaken
/// for an empty collection.
pub fn decode_product_list(body: Value) -> Result<Vec<Product>, GatewayError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(GatewayError::decode(
                    "expected an array or an object with a data array",
                ));
            }
        },
        _ => {
            return Err(GatewayError::decode(
                "expected an array or an object with a data array",
            ));
        }
    };

    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(items.len());
    for item in items {
        let product = decode_item(item)?;
        if !seen.insert(product.id.clone()) {
            return Err(GatewayError::decode(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        products.push(product);
    }
    Ok(products)
}

/// Decodes a single product, bare or wrapped in `data`.
pub fn decode_product(body: Value) -> Result<Product, GatewayError> {
    match body {
        Value::Object(mut map) if !map.contains_key("id") && map.contains_key("data") => {
            decode_item(map.remove("data").unwrap_or(Value::Null))
        }
        other => decode_item(other),
    }
}

fn decode_item(item: Value) -> Result<Product, GatewayError> {
    serde_json::from_value::<ProductPayload>(item)
        .map_err(|e| GatewayError::decode(e.to_string()))?
        .into_domain()
}

/// Pulls the `message` field out of an error body, when there is one.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
