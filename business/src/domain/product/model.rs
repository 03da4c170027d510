use super::value_objects::{Price, ProductId, Quantity};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub barcode: String,
    pub description: String,
    pub price: Price,
    pub quantity: Quantity,
    pub category: Option<String>,
}

/// Validated fields sent to the service on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub barcode: String,
    pub description: String,
    pub price: f64,
    pub quantity: u64,
    pub category: Option<String>,
}

impl Product {
    /// Constructor for records decoded from the remote service (no validation).
    pub fn from_remote(
        id: ProductId,
        barcode: String,
        description: String,
        price: Price,
        quantity: Quantity,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            barcode,
            description,
            price,
            quantity,
            category: normalize_category(category),
        }
    }

    /// Builds the record the service is expected to hold after a confirmed write.
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            barcode: fields.barcode,
            description: fields.description,
            price: Price::from_number(fields.price),
            quantity: Quantity::Known(fields.quantity),
            category: normalize_category(fields.category),
        }
    }
}

/// Blank categories mean "no category". Any other value is kept verbatim.
pub fn normalize_category(category: Option<String>) -> Option<String> {
    category.filter(|c| !c.trim().is_empty())
}
