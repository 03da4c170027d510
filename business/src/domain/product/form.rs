use super::errors::ValidationError;
use super::model::{Product, ProductFields, normalize_category};
use super::value_objects::{Price, Quantity};

/// Editable state behind the add and edit screens.
///
/// Fields hold raw operator input; [`ProductForm::validate`] turns them into
/// typed [`ProductFields`]. A form opened for editing keeps the product's
/// barcode locked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    barcode: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    barcode_locked: bool,
}

impl ProductForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn for_edit(product: &Product) -> Self {
        Self {
            barcode: product.barcode.clone(),
            description: product.description.clone(),
            price: product
                .price
                .amount()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            quantity: product
                .quantity
                .count()
                .map(|q| q.to_string())
                .unwrap_or_default(),
            category: product.category.clone().unwrap_or_default(),
            barcode_locked: true,
        }
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn set_barcode(&mut self, barcode: impl Into<String>) -> Result<(), ValidationError> {
        if self.barcode_locked {
            return Err(ValidationError::BarcodeImmutable);
        }
        self.barcode = barcode.into();
        Ok(())
    }

    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        let barcode = self.barcode.trim();
        if barcode.is_empty() {
            return Err(ValidationError::BarcodeEmpty);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::DescriptionEmpty);
        }

        // Same coercion rules as values read from the service.
        let price = Price::from_text(&self.price)
            .amount()
            .ok_or(ValidationError::PriceInvalid)?;
        let quantity = Quantity::from_text(&self.quantity)
            .count()
            .ok_or(ValidationError::QuantityInvalid)?;

        Ok(ProductFields {
            barcode: barcode.to_string(),
            description: description.to_string(),
            price,
            quantity,
            category: normalize_category(Some(self.category.trim().to_string())),
        })
    }
}
