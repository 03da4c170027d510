use business::domain::errors::GatewayError;
use business::domain::product::errors::{ProductError, ValidationError};

/// Operator-facing text for a failed refresh or mutation.
pub fn product_error_message(error: &ProductError) -> String {
    match error {
        ProductError::Validation(e) => validation_message(e).to_string(),
        ProductError::Gateway(e) => gateway_error_message(e),
    }
}

pub fn gateway_error_message(error: &GatewayError) -> String {
    match error {
        GatewayError::Network(detail) => format!("Could not reach the inventory service ({})", detail),
        GatewayError::Http {
            message: Some(message),
            ..
        } => message.clone(),
        e if e.is_not_found() => "Product not found".to_string(),
        GatewayError::Http { status, .. } => {
            format!("The inventory service answered with status {}", status)
        }
        GatewayError::Decode(_) => "Invalid product data format".to_string(),
    }
}

fn validation_message(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::BarcodeEmpty => "Barcode is required",
        ValidationError::DescriptionEmpty => "Description is required",
        ValidationError::PriceInvalid => "Price must be a non-negative number",
        ValidationError::QuantityInvalid => "Quantity must be a non-negative whole number",
        ValidationError::BarcodeImmutable => "Barcode cannot be changed",
        ValidationError::DeleteNotConfirmed => "Deletion cancelled",
    }
}
