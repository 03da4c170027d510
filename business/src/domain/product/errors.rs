use crate::domain::errors::GatewayError;

/// Local input checks that fail before any network call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("product.barcode_empty")]
    BarcodeEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.price_invalid")]
    PriceInvalid,
    #[error("product.quantity_invalid")]
    QuantityInvalid,
    #[error("product.barcode_immutable")]
    BarcodeImmutable,
    #[error("product.delete_not_confirmed")]
    DeleteNotConfirmed,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}
