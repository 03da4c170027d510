pub mod client;
pub mod dto;
pub mod product_gateway;
