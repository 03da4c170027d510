use crate::domain::product::value_objects::ProductId;

/// Screens the client can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ProductList,
    AddProduct,
    ProductDetail(ProductId),
    EditProduct(ProductId),
}

impl Route {
    /// Where every successful create, update or delete lands.
    pub const AFTER_MUTATION: Route = Route::ProductList;

    pub fn path(&self) -> String {
        match self {
            Route::ProductList => "/products".to_string(),
            Route::AddProduct => "/products/new".to_string(),
            Route::ProductDetail(id) => format!("/products/{}", id),
            Route::EditProduct(id) => format!("/products/{}/edit", id),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation callback supplied by the UI layer.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
