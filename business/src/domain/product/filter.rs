use super::model::{Product, normalize_category};

/// Categories offered by the list view. Products may carry any other value.
pub const CATEGORY_SUGGESTIONS: [&str; 3] = ["Fruits", "Dairy", "Bakery"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn new(search_text: impl Into<String>, category: Option<String>) -> Self {
        Self {
            search_text: search_text.into(),
            category: normalize_category(category),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search_text.to_lowercase();
        matches_text(product, &needle) && self.matches_category(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => product.category.as_deref() == Some(wanted.as_str()),
        }
    }
}

fn matches_text(product: &Product, lowered_needle: &str) -> bool {
    product.description.to_lowercase().contains(lowered_needle)
}

/// Returns the products matching `criteria`, in collection order.
pub fn filter_view(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.search_text.to_lowercase();
    products
        .iter()
        .filter(|p| matches_text(p, &needle) && criteria.matches_category(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{Price, ProductId, Quantity};
    use proptest::prelude::*;

    fn product(id: u64, description: &str, category: Option<&str>) -> Product {
        Product::from_remote(
            ProductId::from(id),
            format!("bc-{}", id),
            description.to_string(),
            Price::Known(1.0),
            Quantity::Known(1),
            category.map(str::to_string),
        )
    }

    #[test]
    fn should_match_description_case_insensitively() {
        let products = vec![
            Product::from_remote(
                ProductId::from(1),
                "111".to_string(),
                "Apple".to_string(),
                Price::from_text("1.50"),
                Quantity::from_text("10"),
                Some("Fruits".to_string()),
            ),
            product(2, "Milk", Some("Dairy")),
        ];

        let view = filter_view(&products, &FilterCriteria::new("app", None));

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].description, "Apple");
        assert_eq!(view[0].price.to_string(), "1.50");
    }

    #[test]
    fn should_match_category_exactly_when_selected() {
        let products = vec![
            product(1, "Apple", Some("Fruits")),
            product(2, "Apple pie", Some("Bakery")),
            product(3, "Apple juice", None),
            product(4, "Green apple", Some("fruits")),
            product(5, "Apple crumble", Some("Fruits ")),
        ];

        let view = filter_view(
            &products,
            &FilterCriteria::new("apple", Some("Fruits".to_string())),
        );

        let ids: Vec<_> = view.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn should_treat_blank_category_as_any() {
        let products = vec![product(1, "Apple", Some("Fruits")), product(2, "Bread", None)];

        let view = filter_view(&products, &FilterCriteria::new("", Some(String::new())));

        assert_eq!(view.len(), 2);
    }

    #[test]
    fn should_preserve_collection_order() {
        let products = vec![
            product(3, "Cherry jam", None),
            product(1, "Cherry", None),
            product(2, "Cherry pie", None),
        ];

        let view = filter_view(&products, &FilterCriteria::new("cherry", None));

        let ids: Vec<_> = view.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn should_return_nothing_when_collection_is_empty() {
        assert!(filter_view(&[], &FilterCriteria::new("x", None)).is_empty());
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            0u64..50,
            "[a-zA-Z ]{0,12}",
            prop::option::of(prop::sample::select(vec!["Fruits", "Dairy", "Bakery", "Other"])),
        )
            .prop_map(|(id, description, category)| product(id, &description, category))
    }

    proptest! {
        #[test]
        fn filter_is_pure_and_only_keeps_matches(
            products in prop::collection::vec(arb_product(), 0..20),
            search in "[a-zA-Z]{0,3}",
            category in prop::option::of(prop::sample::select(vec!["Fruits", "Dairy", "Bakery"])),
        ) {
            let criteria = FilterCriteria::new(search.clone(), category.map(str::to_string));

            let first = filter_view(&products, &criteria);
            let second = filter_view(&products, &criteria);
            prop_assert_eq!(&first, &second);

            for p in &first {
                prop_assert!(p.description.to_lowercase().contains(&search.to_lowercase()));
                if let Some(wanted) = &criteria.category {
                    prop_assert_eq!(p.category.as_deref(), Some(wanted.as_str()));
                }
            }

            let expected = products.iter().filter(|p| criteria.matches(p)).count();
            prop_assert_eq!(first.len(), expected);
        }
    }
}
