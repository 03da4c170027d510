pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list_view;
        pub mod polling;
        pub mod synchronizer;
        pub mod update;

        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod navigation;
    pub mod view;
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod form;
        pub mod gateway;
        pub mod model;
        pub mod snapshot;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
