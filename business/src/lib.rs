pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
    pub mod product_detail {
        pub mod coordinator;
    }
    pub mod product_list {
        pub mod coordinator;
        pub mod state;
        pub mod ui;
    }
}

pub mod domain {
    pub mod envelope;
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod session;
    pub mod auth {
        pub mod errors;
        pub mod verifier;
    }
    pub mod product {
        pub mod api_client;
        pub mod backend;
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod statistics;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
