pub mod application {
    pub mod product {
        pub mod count;
        pub mod create;
        pub mod delete;
        pub mod delete_all;
        pub mod generate;
        pub mod get_all;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod generator;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod count;
            pub mod create;
            pub mod delete;
            pub mod delete_all;
            pub mod generate;
            pub mod get_all;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
}
