pub mod application {
    pub mod invoice {
        pub mod get_all;
        pub mod get_by_order;
    }
    pub mod order {
        pub mod add_item;
        pub mod advance;
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_cart;
        pub mod list_cart_items;
        pub mod remove_item;
    }
    pub mod product {
        pub mod create;
        pub mod get_by_id;
        pub mod rate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod money;
        pub mod value_objects;
    }
    pub mod address {
        pub mod errors;
        pub mod model;
    }
    pub mod item {
        pub mod model;
    }
    pub mod invoice {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_order;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod advance;
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_cart;
            pub mod list_cart_items;
            pub mod remove_item;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod rating;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_by_id;
            pub mod rate;
        }
    }
}
