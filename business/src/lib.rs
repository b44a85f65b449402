pub mod application {
    pub mod favorite {
        pub mod sync;
        pub mod toggle;
    }
    pub mod message {
        pub mod conversation;
        pub mod send;
    }
    pub mod product {
        pub mod browse;
        pub mod create_listing;
        pub mod get_by_id;
    }
    pub mod session {
        pub mod login;
        pub mod logout;
        pub mod profile;
        pub mod register;
        pub mod restore;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod favorite {
        pub mod errors;
        pub mod gateway;
        pub mod set;
        pub mod use_cases {
            pub mod sync;
            pub mod toggle;
        }
    }
    pub mod message {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod conversation;
            pub mod send;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod browse;
            pub mod create_listing;
            pub mod get_by_id;
        }
    }
    pub mod session {
        pub mod errors;
        pub mod gateway;
        pub mod holder;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod login;
            pub mod logout;
            pub mod profile;
            pub mod register;
            pub mod restore;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
