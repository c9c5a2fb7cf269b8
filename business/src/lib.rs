pub mod application {
    pub mod scan {
        pub mod scan_document;
    }
}

pub mod domain {
    pub mod logger;
    pub mod scan {
        pub mod errors;
        pub mod model;
        pub mod output_path;
        pub mod request;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod scan_document;
        }
    }
}
