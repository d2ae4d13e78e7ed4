#[macro_export]
macro_rules! include_modules {
    () => {
        pub mod api;
        pub mod model;
        pub mod playlist;
        pub mod tunescout_error;
        pub mod utils;
    }
}
