pub mod api_utils;
pub mod main_api;
mod endpoints;

pub(crate) mod model;
