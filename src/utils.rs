pub mod app_state;
pub mod config;
pub mod errors;
pub mod page_types;
pub mod promo_utils;
pub mod templates;
pub mod validate;
