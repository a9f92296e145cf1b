pub mod app_config;
pub mod catalog_repo;
pub mod gold_price;

pub use catalog_repo::load_catalog;
pub use gold_price::GoldPriceClient;
