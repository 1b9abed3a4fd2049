pub mod price_fetcher;

pub use price_fetcher::{extract_price, PriceFetcher};
