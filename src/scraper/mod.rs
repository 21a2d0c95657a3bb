pub mod models;
mod scraper;
mod scraper_error;

pub use scraper::{FetchOutcome, ProductSource, ShopScraper};
pub use scraper_error::ScraperError;
