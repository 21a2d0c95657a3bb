// scraper.rs
use crate::scraper::models::{ProductsPage, ShopProduct};
use crate::scraper::ScraperError;
use rand::Rng;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Storefront page size. The feed signals the last page by returning
/// fewer products than this.
const PAGE_LIMIT: usize = 250;

/// Typed result of a full catalog fetch. Callers get the record count
/// from here, never by parsing log output.
pub struct FetchOutcome {
    pub products: Vec<ShopProduct>,
    pub pages_fetched: usize,
}

/// Anything that can produce the full current product list. The refresh
/// engine depends on this seam so tests can feed it canned catalogs.
pub trait ProductSource {
    fn fetch_all(&self) -> Result<FetchOutcome, ScraperError>;
}

pub struct ShopScraper {
    client: Client,
    base_url: Url,
}

impl ShopScraper {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScraperError> {
        let base_url = Url::parse(base_url).map_err(|e| ScraperError::BadUrl(e.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn page_url(&self, page: usize) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &PAGE_LIMIT.to_string());
        url
    }

    /// Fetch every catalog page until the feed runs dry.
    pub fn fetch_all_products(&self) -> Result<FetchOutcome, ScraperError> {
        let mut all_products = Vec::new();
        let mut page = 1;

        loop {
            eprintln!("📄 Scraping page {page}...");

            let batch = self.fetch_page_with_retry(page)?;

            if batch.is_empty() {
                break;
            }

            eprintln!("✅ Page {page} parsed ({} products)", batch.len());

            let last_page = batch.len() < PAGE_LIMIT;
            all_products.extend(batch);

            if last_page {
                break;
            }

            page += 1;
        }

        eprintln!("🏁 Total products found: {}", all_products.len());

        Ok(FetchOutcome {
            products: all_products,
            pages_fetched: page,
        })
    }

    /// One page, with bounded backoff + jitter on transient failures.
    fn fetch_page_with_retry(&self, page: usize) -> Result<Vec<ShopProduct>, ScraperError> {
        const MAX_ATTEMPTS: u64 = 3;
        const MAX_BACKOFF_SECS: u64 = 10;
        const JITTER_MAX_SECS: u64 = 2;

        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            match self.try_fetch_page(page) {
                Ok(products) => return Ok(products),
                Err(e) => {
                    eprintln!("⚠️ Page {page} attempt {attempt} failed: {e}");
                    last_err = Some(e);

                    let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                    let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_SECS);
                    std::thread::sleep(Duration::from_secs(base + jitter));
                }
            }
        }

        Err(last_err.unwrap_or_else(|| ScraperError::Network("retry loop failed".into())))
    }

    fn try_fetch_page(&self, page: usize) -> Result<Vec<ShopProduct>, ScraperError> {
        let response = self
            .client
            .get(self.page_url(page))
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let parsed: ProductsPage = response
            .json()
            .map_err(|e| ScraperError::JsonParse(e.to_string()))?;

        Ok(parsed.products)
    }
}

impl ProductSource for ShopScraper {
    fn fetch_all(&self) -> Result<FetchOutcome, ScraperError> {
        self.fetch_all_products()
    }
}
