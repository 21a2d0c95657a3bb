pub mod domain;
pub mod errors;
pub mod history;
pub mod notify;
pub mod refresh;
pub mod scraper;

#[cfg(test)]
mod tests;
