use shopwatch::history::SnapshotHistory;
use shopwatch::refresh::{RefreshEngine, RefreshError};
use shopwatch::scraper::ShopScraper;
use std::time::Duration;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn main() {
    // 1️⃣ Configuration from the environment
    let shop_url = match std::env::var("SHOP_PRODUCTS_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("❌ SHOP_PRODUCTS_URL environment variable not set");
            std::process::exit(1);
        }
    };
    let history_dir = env_or("HISTORY_DIR", "history");
    let currency = env_or("CURRENCY_SYMBOL", "€");
    let timeout_secs: u64 = env_or("FETCH_TIMEOUT_SECS", "300").parse().unwrap_or(300);
    let interval_secs: Option<u64> = std::env::var("REFRESH_INTERVAL_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok());

    // 2️⃣ Build the engine
    let scraper = match ShopScraper::new(&shop_url, Duration::from_secs(timeout_secs)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            std::process::exit(1);
        }
    };
    let engine = RefreshEngine::new(scraper, SnapshotHistory::new(&history_dir), currency);

    println!("Shop watcher started ({shop_url})");
    match interval_secs {
        Some(secs) => println!("Auto-refresh: every {secs}s"),
        None => println!("Single refresh cycle"),
    }

    // 3️⃣ Run one cycle, or keep cycling on the configured interval.
    // Delivery to chat subscribers is the bot layer's job; here the
    // rendered messages go to stdout for the operator.
    loop {
        match engine.run_cycle() {
            Ok(report) => {
                println!(
                    "✅ Refresh complete: {} products over {} pages",
                    report.total_products, report.pages_fetched
                );
                if report.messages.is_empty() {
                    println!("📋 No changes since last update");
                } else {
                    println!("📢 Changes detected:");
                    for message in &report.messages {
                        println!("{message}\n");
                    }
                }
            }
            Err(e @ RefreshError::AlreadyRunning) => eprintln!("⚠️ {e}"),
            Err(e) => eprintln!("❌ Refresh failed: {e}"),
        }

        match interval_secs {
            Some(secs) => std::thread::sleep(Duration::from_secs(secs)),
            None => break,
        }
    }
}
