/// Demo collaborator: one fetch cycle over the configured window, rendered
/// as a plain stdout listing. The real display layer lives elsewhere.
use apod_feed::{FeedConfig, FeedService};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = FeedConfig::from_env()?;
    info!(
        "Configuration loaded (window: today plus {} day(s))",
        config.window_days
    );

    let service = FeedService::new(&config)?;
    let batch = service.fetch_recent(config.window_days).await;

    if batch.is_empty() {
        println!("No renderable pictures in the window.");
    }
    for picture in &batch.pictures {
        println!("{}  {}", picture.date, picture.title);
        println!("      {}", picture.url);
        if let Some(hd) = &picture.hd_url {
            println!("      hd: {hd}");
        }
        if let Some(credit) = &picture.copyright {
            println!("      (c) {}", credit.trim());
        }
    }
    for skip in &batch.skipped {
        println!("skipped {}: {}", skip.date, skip.reason);
    }

    Ok(())
}
