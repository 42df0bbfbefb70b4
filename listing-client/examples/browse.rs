// listing-client/examples/browse.rs
// Page through listings from the command line
//
// Usage: browse <make_id> <model_id> [zip] [year] [click...]
//   e.g. browse 5 12 94105 "" » » 1

use listing_client::{ClientConfig, Filter, PageClick, YearFields};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <make_id> <model_id> [zip] [year] [click...]", args[0]);
        println!("  Example: {} 5 12 94105 \"\" » » 1", args[0]);
        return Ok(());
    }

    let zip = args.get(3).cloned().unwrap_or_default();
    let year = args.get(4).cloned().unwrap_or_default();
    let filter = Filter::new(&args[1], &args[2])
        .with_zip(zip)
        .with_year(year.clone());
    let years = YearFields::new(year, std::env::var("LISTINGS_SECONDARY_YEAR").unwrap_or_default());

    let config = ClientConfig::from_env()?;
    tracing::info!("Listings endpoint: {}", config.listings_url());
    let controller = listing_client::connect(&config)?;

    controller.load_first_page(&filter).await?;
    print_page(&controller).await;

    for label in args.iter().skip(5) {
        let click = PageClick::from_label(label)?;
        match controller.go_to_page(&filter, &years, click).await {
            Ok(outcome) if outcome.is_loaded() => print_page(&controller).await,
            Ok(outcome) => tracing::info!("Click {:?}: {:?}", label, outcome),
            Err(e) => tracing::error!("Failed to load page: {}", e),
        }
    }

    Ok(())
}

async fn print_page(controller: &listing_client::HttpListingController) {
    let state = controller.state().await;
    println!(
        "page {}/{} ({} records)",
        state.current_page, state.total_pages, state.total_records
    );
    for listing in &state.listings {
        println!("  {}", listing.0);
    }
    println!("{}", controller.renderer().container().html().await);
}
