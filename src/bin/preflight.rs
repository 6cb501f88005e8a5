use product_api::infra::telemetry;
use product_api::{AppConfig, DatabaseService, Product, Repository};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           DB_MAX_CONNECTIONS, BIND_ADDR, APP_ENV, RUST_LOG\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if missing)
    let config = AppConfig::from_env()?;
    config.database_url()?;

    println!("> Preflight:");
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.db_max_connections);
    println!("  APP_ENV={}", config.environment);

    let db_service = DatabaseService::new(&config).await?;
    db_service
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Database is not reachable: {}", e))?;
    println!("  Database reachable.");

    db_service.ensure_table::<Product>().await?;
    let count = db_service.repository::<Product>().get_all().await?.len();
    println!("  Table `products` ready ({} rows).", count);

    println!("> Preflight OK.");
    Ok(())
}
