//! Seeds the built-in food catalog into the library.
//!
//! Safe to run repeatedly: foods already present by name are skipped.

use tracing_subscriber::EnvFilter;

use macrolog::config::Config;
use macrolog::db::Database;
use macrolog::tools::food_library;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrolog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    println!("Database path: {}", config.database_path.display());

    let database = Database::open(&config.database_path)?;
    let result = food_library::seed_food_library(&database)?;

    println!("Inserted {} foods, skipped {} already present", result.inserted, result.skipped);
    Ok(())
}
