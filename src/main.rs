use std::sync::Arc;

use clap::Parser;

use trailhub_backend::app_data::AppData;
use trailhub_backend::cli::{execute_command, Cli, Commands};
use trailhub_backend::config::{connect_database, init_logging, run_migrations, AppSettings, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&SystemEnvironment)?;

    let cli = Cli::parse();
    let settings = AppSettings::from_env()?;

    let db = connect_database(&settings.database_url).await?;
    run_migrations(&db).await?;

    let app_data = Arc::new(AppData::init(db, settings));

    execute_command(cli.command.unwrap_or(Commands::Serve), app_data).await
}
