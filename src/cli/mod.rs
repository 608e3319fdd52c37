// CLI module: server startup and administrative operations

use std::sync::Arc;

use clap::{Parser, Subcommand};
use poem::{listener::TcpListener, Server};

use crate::api::build_routes;
use crate::app_data::AppData;
use crate::seed::{HttpImageFetcher, SeedSet, Seeder};

/// Trailhub CMS backend
#[derive(Parser, Debug)]
#[command(name = "trailhub")]
#[command(about = "Trailhub hiking CMS backend", long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (migrations are applied first)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Populate roles, regions, amenities, users, trails and media
    Seed {
        /// Seed only one part of the dataset
        #[arg(long, value_enum, default_value_t = SeedSet::All)]
        only: SeedSet,
    },
}

/// Execute CLI command
///
/// Migrations have already been applied by the caller for every command.
pub async fn execute_command(
    command: Commands,
    app_data: Arc<AppData>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => serve(app_data).await?,
        Commands::Migrate => {
            println!("Database is up to date");
        }
        Commands::Seed { only } => seed(app_data, only).await?,
    }

    Ok(())
}

async fn serve(app_data: Arc<AppData>) -> Result<(), std::io::Error> {
    let bind_address = app_data.settings.bind_address();
    let server_url = format!("http://localhost:{}", app_data.settings.port);

    let app = build_routes(app_data.clone(), &server_url);

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available at {}/swagger", server_url);

    Server::new(TcpListener::bind(bind_address)).run(app).await
}

async fn seed(app_data: Arc<AppData>, only: SeedSet) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = Arc::new(HttpImageFetcher::new()?);
    let reports = Seeder::new(app_data, fetcher).run(only).await?;

    println!("\n=== Trailhub Seed ===\n");
    for (step, report) in &reports {
        println!(
            "  {:<10} created {:>3}  existing {:>3}  skipped {:>3}",
            step.as_str(),
            report.created,
            report.existing,
            report.skipped
        );
    }

    let credentials: Vec<_> = reports.iter().flat_map(|(_, r)| r.credentials.iter()).collect();
    if !credentials.is_empty() {
        println!("\nGenerated accounts (passwords are shown only once):");
        for credential in credentials {
            println!("  {} [{}]", credential.email, credential.role);
            println!("    Password: {}", credential.password);
        }
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["trailhub"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_seed_only() {
        let cli = Cli::try_parse_from(["trailhub", "seed", "--only", "regions"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Seed { only: SeedSet::Regions }));

        let cli = Cli::try_parse_from(["trailhub", "seed"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Seed { only: SeedSet::All }));
    }

    #[test]
    fn test_seed_rejects_unknown_set() {
        assert!(Cli::try_parse_from(["trailhub", "seed", "--only", "hikes"]).is_err());
    }
}
