mod discover;
mod seed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::discover::BrowseArgs;

#[derive(Debug, Parser)]
#[command(name = "revdb-cli")]
#[command(about = "revdb business discovery command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
    /// Upsert businesses from a YAML seed file
    Seed {
        /// Seed file to load
        #[arg(long, default_value = "./config/businesses.yaml")]
        path: PathBuf,
        /// Validate and list the businesses without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Run a listing query and print the result as JSON
    Browse(BrowseArgs),
    /// Print typeahead suggestions for a query as JSON
    Suggest {
        /// Free-text query (at least two characters)
        query: String,
        /// Country to search within (defaults to the configured country)
        #[arg(long)]
        country: Option<String>,
    },
    /// Print category analytics for a country as JSON
    Categories {
        #[arg(long)]
        country: Option<String>,
    },
    /// Print the country picker list as JSON
    Countries,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Apply pending migrations
    Migrate,
}

fn init_tracing(fallback_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("revdb-cli: no command given; run with --help for usage");
        return Ok(());
    };

    // A dry-run seed only validates the file and needs no database.
    if let Commands::Seed {
        path,
        dry_run: true,
    } = &command
    {
        init_tracing("info")?;
        return seed::run_seed_dry_run(path);
    }

    let config = revdb_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    let pool_config = revdb_db::PoolConfig::from_app_config(&config);
    let pool = revdb_db::connect_pool(&config.database_url, pool_config).await?;
    let default_country = config.default_country.as_str();

    match command {
        Commands::Db {
            command: DbCommands::Ping,
        } => {
            revdb_db::health_check(&pool).await?;
            println!("database ok");
        }
        Commands::Db {
            command: DbCommands::Migrate,
        } => {
            let applied = revdb_db::run_migrations(&pool).await?;
            println!("applied {applied} migration(s)");
        }
        Commands::Seed { path, .. } => seed::run_seed(&pool, &path).await?,
        Commands::Browse(args) => discover::run_browse(&pool, &args, default_country).await?,
        Commands::Suggest { query, country } => {
            discover::run_suggest(&pool, &query, country.as_deref(), default_country).await?;
        }
        Commands::Categories { country } => {
            discover::run_categories(&pool, country.as_deref(), default_country).await?;
        }
        Commands::Countries => discover::run_countries(&pool, default_country).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
