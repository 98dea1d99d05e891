//! CLI entry point for model-generator

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use model_generator::catalog::PgExecutor;
use model_generator::{schema, GenerateOptions, GeneratorConfig};

#[derive(Parser)]
#[command(name = "model-generator")]
#[command(about = "Generate Eloquent model classes from live PostgreSQL table schemas")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database connection URL (overrides config)
    #[arg(short, long)]
    database_url: Option<String>,

    /// Output directory for generated models (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model class for a database table
    Generate {
        /// The name of the table
        table: String,

        /// Model class name (default: StudlyCase of the table name)
        #[arg(long)]
        model: Option<String>,

        /// Create the class even if the model already exists
        #[arg(long)]
        force: bool,
    },
    /// Inspect a table (show the introspected schema for debugging)
    Inspect {
        /// The name of the table
        table: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        GeneratorConfig::from_file(config_path)?
    } else {
        GeneratorConfig::load(None)?
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    // Apply CLI overrides
    if let Some(database_url) = cli.database_url {
        config.database_url = database_url;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if cli.dry_run {
        config.dry_run = true;
    }

    match cli.command {
        Commands::Generate {
            table,
            model,
            force,
        } => {
            let options = GenerateOptions {
                table,
                model,
                force,
            };
            let path = model_generator::generate(&config, &options)?;
            if config.dry_run {
                println!("Dry run mode - would generate: {}", path.display());
            } else {
                info!("Model generation completed successfully");
            }
            Ok(())
        }
        Commands::Inspect { table } => inspect_table(&config, &table),
    }
}

fn inspect_table(config: &GeneratorConfig, table_name: &str) -> Result<()> {
    config.validate()?;
    let mut executor = PgExecutor::connect(&config.database_url)?;
    let table = schema::build_table(&mut executor, table_name.trim())?;

    println!("Table: {}", table.name);
    println!("  Columns:");
    for col in &table.columns {
        let nullable = if col.nullable { "NULL" } else { "NOT NULL" };
        let auto_inc = if col.is_auto_increment() {
            " AUTO_INCREMENT"
        } else {
            ""
        };
        println!(
            "    - {} {} ({}) {}{}",
            col.name,
            col.catalog_type,
            col.php_type().as_str(),
            nullable,
            auto_inc
        );
        let enum_values = col.enum_values();
        if !enum_values.is_empty() {
            println!("      ENUM values: {:?}", enum_values);
        }
    }
    if table.primary_key.columns.is_empty() {
        println!("  Primary Key: (none)");
    } else {
        println!("  Primary Key: {:?}", table.primary_key.columns);
    }

    Ok(())
}
