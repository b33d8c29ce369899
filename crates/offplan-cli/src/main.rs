mod catalog;
mod render;
mod roi;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::ListArgs;
use crate::render::{JsonRenderer, Renderer, TextRenderer};
use crate::roi::RoiArgs;

#[derive(Debug, Parser)]
#[command(name = "offplan-cli")]
#[command(about = "Browse an off-plan listing catalog and project investment returns")]
struct Cli {
    /// Catalog JSON file (overrides `OFFPLAN_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Emit JSON instead of text (list, summary, show, roi)
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter, sort and page through listings
    List(ListArgs),
    /// Catalog-wide statistics: counts, prices, top developers, featured listings
    Summary,
    /// Full detail for one listing, including its floor plan
    Show {
        /// Listing id
        id: String,
    },
    /// Project the return on an investment
    Roi(RoiArgs),
    /// Print a markdown investment analysis report
    Report {
        /// Listing to report on; seeds the unit quick-report assumptions
        #[arg(long)]
        property: Option<String>,
        /// Unit id within the listing's floor plan
        #[arg(long, requires = "property")]
        unit: Option<String>,
        #[command(flatten)]
        roi: RoiArgs,
    },
}

fn main() -> anyhow::Result<()> {
    // --help and usage errors must not depend on the environment.
    let cli = Cli::parse();
    let config = offplan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path.clone());
    let renderer: Box<dyn Renderer> = if cli.json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer)
    };

    match cli.command {
        Some(Commands::List(args)) => {
            catalog::run_list(&catalog_path, &config, &args, renderer.as_ref())?;
        }
        Some(Commands::Summary) => {
            catalog::run_summary(&catalog_path, &config, renderer.as_ref())?;
        }
        Some(Commands::Show { id }) => {
            catalog::run_show(&catalog_path, &id, renderer.as_ref())?;
        }
        Some(Commands::Roi(args)) => roi::run_roi(&args, renderer.as_ref())?,
        Some(Commands::Report {
            property,
            unit,
            roi: args,
        }) => {
            roi::run_report(
                &catalog_path,
                property.as_deref(),
                unit.as_deref(),
                &args,
            )?;
        }
        None => println!(
            "offplan-cli ready ({} environment, catalog {}); see --help",
            config.env,
            catalog_path.display()
        ),
    }

    Ok(())
}
