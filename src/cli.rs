//! CLI argument definitions and command dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueHint};
use tracing::info;

use crate::api::AppState;
use crate::config::LakeMapConfig;
use crate::loader::DatasetLoader;
use crate::map::{CategorySelection, SizeTier, estimate_volume, format_volume, render_scene};
use crate::store::MapStore;
use crate::{convert, web};

/// Category-filtered map of Bengaluru lakes, hotels and companies
#[derive(Parser, Debug)]
#[command(name = "lakemap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ~/.config/lakemap/config.toml, then ./config.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the datasets and serve the map
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long, env = "LAKEMAP_PORT")]
        port: Option<u16>,
    },

    /// Load the datasets and print the map scene as JSON
    Render {
        /// all, lakes, hotels or companies (default: initial filter)
        #[arg(long)]
        category: Option<CategorySelection>,
    },

    /// Estimate a lake's water volume from its area
    Volume {
        /// Surface area in acres
        #[arg(allow_negative_numbers = true)]
        area: f64,
    },

    /// Convert a GeoJSON GeometryCollection into a FeatureCollection
    ConvertBoundary {
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },
}

/// Run the parsed command with a loaded config
pub async fn execute(cli: Cli, config: LakeMapConfig) -> Result<()> {
    match cli.command {
        Commands::Serve { port } => serve(config, port).await,
        Commands::Render { category } => render(config, category).await,
        Commands::Volume { area } => {
            let volume = estimate_volume(area);
            println!(
                "{area} acres at {} m assumed depth: {}",
                SizeTier::for_area(area).assumed_depth_m(),
                format_volume(volume)
            );
            Ok(())
        }
        Commands::ConvertBoundary { input, output } => {
            let count = convert::convert_file(&input, &output)?;
            println!("Wrote {count} features to {}", output.display());
            Ok(())
        }
    }
}

async fn serve(config: LakeMapConfig, port: Option<u16>) -> Result<()> {
    let store = MapStore::new();
    // Loads complete in the background; requests see partial data until then
    let _loads = DatasetLoader::new(config.data.clone()).spawn_into(&store);

    let state = AppState {
        store,
        categories: config.map.categories,
        view: config.map.view.clone(),
    };
    let port = port.unwrap_or(config.server.port);
    web::run(state, port, &config.server.static_dir).await
}

async fn render(config: LakeMapConfig, category: Option<CategorySelection>) -> Result<()> {
    let selection = category.unwrap_or_else(|| config.map.categories.initial());
    if !config.map.categories.offers(selection) {
        return Err(crate::LakeMapError::validation(format!(
            "Category '{selection}' is not available with the {:?} category set",
            config.map.categories
        ))
        .into());
    }

    let collections = DatasetLoader::new(config.data).load_all().await;
    let scene = render_scene(&collections, selection);
    info!("Rendering {} markers for '{}'", scene.markers.len(), selection);
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}
