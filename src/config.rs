// ⚙️ Configuration
// Command-line flags with environment fallbacks, shared by both binaries

use crate::food::{load_csv, FoodTable, DEFAULT_ENERGY_COLUMN};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATASET: &str = "Indian_Food_DF.csv";

/// Default listen address for the web server
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, Args)]
pub struct DatasetConfig {
    /// Path to the food dataset (CSV with a header row)
    #[arg(long, env = "NUTRI_DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Column holding the raw energy text ("916 kJ", "219 kcal")
    #[arg(long, env = "NUTRI_ENERGY_COLUMN", default_value = DEFAULT_ENERGY_COLUMN)]
    pub energy_column: String,
}

impl DatasetConfig {
    /// Load the food table once; the result is never mutated afterwards
    pub fn load(&self) -> Result<FoodTable> {
        load_csv(&self.dataset, &self.energy_column)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "NUTRI_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    #[command(flatten)]
    pub dataset: DatasetConfig,
}
