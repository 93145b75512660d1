//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Document storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding one JSON file per document
    #[arg(long, env = "VOYAGE_DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Keep documents in memory for this run only
    #[arg(long, default_value_t = false)]
    pub in_memory: bool,
}
