use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Deserialize, Debug, Serialize, Eq, PartialEq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Json => "JSON",
            Self::Text => "text",
        };
        write!(f, "{s}")
    }
}

/// represents the CLI configuration
#[derive(Clone)]
pub struct CliConfiguration {
    pub use_debug: bool,
    pub source_directory: Option<String>,
    pub source_files: Vec<String>,
    pub output_format: OutputFormat,
    pub output_file: Option<String>,
    pub num_cpus: usize, // of cpus to use for parallelism
}
