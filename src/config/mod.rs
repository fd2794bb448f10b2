use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Tallies,
    Weights,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "advent-loader")]
#[command(about = "Fetches remote page datasets (tallies, weights) as JSON")]
pub struct CliConfig {
    /// Dataset to load
    #[arg(value_enum)]
    pub dataset: Dataset,

    /// Override the dataset's fixed endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Write the JSON result to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("endpoint", endpoint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_selector() {
        let config = CliConfig::parse_from(["advent-loader", "tallies"]);
        assert_eq!(config.dataset, Dataset::Tallies);
        assert!(config.endpoint.is_none());
        assert!(!config.pretty);

        let config = CliConfig::parse_from(["advent-loader", "weights", "--pretty"]);
        assert_eq!(config.dataset, Dataset::Weights);
        assert!(config.pretty);
    }

    #[test]
    fn test_validate_endpoint_override() {
        let config = CliConfig::parse_from([
            "advent-loader",
            "tallies",
            "--endpoint",
            "https://example.com/data.json",
        ]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from(["advent-loader", "tallies", "--endpoint", "not-a-url"]);
        assert!(config.validate().is_err());
    }
}
