use advent_loader::core::datasets::{TALLIES_URL, WEIGHTS_URL};
use advent_loader::domain::model::{TallyData, WeightData};
use advent_loader::utils::{logger, validation::Validate};
use advent_loader::{CliConfig, Dataset, Fetch, HttpFetcher, LoaderError, RemoteDataLoader, Result};
use clap::Parser;
use std::path::Path;

/// The URL to fetch: the `--endpoint` override if given, else the dataset's
/// fixed endpoint.
fn effective_endpoint(config: &CliConfig) -> &str {
    config.endpoint.as_deref().unwrap_or(match config.dataset {
        Dataset::Tallies => TALLIES_URL,
        Dataset::Weights => WEIGHTS_URL,
    })
}

async fn load_dataset_json<F: Fetch>(config: &CliConfig, fetcher: &F) -> Result<String> {
    let loader = RemoteDataLoader::new(effective_endpoint(config));

    let value = match config.dataset {
        Dataset::Tallies => serde_json::to_value(TallyData {
            tallies: loader.load(fetcher).await?,
        })?,
        Dataset::Weights => serde_json::to_value(WeightData {
            weights: loader.load(fetcher).await?,
        })?,
    };

    let json = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    Ok(json)
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    std::fs::write(path, json).map_err(LoaderError::IoError)?;
    tracing::info!("✅ Output saved to: {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Loading dataset from: {}", effective_endpoint(&config));

    let fetcher = HttpFetcher::new();

    match load_dataset_json(&config, &fetcher).await {
        Ok(json) => {
            if let Some(path) = &config.output {
                if let Err(e) = write_output(path, &json) {
                    tracing::error!("❌ Failed to write output: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            } else {
                println!("{}", json);
            }
        }
        Err(e) => {
            tracing::error!("❌ Dataset load failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_effective_endpoint_defaults_to_fixed_urls() {
        let config = CliConfig::parse_from(["advent-loader", "tallies"]);
        assert_eq!(effective_endpoint(&config), TALLIES_URL);

        let config = CliConfig::parse_from(["advent-loader", "weights"]);
        assert_eq!(effective_endpoint(&config), WEIGHTS_URL);
    }

    #[tokio::test]
    async fn test_load_dataset_json_with_endpoint_override() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/custom/tallies.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"name": "Freja", "tally": 10}]));
        });

        let config = CliConfig::parse_from([
            "advent-loader",
            "tallies",
            "--endpoint",
            &server.url("/custom/tallies.json"),
        ]);
        let fetcher = HttpFetcher::new();

        let json = load_dataset_json(&config, &fetcher).await.unwrap();

        api_mock.assert();
        assert_eq!(json, r#"{"tallies":[{"name":"Freja","tally":10}]}"#);
    }

    #[tokio::test]
    async fn test_load_dataset_json_weights_pretty() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/custom/weights.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"name": "Bricks", "weight": 2.0}]));
        });

        let config = CliConfig::parse_from([
            "advent-loader",
            "weights",
            "--endpoint",
            &server.url("/custom/weights.json"),
            "--pretty",
        ]);
        let fetcher = HttpFetcher::new();

        let json = load_dataset_json(&config, &fetcher).await.unwrap();

        api_mock.assert();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"weights": [{"name": "Bricks", "weight": 2.0}]})
        );
        assert!(json.contains('\n'));
    }

    #[tokio::test]
    async fn test_output_flag_writes_json_to_file() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/tallies.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"name": "Aisha", "tally": -2}]));
        });

        let temp_dir = tempfile::TempDir::new().unwrap();
        let output_path = temp_dir.path().join("tallies.json");

        let config = CliConfig::parse_from([
            "advent-loader",
            "tallies",
            "--endpoint",
            &server.url("/tallies.json"),
            "--output",
            output_path.to_str().unwrap(),
        ]);
        let fetcher = HttpFetcher::new();

        let json = load_dataset_json(&config, &fetcher).await.unwrap();
        write_output(config.output.as_deref().unwrap(), &json).unwrap();

        api_mock.assert();
        let written = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(written, r#"{"tallies":[{"name":"Aisha","tally":-2}]}"#);
    }
}
