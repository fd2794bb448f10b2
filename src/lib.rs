pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpFetcher;
#[cfg(feature = "cli")]
pub use config::{CliConfig, Dataset};
pub use crate::core::datasets::{load_tallies, load_weights, TALLIES_URL, WEIGHTS_URL};
pub use crate::core::loader::RemoteDataLoader;
pub use domain::model::{TallyData, TallyRecord, WeightData, WeightRecord};
pub use domain::ports::Fetch;
pub use utils::error::{LoaderError, Result};
