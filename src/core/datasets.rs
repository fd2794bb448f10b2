use crate::core::loader::RemoteDataLoader;
use crate::domain::model::{TallyData, WeightData};
use crate::domain::ports::Fetch;
use crate::utils::error::Result;

pub const TALLIES_URL: &str = "https://advent.sveltesociety.dev/data/2023/day-one.json";
pub const WEIGHTS_URL: &str = "https://advent.sveltesociety.dev/data/2023/day-three.json";

/// Loads the tallies dataset and wraps it in its page-data field.
pub async fn load_tallies<F: Fetch + ?Sized>(fetcher: &F) -> Result<TallyData> {
    let loader = RemoteDataLoader::new(TALLIES_URL);
    let tallies = loader.load(fetcher).await?;
    Ok(TallyData { tallies })
}

/// Loads the weights dataset and wraps it in its page-data field.
pub async fn load_weights<F: Fetch + ?Sized>(fetcher: &F) -> Result<WeightData> {
    let loader = RemoteDataLoader::new(WEIGHTS_URL);
    let weights = loader.load(fetcher).await?;
    Ok(WeightData { weights })
}
