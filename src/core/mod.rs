pub mod datasets;
pub mod loader;

pub use crate::domain::model::{TallyData, TallyRecord, WeightData, WeightRecord};
pub use crate::domain::ports::Fetch;
pub use crate::utils::error::Result;
