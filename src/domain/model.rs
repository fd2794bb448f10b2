use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyRecord {
    pub name: String,
    pub tally: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub name: String,
    pub weight: f64,
}

/// Page-data shape for the tallies dataset: records wrapped in a `tallies` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyData {
    pub tallies: Vec<TallyRecord>,
}

/// Page-data shape for the weights dataset: records wrapped in a `weights` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightData {
    pub weights: Vec<WeightRecord>,
}
