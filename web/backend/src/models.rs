use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use winewise_core::Wine;

/// One record as returned by the remote wine API. Every field is optional;
/// defaults are applied during transformation into [`Wine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWineRecord {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub wine: Option<String>,
    #[serde(default)]
    pub winery: Option<String>,
    #[serde(default)]
    pub rating: Option<RawRating>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The API is loose about its rating fields: `average` arrives as a number or
/// a numeric string, `reviews` as a number or text like "33 ratings".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRating {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub average: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_count")]
    pub reviews: Option<u32>,
}

fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }))
}

fn de_lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.and_then(|value| match value {
        Value::Number(number) => number.as_u64().map(|count| count as u32),
        Value::String(text) => {
            let digits: String = text.chars().filter(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct WineListQuery {
    /// Spanish category label, e.g. "Tinto". Absent or "Todos" means all.
    #[serde(rename = "type")]
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct WineListResponse {
    pub wines: Vec<Wine>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct WineSearchQuery {
    pub q: String,
    #[serde(rename = "type")]
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct WineSearchResponse {
    pub query: String,
    pub results: Vec<Wine>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct TopRatedQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct CountryQuery {
    pub country: String,
}

#[derive(Deserialize)]
pub struct RegionQuery {
    pub region: String,
}

#[derive(Serialize)]
pub struct CacheClearResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct AnalyzeLabelRequest {
    /// Label photo as a data URL.
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeLabelResponse {
    #[serde(rename = "wineInfo")]
    pub wine_info: Value,
}

#[derive(Deserialize)]
pub struct PairingRequest {
    pub dish: String,
}

#[derive(Deserialize)]
pub struct RecommendRequest {
    pub description: String,
}
