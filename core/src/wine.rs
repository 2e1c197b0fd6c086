use crate::normalize::clean_str;
use crate::region::extract_country;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Vino sin nombre";
pub const UNKNOWN_WINERY: &str = "Bodega desconocida";
pub const UNKNOWN_REGION: &str = "Región desconocida";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A catalog wine record, unified across the six remote categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wine {
    pub id: u32,
    pub name: String,
    pub winery: String,
    pub region: String,
    /// Spanish category label, e.g. "Tinto".
    #[serde(rename = "type")]
    pub category: String,
    pub rating: f64,
    pub reviews: u32,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Case- and accent-insensitive substring search over name, winery and region.
pub fn search(wines: &[Wine], query: &str) -> Vec<Wine> {
    let needle = clean_str(query);

    wines
        .iter()
        .filter(|wine| {
            clean_str(&wine.name).contains(&needle)
                || clean_str(&wine.winery).contains(&needle)
                || clean_str(&wine.region).contains(&needle)
        })
        .cloned()
        .collect()
}

/// Positive-rated wines, best first, truncated to `limit`. Tie order follows
/// the stable sort and is not guaranteed.
pub fn top_rated(wines: &[Wine], limit: usize) -> Vec<Wine> {
    let mut rated: Vec<Wine> = wines
        .iter()
        .filter(|wine| wine.rating > 0.0)
        .cloned()
        .collect();

    rated.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rated.truncate(limit);

    rated
}

/// Wines whose region contains `region`, case-insensitively.
pub fn by_region(wines: &[Wine], region: &str) -> Vec<Wine> {
    let needle = region.to_lowercase();

    wines
        .iter()
        .filter(|wine| wine.region.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Wines whose extracted country equals `country`, case-insensitively.
pub fn by_country(wines: &[Wine], country: &str) -> Vec<Wine> {
    let needle = country.to_lowercase();

    wines
        .iter()
        .filter(|wine| extract_country(&wine.region).to_lowercase() == needle)
        .cloned()
        .collect()
}
