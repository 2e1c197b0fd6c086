use crate::models::RawWineRecord;
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::warn;
use winewise_core::wine::{PLACEHOLDER_IMAGE, UNKNOWN_NAME, UNKNOWN_REGION, UNKNOWN_WINERY};
use winewise_core::{Wine, WineCategory, region, wine};

pub const DEFAULT_WINE_API_BASE: &str = "https://api.sampleapis.com/wines";

const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Client for the remote wine catalog. Aggregates the six category endpoints
/// into one unified list and caches each response for 30 minutes, keyed by URL.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    cache: Mutex<HashMap<String, (Vec<RawWineRecord>, Instant)>>,
    cache_duration: Duration,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self::with_cache_duration(base_url, CACHE_TTL)
    }

    pub fn with_cache_duration(base_url: String, cache_duration: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url,
            cache: Mutex::new(HashMap::new()),
            cache_duration,
        }
    }

    async fn fetch_category(
        &self,
        category: WineCategory,
    ) -> Result<Vec<RawWineRecord>, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}{}", self.base_url, category.endpoint_path());

        // Check cache first
        {
            let cache = self.cache.lock().await;
            if let Some((records, fetched_at)) = cache.get(&url) {
                if fetched_at.elapsed() < self.cache_duration {
                    return Ok(records.clone());
                }
            }
        }

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("wine API returned {} for {}", response.status(), url).into());
        }

        let records: Vec<RawWineRecord> = response.json().await?;

        // Cache the parsed response
        {
            let mut cache = self.cache.lock().await;
            cache.insert(url, (records.clone(), Instant::now()));
        }

        Ok(records)
    }

    async fn category_wines(&self, category: WineCategory) -> Vec<Wine> {
        match self.fetch_category(category).await {
            Ok(records) => transform_records(records, category),
            Err(e) => {
                warn!("failed to fetch {} wines: {e}", category.label_es());
                Vec::new()
            }
        }
    }

    /// All six categories fetched concurrently and concatenated. A failing
    /// category contributes zero records instead of failing the whole call.
    pub async fn get_all_wines(&self) -> Vec<Wine> {
        let fetches: Vec<_> = WineCategory::ALL
            .iter()
            .map(|&category| self.category_wines(category))
            .collect();

        let results = futures::future::join_all(fetches).await;

        results.into_iter().flatten().collect()
    }

    /// Wines for one Spanish category label. Unknown labels fall back to the
    /// full catalog.
    pub async fn get_wines_by_type(&self, label: &str) -> Vec<Wine> {
        match WineCategory::from_label_es(label) {
            Some(category) => self.category_wines(category).await,
            None => self.get_all_wines().await,
        }
    }

    pub async fn search_wines(&self, query: &str, category: Option<&str>) -> Vec<Wine> {
        let wines = match category {
            Some(label) if label != "Todos" => self.get_wines_by_type(label).await,
            _ => self.get_all_wines().await,
        };

        wine::search(&wines, query)
    }

    pub async fn get_top_rated(&self, limit: usize) -> Vec<Wine> {
        wine::top_rated(&self.get_all_wines().await, limit)
    }

    pub async fn get_wines_by_region(&self, region: &str) -> Vec<Wine> {
        wine::by_region(&self.get_all_wines().await, region)
    }

    pub async fn get_wines_by_country(&self, country: &str) -> Vec<Wine> {
        wine::by_country(&self.get_all_wines().await, country)
    }

    pub async fn get_unique_countries(&self) -> Vec<String> {
        region::unique_countries(&self.get_all_wines().await)
    }

    /// Drops every cached category response. The next call refetches.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }
}

fn transform_records(records: Vec<RawWineRecord>, category: WineCategory) -> Vec<Wine> {
    records
        .into_iter()
        .map(|record| transform_record(record, category))
        .collect()
}

fn transform_record(record: RawWineRecord, category: WineCategory) -> Wine {
    Wine {
        id: record.id.unwrap_or(0),
        name: non_empty_or(record.wine, UNKNOWN_NAME),
        winery: non_empty_or(record.winery, UNKNOWN_WINERY),
        region: non_empty_or(record.location, UNKNOWN_REGION),
        category: category.label_es().to_string(),
        rating: record.rating.as_ref().and_then(|rating| rating.average).unwrap_or(0.0),
        reviews: record.rating.as_ref().and_then(|rating| rating.reviews).unwrap_or(0),
        image: non_empty_or(record.image, PLACEHOLDER_IMAGE),
        description: None,
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback.to_string(),
    }
}
