use crate::wine::{UNKNOWN_REGION, Wine};
use std::collections::BTreeSet;

/// Extract the country from a region string.
///
/// The remote catalog mixes two conventions: "Bordeaux, France" (country last)
/// and "Spain · Empordà" (country first). Anything else passes through
/// unchanged.
pub fn extract_country(region: &str) -> String {
    if let Some((country, _)) = region.split_once('·') {
        let country = country.trim();
        if country.is_empty() {
            return region.to_string();
        }
        return country.to_string();
    }

    if let Some((_, country)) = region.rsplit_once(',') {
        let country = country.trim();
        if country.is_empty() {
            return region.to_string();
        }
        return country.to_string();
    }

    region.to_string()
}

/// Distinct countries across the catalog, sorted ascending. Records with the
/// unknown-region placeholder are skipped.
pub fn unique_countries(wines: &[Wine]) -> Vec<String> {
    let countries: BTreeSet<String> = wines
        .iter()
        .map(|wine| extract_country(&wine.region))
        .filter(|country| !country.is_empty() && country != UNKNOWN_REGION)
        .collect();

    countries.into_iter().collect()
}
