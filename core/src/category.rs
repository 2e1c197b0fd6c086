use serde::{Deserialize, Serialize};

/// The six catalog categories served by the remote wine API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineCategory {
    Reds,
    Whites,
    Sparkling,
    Rose,
    Dessert,
    Port,
}

impl WineCategory {
    pub const ALL: [WineCategory; 6] = [
        WineCategory::Reds,
        WineCategory::Whites,
        WineCategory::Sparkling,
        WineCategory::Rose,
        WineCategory::Dessert,
        WineCategory::Port,
    ];

    /// Path of the remote category endpoint, relative to the API base.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            WineCategory::Reds => "/reds",
            WineCategory::Whites => "/whites",
            WineCategory::Sparkling => "/sparkling",
            WineCategory::Rose => "/rose",
            WineCategory::Dessert => "/dessert",
            WineCategory::Port => "/port",
        }
    }

    /// Spanish display label used across the catalog.
    pub fn label_es(self) -> &'static str {
        match self {
            WineCategory::Reds => "Tinto",
            WineCategory::Whites => "Blanco",
            WineCategory::Sparkling => "Espumoso",
            WineCategory::Rose => "Rosado",
            WineCategory::Dessert => "Dulce",
            WineCategory::Port => "Oporto",
        }
    }

    /// Inverse of [`label_es`](Self::label_es). Unknown labels yield `None` and
    /// callers fall back to the full catalog.
    pub fn from_label_es(label: &str) -> Option<Self> {
        match label {
            "Tinto" => Some(WineCategory::Reds),
            "Blanco" => Some(WineCategory::Whites),
            "Espumoso" => Some(WineCategory::Sparkling),
            "Rosado" => Some(WineCategory::Rose),
            "Dulce" => Some(WineCategory::Dessert),
            "Oporto" => Some(WineCategory::Port),
            _ => None,
        }
    }
}
