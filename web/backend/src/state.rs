use crate::ai_gateway::{AiGatewayClient, DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
use crate::catalog::{CatalogClient, DEFAULT_WINE_API_BASE};

pub struct AppState {
    pub catalog: CatalogClient,
    pub ai: AiGatewayClient,
}

impl AppState {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let wine_api_base =
            std::env::var("WINE_API_BASE").unwrap_or_else(|_| DEFAULT_WINE_API_BASE.to_string());
        let gateway_url =
            std::env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let model = std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_key = std::env::var("LOVABLE_API_KEY")
            .map_err(|_| "LOVABLE_API_KEY environment variable must be set")?;

        Ok(Self {
            catalog: CatalogClient::new(wine_api_base),
            ai: AiGatewayClient::new(gateway_url, api_key, model),
        })
    }
}
