use crate::ai_gateway::extract_json_object;
use crate::error::ApiError;
use crate::models::{AnalyzeLabelRequest, AnalyzeLabelResponse, PairingRequest, RecommendRequest};
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

const ANALYZE_LABEL_SYSTEM_PROMPT: &str = r#"Eres un experto sommelier y especialista en vinos. Tu tarea es analizar imágenes de etiquetas de vino y extraer información.

Responde SIEMPRE en formato JSON válido con esta estructura exacta:
{
  "name": "nombre del vino",
  "winery": "nombre de la bodega",
  "region": "región de origen",
  "year": "añada (año)",
  "type": "tipo de vino (Tinto, Blanco, Rosado, Espumoso, etc.)",
  "description": "descripción breve del vino basada en lo visible y tu conocimiento",
  "pairings": ["maridaje 1", "maridaje 2", "maridaje 3", "maridaje 4"]
}

Si no puedes identificar algún dato, usa "Desconocido" o haz tu mejor estimación basándote en el contexto visual."#;

const ANALYZE_LABEL_USER_PROMPT: &str = "Analiza esta etiqueta de vino y extrae toda la información que puedas ver. Proporciona también maridajes sugeridos.";

const PAIRING_SYSTEM_PROMPT: &str = r#"Eres un sommelier experto especializado en maridajes de vinos. Tu tarea es recomendar vinos que combinen perfectamente con platos específicos.

Responde SIEMPRE en formato JSON válido con esta estructura exacta:
{
  "dish": "nombre del plato",
  "recommendations": [
    {
      "wine": "nombre o tipo de vino específico",
      "type": "Tinto/Blanco/Rosado/Espumoso",
      "reason": "explicación breve de por qué este vino marida bien con el plato"
    }
  ]
}

Proporciona entre 3 y 5 recomendaciones variadas, incluyendo opciones de diferentes tipos de vino cuando sea apropiado.
Sé específico con los tipos de uva o denominaciones de origen cuando sea relevante."#;

const RECOMMEND_SYSTEM_PROMPT: &str = r#"Eres un sommelier personal experto que ayuda a encontrar el vino perfecto basándose en descripciones de gustos, preferencias o situaciones.

Responde SIEMPRE en formato JSON válido con esta estructura exacta:
{
  "description": "resumen breve de lo que entendiste sobre los gustos/necesidades",
  "recommendations": [
    {
      "name": "nombre específico del vino o tipo recomendado",
      "type": "Tinto/Blanco/Rosado/Espumoso/Dulce",
      "region": "región o denominación de origen",
      "priceRange": "€/€€/€€€ (económico/medio/premium)",
      "reason": "explicación personalizada de por qué este vino es ideal para esta persona/ocasión"
    }
  ]
}

Proporciona entre 3 y 4 recomendaciones variadas en precio y estilo.
Sé empático y personaliza las explicaciones según lo que la persona describió."#;

/// POST /api/functions/analyze-wine-label
///
/// Forwards the label photo to the gateway and relays the extracted wine info.
/// Replies without parseable JSON degrade to a static fallback that carries
/// the raw model text as the description.
pub async fn analyze_wine_label(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeLabelRequest>,
) -> Result<Json<AnalyzeLabelResponse>, ApiError> {
    info!("Analyzing wine label image");

    let user_content = json!([
        {"type": "text", "text": ANALYZE_LABEL_USER_PROMPT},
        {"type": "image_url", "image_url": {"url": request.image}},
    ]);

    let content = state.ai.chat(ANALYZE_LABEL_SYSTEM_PROMPT, user_content).await?;

    let wine_info = content
        .as_deref()
        .and_then(extract_json_object)
        .unwrap_or_else(|| fallback_wine_info(content.as_deref()));

    Ok(Json(AnalyzeLabelResponse { wine_info }))
}

/// POST /api/functions/wine-pairing
pub async fn wine_pairing(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PairingRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("Finding wine pairings for: {}", request.dish);

    let user_content = json!(format!(
        "¿Qué vinos recomiendas para maridar con: {}?",
        request.dish
    ));

    let content = state.ai.chat(PAIRING_SYSTEM_PROMPT, user_content).await?;

    let result = content
        .as_deref()
        .and_then(extract_json_object)
        .unwrap_or_else(|| fallback_pairings(&request.dish));

    Ok(Json(result))
}

/// POST /api/functions/wine-recommend
pub async fn recommend_wine(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Value>, ApiError> {
    info!("Finding wine recommendations for: {}", request.description);

    let user_content = json!(format!(
        "Necesito recomendaciones de vino para esta situación: {}",
        request.description
    ));

    let content = state.ai.chat(RECOMMEND_SYSTEM_PROMPT, user_content).await?;

    let result = content
        .as_deref()
        .and_then(extract_json_object)
        .unwrap_or_else(|| fallback_recommendations(&request.description));

    Ok(Json(result))
}

fn fallback_wine_info(content: Option<&str>) -> Value {
    let description = match content {
        Some(text) if !text.is_empty() => text,
        _ => "No se pudo extraer información detallada de la etiqueta.",
    };

    json!({
        "name": "Vino detectado",
        "winery": "Bodega desconocida",
        "region": "Región desconocida",
        "year": "Desconocido",
        "type": "Tinto",
        "description": description,
        "pairings": ["Carnes rojas", "Quesos curados", "Pasta", "Embutidos"],
    })
}

fn fallback_pairings(dish: &str) -> Value {
    json!({
        "dish": dish,
        "recommendations": [
            {
                "wine": "Rioja Reserva",
                "type": "Tinto",
                "reason": "Vino versátil que complementa muchos platos.",
            },
            {
                "wine": "Albariño",
                "type": "Blanco",
                "reason": "Fresco y aromático, ideal para platos ligeros.",
            },
            {
                "wine": "Cava Brut",
                "type": "Espumoso",
                "reason": "La efervescencia limpia el paladar entre bocados.",
            },
        ],
    })
}

fn fallback_recommendations(description: &str) -> Value {
    json!({
        "description": description,
        "recommendations": [
            {
                "name": "Rioja Crianza",
                "type": "Tinto",
                "region": "Rioja, España",
                "priceRange": "€€",
                "reason": "Un clásico equilibrado perfecto para empezar a explorar vinos tintos.",
            },
            {
                "name": "Verdejo Rueda",
                "type": "Blanco",
                "region": "Rueda, España",
                "priceRange": "€",
                "reason": "Fresco y aromático, ideal para quienes prefieren vinos ligeros.",
            },
            {
                "name": "Ribera del Duero Reserva",
                "type": "Tinto",
                "region": "Ribera del Duero, España",
                "priceRange": "€€€",
                "reason": "Para ocasiones especiales, un vino con carácter y elegancia.",
            },
        ],
    })
}
