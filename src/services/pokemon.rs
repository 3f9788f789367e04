use std::fmt::Display;

use reqwest::StatusCode;

use crate::errors::{AppError, Result};
use crate::models::{ApiPokemon, Pokemon};

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Lookup client for the upstream PokeAPI.
#[derive(Debug, Clone)]
pub struct PokemonService {
    client: reqwest::Client,
    base_url: String,
}

impl PokemonService {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Fetches a Pokemon by name or numeric id and projects it into the
    /// simplified client-facing shape.
    ///
    /// The identifier is lowercased to form the upstream path segment, so
    /// `25` and `"Pikachu"` both resolve the way PokeAPI expects. Each call
    /// issues exactly one upstream request.
    pub async fn get_pokemon_info(&self, name_or_id: impl Display) -> Result<Pokemon> {
        let identifier = name_or_id.to_string();
        let path_segment = identifier.to_lowercase();
        let url = format!("{}/pokemon/{}", self.base_url, path_segment);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::Upstream(format!(
                "Error retrieving pokemon details for: {identifier} - {e}"
            ))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(identifier));
        }
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "HTTP error retrieving pokemon details for: {identifier} - upstream responded with status {status}"
            )));
        }

        // Decode from the raw body with serde_json so a missing field shows
        // up by name in the error message.
        let body = response.text().await.map_err(|e| {
            AppError::Upstream(format!(
                "Error retrieving pokemon details for: {identifier} - {e}"
            ))
        })?;
        let raw: ApiPokemon = serde_json::from_str(&body).map_err(|e| {
            AppError::Upstream(format!(
                "Error retrieving pokemon details for: {identifier} - {e}"
            ))
        })?;

        let mut slots = raw.types;
        slots.sort_by_key(|t| t.slot);
        let types = slots.into_iter().map(|t| t.type_info.name).collect();

        let image_url = raw.sprites.front_default.ok_or_else(|| {
            AppError::Upstream(format!(
                "Error retrieving pokemon details for: {identifier} - missing field `sprites.front_default`"
            ))
        })?;

        Ok(Pokemon {
            id: raw.id,
            name: raw.name,
            types,
            image_url,
        })
    }
}
