use serde::{Deserialize, Serialize};

/// Simplified, client-facing projection of an upstream Pokemon record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub types: Vec<String>,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

// Raw PokeAPI response shapes. Only the fields the projection needs are
// declared; everything else in the upstream body is ignored. `types` and
// `sprites` are required, so a 2xx body without them fails to decode with an
// error naming the field.
#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub id: i64,
    pub name: String,
    pub types: Vec<ApiPokemonType>,
    pub sprites: ApiPokemonSprites,
}

#[derive(Debug, Deserialize)]
pub struct ApiPokemonType {
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_info: ApiTypeInfo,
}

#[derive(Debug, Deserialize)]
pub struct ApiTypeInfo {
    pub name: String,
    #[allow(dead_code)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiPokemonSprites {
    // PokeAPI serves null here for some forms
    pub front_default: Option<String>,
}
