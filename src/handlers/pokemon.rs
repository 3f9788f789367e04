use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::errors::Result;
use crate::models::Pokemon;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pokemon/:name_or_id", get(get_pokemon))
}

pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(name_or_id): Path<String>,
) -> Result<Json<Pokemon>> {
    let pokemon = state.pokemon.get_pokemon_info(name_or_id).await?;
    Ok(Json(pokemon))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::services::PokemonService;
    use crate::AppState;

    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn app(base_url: &str) -> Router {
        let state = AppState {
            pokemon: PokemonService::new(reqwest::Client::new(), base_url),
        };
        super::router().with_state(state)
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn returns_pokemon_as_json() {
        let upstream = Router::new().route(
            "/pokemon/charmander",
            get(|| async {
                axum::Json(json!({
                    "id": 4,
                    "name": "charmander",
                    "sprites": { "front_default": "https://example.test/4.png" },
                    "types": [
                        { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }
                    ]
                }))
            }),
        );
        let base_url = spawn_upstream(upstream).await;

        let (status, body) = send(app(&base_url), "/pokemon/charmander").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 4,
                "name": "charmander",
                "types": ["fire"],
                "imageURL": "https://example.test/4.png"
            })
        );
    }

    #[tokio::test]
    async fn maps_not_found_to_404() {
        let upstream = Router::new().route(
            "/pokemon/:segment",
            get(|| async { StatusCode::NOT_FOUND }),
        );
        let base_url = spawn_upstream(upstream).await;

        let (status, body) = send(app(&base_url), "/pokemon/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "detail": "Pokemon not found: nonexistent" }));
    }

    #[tokio::test]
    async fn maps_upstream_errors_to_500() {
        let upstream = Router::new().route(
            "/pokemon/:segment",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        );
        let base_url = spawn_upstream(upstream).await;

        let (status, body) = send(app(&base_url), "/pokemon/errorpokemon").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("An unexpected error occurred:"));
        assert!(detail.contains("errorpokemon"));
        assert!(detail.contains("500"));
    }

    #[tokio::test]
    async fn maps_malformed_bodies_to_500() {
        let upstream = Router::new().route(
            "/pokemon/malformed",
            get(|| async { axum::Json(json!({ "id": 999, "name": "malformed" })) }),
        );
        let base_url = spawn_upstream(upstream).await;

        let (status, body) = send(app(&base_url), "/pokemon/malformed").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("missing field `types`"));
    }
}
