use super::handlers::search_recipes::{__path_search_recipes, search_recipes};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes))]
pub struct SearchApiDoc;

pub fn search_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/search", state.args.server.root_path),
        post(search_recipes),
    )
}
