use crate::application::http::{
    detection::router::DetectionApiDoc,
    health::{__path_health, health},
    history::router::HistoryApiDoc,
    search::router::SearchApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API",
        description = "Ingredient detection and recipe suggestions"
    ),
    paths(health),
    nest(
        (path = "/history", api = HistoryApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document: the nested APIs plus the root-level detection and
    /// search endpoints.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(DetectionApiDoc::openapi());
        openapi.merge(SearchApiDoc::openapi());
        openapi
    }
}
