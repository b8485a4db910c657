use super::handlers::{
    predict::{__path_predict, predict},
    recommend::{__path_recommend, recommend},
    recommend_llm::{__path_recommend_llm, recommend_llm},
};
use super::uploads::MAX_UPLOAD_BODY;
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(predict, recommend, recommend_llm))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/predict", state.args.server.root_path),
            post(predict),
        )
        .route(
            &format!("{}/recommend", state.args.server.root_path),
            post(recommend),
        )
        .route(
            &format!("{}/recommend_llm", state.args.server.root_path),
            post(recommend_llm),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY))
}
