use axum::{extract::rejection::JsonRejection, routing::post, Extension, Json, Router};
use uuid::Uuid;

use super::generation_model::{GenerationPayload, GenerationRequest, GenerationResult};
use crate::{
    app_module::AppState,
    core::error::{AppError, AppResult},
};

pub fn generation_router() -> Router {
    Router::new().route("/generate", post(generate))
}

pub async fn generate(
    Extension(ctx): Extension<AppState>,
    payload: Result<Json<GenerationPayload>, JsonRejection>,
) -> AppResult<Json<GenerationResult>> {
    let request_id = Uuid::new_v4();

    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(%request_id, "Rejected request body: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    })?;

    let request = GenerationRequest::try_from(payload).map_err(|e| {
        tracing::warn!(%request_id, "Validation failed: {}", e);
        e
    })?;

    tracing::info!(
        %request_id,
        target = %request.target,
        tone = %request.tone,
        skills = request.skills.len(),
        "Generating LinkedIn content"
    );

    let result = ctx.service.generation_service.generate(&request).await?;

    tracing::info!(%request_id, chars = result.text.chars().count(), "Generation finished");

    Ok(Json(result))
}
