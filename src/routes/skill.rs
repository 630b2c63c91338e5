use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{Message, SkillRequestEnvelope, SkillResponseEnvelope},
        Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for the skill endpoint
#[derive(OpenApi)]
#[openapi(paths(skill_handler))]
pub struct SkillApi;

/// Used to group skill endpoints together in the OpenAPI documentation
pub const SKILL_API_GROUP: &str = "SKILL";

/// Entry point the voice platform posts every event to.
#[utoipa::path(
    post,
    path = "/api/skill",
    tag = SKILL_API_GROUP,
    request_body = SkillRequestEnvelope,
    responses(
        (status = 200, description = "Spoken response", body = SkillResponseEnvelope),
        (status = 400, description = "Unrecognised intent", body = Message),
        (status = 422, description = "Body is not a skill request"),
    )
)]
pub async fn skill_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SkillRequestEnvelope>,
) -> Result<Json<SkillResponseEnvelope>, Error> {
    let response = state.handler.dispatch(&body).await?;
    debug!(
        "Responding {:?} (reprompt {:?}, ends session: {})",
        response.speech_text(),
        response.reprompt_text(),
        response.ends_session()
    );
    Ok(Json(response))
}
