pub mod message;
pub mod skill;
pub use message::Message;
pub use skill::*;

use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(components(schemas(
    Message,
    SkillRequestEnvelope,
    Session,
    Application,
    User,
    SkillRequest,
    RequestKind,
    Intent,
    Slot,
    SkillResponseEnvelope,
    ResponseBody,
    OutputSpeech,
    SpeechKind,
    Card,
    CardKind,
    Reprompt,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
