//! Request and response envelopes exchanged with the voice platform.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ENVELOPE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SkillRequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    pub request: SkillRequest,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum RequestKind {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Value of a slot, if the user filled it with something other than whitespace.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)?
            .value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SkillResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum SpeechKind {
    PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: SpeechKind,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain(text: &str) -> Self {
        Self {
            kind: SpeechKind::PlainText,
            text: text.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum CardKind {
    Simple,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl SkillResponseEnvelope {
    fn with_body(response: ResponseBody) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            response,
        }
    }

    /// Final utterance. The session closes.
    pub fn tell(text: &str) -> Self {
        Self::with_body(ResponseBody {
            output_speech: Some(OutputSpeech::plain(text)),
            should_end_session: Some(true),
            ..Default::default()
        })
    }

    pub fn tell_with_card(text: &str, title: &str) -> Self {
        let mut envelope = Self::tell(text);
        envelope.response.card = Some(Card {
            kind: CardKind::Simple,
            title: title.to_owned(),
            content: text.to_owned(),
        });
        envelope
    }

    /// Utterance plus a re-prompt. The session stays open.
    pub fn ask(text: &str, reprompt: &str) -> Self {
        Self::with_body(ResponseBody {
            output_speech: Some(OutputSpeech::plain(text)),
            reprompt: Some(Reprompt {
                output_speech: OutputSpeech::plain(reprompt),
            }),
            should_end_session: Some(false),
            ..Default::default()
        })
    }

    pub fn empty() -> Self {
        Self::with_body(ResponseBody::default())
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.response.output_speech.as_ref().map(|s| s.text.as_str())
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.response
            .reprompt
            .as_ref()
            .map(|r| r.output_speech.text.as_str())
    }

    pub fn ends_session(&self) -> bool {
        self.response.should_end_session.unwrap_or(false)
    }
}
