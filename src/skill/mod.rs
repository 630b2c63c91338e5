//! Turns platform events into spoken responses.

pub mod speech;

use std::str::FromStr;

use tracing::{error, info};

use crate::config::{Config, Phrases};
use crate::external::TickerClient;
use crate::models::dto::{Intent, RequestKind, Session, SkillRequestEnvelope, SkillResponseEnvelope};
use crate::models::{CoinQuery, SkillError};

use speech::quote_speech;

pub const COIN_SLOT: &str = "coin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentName {
    GetCoin,
    Help,
    Stop,
    Cancel,
}

impl FromStr for IntentName {
    type Err = SkillError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "GetCoinIntent" => Ok(IntentName::GetCoin),
            "Help" | "AMAZON.HelpIntent" => Ok(IntentName::Help),
            "Stop" | "AMAZON.StopIntent" => Ok(IntentName::Stop),
            "Cancel" | "AMAZON.CancelIntent" => Ok(IntentName::Cancel),
            other => Err(SkillError::InvalidIntent(other.to_string())),
        }
    }
}

pub struct SkillHandler {
    ticker: TickerClient,
    phrases: Phrases,
    card_title: String,
}

impl SkillHandler {
    pub fn new(ticker: TickerClient, phrases: Phrases, card_title: &str) -> Self {
        SkillHandler {
            ticker,
            phrases,
            card_title: card_title.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, SkillError> {
        let ticker = TickerClient::new(&config.ticker_base_url, config.ticker_timeout)?;
        Ok(Self::new(ticker, config.phrases.clone(), &config.card_title))
    }

    pub async fn dispatch(
        &self,
        envelope: &SkillRequestEnvelope,
    ) -> Result<SkillResponseEnvelope, SkillError> {
        let request = &envelope.request;
        info!(
            "Handling {:?} {} (envelope {}, locale {:?}, sent {:?})",
            request.kind, request.request_id, envelope.version, request.locale, request.timestamp
        );

        if let Some(session) = envelope.session.as_ref().filter(|s| s.new) {
            self.on_session_started(&request.request_id, session);
        }

        match request.kind {
            RequestKind::LaunchRequest => Ok(self.on_launch()),
            RequestKind::IntentRequest => self.on_intent(request.intent.as_ref()).await,
            RequestKind::SessionEndedRequest => {
                self.on_session_ended(&request.request_id, request.reason.as_deref());
                Ok(SkillResponseEnvelope::empty())
            }
        }
    }

    pub fn on_session_started(&self, request_id: &str, session: &Session) {
        info!(
            "Session {} started by {} (skill {:?}, user {:?})",
            session.session_id,
            request_id,
            session.application.as_ref().map(|a| a.application_id.as_str()),
            session.user.as_ref().map(|u| u.user_id.as_str())
        );
    }

    pub fn on_launch(&self) -> SkillResponseEnvelope {
        SkillResponseEnvelope::ask(&self.phrases.welcome, &self.phrases.welcome_reprompt)
    }

    pub async fn on_intent(
        &self,
        intent: Option<&Intent>,
    ) -> Result<SkillResponseEnvelope, SkillError> {
        let intent = intent.ok_or_else(|| SkillError::InvalidIntent("<none>".to_string()))?;
        self.handle_intent(&intent.name, intent.slot_value(COIN_SLOT))
            .await
    }

    pub fn on_session_ended(&self, request_id: &str, reason: Option<&str>) {
        info!("Session ended by {request_id}: {}", reason.unwrap_or("no reason given"));
    }

    pub async fn handle_intent(
        &self,
        intent_name: &str,
        slot_value: Option<&str>,
    ) -> Result<SkillResponseEnvelope, SkillError> {
        let response = match intent_name.parse::<IntentName>()? {
            IntentName::GetCoin => match slot_value {
                Some(coin) => self.coin_response(&CoinQuery::from_slot(coin)).await,
                None => SkillResponseEnvelope::ask(
                    &self.phrases.which_coin,
                    &self.phrases.which_coin,
                ),
            },
            IntentName::Help => SkillResponseEnvelope::ask(&self.phrases.help, &self.phrases.help),
            IntentName::Stop | IntentName::Cancel => {
                SkillResponseEnvelope::tell(&self.phrases.goodbye)
            }
        };
        Ok(response)
    }

    /// Lookup failures are spoken back as an apology, never as an empty response.
    async fn coin_response(&self, query: &CoinQuery) -> SkillResponseEnvelope {
        let spoken = self
            .ticker
            .fetch_quote(query)
            .await
            .and_then(|quote| quote_speech(&quote));

        match spoken {
            Ok(text) => SkillResponseEnvelope::tell_with_card(&text, &self.card_title),
            Err(e) => {
                error!("Coin lookup for {} failed: {e}", query.coin_identifier);
                SkillResponseEnvelope::tell(&self.phrases.apology)
            }
        }
    }
}
