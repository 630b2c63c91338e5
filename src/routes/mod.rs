mod health;
mod skill;
mod swagger;
use health::health_checker_handler;

use crate::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", get(health_checker_handler))
        .route("/api/health", get(health_checker_handler))
        .route("/api/skill", post(skill::skill_handler))
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Phrases};
    use crate::external::tests::spawn_fake_ticker;
    use crate::models::dto::{Message, SkillResponseEnvelope};
    use crate::skill::SkillHandler;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    async fn app_with_ticker(base_url: &str) -> Router {
        let config = Config::from_lookup(|key| match key {
            "TICKER_BASE_URL" => Some(base_url.to_string()),
            _ => None,
        })
        .unwrap();
        let handler = SkillHandler::from_config(&config).unwrap();
        make_app(Arc::new(AppState { handler }))
    }

    fn skill_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/skill")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    fn intent(name: &str, coin: Option<&str>) -> serde_json::Value {
        let mut slots = json!({});
        if let Some(coin) = coin {
            slots = json!({ "coin": { "name": "coin", "value": coin } });
        }
        json!({
            "version": "1.0",
            "session": { "new": false, "sessionId": "s-1" },
            "request": {
                "type": "IntentRequest",
                "requestId": "r-1",
                "timestamp": "2017-10-01T12:00:00Z",
                "intent": { "name": name, "slots": slots }
            }
        })
    }

    #[tokio::test]
    async fn health_is_alive() {
        let app = app_with_ticker("http://127.0.0.1:9/v1").await;
        let resp = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let message: Message = serde_json::from_slice(&body).unwrap();
        assert_eq!(message.message, "OK, I'm alive!");
    }

    #[tokio::test]
    async fn coin_intent_returns_spoken_quote() {
        let app = app_with_ticker(&spawn_fake_ticker().await).await;
        let resp = app
            .oneshot(skill_request(intent("GetCoinIntent", Some("ethereum"))))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let envelope: SkillResponseEnvelope = serde_json::from_slice(&body).unwrap();
        assert!(envelope.speech_text().unwrap().contains("Ethereum"));
        assert_eq!(envelope.response.card.unwrap().title, "CoinCheck");
    }

    #[tokio::test]
    async fn stop_intent_is_terminal() {
        let app = app_with_ticker("http://127.0.0.1:9/v1").await;
        let resp = app
            .oneshot(skill_request(intent("AMAZON.StopIntent", None)))
            .await
            .unwrap();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value["response"]["outputSpeech"]["text"],
            Phrases::default().goodbye
        );
        assert_eq!(value["response"]["shouldEndSession"], true);
        assert!(value["response"].get("reprompt").is_none());
    }

    #[tokio::test]
    async fn invalid_intent_is_bad_request() {
        let app = app_with_ticker("http://127.0.0.1:9/v1").await;
        let resp = app
            .oneshot(skill_request(intent("OrderPizzaIntent", None)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let message: Message = serde_json::from_slice(&body).unwrap();
        assert_eq!(message.message, "Invalid Intent: OrderPizzaIntent");
    }

    #[tokio::test]
    async fn garbage_body_is_rejected_before_dispatch() {
        let app = app_with_ticker("http://127.0.0.1:9/v1").await;
        let resp = app
            .oneshot(skill_request(json!({ "hello": "world" })))
            .await
            .unwrap();
        assert!(resp.status().is_client_error());
    }
}
