use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::form::GeneratePayload;

pub const DEFAULT_API_BASE: &str = "http://localhost:5001";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Server(String),

    #[error("Failed to reach generation service: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub text: String,
}

/// Picks the most useful message out of an error body: `error`, then
/// `message`, then a generic status line.
fn error_message(body: &Value, status: reqwest::StatusCode) -> String {
    ["error", "message"]
        .iter()
        .find_map(|key| {
            body.get(*key)
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

pub async fn generate_linkedin(
    client: &Client,
    api_base: &str,
    payload: &GeneratePayload,
) -> Result<GenerateResponse, ApiError> {
    let url = format!("{}/api/generate", api_base.trim_end_matches('/'));
    tracing::debug!(%url, "Posting generation request");

    let response = client.post(&url).json(payload).send().await?;
    let status = response.status();
    let raw = response.text().await?;
    let body: Value =
        serde_json::from_str(&raw).unwrap_or_else(|_| Value::Object(Default::default()));

    if !status.is_success() {
        return Err(ApiError::Server(error_message(&body, status)));
    }

    Ok(serde_json::from_value(body).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn payload() -> GeneratePayload {
        GeneratePayload {
            name: String::new(),
            role: "Engineer".to_string(),
            years_of_experience: String::new(),
            skills: vec!["Rust".to_string()],
            tone: "professional".to_string(),
            target: "headline".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_text_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::PartialJson(json!({ "role": "Engineer", "skills": ["Rust"] })))
            .with_status(200)
            .with_body(json!({ "text": "Engineer | Rust" }).to_string())
            .create_async()
            .await;

        let response = generate_linkedin(&Client::new(), &server.url(), &payload())
            .await
            .unwrap();

        assert_eq!(response.text, "Engineer | Rust");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn prefers_error_field_from_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(400)
            .with_body(json!({ "error": "Missing required fields: role, skills" }).to_string())
            .create_async()
            .await;

        let err = generate_linkedin(&Client::new(), &server.url(), &payload())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Missing required fields: role, skills");
    }

    #[tokio::test]
    async fn unparseable_error_body_falls_back_to_status() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let err = generate_linkedin(&Client::new(), &server.url(), &payload())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn message_field_is_used_when_error_is_missing() {
        let body = json!({ "message": "quota exceeded" });
        assert_eq!(
            error_message(&body, reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            "quota exceeded"
        );
    }
}
