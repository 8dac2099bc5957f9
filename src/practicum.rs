//! Practicum homework API: types, HTTP, and response validation.

use crate::config::BotConfig;
use crate::error::BotError;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// One homework entry from the API. Both fields are optional on purpose:
/// a record missing either one passes shape validation and is rejected by
/// the formatter, which owns the per-record contract.
#[derive(Debug, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated API response: the homework list plus the server timestamp
/// the next poll starts from. Only `check_response` constructs this.
#[derive(Debug)]
pub struct StatusPage {
    pub homeworks: Vec<Homework>,
    pub current_date: i64,
}

/// Fetches homework statuses changed since `from_date`.
///
/// One GET, no retries; the poll cadence is the retry mechanism. The body
/// comes back as a raw JSON value so validation stays a separate step.
pub async fn fetch_homework_statuses(
    client: &reqwest::Client,
    config: &BotConfig,
    from_date: i64,
) -> Result<Value, BotError> {
    let resp = client
        .get(&config.practicum_endpoint)
        .header(AUTHORIZATION, format!("OAuth {}", config.practicum_token))
        .query(&[("from_date", from_date)])
        .send()
        .await
        .map_err(BotError::Transport)?;

    if resp.status() != StatusCode::OK {
        return Err(BotError::UnexpectedStatus(resp.status()));
    }

    let raw = resp.text().await.map_err(BotError::Transport)?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(value)
}

/// Checks the response shape before anything downstream trusts it.
///
/// Order matters: not-an-object, then missing `homeworks` (an explicit
/// null counts as missing), then wrong-typed `homeworks`, then
/// `current_date`. Each violation has its own error so callers and tests
/// can tell them apart.
pub fn check_response(raw: Value) -> Result<StatusPage, BotError> {
    let Value::Object(mut map) = raw else {
        return Err(BotError::ResponseNotAnObject);
    };

    let homeworks = match map.remove("homeworks") {
        None | Some(Value::Null) => return Err(BotError::MissingHomeworks),
        Some(value) => value,
    };
    if !homeworks.is_array() {
        return Err(BotError::HomeworksNotAList);
    }

    let current_date = match map.remove("current_date") {
        None | Some(Value::Null) => return Err(BotError::MissingCurrentDate),
        Some(value) => value.as_i64().ok_or(BotError::CurrentDateNotAnInteger)?,
    };

    let homeworks: Vec<Homework> = serde_json::from_value(homeworks)?;
    Ok(StatusPage { homeworks, current_date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(endpoint: String) -> BotConfig {
        BotConfig {
            practicum_token: "practicum-secret".into(),
            telegram_token: "telegram-secret".into(),
            telegram_chat_id: "42".into(),
            practicum_endpoint: endpoint,
            telegram_api_base: "https://api.telegram.org".into(),
            retry_period: Duration::from_secs(600),
        }
    }

    #[test]
    fn valid_response_passes() {
        let page = check_response(json!({
            "homeworks": [{"homework_name": "Intro", "status": "approved"}],
            "current_date": 100
        }))
        .unwrap();

        assert_eq!(page.current_date, 100);
        assert_eq!(page.homeworks.len(), 1);
        assert_eq!(page.homeworks[0].homework_name.as_deref(), Some("Intro"));
    }

    #[test]
    fn empty_homework_list_is_valid() {
        let page = check_response(json!({"homeworks": [], "current_date": 5})).unwrap();
        assert!(page.homeworks.is_empty());
    }

    #[test]
    fn extra_record_fields_are_ignored() {
        let page = check_response(json!({
            "homeworks": [{
                "homework_name": "Intro",
                "status": "reviewing",
                "reviewer_comment": "wip",
                "id": 7
            }],
            "current_date": 5
        }))
        .unwrap();
        assert_eq!(page.homeworks[0].status.as_deref(), Some("reviewing"));
    }

    #[test]
    fn top_level_array_is_rejected() {
        let err = check_response(json!([{"homeworks": []}])).unwrap_err();
        assert!(matches!(err, BotError::ResponseNotAnObject));
    }

    #[test]
    fn top_level_scalar_is_rejected() {
        let err = check_response(json!(42)).unwrap_err();
        assert!(matches!(err, BotError::ResponseNotAnObject));
    }

    #[test]
    fn missing_homeworks_field() {
        let err = check_response(json!({"current_date": 5})).unwrap_err();
        assert!(matches!(err, BotError::MissingHomeworks));
    }

    #[test]
    fn null_homeworks_counts_as_missing() {
        let err = check_response(json!({"homeworks": null, "current_date": 5})).unwrap_err();
        assert!(matches!(err, BotError::MissingHomeworks));
    }

    #[test]
    fn homeworks_must_be_a_list() {
        let err =
            check_response(json!({"homeworks": "not-a-list", "current_date": 5})).unwrap_err();
        assert!(matches!(err, BotError::HomeworksNotAList));
    }

    #[test]
    fn missing_current_date() {
        let err = check_response(json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, BotError::MissingCurrentDate));
    }

    #[test]
    fn current_date_must_be_an_integer() {
        let err =
            check_response(json!({"homeworks": [], "current_date": "soon"})).unwrap_err();
        assert!(matches!(err, BotError::CurrentDateNotAnInteger));
    }

    #[tokio::test]
    async fn fetch_sends_auth_header_and_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/statuses/"))
            .and(header("Authorization", "OAuth practicum-secret"))
            .and(query_param("from_date", "1700000000"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"homeworks": [], "current_date": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = test_config(format!("{}/statuses/", server.uri()));
        let client = reqwest::Client::new();

        let raw = fetch_homework_statuses(&client, &config, 1_700_000_000).await.unwrap();
        assert_eq!(raw["current_date"], 1);
    }

    #[tokio::test]
    async fn fetch_reports_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let config = test_config(format!("{}/statuses/", server.uri()));
        let client = reqwest::Client::new();

        let err = fetch_homework_statuses(&client, &config, 0).await.unwrap_err();
        assert!(matches!(err, BotError::UnexpectedStatus(code) if code == StatusCode::SERVICE_UNAVAILABLE));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn fetch_reports_unparseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let config = test_config(format!("{}/statuses/", server.uri()));
        let client = reqwest::Client::new();

        let err = fetch_homework_statuses(&client, &config, 0).await.unwrap_err();
        assert!(matches!(err, BotError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn fetch_reports_transport_failure() {
        // Take a port, then free it again so the connection is refused.
        let server = MockServer::start().await;
        let endpoint = format!("{}/statuses/", server.uri());
        drop(server);

        let config = test_config(endpoint);
        let client = reqwest::Client::new();

        let err = fetch_homework_statuses(&client, &config, 0).await.unwrap_err();
        assert!(matches!(err, BotError::Transport(_)));
    }
}
