//! Axum HTTP handlers for the web server
//!
//! Provides the `/echo` greeting endpoint, the liveness probe and the JSON 404 fallback.

use axum::{extract::Query, Json};
use serde::Serialize;

use crate::domain::greeting::{greeting, EchoReply};
use crate::errors::AppError;

pub const NAME_PARAM: &str = "name";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn echo(Query(params): Query<Vec<(String, String)>>) -> Json<EchoReply> {
    let name = name_param(&params);
    Json(greeting(name.as_deref()))
}

pub async fn not_found() -> AppError {
    AppError::not_found("not_found", "route not found")
}

/// Every `name` value in query order, comma-joined; `None` when absent.
fn name_param(params: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == NAME_PARAM)
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn absent_name_is_none() {
        assert_eq!(name_param(&pairs(&[("greeting", "hi")])), None);
    }

    #[test]
    fn single_name_is_returned_verbatim() {
        assert_eq!(name_param(&pairs(&[("name", "")])), Some(String::new()));
        assert_eq!(name_param(&pairs(&[("name", "Ada")])), Some("Ada".to_string()));
    }

    #[test]
    fn repeated_names_are_comma_joined_in_order() {
        let params = pairs(&[("name", "a"), ("other", "x"), ("name", "b"), ("name", "")]);
        assert_eq!(name_param(&params), Some("a,b,".to_string()));
    }
}
