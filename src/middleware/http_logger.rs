use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::{Method, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Instant;

use crate::config::APP_CONFIG;

fn should_ignore_path(path: &str) -> bool {
    matches!(path, "/health" | "/health/") || path.starts_with("/swagger-ui") || path.starts_with("/api-docs")
}

/// Rejections carry a `{"message": ...}` body worth keeping in the log.
fn should_log_body(status: StatusCode) -> bool {
    status.is_client_error()
}

fn parse_json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice::<Value>(bytes).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

pub async fn http_logger(
    req: Request,
    next: Next,
) -> std::result::Result<impl IntoResponse, (StatusCode, String)> {
    let start_time = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = uri.path();
    let x_request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if method == Method::OPTIONS || should_ignore_path(path) {
        return Ok(next.run(req).await);
    }

    let mut response = next.run(req).await;
    let latency = start_time.elapsed();
    let status = response.status();

    let res_body = if should_log_body(status) {
        let (parts, body) = response.into_parts();
        let bytes = buffer_body("response", body).await?;
        let json_body = parse_json_body(&bytes);
        response = Response::from_parts(parts, Body::from(bytes));
        json_body
    } else {
        Value::Object(serde_json::Map::new())
    };

    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            x_request_id = %x_request_id,
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            app_env = %APP_CONFIG.app_env,
            "HTTP request failed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            query = uri.query().unwrap_or(""),
            x_request_id = %x_request_id,
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            res_body = %res_body,
            app_env = %APP_CONFIG.app_env,
            "HTTP request completed"
        );
    }

    Ok(response)
}

pub async fn buffer_body<B>(
    direction: &str,
    body: B,
) -> std::result::Result<Bytes, (StatusCode, String)>
where
    B: BodyExt,
    B::Error: std::fmt::Display,
{
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("failed to read {direction} body: {err}"),
            ));
        }
    };

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_and_docs_are_not_logged() {
        assert!(should_ignore_path("/health"));
        assert!(should_ignore_path("/swagger-ui/index.html"));
        assert!(!should_ignore_path("/api/v1/notas"));
    }

    #[test]
    fn only_client_errors_keep_their_body() {
        assert!(should_log_body(StatusCode::BAD_REQUEST));
        assert!(should_log_body(StatusCode::NOT_FOUND));
        assert!(!should_log_body(StatusCode::CREATED));
        assert!(!should_log_body(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn non_json_bodies_become_empty_objects() {
        assert_eq!(parse_json_body(b"not json"), serde_json::json!({}));
        assert_eq!(
            parse_json_body(br#"{"message":"RA 1 not found"}"#)["message"],
            "RA 1 not found"
        );
    }
}
