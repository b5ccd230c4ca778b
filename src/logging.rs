//! Middleware for logging requests and responses.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log the request and response for each request.
///
/// Both are logged at the `debug` level. If the response body is longer than
/// [LOG_BODY_LENGTH_LIMIT] bytes, only its start is included.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let (parts, body_text) = extract_parts_and_body_text_from_request(request).await;
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    tracing::info!("{} {} -> {}", method, uri, response.status());

    let (parts, body_text) = extract_parts_and_body_text_from_response(response).await;
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn extract_parts_and_body_text_from_request(
    request: Request,
) -> (axum::http::request::Parts, String) {
    let (parts, body) = request.into_parts();
    let body_text = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => {
            tracing::debug!("could not buffer request body for logging: {error}");
            String::new()
        }
    };

    (parts, body_text)
}

async fn extract_parts_and_body_text_from_response(
    response: Response,
) -> (axum::http::response::Parts, String) {
    let (parts, body) = response.into_parts();
    let body_text = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => {
            tracing::debug!("could not buffer response body for logging: {error}");
            String::new()
        }
    };

    (parts, body_text)
}

const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Truncate `body` to at most [LOG_BODY_LENGTH_LIMIT] bytes for logging.
///
/// The cut is walked back onto a character boundary so that a multibyte
/// character straddling the limit does not panic the slice.
fn truncate_body(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!(
            "Received request: {} {}\nbody: {:}...",
            parts.method,
            parts.uri,
            truncate_body(body)
        );
    } else {
        tracing::debug!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!(
            "Sending response: {}\nbody: {:}...",
            parts.status,
            truncate_body(body)
        );
    } else {
        tracing::debug!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}

#[cfg(test)]
mod truncate_body_tests {
    use super::{LOG_BODY_LENGTH_LIMIT, truncate_body};

    #[test]
    fn short_bodies_are_untouched() {
        let body = "name=Coffee&amount=4.50";

        assert_eq!(truncate_body(body), body);
    }

    #[test]
    fn long_ascii_bodies_are_cut_at_the_limit() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(truncate_body(&body).len(), LOG_BODY_LENGTH_LIMIT);
    }

    #[test]
    fn multibyte_character_straddling_the_limit_does_not_panic() {
        // "é" is two bytes and starts at byte 63, straddling the 64-byte limit.
        let mut body = "a".repeat(LOG_BODY_LENGTH_LIMIT - 1);
        body.push('é');
        body.push_str("&amount=4.50");

        let truncated = truncate_body(&body);

        assert_eq!(truncated, "a".repeat(LOG_BODY_LENGTH_LIMIT - 1));
        assert!(body.is_char_boundary(truncated.len()));
    }

    #[test]
    fn body_of_only_multibyte_characters_is_cut_on_a_boundary() {
        // Each "é" is two bytes, so the 64-byte limit falls mid-character.
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT);

        let truncated = truncate_body(&body);

        assert!(truncated.len() <= LOG_BODY_LENGTH_LIMIT);
        assert!(body.is_char_boundary(truncated.len()));
        assert!(truncated.chars().all(|c| c == 'é'));
    }
}
