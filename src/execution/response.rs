//! Response classification.

use crate::error::SubmitError;
use crate::execution::http::HttpTransportResponse;
use serde_json::Value;

/// Turn a completed exchange into the submission result.
///
/// - 2xx: body parsed as JSON.
/// - any other status: `SubmitError::Http` carrying the raw body, unparsed.
/// - 2xx with a body that is not JSON: `SubmitError::Transport` with the raw text.
pub fn classify_response(response: &HttpTransportResponse) -> Result<Value, SubmitError> {
    if !(200..300).contains(&response.status) {
        return Err(SubmitError::Http {
            status: response.status,
            body: lossy_text(&response.body),
        });
    }

    serde_json::from_slice::<Value>(&response.body)
        .map_err(|e| SubmitError::from(e).with_body(lossy_text(&response.body)))
}

fn lossy_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> HttpTransportResponse {
        HttpTransportResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_body_is_parsed() {
        let value = classify_response(&response(200, r#"{"status":"ok"}"#)).unwrap();
        assert_eq!(value, json!({"status": "ok"}));

        let value = classify_response(&response(201, r#"{"id":7}"#)).unwrap();
        assert_eq!(value, json!({"id": 7}));
    }

    #[test]
    fn error_status_keeps_raw_body() {
        let err = classify_response(&response(401, r#"{"error":"unauthorized"}"#)).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Http {
                status: 401,
                body: r#"{"error":"unauthorized"}"#.to_string()
            }
        );

        let err = classify_response(&response(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.response_body(), Some("Bad Gateway"));
    }

    #[test]
    fn non_json_success_is_transport_error() {
        let err = classify_response(&response(200, "<html>ok</html>")).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.response_body(), Some("<html>ok</html>"));
    }

    #[test]
    fn invalid_utf8_in_success_body_is_transport_error() {
        let response = HttpTransportResponse {
            status: 200,
            body: b"{\"k\":\"\xff\"}".to_vec(),
        };
        let err = classify_response(&response).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.response_body(), Some("{\"k\":\"\u{fffd}\"}"));
    }

    #[test]
    fn empty_success_body_is_transport_error() {
        let err = classify_response(&response(204, "")).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.response_body(), Some(""));
    }
}
