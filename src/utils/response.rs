use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Success envelope for service endpoints. Entity endpoints return bare JSON.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorDetail,
}

pub fn success<T>(data: T, message: impl Into<String>) -> Response
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        data,
        message: message.into(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub fn error(code: &'static str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ErrorEnvelope {
        success: false,
        error: ErrorDetail {
            code,
            message: message.into(),
            details: None,
        },
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    #[tokio::test]
    async fn success_wraps_data_directly() {
        let response = success(json!({ "status": "ok" }), "fine");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({ "success": true, "data": { "status": "ok" }, "message": "fine" })
        );
    }

    #[test]
    fn no_content_is_204() {
        assert_eq!(no_content().status(), StatusCode::NO_CONTENT);
    }
}
