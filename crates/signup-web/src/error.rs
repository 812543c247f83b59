//! API 에러 처리.
//!
//! 응답 본문은 `{"detail": "<메시지>"}` 형식이다.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use signup_core::error::CoreError;
use thiserror::Error;
use tracing::error;

/// 활동 미발견 응답 메시지
pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";

/// 중복 신청 응답 메시지
pub const ALREADY_SIGNED_UP: &str = "Student is already signed up for this activity";

/// 미등록 참가자 응답 메시지
pub const STUDENT_NOT_FOUND: &str = "Student not found";

/// API 에러
#[derive(Debug, Error)]
pub enum ApiError {
    /// 내부 서버 오류
    #[error("내부 서버 오류: {0}")]
    Internal(String),

    /// 리소스를 찾을 수 없음
    #[error("리소스를 찾을 수 없음: {0}")]
    NotFound(String),

    /// 잘못된 요청
    #[error("잘못된 요청: {0}")]
    BadRequest(String),

    /// 요청 파라미터 검증 실패
    #[error("처리할 수 없는 요청: {0}")]
    Unprocessable(String),
}

/// 에러 응답 본문
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// 에러 메시지
    pub detail: String,
}

impl ApiError {
    /// HTTP 상태 코드
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::Internal(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Unprocessable(msg) => msg,
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ActivityNotFound(_) => ApiError::NotFound(ACTIVITY_NOT_FOUND.to_string()),
            CoreError::AlreadyRegistered { .. } => {
                ApiError::BadRequest(ALREADY_SIGNED_UP.to_string())
            }
            CoreError::ParticipantNotFound { .. } => {
                ApiError::NotFound(STUDENT_NOT_FOUND.to_string())
            }
            CoreError::Validation { message, .. } => ApiError::Unprocessable(message),
            other => {
                error!("디렉토리 오류: {other}");
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}
