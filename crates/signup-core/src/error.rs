//! 활동 신청 서비스 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러 타입에서 `From<CoreError>`로 변환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 디렉토리 조작, 설정, 유효성 검증 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 활동이 디렉토리에 없음
    #[error("활동 미발견: {0}")]
    ActivityNotFound(String),

    /// 이미 신청된 참가자
    #[error("이미 신청됨 — {activity}: {email}")]
    AlreadyRegistered {
        /// 활동 이름
        activity: String,
        /// 참가자 이메일
        email: String,
    },

    /// 활동에 등록되지 않은 참가자
    #[error("참가자 미발견 — {activity}: {email}")]
    ParticipantNotFound {
        /// 활동 이름
        activity: String,
        /// 참가자 이메일
        email: String,
    },

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),
}
