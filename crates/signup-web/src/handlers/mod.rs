//! API 핸들러 모듈.

pub mod activities;

use serde::Deserialize;

use crate::error::ApiError;

/// 참가자 이메일 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// 참가자 이메일 (형식 검증 없음)
    pub email: Option<String>,
}

impl EmailQuery {
    /// 비어있지 않은 이메일 반환
    pub fn require(self) -> Result<String, ApiError> {
        match self.email {
            Some(email) if !email.trim().is_empty() => Ok(email),
            _ => Err(ApiError::Unprocessable(
                "email query parameter is required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_returns_email_unchanged() {
        let query = EmailQuery {
            email: Some("a@x.edu".to_string()),
        };
        assert_eq!(query.require().unwrap(), "a@x.edu");
    }

    #[test]
    fn require_rejects_missing_and_blank() {
        for email in [None, Some(String::new()), Some("   ".to_string())] {
            let err = EmailQuery { email }.require().unwrap_err();
            assert!(matches!(err, ApiError::Unprocessable(_)));
        }
    }
}
