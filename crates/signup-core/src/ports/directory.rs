//! 활동 디렉토리 포트.
//!
//! 구현: `signup-storage` crate (인메모리)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::activity::Activities;

/// 활동 이름 → 활동 레코드 디렉토리
///
/// 활동 이름은 대소문자를 구분하는 정확 일치 키, 이메일은 불투명 문자열로 취급한다.
/// 신청/취소는 조회-검사-변경을 하나의 원자적 단계로 수행해야 한다.
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    /// 전체 활동 목록 조회
    async fn list_activities(&self) -> Result<Activities, CoreError>;

    /// 참가 신청
    ///
    /// - 활동 없음 → [`CoreError::ActivityNotFound`]
    /// - 이미 신청됨 → [`CoreError::AlreadyRegistered`]
    async fn enroll(&self, activity: &str, email: &str) -> Result<(), CoreError>;

    /// 참가 취소
    ///
    /// - 활동 없음 → [`CoreError::ActivityNotFound`]
    /// - 미등록 참가자 → [`CoreError::ParticipantNotFound`]
    async fn withdraw(&self, activity: &str, email: &str) -> Result<(), CoreError>;
}
