//! 인메모리 활동 디렉토리 어댑터.
//!
//! `ActivityDirectory` 포트 구현. 디렉토리 전체를 하나의 `RwLock`으로 보호하며,
//! 신청/취소의 조회-검사-변경은 단일 쓰기 잠금 안에서 수행된다.

use async_trait::async_trait;
use parking_lot::RwLock;
use signup_core::config::DirectoryConfig;
use signup_core::error::CoreError;
use signup_core::models::activity::Activities;
use signup_core::ports::directory::ActivityDirectory;
use tracing::{debug, info};

use crate::seed;

/// 인메모리 디렉토리 — 재시작 시 시드 상태로 초기화된다
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    activities: RwLock<Activities>,
}

impl InMemoryDirectory {
    /// 주어진 활동 목록으로 디렉토리 생성
    pub fn new(activities: Activities) -> Self {
        info!("활동 디렉토리 초기화: {}개 활동", activities.len());
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// 내장 시드로 디렉토리 생성
    pub fn with_default_seed() -> Self {
        Self::new(seed::default_activities())
    }

    /// 설정에 따라 디렉토리 생성
    ///
    /// 시드 파일 경로가 있으면 파일에서, 없으면 내장 시드에서 채운다.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, CoreError> {
        match &config.seed_path {
            Some(path) => Ok(Self::new(seed::load_seed_file(path)?)),
            None => Ok(Self::with_default_seed()),
        }
    }

    /// 현재 디렉토리 상태의 깊은 복사본
    pub fn snapshot(&self) -> Activities {
        self.activities.read().clone()
    }

    /// 디렉토리 상태를 스냅샷으로 교체
    pub fn restore(&self, snapshot: Activities) {
        *self.activities.write() = snapshot;
        debug!("활동 디렉토리 복원");
    }
}

#[async_trait]
impl ActivityDirectory for InMemoryDirectory {
    async fn list_activities(&self) -> Result<Activities, CoreError> {
        Ok(self.snapshot())
    }

    async fn enroll(&self, activity: &str, email: &str) -> Result<(), CoreError> {
        let mut activities = self.activities.write();
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| CoreError::ActivityNotFound(activity.to_string()))?;

        if !record.add_participant(email) {
            return Err(CoreError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        debug!("참가 신청: {} → {}", email, activity);
        Ok(())
    }

    async fn withdraw(&self, activity: &str, email: &str) -> Result<(), CoreError> {
        let mut activities = self.activities.write();
        let record = activities
            .get_mut(activity)
            .ok_or_else(|| CoreError::ActivityNotFound(activity.to_string()))?;

        if !record.remove_participant(email) {
            return Err(CoreError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        debug!("참가 취소: {} ← {}", email, activity);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::models::activity::ActivityRecord;
    use std::sync::Arc;

    fn chess_only() -> InMemoryDirectory {
        let mut activities = Activities::new();
        activities.insert(
            "Chess Club".to_string(),
            ActivityRecord::new("Chess", "Fridays", 12),
        );
        InMemoryDirectory::new(activities)
    }

    async fn participants(dir: &InMemoryDirectory, activity: &str) -> Vec<String> {
        dir.list_activities().await.unwrap()[activity]
            .participants
            .clone()
    }

    #[tokio::test]
    async fn list_contains_every_seeded_activity() {
        let dir = InMemoryDirectory::with_default_seed();
        let activities = dir.list_activities().await.unwrap();
        assert_eq!(activities, seed::default_activities());
        assert!(activities.contains_key("Chess Club"));
    }

    #[test]
    fn from_config_without_seed_path_uses_default_seed() {
        let dir = InMemoryDirectory::from_config(&DirectoryConfig::default()).unwrap();
        assert_eq!(dir.snapshot(), seed::default_activities());
    }

    #[test]
    fn from_config_propagates_seed_errors() {
        let config = DirectoryConfig {
            seed_path: Some("/nonexistent/seed.json".into()),
        };
        assert!(InMemoryDirectory::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn enroll_then_withdraw_scenario() {
        let dir = chess_only();

        dir.enroll("Chess Club", "a@x.edu").await.unwrap();
        assert_eq!(participants(&dir, "Chess Club").await, vec!["a@x.edu"]);

        let dup = dir.enroll("Chess Club", "a@x.edu").await.unwrap_err();
        assert!(matches!(dup, CoreError::AlreadyRegistered { .. }));

        dir.withdraw("Chess Club", "a@x.edu").await.unwrap();
        assert!(participants(&dir, "Chess Club").await.is_empty());

        let again = dir.withdraw("Chess Club", "a@x.edu").await.unwrap_err();
        assert!(matches!(again, CoreError::ParticipantNotFound { .. }));
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let dir = chess_only();

        let err = dir.enroll("NonExistent", "a@x.edu").await.unwrap_err();
        assert!(matches!(err, CoreError::ActivityNotFound(ref name) if name == "NonExistent"));

        let err = dir.withdraw("NonExistent", "a@x.edu").await.unwrap_err();
        assert!(matches!(err, CoreError::ActivityNotFound(_)));
    }

    #[tokio::test]
    async fn activity_names_are_exact_match() {
        let dir = chess_only();
        let err = dir.enroll("chess club", "a@x.edu").await.unwrap_err();
        assert!(matches!(err, CoreError::ActivityNotFound(_)));
    }

    #[tokio::test]
    async fn failed_operations_leave_state_unchanged() {
        let dir = InMemoryDirectory::with_default_seed();
        dir.enroll("Chess Club", "a@x.edu").await.unwrap();
        let before = dir.snapshot();

        for _ in 0..3 {
            assert!(dir.enroll("Chess Club", "a@x.edu").await.is_err());
            assert!(dir.withdraw("Chess Club", "ghost@x.edu").await.is_err());
            assert!(dir.withdraw("NonExistent", "a@x.edu").await.is_err());
        }

        assert_eq!(dir.snapshot(), before);
    }

    #[tokio::test]
    async fn snapshot_and_restore() {
        let dir = InMemoryDirectory::with_default_seed();
        let original = dir.snapshot();

        dir.enroll("Chess Club", "a@x.edu").await.unwrap();
        dir.withdraw("Gym Class", "john@mergington.edu").await.unwrap();
        assert_ne!(dir.snapshot(), original);

        dir.restore(original.clone());
        assert_eq!(dir.snapshot(), original);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_enroll_admits_email_once() {
        let dir = Arc::new(chess_only());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let dir = dir.clone();
            handles.push(tokio::spawn(async move {
                dir.enroll("Chess Club", "race@x.edu").await.is_ok()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(participants(&dir, "Chess Club").await, vec!["race@x.edu"]);
    }
}
