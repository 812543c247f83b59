//! 활동 레코드 모델.
//!
//! 활동 하나의 설명, 일정, 정원, 참가자 목록을 표현.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::CoreError;

/// 활동 이름 → 활동 레코드 매핑 (이름 순 정렬)
pub type Activities = BTreeMap<String, ActivityRecord>;

/// 활동 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// 활동 설명
    pub description: String,
    /// 일정 (자유 형식)
    #[serde(default)]
    pub schedule: String,
    /// 최대 참가 인원 (표시용, 신청 시 강제하지 않음)
    #[serde(default)]
    pub max_participants: u32,
    /// 참가자 이메일 (신청 순서 유지, 중복 없음)
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityRecord {
    /// 참가자 없는 새 레코드 생성
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// 참가자 등록 여부
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// 참가자 추가. 이미 있으면 false
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.has_participant(email) {
            return false;
        }
        self.participants.push(email.to_string());
        true
    }

    /// 참가자 제거. 없으면 false
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 참가자 중복 검사
    pub fn validate(&self, name: &str) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(self.participants.len());
        for email in &self.participants {
            if !seen.insert(email.as_str()) {
                return Err(CoreError::Validation {
                    field: format!("{name}.participants"),
                    message: format!("중복 이메일: {email}"),
                });
            }
        }
        Ok(())
    }
}
