//! 활동 API 핸들러.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use signup_core::models::activity::ActivityRecord;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::AppState;

use super::EmailQuery;

/// 활동 응답 DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityResponse {
    /// 활동 설명
    pub description: String,
    /// 일정
    pub schedule: String,
    /// 최대 참가 인원
    pub max_participants: u32,
    /// 참가자 이메일 목록
    pub participants: Vec<String>,
}

impl From<ActivityRecord> for ActivityResponse {
    fn from(record: ActivityRecord) -> Self {
        Self {
            description: record.description,
            schedule: record.schedule,
            max_participants: record.max_participants,
            participants: record.participants,
        }
    }
}

/// 처리 결과 메시지 DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// 결과 메시지
    pub message: String,
}

/// 전체 활동 목록 조회
///
/// GET /activities
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ActivityResponse>>, ApiError> {
    let activities = state.directory.list_activities().await?;

    let response: BTreeMap<String, ActivityResponse> = activities
        .into_iter()
        .map(|(name, record)| (name, record.into()))
        .collect();

    Ok(Json(response))
}

/// 활동 참가 신청
///
/// POST /activities/{activity_name}/signup?email=
pub async fn signup(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query.require()?;

    if let Err(e) = state.directory.enroll(&activity_name, &email).await {
        warn!("참가 신청 실패: {e}");
        return Err(e.into());
    }

    info!("참가 신청: {} → {}", email, activity_name);
    Ok(Json(MessageResponse {
        message: format!("Signed up {email} for {activity_name}"),
    }))
}

/// 활동 참가 취소
///
/// DELETE /activities/{activity_name}/participants?email=
pub async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query.require()?;

    if let Err(e) = state.directory.withdraw(&activity_name, &email).await {
        warn!("참가 취소 실패: {e}");
        return Err(e.into());
    }

    info!("참가 취소: {} ← {}", email, activity_name);
    Ok(Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    }))
}
