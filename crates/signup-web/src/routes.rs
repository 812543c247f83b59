//! API 라우트 정의.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers;
use crate::AppState;

/// API 라우트 생성
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 활동 목록
        .route("/activities", get(handlers::activities::list_activities))
        // 참가 신청/취소
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/participants",
            delete(handlers::activities::unregister),
        )
}
