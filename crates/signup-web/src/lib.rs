//! # signup-web
//!
//! 활동 신청 REST API 서버.
//! Axum 기반, 활동 디렉토리 포트를 상태로 주입받는다.
//!
//! ## 기능
//! - 활동 목록 조회
//! - 참가 신청 (중복 방지)
//! - 참가 취소

pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use signup_core::config::WebConfig;
use signup_core::ports::directory::ActivityDirectory;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// 포트 바인드 최대 시도 횟수
const MAX_PORT_ATTEMPTS: u16 = 10;

/// 웹 서버 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    /// 활동 디렉토리
    pub directory: Arc<dyn ActivityDirectory>,
}

/// 라우터 구성 (CORS + 요청 트레이싱 포함)
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 활동 신청 API 서버
pub struct WebServer {
    config: WebConfig,
    state: AppState,
}

impl WebServer {
    /// 새 웹 서버 생성
    pub fn new(directory: Arc<dyn ActivityDirectory>, config: WebConfig) -> Self {
        Self {
            config,
            state: AppState { directory },
        }
    }

    /// 포트 바인드
    ///
    /// 설정 포트에서 시작하여, 포트가 이미 사용 중이면 다음 포트를 시도합니다.
    /// 최대 10개 포트를 시도한 후 실패하면 에러를 반환합니다.
    /// 실제 바인드 주소는 반환된 리스너의 `local_addr()`로 확인한다.
    pub async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        let host = self.config.bind_host();
        let base_port = self.config.port;
        let mut last_error = None;

        for attempt in 0..MAX_PORT_ATTEMPTS {
            let port = base_port.saturating_add(attempt);

            // 포트 포화 시 더 시도할 포트 없음
            if attempt > 0 && port == base_port.saturating_add(attempt - 1) {
                break;
            }

            let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
                Ok(a) => a,
                Err(e) => {
                    error!("잘못된 주소 {}:{} — {}", host, port, e);
                    continue;
                }
            };

            match TcpListener::bind(addr).await {
                Ok(listener) => {
                    if attempt > 0 {
                        warn!("포트 {} 사용 불가, 대체 포트 {} 사용", base_port, port);
                    }
                    return Ok(listener);
                }
                Err(e) => {
                    // AddrInUse 에러인 경우 다음 포트 시도
                    if e.kind() == std::io::ErrorKind::AddrInUse {
                        warn!("포트 {} 이미 사용 중, 다음 포트 시도...", port);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!(
                    "포트 {}-{} 모두 사용 불가",
                    base_port,
                    base_port.saturating_add(MAX_PORT_ATTEMPTS - 1)
                ),
            )
        }))
    }

    /// 서버 실행
    ///
    /// # Arguments
    /// * `shutdown_rx` - 종료 신호 수신 채널
    pub async fn run(self, shutdown_rx: watch::Receiver<bool>) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        serve(listener, build_router(self.state), shutdown_rx).await
    }
}

/// 바인드된 리스너로 서버 실행 (Graceful shutdown)
pub async fn serve(
    listener: TcpListener,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Result<(), std::io::Error> {
    info!("활동 신청 서버 시작: http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            loop {
                if *shutdown_rx.borrow() {
                    info!("웹 서버 종료 신호 수신");
                    break;
                }
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;

    info!("활동 신청 서버 종료");
    Ok(())
}
