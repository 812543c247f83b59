//! # signup-app
//!
//! 활동 신청 서버 바이너리 진입점.
//! 설정 로드, 디렉토리/웹 서버 와이어링, 라이프사이클 관리.

mod lifecycle;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use signup_core::config::AppConfig;
use signup_core::config_manager::{load_or_create, CONFIG_FILE_NAME};
use signup_storage::InMemoryDirectory;
use signup_web::WebServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::lifecycle::LifecycleManager;

/// 활동 신청 서버
///
/// 활동 목록 조회, 참가 신청/취소 REST API
#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼별 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 웹 서버 포트 (설정 파일 값 덮어쓰기)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// 외부 접근 허용 (0.0.0.0 바인드)
    #[arg(long)]
    allow_external: bool,

    /// 시드 JSON 파일 경로 (설정 파일 값 덮어쓰기)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// 설정 파일 경로 결정 (CLI 인자 또는 플랫폼별 기본 경로)
///
/// # 플랫폼별 기본 경로:
/// - macOS: `~/Library/Application Support/edu.mergington.signup/config.json`
/// - Windows: `%APPDATA%\mergington\signup\config\config.json`
/// - Linux: `~/.config/signup/config.json`
fn resolve_config_path(config: Option<&Path>) -> PathBuf {
    config
        .map(Path::to_path_buf)
        .or_else(|| {
            ProjectDirs::from("edu", "mergington", "signup")
                .map(|p| p.config_dir().join(CONFIG_FILE_NAME))
        })
        .unwrap_or_else(|| PathBuf::from(".").join(CONFIG_FILE_NAME))
}

/// CLI 인자로 설정 오버라이드
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if args.allow_external {
        config.web.allow_external = true;
    }
    if let Some(ref seed) = args.seed {
        config.directory.seed_path = Some(seed.clone());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "signup={},signup_app={},signup_core={},signup_storage={},signup_web={},tower_http={}",
        args.log_level, args.log_level, args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("활동 신청 서버 시작");

    // 설정 로드
    let config_path = resolve_config_path(args.config.as_deref());
    let mut config = load_or_create(&config_path)
        .with_context(|| format!("설정 로드 실패: {}", config_path.display()))?;
    apply_overrides(&mut config, &args);
    info!("설정 파일: {}", config_path.display());

    // 활동 디렉토리
    let directory = InMemoryDirectory::from_config(&config.directory)
        .context("활동 디렉토리 초기화 실패")?;

    // 웹 서버
    let lifecycle = LifecycleManager::new();
    let web_server = WebServer::new(Arc::new(directory), config.web.clone());

    let mut server_task = tokio::spawn(web_server.run(lifecycle.subscribe()));

    info!("활동 신청 서버 실행 중 (Ctrl+C로 종료)");

    tokio::select! {
        _ = lifecycle.wait_for_signal() => {
            server_task
                .await
                .context("웹 서버 태스크 비정상 종료")?
                .context("웹 서버 오류")?;
        }
        result = &mut server_task => {
            result
                .context("웹 서버 태스크 비정상 종료")?
                .context("웹 서버 오류")?;
        }
    }

    info!("활동 신청 서버 종료");
    Ok(())
}
