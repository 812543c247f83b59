//! 애플리케이션 설정 구조체.
//!
//! 웹 서버 바인드 설정과 디렉토리 시드 설정을 정의한다.
//! [`crate::config_manager::load_or_create`]로 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 웹 서버 설정
    #[serde(default)]
    pub web: WebConfig,
    /// 활동 디렉토리 설정
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }
}

// ============================================================
// 웹 서버 설정
// ============================================================

/// 웹 서버 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebConfig {
    /// 웹 서버 포트 (기본: 8000)
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// 외부 접근 허용 여부 (false: 127.0.0.1 only)
    #[serde(default)]
    pub allow_external: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            allow_external: false,
        }
    }
}

impl WebConfig {
    /// 바인드 호스트 (외부 접근 허용 시 0.0.0.0)
    pub fn bind_host(&self) -> &'static str {
        if self.allow_external {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

fn default_web_port() -> u16 {
    8000
}

// ============================================================
// 디렉토리 설정
// ============================================================

/// 활동 디렉토리 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// 시드 JSON 파일 경로 (None이면 내장 시드 사용)
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}
