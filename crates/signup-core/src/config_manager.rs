//! 설정 파일 관리.
//!
//! 지정된 경로의 JSON 파일에서 설정을 로드하고, 파일이 없으면 기본값으로 생성한다.

use crate::config::AppConfig;
use crate::error::CoreError;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 설정 파일 이름
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 설정 로드 (파일이 없으면 기본 설정을 생성하고 저장)
pub fn load_or_create(config_path: &Path) -> Result<AppConfig, CoreError> {
    // 설정 디렉토리 생성
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                CoreError::Config(format!(
                    "설정 디렉토리 생성 실패: {}: {}",
                    parent.display(),
                    e
                ))
            })?;
            info!("설정 디렉토리 생성: {}", parent.display());
        }
    }

    if config_path.exists() {
        return load_from_file(config_path);
    }

    let default_config = AppConfig::default_config();
    save_to_file(config_path, &default_config)?;
    info!("기본 설정 파일 생성: {}", config_path.display());
    Ok(default_config)
}

/// 파일에서 설정 로드
fn load_from_file(path: &Path) -> Result<AppConfig, CoreError> {
    let content = fs::read_to_string(path).map_err(|e| {
        CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
    })?;

    let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
        CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
    })?;

    debug!("설정 파일 로드 완료: {}", path.display());
    Ok(config)
}

/// 파일에 설정 저장
fn save_to_file(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| CoreError::Config(format!("설정 직렬화 실패: {}", e)))?;

    fs::write(path, content).map_err(|e| {
        CoreError::Config(format!("설정 파일 저장 실패: {}: {}", path.display(), e))
    })?;

    Ok(())
}
