//! # signup-storage
//!
//! 활동 디렉토리 저장소 어댑터.
//! 프로세스 수명 동안만 유지되는 인메모리 디렉토리와
//! 시작 시 디렉토리를 채우는 시드 데이터를 관리한다.
//!
//! ## 모듈
//! - `memory`: 인메모리 디렉토리 (ActivityDirectory 구현)
//! - `seed`: 내장 시드 및 JSON 시드 파일 로더

pub mod memory;
pub mod seed;

pub use memory::InMemoryDirectory;
