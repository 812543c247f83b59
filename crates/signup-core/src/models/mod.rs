//! 도메인 모델.
//!
//! 디렉토리와 HTTP 경계가 공유하는 데이터 구조체를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod activity;
