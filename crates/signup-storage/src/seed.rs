//! 디렉토리 시드 데이터.
//!
//! 프로세스 시작 시 디렉토리를 채우는 고정 활동 목록과
//! JSON 시드 파일 로더를 제공한다.

use signup_core::error::CoreError;
use signup_core::models::activity::{Activities, ActivityRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 내장 시드 활동 목록
///
/// "Chess Club"은 항상 포함된다.
pub fn default_activities() -> Activities {
    let seed: [(&str, &str, &str, u32, [&str; 2]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            ["liam@mergington.edu", "noah@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            ["ava@mergington.edu", "mia@mergington.edu"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        (
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            ["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        (
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            ["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            ["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ];

    seed.into_iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            let mut record = ActivityRecord::new(description, schedule, max_participants);
            record.participants = participants.iter().map(|p| p.to_string()).collect();
            (name.to_string(), record)
        })
        .collect()
}

/// JSON 시드 파일 로드
///
/// 형식: `{"<활동 이름>": {"description": ..., "schedule": ..., "max_participants": ..., "participants": [...]}}`
/// 활동 내 중복 이메일이 있으면 [`CoreError::Validation`].
pub fn load_seed_file(path: &Path) -> Result<Activities, CoreError> {
    let content = fs::read_to_string(path).map_err(|e| {
        CoreError::Config(format!("시드 파일 읽기 실패: {}: {}", path.display(), e))
    })?;

    let activities: Activities = serde_json::from_str(&content)?;
    for (name, record) in &activities {
        record.validate(name)?;
    }

    info!(
        "시드 파일 로드 완료: {} ({}개 활동)",
        path.display(),
        activities.len()
    );
    debug!("시드 활동: {:?}", activities.keys().collect::<Vec<_>>());
    Ok(activities)
}
