use screener_core::keys;
use screener_core::models::intake::IntakeRecord;
use screener_core::models::record::AssessmentRecord;
use screener_core::models::recommendation::{Recommendation, RecommendationSource};
use screener_storage::error::StorageError;
use screener_storage::objects::{get_object, put_object};
use screener_storage::records::{list_records, load_record, save_record, save_report};

fn assessment(child: &str) -> AssessmentRecord {
    let input = IntakeRecord {
        child_name: Some(child.to_string()),
        age: "4".into(),
        eye_contact: "Poor".to_string(),
        speech_level: "Limited".to_string(),
        social_response: "Passive".to_string(),
        sensory_reactions: "Sensitive".to_string(),
        ..Default::default()
    };
    let output = Recommendation {
        focus_areas: vec!["Eye contact & visual attention".to_string()],
        therapy_goals: vec!["Practice joint attention".to_string()],
        activities: vec!["Mirror play".to_string()],
        notes: "notes".to_string(),
    };
    AssessmentRecord::new(input, output, RecommendationSource::RuleEngine)
}

#[tokio::test]
async fn record_round_trips_through_its_key() {
    let dir = tempfile::tempdir().unwrap();
    let record = assessment("Sam");
    save_record(dir.path(), &record).await.unwrap();

    let loaded = load_record(dir.path(), record.id).await.unwrap();
    assert_eq!(loaded.id, record.id);
    assert_eq!(loaded.input, record.input);
    assert_eq!(loaded.output, record.output);

    assert!(get_object(dir.path(), &keys::record(record.id)).await.is_ok());
}

#[tokio::test]
async fn unknown_record_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_record(dir.path(), uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn list_is_newest_first_and_skips_junk() {
    let dir = tempfile::tempdir().unwrap();

    let mut older = assessment("Older");
    older.created_at = jiff::Timestamp::from_second(1_700_000_000).unwrap();
    let mut newer = assessment("Newer");
    newer.created_at = jiff::Timestamp::from_second(1_800_000_000).unwrap();

    save_record(dir.path(), &older).await.unwrap();
    save_record(dir.path(), &newer).await.unwrap();
    put_object(dir.path(), &keys::record(uuid::Uuid::new_v4()), b"not json")
        .await
        .unwrap();
    put_object(dir.path(), "records/readme.txt", b"hello").await.unwrap();

    let records = list_records(dir.path()).await.unwrap();
    let names: Vec<_> = records
        .iter()
        .map(|r| r.input.child_name.clone().unwrap())
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn report_is_stored_under_its_record() {
    let dir = tempfile::tempdir().unwrap();
    let id = uuid::Uuid::new_v4();
    save_report(dir.path(), id, b"PK").await.unwrap();
    assert_eq!(get_object(dir.path(), &keys::report_docx(id)).await.unwrap(), b"PK");
}
