//! JSON fixture provider

use std::io::Write;

use tempfile::NamedTempFile;

use valuemeet::app::{App, AppOptions};
use valuemeet::domain::{Efficiency, TodoStatus};
use valuemeet::store::{FixtureError, FixtureProvider, FixtureSet};

const SAMPLE: &str = r#"{
  "pendingEvaluations": [
    { "id": 1, "title": "朝会", "date": "2025-02-03", "participants": 4, "duration": "15分", "type": "regular" }
  ],
  "completedEvaluations": [
    {
      "id": 7, "title": "設計会議", "date": "2025-01-30", "participants": 6, "duration": "60分",
      "type": "project", "rating": 4.5, "efficiency": "優秀", "satisfaction": 4.2,
      "timeUtilization": 4.0,
      "details": {
        "agenda": ["API"],
        "participantFeedback": [{ "name": "田中太郎", "rating": 5, "comment": "良い" }],
        "outcomes": ["決定"],
        "improvements": []
      }
    }
  ],
  "meetings": [
    {
      "id": 3, "title": "レトロスペクティブ", "date": "2025-02-05", "time": "16:00-17:00",
      "organizer": "山田次郎", "participants": ["佐藤花子"], "agenda": ["振り返り"]
    }
  ],
  "todos": [
    {
      "id": 9, "title": "議事録共有", "assignee": "佐藤花子", "dueDate": "2025-02-06",
      "priority": "high", "status": "in-progress", "meetingTitle": "レトロスペクティブ"
    }
  ]
}"#;

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_loads_json_fixtures() {
    let file = write_json(SAMPLE);
    let set = FixtureSet::from_json_file(file.path()).unwrap();

    assert_eq!(set.pending_evaluations()[0].category, "regular");
    let evaluation = &set.completed_evaluations()[0];
    assert_eq!(evaluation.id(), 7);
    assert_eq!(evaluation.efficiency, Efficiency::Excellent);
    assert_eq!(evaluation.details.participant_feedback[0].rating, 5);

    let meeting = &set.meetings()[0];
    assert_eq!(meeting.status, "scheduled");
    assert_eq!(meeting.attendee_count(), 2);
    assert_eq!(set.todos()[0].status, TodoStatus::InProgress);

    // Missing collections are empty rather than an error.
    assert!(set.agenda().is_empty());
    assert_eq!(set.summary().meetings_this_month, 0);

    let app = App::evaluations(&set, AppOptions::default());
    assert_eq!(app.evaluations.rows().len(), 4);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let json = r#"{
      "todos": [
        { "id": 1, "title": "a", "assignee": "x", "dueDate": "2025-01-01",
          "priority": "low", "status": "pending", "meetingTitle": "m" },
        { "id": 1, "title": "b", "assignee": "y", "dueDate": "2025-01-02",
          "priority": "low", "status": "completed", "meetingTitle": "m" }
      ]
    }"#;
    let file = write_json(json);
    let err = FixtureSet::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, FixtureError::DuplicateId { kind: "todo", id: 1 }));
    assert_eq!(err.to_string(), "duplicate todo id 1");
}

#[test]
fn test_same_id_in_different_collections_is_fine() {
    // Pending and completed evaluations are separate collections.
    let json = r#"{
      "pendingEvaluations": [
        { "id": 1, "title": "a", "date": "2025-01-01", "participants": 1, "duration": "5分" }
      ],
      "meetings": [
        { "id": 1, "title": "b", "date": "2025-01-01", "time": "9:00", "organizer": "x" }
      ]
    }"#;
    let file = write_json(json);
    assert!(FixtureSet::from_json_file(file.path()).is_ok());
}

#[test]
fn test_malformed_file_reports_path() {
    let file = write_json("{ \"meetings\": [ { \"id\": \"one\" } ] }");
    let err = FixtureSet::from_json_file(file.path()).unwrap_err();
    match &err {
        FixtureError::Parse { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = FixtureSet::from_json_file(&path).unwrap_err();
    match err {
        FixtureError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_builtin_fixtures_are_valid() {
    let set = FixtureSet::builtin();
    assert!(set.validate().is_ok());
    assert_eq!(set.pending_evaluations().len(), 3);
    assert_eq!(set.completed_evaluations().len(), 3);
}
