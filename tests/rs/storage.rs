//! Integration tests for saving and loading documents

use gpa_jotter::core::gpa::GpaCalculator;
use gpa_jotter::core::ids::CourseId;
use gpa_jotter::core::models::{Course, Grade, GradeMark, Semester, Transcript};
use gpa_jotter::core::session::{NewCourse, Session, SessionOptions};
use gpa_jotter::core::storage;
use gpa_jotter::DocumentError;
use std::fs;
use tempfile::TempDir;

fn setup_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn two_semesters() -> Transcript {
    let mut first = Semester::new("Semester 1");
    first.add_course(Course::new(CourseId::new("maths"), "Maths", Grade::O, 4));
    first.add_course(Course::new(CourseId::new("phys"), "Physics", Grade::A, 3));
    let mut second = Semester::new("Semester 2");
    second.add_course(Course::new(
        CourseId::new("lab"),
        "Lab",
        Grade::NotApplicable,
        2,
    ));
    Transcript::from_semesters(vec![first, second])
}

#[test]
fn test_session_survives_save_and_load() {
    let dir = setup_temp_dir();
    let path = dir.path().join("nested").join("gpa_data.json");

    let mut session = Session::new(SessionOptions::default());
    let first = session.add_semester(None);
    session
        .add_course(
            first,
            NewCourse {
                name: Some("Maths".to_string()),
                grade: Some(Grade::O),
                credits: Some(4),
            },
        )
        .expect("Failed to add course");
    session.add_semester(Some("Summer"));

    storage::save(&path, session.transcript()).expect("Failed to save");
    let (loaded, report) = storage::load(&path).expect("Failed to load");

    assert!(report.is_clean());
    assert_eq!(&loaded, session.transcript());
    assert!(!dir.path().join("nested").join("gpa_data.json.tmp").exists());
}

#[test]
fn test_saved_file_layout() {
    let dir = setup_temp_dir();
    let path = dir.path().join("gpa_data.json");
    storage::save(&path, &two_semesters()).expect("Failed to save");

    let text = fs::read_to_string(&path).expect("Failed to read saved file");
    assert!(text.starts_with("[\n    {\n        \"name\": \"Semester 1\""));
    assert!(text.contains("\"grade\": \"N/A\""));
    assert!(text.ends_with("]\n"));
}

#[test]
fn test_legacy_file_gets_ids() {
    let dir = setup_temp_dir();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"[
    {"name": "Semester 1", "courses": [
        {"id": "keep-me", "name": "Maths", "grade": "O", "credits": 4},
        {"name": "Physics", "grade": "A", "credits": 3}
    ]}
]"#,
    )
    .expect("Failed to write legacy file");

    let (transcript, report) = storage::load(&path).expect("Failed to load legacy file");
    assert_eq!(report.ids_assigned, 1);
    assert_eq!(report.duplicate_ids_replaced, 0);

    let courses = &transcript.semesters[0].courses;
    assert_eq!(courses[0].id, Some(CourseId::new("keep-me")));
    let assigned = courses[1].id.as_ref().expect("id should be assigned");
    assert_ne!(assigned.as_str(), "keep-me");
    assert!(!assigned.as_str().is_empty());

    // Saving and loading again changes nothing
    storage::save(&path, &transcript).expect("Failed to re-save");
    let (again, report) = storage::load(&path).expect("Failed to reload");
    assert!(report.is_clean());
    assert_eq!(again, transcript);
}

#[test]
fn test_numeric_ids_and_odd_values_are_kept() {
    let text = r#"[{"name": "S1", "courses": [
        {"id": 1700000000000, "name": "Old", "grade": "F", "credits": 3},
        {"id": "x", "name": "Blank", "grade": "", "credits": "four"}
    ]}]"#;

    let (transcript, report) = storage::from_json_str(text).expect("Failed to decode");
    assert!(report.is_clean());

    let courses = &transcript.semesters[0].courses;
    assert_eq!(courses[0].id, Some(CourseId::new("1700000000000")));
    assert_eq!(
        courses[0].grade,
        Some(GradeMark::Unrecognized("F".to_string()))
    );
    assert_eq!(courses[1].credits, None);

    // Neither course counts
    assert_eq!(GpaCalculator::default().cumulative_gpa(&transcript), 0.0);

    // The unknown grade label is written back as it was read
    let saved = storage::to_json_string(&transcript).expect("Failed to encode");
    assert!(saved.contains("\"grade\": \"F\""));
}

#[test]
fn test_malformed_input_leaves_session_unchanged() {
    let mut session = Session::with_transcript(two_semesters(), SessionOptions::default());
    let before = session.transcript().clone();

    for bad in ["not json", "{\"name\": \"S1\"}", "[1, 2]", "[{\"name\": \"S\", \"courses\": 5}]"] {
        let err = session.load_json(bad).expect_err(bad);
        assert!(err.is_invalid_content(), "{bad}: {err}");
        assert_eq!(session.transcript(), &before);
    }
}

#[test]
fn test_load_json_replaces_document() {
    let mut session = Session::with_transcript(two_semesters(), SessionOptions::default());

    let text = r#"[{"name": "Only", "courses": [
        {"name": "Art", "grade": "B", "credits": 2}
    ]}]"#;
    let report = session.load_json(text).expect("Failed to load");

    assert_eq!(report.ids_assigned, 1);
    assert_eq!(session.transcript().semester_count(), 1);
    assert_eq!(session.cumulative_gpa(), 6.0);
}

#[test]
fn test_missing_file() {
    let dir = setup_temp_dir();
    let path = dir.path().join("absent.json");

    let err = storage::load(&path).expect_err("Missing file should fail to load");
    assert!(matches!(err, DocumentError::Io { .. }));
    assert!(!err.is_invalid_content());

    let (empty, report) = storage::load_or_default(&path).expect("Missing file should default");
    assert!(empty.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_working_document_keeps_ids_between_opens() {
    let dir = setup_temp_dir();
    let path = dir.path().join("gpa_data.json");
    fs::write(
        &path,
        r#"[{"name": "", "courses": [
        {"name": "Maths", "grade": "O", "credits": 4},
        {"id": "dup", "name": "Physics", "grade": "A", "credits": 3},
        {"id": "dup", "name": "Chemistry", "grade": "B", "credits": 3}
    ]}]"#,
    )
    .expect("Failed to write legacy file");

    let first = storage::open_working(&path).expect("Failed to open");
    let second = storage::open_working(&path).expect("Failed to reopen");
    assert_eq!(first, second);
    assert_eq!(first.semesters[0].name, "Semester 1");

    // The repaired document is what is on disk now
    let (on_disk, report) = storage::load(&path).expect("Failed to load");
    assert!(report.is_clean());
    assert_eq!(on_disk, first);
    assert!(!path.with_extension("json.tmp").exists());
}
