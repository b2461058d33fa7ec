//! Integration tests for importing courses from grade-card text

use gpa_jotter::core::ingest::{ingest_file, ingest_text, IngestOptions, IssueReason};
use gpa_jotter::core::models::Grade;
use gpa_jotter::core::normalizer::has_unique_ids;
use gpa_jotter::core::session::{Session, SessionOptions};
use std::fs;
use tempfile::TempDir;

const GRADE_CARD: &str = "\
UNIVERSITY OF SOMEWHERE
Statement of Grades - Semester III

Code     Title                          Grade  Credits
CS 201   Data Structures                A+     4
CS 202 | Discrete Mathematics |         O    | 3
MA 2101  Probability                    B
HS 210   Technical Writing              NA     1
PH 205   Optics Lab                     A      1.5
CS 201   Data Structures (repeat)       B      4

Semester GPA: 9.10
";

#[test]
fn test_grade_card_import() {
    let outcome = ingest_text(GRADE_CARD, &IngestOptions::default());

    let names: Vec<&str> = outcome.courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "CS201 Data Structures",
            "CS202 Discrete Mathematics",
            "MA2101 Probability",
            "HS210 Technical Writing",
        ]
    );

    let grades: Vec<Option<Grade>> = outcome.courses.iter().map(|c| c.known_grade()).collect();
    assert_eq!(
        grades,
        vec![
            Some(Grade::APlus),
            Some(Grade::O),
            Some(Grade::B),
            Some(Grade::NotApplicable),
        ]
    );
    // Missing credits fall back to the default
    assert_eq!(outcome.courses[2].credits, Some(3));

    assert_eq!(outcome.issues.len(), 2);
    assert_eq!(
        outcome.issues[0].reason,
        IssueReason::InvalidCredits("1.5".to_string())
    );
    assert_eq!(
        outcome.issues[1].reason,
        IssueReason::DuplicateCode("CS201".to_string())
    );
}

#[test]
fn test_imported_courses_get_ids() {
    let outcome = ingest_text(GRADE_CARD, &IngestOptions::default());
    assert!(outcome.courses.iter().all(|c| c.id.is_none()));

    let mut session = Session::new(SessionOptions::default());
    session.add_semester(Some("Semester 1"));
    let count = outcome.courses.len();
    let position = session.import_courses("Semester 3", outcome.courses);

    assert_eq!(position, 2);
    let semester = &session.transcript().semesters[1];
    assert_eq!(semester.name, "Semester 3");
    assert_eq!(semester.course_count(), count);
    assert!(semester.courses.iter().all(|c| c.id.is_some()));
    assert!(has_unique_ids(session.transcript()));

    // (9*4 + 10*3 + 6*3 + 0*1) / 11
    assert_eq!(session.semester_gpa(2), Ok(7.64));
}

#[test]
fn test_import_into_existing_semester() {
    let mut session = Session::new(SessionOptions {
        seed_semester_course: false,
        ..SessionOptions::default()
    });
    session.add_semester(Some("Imported"));

    let first = ingest_text("CS 101 Programming A 4", &IngestOptions::default());
    let second = ingest_text("MA 101 Calculus B 3", &IngestOptions::default());
    assert_eq!(session.import_courses("Imported", first.courses), 1);
    assert_eq!(session.import_courses("Imported", second.courses), 1);

    assert_eq!(session.transcript().semester_count(), 1);
    assert_eq!(session.transcript().semesters[0].course_count(), 2);
}

#[test]
fn test_credit_bound_follows_options() {
    let options = IngestOptions {
        max_credits: 4,
        ..IngestOptions::default()
    };
    let outcome = ingest_text("EE 301 Power Systems A 5\nEE 302 Machines B 4", &options);

    assert_eq!(outcome.courses.len(), 1);
    assert_eq!(
        outcome.issues[0].reason,
        IssueReason::CreditsOutOfRange { credits: 5, max: 4 }
    );
    assert_eq!(outcome.issues[0].line_number, 1);
}

#[test]
fn test_ingest_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("card.txt");
    fs::write(&path, GRADE_CARD).expect("Failed to write grade card");

    let outcome = ingest_file(&path, &IngestOptions::default()).expect("Failed to ingest");
    assert_eq!(outcome.courses.len(), 4);

    assert!(ingest_file(&dir.path().join("missing.txt"), &IngestOptions::default()).is_err());
}
