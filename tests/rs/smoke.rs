//! Integration smoke tests for `gpa_jotter`

use gpa_jotter::{get_version, semester_gpa, Course, Grade, Transcript};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn empty_inputs_give_zero() {
    let empty: [Course; 0] = [];
    assert!(semester_gpa(&empty).abs() < f64::EPSILON);
    assert!(gpa_jotter::cumulative_gpa(&Transcript::new()).abs() < f64::EPSILON);
    assert_eq!(gpa_jotter::grade_point(Grade::O), 10);
}
