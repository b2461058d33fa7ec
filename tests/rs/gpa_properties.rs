//! Property tests for GPA arithmetic and document normalization

use gpa_jotter::core::gpa::{grade_point, GpaCalculator, NaPolicy};
use gpa_jotter::core::ids::CourseId;
use gpa_jotter::core::models::{Course, Grade, GradeMark, Semester, Transcript};
use gpa_jotter::core::normalizer::{has_unique_ids, normalize, normalize_in_place};
use gpa_jotter::core::storage;
use proptest::prelude::*;
use std::collections::HashSet;

fn grade_strategy() -> impl Strategy<Value = Grade> {
    prop::sample::select(Grade::ALL.to_vec())
}

/// Courses as they show up in real files: mostly valid, sometimes missing
/// fields, unknown grades or repeated ids
fn course_strategy() -> impl Strategy<Value = Course> {
    let grade = prop_oneof![
        8 => grade_strategy().prop_map(|g| Some(GradeMark::Known(g))),
        1 => Just(Some(GradeMark::Unrecognized("F".to_string()))),
        1 => Just(None),
    ];
    let credits = prop_oneof![9 => (0u32..=10).prop_map(Some), 1 => Just(None)];
    let id = prop_oneof![
        2 => Just(None),
        1 => (0u8..4).prop_map(|n| Some(CourseId::new(format!("saved-{n}")))),
    ];
    (id, "[a-z ]{0,8}", grade, credits).prop_map(|(id, name, grade, credits)| Course {
        id,
        name,
        grade,
        credits,
    })
}

fn transcript_strategy() -> impl Strategy<Value = Transcript> {
    prop::collection::vec(
        ("[A-Za-z0-9 ]{0,6}", prop::collection::vec(course_strategy(), 0..6)),
        0..5,
    )
    .prop_map(|semesters| {
        Transcript::from_semesters(
            semesters
                .into_iter()
                .map(|(name, courses)| Semester { name, courses })
                .collect(),
        )
    })
}

fn policy_strategy() -> impl Strategy<Value = NaPolicy> {
    prop_oneof![Just(NaPolicy::CountCredits), Just(NaPolicy::Exclude)]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn cumulative_equals_gpa_of_flattened_courses(
        transcript in transcript_strategy(),
        policy in policy_strategy(),
    ) {
        let calc = GpaCalculator::new(policy);
        let flattened: Vec<Course> = transcript.courses().cloned().collect();
        prop_assert_eq!(calc.cumulative_gpa(&transcript), calc.semester_gpa(&flattened));
    }

    #[test]
    fn gpa_stays_on_the_scale(
        transcript in transcript_strategy(),
        policy in policy_strategy(),
    ) {
        let calc = GpaCalculator::new(policy);
        for semester in &transcript.semesters {
            let gpa = calc.semester_gpa(&semester.courses);
            prop_assert!(gpa.is_finite());
            prop_assert!((0.0..=10.0).contains(&gpa));
        }
        prop_assert!(calc.cumulative_gpa(&transcript).is_finite());
    }

    #[test]
    fn raising_one_grade_never_lowers_the_gpa(
        graded in prop::collection::vec((grade_strategy(), 1u32..=10), 1..8),
        index in any::<prop::sample::Index>(),
        new_grade in grade_strategy(),
    ) {
        let courses: Vec<Course> = graded
            .iter()
            .enumerate()
            .map(|(i, (grade, credits))| {
                Course::new(CourseId::new(format!("c{i}")), "", *grade, *credits)
            })
            .collect();
        let i = index.index(courses.len());
        let old_grade = graded[i].0;

        let mut changed = courses.clone();
        changed[i].grade = Some(GradeMark::Known(new_grade));

        let calc = GpaCalculator::default();
        let before = calc.semester_gpa(&courses);
        let after = calc.semester_gpa(&changed);
        if grade_point(new_grade) >= grade_point(old_grade) {
            prop_assert!(after >= before, "{} -> {}: {} < {}", old_grade, new_grade, after, before);
        } else {
            prop_assert!(after <= before, "{} -> {}: {} > {}", old_grade, new_grade, after, before);
        }
    }

    #[test]
    fn zero_credit_semesters_score_zero(
        grades in prop::collection::vec(grade_strategy(), 0..6),
        policy in policy_strategy(),
    ) {
        let courses: Vec<Course> = grades
            .into_iter()
            .enumerate()
            .map(|(i, grade)| Course::new(CourseId::new(format!("z{i}")), "", grade, 0))
            .collect();
        prop_assert_eq!(GpaCalculator::new(policy).semester_gpa(&courses), 0.0);
    }

    #[test]
    fn normalize_gives_unique_ids_and_is_idempotent(transcript in transcript_strategy()) {
        let once = normalize(transcript.clone());
        prop_assert!(has_unique_ids(&once));
        prop_assert_eq!(once.course_count(), transcript.course_count());

        let mut twice = once.clone();
        let report = normalize_in_place(&mut twice);
        prop_assert!(report.is_clean());
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn normalize_keeps_first_occurrence_of_each_id(transcript in transcript_strategy()) {
        let normalized = normalize(transcript.clone());
        let mut seen = HashSet::new();
        for (before, after) in transcript.courses().zip(normalized.courses()) {
            if let Some(id) = &before.id {
                if seen.insert(id.clone()) {
                    prop_assert_eq!(Some(id), after.id.as_ref());
                }
            }
            prop_assert_eq!(&before.name, &after.name);
            prop_assert_eq!(&before.grade, &after.grade);
            prop_assert_eq!(before.credits, after.credits);
        }
    }

    #[test]
    fn normalize_never_changes_the_gpa(
        transcript in transcript_strategy(),
        policy in policy_strategy(),
    ) {
        let calc = GpaCalculator::new(policy);
        let normalized = normalize(transcript.clone());
        prop_assert_eq!(calc.cumulative_gpa(&transcript), calc.cumulative_gpa(&normalized));
    }

    #[test]
    fn saved_text_loads_back_unchanged(transcript in transcript_strategy()) {
        let normalized = normalize(transcript);
        let text = storage::to_json_string(&normalized).unwrap();
        let (loaded, report) = storage::from_json_str(&text).unwrap();
        prop_assert!(report.is_clean());
        prop_assert_eq!(loaded, normalized);
    }
}

#[test]
fn documented_examples() {
    let courses = [
        Course::new(CourseId::new("x"), "", Grade::O, 4),
        Course::new(CourseId::new("y"), "", Grade::A, 3),
    ];
    assert!((GpaCalculator::default().semester_gpa(&courses) - 9.14).abs() < 1e-9);

    let courses = [
        Course::new(CourseId::new("x"), "", Grade::NotApplicable, 3),
        Course::new(CourseId::new("y"), "", Grade::B, 4),
    ];
    assert!((GpaCalculator::default().semester_gpa(&courses) - 3.43).abs() < 1e-9);
}
