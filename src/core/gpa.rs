//! GPA and CGPA computation
//!
//! A course counts when its grade is on the scale and it carries at least one
//! credit. It then adds `grade point × credits` to the point sum and its
//! credits to the credit sum. `N/A` courses add credits but no points under
//! [`NaPolicy::CountCredits`], and nothing at all under [`NaPolicy::Exclude`].
//! Sums are exact integers; only the final quotient is rounded to 2 decimals.

use crate::core::models::{Course, Grade, Semester, Transcript};
use std::fmt;
use std::str::FromStr;

/// How courses graded `N/A` enter the GPA
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NaPolicy {
    /// Credits count toward the denominator, no points are added
    #[default]
    CountCredits,
    /// The course is ignored entirely
    Exclude,
}

impl FromStr for NaPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count-credits" | "count_credits" | "count" => Ok(Self::CountCredits),
            "exclude" | "ignore" => Ok(Self::Exclude),
            other => Err(format!(
                "Unknown N/A policy: '{other}' (expected count-credits or exclude)"
            )),
        }
    }
}

impl fmt::Display for NaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountCredits => write!(f, "count-credits"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

/// Grade point of a letter grade
#[must_use]
pub const fn grade_point(grade: Grade) -> u32 {
    match grade {
        Grade::O => 10,
        Grade::APlus => 9,
        Grade::A => 8,
        Grade::BPlus => 7,
        Grade::B => 6,
        Grade::CPlus => 5,
        Grade::C => 4,
        Grade::NotApplicable => 0,
    }
}

/// Round to 2 decimal places, halves away from zero
#[must_use]
pub fn round_gpa(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Running point and credit sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeTally {
    /// Sum of `grade point × credits`
    pub points: u64,
    /// Sum of counted credits
    pub credits: u64,
}

impl GradeTally {
    /// Add one course under `policy`; courses that don't count are skipped
    pub fn record(&mut self, course: &Course, policy: NaPolicy) {
        let Some(grade) = course.known_grade() else {
            return;
        };
        let credits = u64::from(course.credit_hours());
        if credits == 0 {
            return;
        }
        if grade.is_placeholder() {
            if policy == NaPolicy::CountCredits {
                self.credits += credits;
            }
            return;
        }
        self.points += u64::from(grade_point(grade)) * credits;
        self.credits += credits;
    }

    /// Rounded average, or `0.0` when no credits were counted
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn gpa(&self) -> f64 {
        if self.credits == 0 {
            return 0.0;
        }
        round_gpa(self.points as f64 / self.credits as f64)
    }
}

/// Per-semester figures for display and reports
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterSummary {
    /// Semester name
    pub name: String,
    /// Semester GPA
    pub gpa: f64,
    /// Credits that entered the GPA
    pub counted_credits: u64,
    /// Number of courses listed, counted or not
    pub course_count: usize,
}

/// GPA calculator bound to an `N/A` policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpaCalculator {
    policy: NaPolicy,
}

impl GpaCalculator {
    /// Create a calculator using `policy`
    #[must_use]
    pub const fn new(policy: NaPolicy) -> Self {
        Self { policy }
    }

    /// Policy in use
    #[must_use]
    pub const fn policy(&self) -> NaPolicy {
        self.policy
    }

    /// Accumulate sums over any sequence of courses
    pub fn tally<'a, I>(&self, courses: I) -> GradeTally
    where
        I: IntoIterator<Item = &'a Course>,
    {
        let mut tally = GradeTally::default();
        for course in courses {
            tally.record(course, self.policy);
        }
        tally
    }

    /// GPA of one semester's courses
    #[must_use]
    pub fn semester_gpa(&self, courses: &[Course]) -> f64 {
        self.tally(courses).gpa()
    }

    /// CGPA over every course in the transcript
    #[must_use]
    pub fn cumulative_gpa(&self, transcript: &Transcript) -> f64 {
        self.tally(transcript.courses()).gpa()
    }

    /// Summary of a single semester
    #[must_use]
    pub fn summarize(&self, semester: &Semester) -> SemesterSummary {
        let tally = self.tally(&semester.courses);
        SemesterSummary {
            name: semester.name.clone(),
            gpa: tally.gpa(),
            counted_credits: tally.credits,
            course_count: semester.course_count(),
        }
    }

    /// Summaries of every semester in order
    #[must_use]
    pub fn summaries(&self, transcript: &Transcript) -> Vec<SemesterSummary> {
        transcript
            .semesters
            .iter()
            .map(|s| self.summarize(s))
            .collect()
    }
}

/// Semester GPA under the default `N/A` policy
#[must_use]
pub fn semester_gpa(courses: &[Course]) -> f64 {
    GpaCalculator::default().semester_gpa(courses)
}

/// CGPA under the default `N/A` policy
#[must_use]
pub fn cumulative_gpa(transcript: &Transcript) -> f64 {
    GpaCalculator::default().cumulative_gpa(transcript)
}

/// Format a GPA the way it is displayed everywhere (`9.14`, `0.00`)
#[must_use]
pub fn format_gpa(gpa: f64) -> String {
    format!("{gpa:.2}")
}
