//! Line scanner for course records in extracted grade-card text
//!
//! A course line carries a department code (2 to 4 capitals, an optional
//! space, then a 3 or 4 digit number) followed by an optional title, an
//! optional grade and an optional credit count, in that order:
//!
//! ```text
//! CS 101  Introduction to Programming   A+   4
//! MA1020  Linear Algebra                B
//! ```

use crate::core::models::Grade;
use regex::Regex;
use std::sync::LazyLock;

static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<dept>[A-Z]{2,4}) ?(?P<number>[0-9]{3,4})\b(?P<rest>.*)$")
        .expect("course code pattern is valid")
});

/// Fields pulled from one course line, before defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// Department code and number with the space removed (`CS101`)
    pub code: String,
    /// Anything between the code and the grade/credits columns
    pub title: String,
    /// Grade column, if one was found
    pub grade: Option<Grade>,
    /// Credits column as written
    pub credits: Option<CreditsToken>,
}

impl ScannedLine {
    /// Display name used for the imported course (`CS101 Data Structures`)
    #[must_use]
    pub fn course_name(&self) -> String {
        if self.title.is_empty() {
            self.code.clone()
        } else {
            format!("{} {}", self.code, self.title)
        }
    }
}

/// The trailing numeric column of a course line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreditsToken {
    /// A whole number of credits
    Whole(u32),
    /// Something number-like that isn't a whole credit count (`3.5`, `-1`)
    Invalid(String),
}

/// Scan a single line
///
/// # Returns
/// `None` when the line has no department code and isn't a course line
#[must_use]
pub fn scan_line(line: &str) -> Option<ScannedLine> {
    let captures = COURSE_CODE.captures(line)?;
    let code = format!("{}{}", &captures["dept"], &captures["number"]);

    let mut tokens: Vec<&str> = captures["rest"]
        .split_whitespace()
        .filter(|token| !is_separator(token))
        .collect();

    let credits = tokens.last().and_then(|token| parse_credits(token));
    if credits.is_some() {
        tokens.pop();
    }

    let grade = tokens.last().and_then(|token| parse_grade(token));
    if grade.is_some() {
        tokens.pop();
    }

    let title = tokens.join(" ");

    Some(ScannedLine {
        code,
        title,
        grade,
        credits,
    })
}

fn parse_credits(token: &str) -> Option<CreditsToken> {
    if let Ok(whole) = token.parse::<u32>() {
        return Some(CreditsToken::Whole(whole));
    }
    // Keeps words like "inf" that f64 parsing would accept in the title
    if !token.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
        return None;
    }
    let value = token.parse::<f64>().ok()?;
    if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return Some(CreditsToken::Whole(value as u32));
    }
    Some(CreditsToken::Invalid(token.to_string()))
}

/// Grades are matched exactly as printed on grade cards, plus `NA`
fn parse_grade(token: &str) -> Option<Grade> {
    match token {
        "NA" => Some(Grade::NotApplicable),
        other => Grade::from_label(other),
    }
}

fn is_separator(token: &str) -> bool {
    token.chars().all(|c| matches!(c, '-' | '|' | ':' | ','))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line() {
        let scanned = scan_line("CS 101  Introduction to Programming   A+   4").unwrap();
        assert_eq!(scanned.code, "CS101");
        assert_eq!(scanned.title, "Introduction to Programming");
        assert_eq!(scanned.grade, Some(Grade::APlus));
        assert_eq!(scanned.credits, Some(CreditsToken::Whole(4)));
        assert_eq!(scanned.course_name(), "CS101 Introduction to Programming");
    }

    #[test]
    fn test_optional_columns() {
        let scanned = scan_line("MA1020 Linear Algebra B").unwrap();
        assert_eq!(scanned.grade, Some(Grade::B));
        assert_eq!(scanned.credits, None);

        let scanned = scan_line("PHY 201").unwrap();
        assert_eq!(scanned.code, "PHY201");
        assert!(scanned.title.is_empty());
        assert_eq!(scanned.course_name(), "PHY201");
    }

    #[test]
    fn test_separators_are_dropped_from_title() {
        let scanned = scan_line("EE 210 - Circuits | O | 3").unwrap();
        assert_eq!(scanned.title, "Circuits");
    }

    #[test]
    fn test_float_credits() {
        assert_eq!(scan_line("CS101 X 3.0").unwrap().credits, Some(CreditsToken::Whole(3)));
        assert_eq!(
            scan_line("CS101 X 3.5").unwrap().credits,
            Some(CreditsToken::Invalid("3.5".to_string()))
        );
    }

    #[test]
    fn test_non_course_lines() {
        assert!(scan_line("Semester Grade Report").is_none());
        assert!(scan_line("").is_none());
        assert!(scan_line("Total credits 24").is_none());
        assert!(scan_line("cs 101 lowercase").is_none());
        assert!(scan_line("ABCDE 101 too long").is_none());
    }
}
