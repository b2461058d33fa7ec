//! Course model

use super::grade::{Grade, GradeMark};
use crate::core::ids::CourseId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Credits given to a freshly added course
pub const DEFAULT_CREDITS: u32 = 3;

/// A course taken in a semester
///
/// Every field is optional on disk. Missing or unusable grade and credit
/// values decode to `None` and keep the course out of GPA arithmetic instead
/// of failing the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier; `None` only on legacy files before normalization
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<CourseId>,

    /// Course name (optional, may be empty)
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    /// Recorded grade
    #[serde(
        default,
        deserialize_with = "lenient_grade",
        skip_serializing_if = "Option::is_none"
    )]
    pub grade: Option<GradeMark>,

    /// Credit hours
    #[serde(
        default,
        deserialize_with = "lenient_credits",
        skip_serializing_if = "Option::is_none"
    )]
    pub credits: Option<u32>,
}

impl Course {
    /// Create a course with every field set
    #[must_use]
    pub fn new(id: CourseId, name: impl Into<String>, grade: Grade, credits: u32) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            grade: Some(GradeMark::Known(grade)),
            credits: Some(credits),
        }
    }

    /// A blank course with the default grade and credits
    #[must_use]
    pub fn with_defaults(id: CourseId) -> Self {
        Self::new(id, String::new(), Grade::default(), DEFAULT_CREDITS)
    }

    /// A course record without an identifier, as produced by ingestion
    #[must_use]
    pub fn unassigned(name: impl Into<String>, grade: Grade, credits: u32) -> Self {
        Self {
            id: None,
            name: name.into(),
            grade: Some(GradeMark::Known(grade)),
            credits: Some(credits),
        }
    }

    /// The grade if it is on the grading scale
    #[must_use]
    pub fn known_grade(&self) -> Option<Grade> {
        self.grade.as_ref().and_then(GradeMark::known)
    }

    /// Credit hours, treating missing credits as zero
    #[must_use]
    pub fn credit_hours(&self) -> u32 {
        self.credits.unwrap_or(0)
    }

    /// Display label for the grade; `-` when missing
    #[must_use]
    pub fn grade_label(&self) -> &str {
        self.grade.as_ref().map_or("-", GradeMark::as_str)
    }

    /// Whether this course has the given identifier
    #[must_use]
    pub fn has_id(&self, id: &CourseId) -> bool {
        self.id.as_ref() == Some(id)
    }
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<CourseId>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) if !raw.trim().is_empty() => Some(CourseId::new(raw)),
        // Older web saves used millisecond timestamps as numeric ids
        Some(Value::Number(number)) => Some(CourseId::new(number.to_string())),
        _ => None,
    })
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(serde::de::Error::custom(format!(
            "course name must be a string, found {other}"
        ))),
    }
}

fn lenient_grade<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GradeMark>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(label)) => Some(GradeMark::from_label(&label)),
        Some(other) => Some(GradeMark::Unrecognized(other.to_string())),
    })
}

fn lenient_credits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => credits_from_number(&number),
        Some(Value::String(text)) => text.trim().parse::<u32>().ok(),
        _ => None,
    })
}

fn credits_from_number(number: &serde_json::Number) -> Option<u32> {
    if let Some(whole) = number.as_u64() {
        return u32::try_from(whole).ok();
    }
    let float = number.as_f64()?;
    if float >= 0.0 && float.fract() == 0.0 && float <= f64::from(u32::MAX) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return Some(float as u32);
    }
    None
}
