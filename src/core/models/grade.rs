//! Letter grades and the grade marks stored on courses

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A letter grade from the fixed grading scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// Outstanding
    #[default]
    O,
    /// A+
    APlus,
    /// A
    A,
    /// B+
    BPlus,
    /// B
    B,
    /// C+
    CPlus,
    /// C
    C,
    /// Not yet graded placeholder
    NotApplicable,
}

impl Grade {
    /// Every grade, best first, in the order the UI offers them
    pub const ALL: [Self; 8] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::NotApplicable,
    ];

    /// Canonical label as written in saved files (e.g. `"A+"`, `"N/A"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::NotApplicable => "N/A",
        }
    }

    /// Exact, case-sensitive lookup of a saved label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.as_str() == label)
    }

    /// Whether this is the `N/A` placeholder
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient parser for user input: trims and ignores case, accepts `NA` for `N/A`
impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "NA" | "N.A." | "N/A" => Ok(Self::NotApplicable),
            other => Self::from_label(other).ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|g| g.as_str()).collect();
                format!("Unknown grade '{s}' (expected one of {})", known.join(", "))
            }),
        }
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown grade '{label}'")))
    }
}

/// The grade recorded on a course.
///
/// Labels outside the grading scale are kept verbatim so that a loaded file
/// saves back unchanged; they simply never count towards a GPA.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GradeMark {
    /// A grade from the scale
    Known(Grade),
    /// Any other label found in a loaded file
    Unrecognized(String),
}

impl GradeMark {
    /// Classify a raw label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Grade::from_label(label).map_or_else(|| Self::Unrecognized(label.to_string()), Self::Known)
    }

    /// The grade, if it is on the scale
    #[must_use]
    pub const fn known(&self) -> Option<Grade> {
        match self {
            Self::Known(grade) => Some(*grade),
            Self::Unrecognized(_) => None,
        }
    }

    /// Label as saved to file
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(grade) => grade.as_str(),
            Self::Unrecognized(label) => label,
        }
    }
}

impl From<Grade> for GradeMark {
    fn from(grade: Grade) -> Self {
        Self::Known(grade)
    }
}

impl fmt::Display for GradeMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GradeMark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GradeMark {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|label| Self::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_exact() {
        assert_eq!(Grade::from_label("A+"), Some(Grade::APlus));
        assert_eq!(Grade::from_label("N/A"), Some(Grade::NotApplicable));
        assert_eq!(Grade::from_label("a+"), None);
        assert_eq!(Grade::from_label(" A"), None);
    }

    #[test]
    fn test_user_input_is_lenient() {
        assert_eq!(" b+ ".parse::<Grade>(), Ok(Grade::BPlus));
        assert_eq!("na".parse::<Grade>(), Ok(Grade::NotApplicable));
        assert_eq!("o".parse::<Grade>(), Ok(Grade::O));
        let err = "F".parse::<Grade>().unwrap_err();
        assert!(err.contains("Unknown grade 'F'"));
    }

    #[test]
    fn test_unrecognized_mark_keeps_label() {
        let mark = GradeMark::from_label("F");
        assert_eq!(mark, GradeMark::Unrecognized("F".to_string()));
        assert_eq!(mark.known(), None);
        assert_eq!(mark.as_str(), "F");
    }

    #[test]
    fn test_mark_serializes_as_plain_string() {
        let json = serde_json::to_string(&GradeMark::Known(Grade::CPlus)).unwrap();
        assert_eq!(json, "\"C+\"");
        let back: GradeMark = serde_json::from_str("\"Ex\"").unwrap();
        assert_eq!(back, GradeMark::Unrecognized("Ex".to_string()));
    }

    #[test]
    fn test_default_grade_is_top_of_scale() {
        assert_eq!(Grade::default(), Grade::O);
        assert!(Grade::NotApplicable.is_placeholder());
        assert!(!Grade::C.is_placeholder());
    }
}
