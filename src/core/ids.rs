//! Course identifiers
//!
//! Identifiers are opaque strings. Fresh ones are built from a random
//! per-process prefix and a strictly increasing counter, so they never repeat
//! within a run and are very unlikely to collide with ids saved by earlier
//! runs. Generation still checks the document's ids and skips any clash.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

static SESSION_PREFIX: LazyLock<String> =
    LazyLock::new(|| format!("{:08x}", rand::random::<u32>()));
static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Stable, unique identifier of a course within a transcript
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Wrap an existing identifier (e.g. one read from a saved file)
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate an identifier not contained in `taken`
    ///
    /// Every call returns a value never returned before in this process.
    #[must_use]
    pub fn generate(taken: &HashSet<Self>) -> Self {
        loop {
            let candidate = Self::next_candidate();
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }

    fn next_candidate() -> Self {
        let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("c-{}-{sequence:04}", *SESSION_PREFIX))
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
