use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::{SUCCESS_GLYPH, WARNING_GLYPH};

/// An exact old/new text pair.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub old_content: &'static str,
    pub new_content: &'static str,
}

/// Second form tried when the primary pattern is absent, with its own
/// success message.
#[derive(Clone, Copy, Debug)]
pub struct Fallback {
    pub pattern: Pattern,
    pub applied_message: &'static str,
}

/// One logical replacement, tried with the primary pattern first and the
/// fallback (if any) only when the primary one is absent.
#[derive(Clone, Copy, Debug)]
pub struct Substitution {
    pub name: &'static str,
    pub primary: Pattern,
    pub fallback: Option<Fallback>,
    pub applied_message: &'static str,
    pub missing_message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubstitutionOutcome {
    Primary { replacements: usize },
    Alternate { replacements: usize },
    NotFound,
}

impl SubstitutionOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, SubstitutionOutcome::NotFound)
    }
}

impl Substitution {
    /// Replaces every occurrence of the matching pattern in `content`.
    #[instrument(skip(self, content), fields(substitution = self.name))]
    pub fn apply(&self, content: &mut String) -> SubstitutionOutcome {
        if let Some(replacements) = replace_all(content, &self.primary) {
            return SubstitutionOutcome::Primary { replacements };
        }

        debug!("Primary pattern not found");

        match self.fallback {
            Some(fallback) => match replace_all(content, &fallback.pattern) {
                Some(replacements) => SubstitutionOutcome::Alternate { replacements },
                None => SubstitutionOutcome::NotFound,
            },
            None => SubstitutionOutcome::NotFound,
        }
    }

    /// Operator-facing status lines for an outcome of this substitution.
    ///
    /// A primary miss always yields the warning, even when the fallback
    /// then succeeds.
    pub fn status_lines(&self, outcome: &SubstitutionOutcome) -> Vec<String> {
        let mut lines = Vec::new();
        match outcome {
            SubstitutionOutcome::Primary { .. } => {
                lines.push(format!("{} {}", SUCCESS_GLYPH, self.applied_message));
            }
            SubstitutionOutcome::Alternate { .. } => {
                lines.push(format!("{} {}", WARNING_GLYPH, self.missing_message));
                if let Some(fallback) = &self.fallback {
                    lines.push(format!("{} {}", SUCCESS_GLYPH, fallback.applied_message));
                }
            }
            SubstitutionOutcome::NotFound => {
                lines.push(format!("{} {}", WARNING_GLYPH, self.missing_message));
            }
        }
        lines
    }

    /// The pattern that produced `outcome`, if any.
    pub fn pattern_for(&self, outcome: &SubstitutionOutcome) -> Option<&Pattern> {
        match outcome {
            SubstitutionOutcome::Primary { .. } => Some(&self.primary),
            SubstitutionOutcome::Alternate { .. } => self.fallback.as_ref().map(|f| &f.pattern),
            SubstitutionOutcome::NotFound => None,
        }
    }
}

fn replace_all(content: &mut String, pattern: &Pattern) -> Option<usize> {
    if !content.contains(pattern.old_content) {
        return None;
    }

    let occurrences = content.matches(pattern.old_content).count();
    if occurrences > 1 {
        warn!(
            "Old content appears {} times in file, replacing all occurrences",
            occurrences
        );
    }

    *content = content.replace(pattern.old_content, pattern.new_content);
    Some(occurrences)
}
