use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::config::patterns::{
    NEW_PAYLOAD, NEW_QUERY, NEW_QUERY_ALT, OLD_PAYLOAD, OLD_QUERY, OLD_QUERY_ALT,
};
use crate::core::substitution::{Fallback, Pattern, Substitution, SubstitutionOutcome};

pub const QUERY_SUBSTITUTION: Substitution = Substitution {
    name: "query",
    primary: Pattern {
        old_content: OLD_QUERY,
        new_content: NEW_QUERY,
    },
    fallback: Some(Fallback {
        pattern: Pattern {
            old_content: OLD_QUERY_ALT,
            new_content: NEW_QUERY_ALT,
        },
        applied_message: "SQL query updated (alternative format)",
    }),
    applied_message: "SQL query updated to include project_id",
    missing_message: "Old query not found - checking alternative format...",
};

pub const PAYLOAD_SUBSTITUTION: Substitution = Substitution {
    name: "payload",
    primary: Pattern {
        old_content: OLD_PAYLOAD,
        new_content: NEW_PAYLOAD,
    },
    fallback: None,
    applied_message: "Payload updated to include project_id and project_name",
    missing_message: "Old payload not found",
};

/// Substitutions in the order they are applied.
pub static SUBSTITUTIONS: [Substitution; 2] = [QUERY_SUBSTITUTION, PAYLOAD_SUBSTITUTION];

#[derive(Clone, Debug, Serialize)]
pub struct StepReport {
    pub name: &'static str,
    #[serde(skip)]
    pub substitution: &'static Substitution,
    #[serde(flatten)]
    pub outcome: SubstitutionOutcome,
}

impl StepReport {
    pub fn status_lines(&self) -> Vec<String> {
        self.substitution.status_lines(&self.outcome)
    }

    /// The old/new pair that was applied, if any.
    pub fn applied_pattern(&self) -> Option<&'static Pattern> {
        let substitution: &'static Substitution = self.substitution;
        substitution.pattern_for(&self.outcome)
    }
}

#[derive(Debug, Serialize)]
pub struct PatchReport {
    pub target: PathBuf,
    pub output: PathBuf,
    pub steps: Vec<StepReport>,
    pub changed: bool,
    pub written: bool,
}

/// Result of running every substitution over one file's text.
#[derive(Debug)]
pub struct PatchedContent {
    pub content: String,
    pub steps: Vec<StepReport>,
}

impl PatchedContent {
    pub fn applied_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_applied()).count()
    }
}

#[instrument(skip(content, substitutions), fields(len = content.len()))]
pub fn patch_content(content: &str, substitutions: &'static [Substitution]) -> PatchedContent {
    let mut patched = content.to_string();
    let mut steps = Vec::with_capacity(substitutions.len());

    for substitution in substitutions {
        let outcome = substitution.apply(&mut patched);
        debug!("{}: {:?}", substitution.name, outcome);
        steps.push(StepReport {
            name: substitution.name,
            substitution,
            outcome,
        });
    }

    let result = PatchedContent {
        content: patched,
        steps,
    };

    info!(
        "{}/{} substitutions applied",
        result.applied_count(),
        substitutions.len()
    );

    result
}
