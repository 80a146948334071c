pub mod patcher;
pub mod substitution;

pub use patcher::{PatchReport, PatchedContent, SUBSTITUTIONS, StepReport, patch_content};
pub use substitution::{Fallback, Pattern, Substitution, SubstitutionOutcome};
