pub mod instructions;
pub mod patterns;

pub use instructions::{SUCCESS_GLYPH, WARNING_GLYPH, completion_banner};
pub use patterns::{BACKUP_SUFFIX, DEFAULT_TARGET, UPDATED_SUFFIX};
