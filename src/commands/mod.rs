pub mod patch;

pub use patch::execute_patch;
