pub mod file_operations;

pub use file_operations::{backup_path, read_file_safe, updated_path, write_file_safe};
