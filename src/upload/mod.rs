mod client;
mod correlate;
mod file_processor;
mod types;

pub use client::ApiClient;
pub use file_processor::{FileOutcome, FileProcessor};
pub use types::DepartmentOption;
