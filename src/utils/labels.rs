//! Fixed user-facing text.

pub const APP_TITLE: &str = "Batch File Validator";
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_PASSED: &str = "Passed";
pub const STATUS_FAILED: &str = "Failed";
pub const EMPTY_TABLE_PROMPT: &str = "Click the \"Upload\" button above to choose files";
pub const VALIDATION_FAILED_ALERT: &str = "Upload or validation failed, please try again later";
pub const DEPARTMENT_PLACEHOLDER: &str = "Select department";
