//! Execution report parsing
//!
//! Turns the loosely structured text produced by the test execution backend
//! into display blocks. There is no reverse direction.
//!
//! # Module Structure
//!
//! - `normalize`: Escape repair and markdown clean-up before segmentation
//! - `parser`: Line-by-line block segmentation
//! - `table`: Pipe tables and row-width repair
//! - `status`: Status word classification and summaries
//! - `types`: The `ReportBlock` enum

pub mod normalize;
pub mod parser;
pub mod status;
pub mod table;
pub mod types;

pub use normalize::normalize_report_text;
pub use parser::parse_report;
pub use status::{ReportSummary, StatusWord, is_status_word};
pub use types::ReportBlock;
