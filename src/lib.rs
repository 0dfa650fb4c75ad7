pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod paths;
pub mod plan;
pub mod report;
pub mod utils;

pub use error::{QaplanError, Result};
pub use plan::{
    FormattedTestPlan, TestScenario, TestStep, decode_plan, decode_plan_strict, encode_plan,
    plan_from_json, plan_to_json,
};
pub use report::{ReportBlock, ReportSummary, StatusWord, normalize_report_text, parse_report};
