//! Test plan text codec
//!
//! Converts between `FormattedTestPlan` and the plain-text layout a QA user
//! edits by hand. Decoding is deliberately forgiving: sections are located by
//! their banners, anything in between is discarded, and whatever cannot be
//! read keeps its default value.
//!
//! # Module Structure
//!
//! - `sections`: Per-section readers driven by a shared `LineCursor`
//! - `serialize`: Rendering a plan back to the text layout

mod sections;
mod serialize;

use crate::error::{QaplanError, Result};
use crate::plan::types::FormattedTestPlan;
use crate::utils::cursor::LineCursor;

pub use sections::{is_scenario_header, parse_link, parse_scenario_header};
pub use serialize::encode_plan;

pub const FEATURE_BANNER: &str = "== FEATURE / DEFECT DESCRIPTION ==";
pub const SCOPE_BANNER: &str = "== TESTING SCOPE ==";
pub const PREREQUISITES_BANNER: &str = "== PREREQUISITES ==";
pub const ENVIRONMENT_BANNER: &str = "== TEST ENVIRONMENT ==";
pub const NON_FUNCTIONAL_BANNER: &str = "== NON-FUNCTIONAL TESTING ==";
pub const RISKS_BANNER: &str = "== RISKS & MITIGATIONS ==";
pub const SCENARIOS_BANNER: &str = "== TEST SCENARIOS ==";

/// All section banners in the order they are written and read.
pub const SECTION_BANNERS: &[&str] = &[
    FEATURE_BANNER,
    SCOPE_BANNER,
    PREREQUISITES_BANNER,
    ENVIRONMENT_BANNER,
    NON_FUNCTIONAL_BANNER,
    RISKS_BANNER,
    SCENARIOS_BANNER,
];

/// Parse the text layout into a test plan.
///
/// Never fails. Each banner is searched for from the current position; a
/// missing banner leaves its section at the default and the search for the
/// next banner starts from the same place. Content between sections that no
/// reader consumes is dropped. Step `askHuman` flags are always false since
/// the text carries no signal for them.
pub fn decode_plan(text: &str) -> FormattedTestPlan {
    decode_with_missing(text).0
}

/// Like [`decode_plan`], but reports banners that were not found.
///
/// The content accepted is identical to the lenient decoder; the only
/// difference is the `MissingSections` error listing absent banners.
pub fn decode_plan_strict(text: &str) -> Result<FormattedTestPlan> {
    let (plan, missing) = decode_with_missing(text);
    if missing.is_empty() {
        Ok(plan)
    } else {
        for banner in &missing {
            tracing::warn!("test plan section not found: {banner}");
        }
        Err(QaplanError::MissingSections(
            missing.into_iter().map(str::to_string).collect(),
        ))
    }
}

fn decode_with_missing(text: &str) -> (FormattedTestPlan, Vec<&'static str>) {
    let mut cursor = LineCursor::new(text);
    let mut plan = FormattedTestPlan::default();
    let mut missing = Vec::new();

    for &banner in SECTION_BANNERS {
        if !cursor.skip_to(banner) {
            missing.push(banner);
            continue;
        }

        match banner {
            FEATURE_BANNER => plan.feature_description = sections::read_feature(&mut cursor),
            SCOPE_BANNER => plan.testing_scope = sections::read_scope(&mut cursor),
            PREREQUISITES_BANNER => plan.prerequisites = sections::read_prerequisites(&mut cursor),
            ENVIRONMENT_BANNER => plan.environment = sections::read_environment(&mut cursor),
            NON_FUNCTIONAL_BANNER => {
                plan.non_functional_testing = sections::read_non_functional(&mut cursor)
            }
            RISKS_BANNER => plan.risks = sections::read_risks(&mut cursor),
            SCENARIOS_BANNER => plan.scenarios = sections::read_scenarios(&mut cursor),
            _ => {}
        }
    }

    tracing::debug!(
        scenarios = plan.scenarios.len(),
        steps = plan.step_count(),
        risks = plan.risks.len(),
        missing = missing.len(),
        "decoded test plan text"
    );

    (plan, missing)
}
