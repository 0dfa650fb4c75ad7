//! Test plan serialization
//!
//! Renders a `FormattedTestPlan` into the editable text layout read back by
//! `decode_plan`.

use super::{
    ENVIRONMENT_BANNER, FEATURE_BANNER, NON_FUNCTIONAL_BANNER, PREREQUISITES_BANNER, RISKS_BANNER,
    SCENARIOS_BANNER, SCOPE_BANNER,
};
use crate::plan::types::{FormattedTestPlan, NOT_APPLICABLE, TestScenario};

/// Serialize a test plan to its text layout.
///
/// The output format is:
/// ```text
/// == FEATURE / DEFECT DESCRIPTION ==
/// Title: ...
/// Description: ...
///
/// == TESTING SCOPE ==
/// In Scope:
/// - ...
/// Out of Scope:
/// - ...
///
/// == PREREQUISITES ==
/// - ...
///
/// == TEST ENVIRONMENT ==
/// Environment: ...
/// Base URL: ...
/// Links:
/// - label: url
/// Notes:
/// - ...
///
/// == NON-FUNCTIONAL TESTING ==
/// N/A
///
/// == RISKS & MITIGATIONS ==
/// Risk: ...
/// Mitigation: ...
///
/// == TEST SCENARIOS ==
///
/// --- Scenario 1: Name ---
/// ...
/// ```
///
/// `Links:` and `Notes:` are only written when non-empty, as are a
/// scenario's `Result:` and `Artifact:` lines.
pub fn encode_plan(plan: &FormattedTestPlan) -> String {
    let mut output = String::new();

    // 1. Feature / defect description
    output.push_str(&format!("{FEATURE_BANNER}\n"));
    output.push_str(&format!("Title: {}\n", plan.feature_description.title));
    output.push_str(&format!(
        "Description: {}\n",
        plan.feature_description.description
    ));

    // 2. Testing scope
    output.push_str(&format!("\n{SCOPE_BANNER}\n"));
    output.push_str("In Scope:\n");
    push_bullets(&mut output, &plan.testing_scope.in_scope);
    output.push_str("Out of Scope:\n");
    push_bullets(&mut output, &plan.testing_scope.out_of_scope);

    // 3. Prerequisites
    output.push_str(&format!("\n{PREREQUISITES_BANNER}\n"));
    push_bullets(&mut output, &plan.prerequisites);

    // 4. Environment
    let env = &plan.environment;
    output.push_str(&format!("\n{ENVIRONMENT_BANNER}\n"));
    output.push_str(&format!("Environment: {}\n", env.environment));
    output.push_str(&format!("Base URL: {}\n", env.base_url));
    if !env.links.is_empty() {
        output.push_str("Links:\n");
        for link in &env.links {
            output.push_str(&format!("- {}: {}\n", link.label, link.url));
        }
    }
    if !env.notes.is_empty() {
        output.push_str("Notes:\n");
        push_bullets(&mut output, &env.notes);
    }

    // 5. Non-functional testing
    output.push_str(&format!("\n{NON_FUNCTIONAL_BANNER}\n"));
    let non_functional = plan.non_functional_testing.trim();
    if non_functional.is_empty() {
        output.push_str(NOT_APPLICABLE);
    } else {
        output.push_str(non_functional);
    }
    output.push('\n');

    // 6. Risks, one blank line after each pair
    output.push_str(&format!("\n{RISKS_BANNER}\n"));
    for risk in &plan.risks {
        output.push_str(&format!("Risk: {}\n", risk.risk));
        output.push_str(&format!("Mitigation: {}\n\n", risk.mitigation));
    }
    if plan.risks.is_empty() {
        output.push('\n');
    }

    // 7. Scenarios
    output.push_str(&format!("{SCENARIOS_BANNER}\n"));
    for scenario in &plan.scenarios {
        output.push('\n');
        output.push_str(&encode_scenario(scenario));
    }

    output
}

/// Serialize one scenario sub-block.
///
/// Step lines are indented; the decoder relies on the indentation to tell
/// steps apart from scenario fields.
fn encode_scenario(scenario: &TestScenario) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "--- Scenario {}: {} ---\n",
        scenario.scenario_number, scenario.scenario_name
    ));
    output.push_str(&format!("Release: {}\n", scenario.release));
    output.push_str(&format!("Objective: {}\n", scenario.objective));
    output.push_str("Preconditions:\n");
    push_bullets(&mut output, &scenario.preconditions);

    output.push_str("Steps:\n");
    for step in &scenario.steps {
        output.push_str(&format!("  {}. Action: {}\n", step.step_number, step.action));
        output.push_str(&format!("     Validation: {}\n", step.validation));
    }

    output.push_str(&format!("Expected Result: {}\n", scenario.expected_result));
    if !scenario.result.is_empty() {
        output.push_str(&format!("Result: {}\n", scenario.result));
    }
    if !scenario.artifact.is_empty() {
        output.push_str(&format!("Artifact: {}\n", scenario.artifact));
    }

    output
}

fn push_bullets(output: &mut String, items: &[String]) {
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
}
