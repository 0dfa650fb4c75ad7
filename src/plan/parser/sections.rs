//! Section readers for the test plan text layout
//!
//! Each reader starts on the line after its banner and stops before the next
//! banner, leaving the cursor there. Readers never fail: whatever cannot be
//! recognized is skipped and the field keeps its default.

use std::sync::LazyLock;

use regex::Regex;

use crate::plan::types::{
    EnvironmentLink, FeatureDescription, NOT_APPLICABLE, Risk, TestEnvironment, TestScenario,
    TestStep, TestingScope,
};
use crate::utils::cursor::{LineCursor, is_banner, read_field};

/// `--- Scenario <digits>: <name> ---`; the number may be missing or garbled.
static SCENARIO_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^---\s*Scenario\b\s*(\d*)\s*:?\s*(.*?)\s*(?:-{3,})?\s*$")
        .expect("scenario header regex should be valid")
});

/// `  <digits>. Action: <text>`; the leading indentation is required.
static STEP_ACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+(\d+)\.\s*Action:\s*(.*)$").expect("step action regex should be valid")
});

static STEP_VALIDATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s+Validation:\s*(.*)$").expect("step validation regex should be valid")
});

/// Read the value of the next non-blank line as `label`.
///
/// Returns an empty string without consuming anything when the section has
/// ended or the next line is one of the `stop` sub-labels.
fn read_value(cursor: &mut LineCursor<'_>, label: &str, stop: &[&str]) -> String {
    cursor.skip_blank();
    match cursor.peek() {
        Some(line)
            if !is_banner(line) && !stop.iter().any(|s| line.trim().starts_with(s)) =>
        {
            cursor.advance();
            read_field(line, label)
        }
        _ => String::new(),
    }
}

pub fn read_feature(cursor: &mut LineCursor<'_>) -> FeatureDescription {
    let title = read_value(cursor, "Title:", &[]);
    let description = read_value(cursor, "Description:", &[]);
    FeatureDescription { title, description }
}

pub fn read_scope(cursor: &mut LineCursor<'_>) -> TestingScope {
    let mut scope = TestingScope::default();

    while let Some(line) = cursor.peek() {
        if is_banner(line) {
            break;
        }
        let trimmed = line.trim();
        cursor.advance();
        if trimmed.starts_with("In Scope:") {
            scope.in_scope = cursor.read_bullets();
        } else if trimmed.starts_with("Out of Scope:") {
            scope.out_of_scope = cursor.read_bullets();
        }
    }

    scope
}

pub fn read_prerequisites(cursor: &mut LineCursor<'_>) -> Vec<String> {
    cursor.skip_blank();
    cursor.read_bullets()
}

pub fn read_environment(cursor: &mut LineCursor<'_>) -> TestEnvironment {
    const SUB_LABELS: &[&str] = &["Links:", "Notes:"];

    let mut env = TestEnvironment {
        environment: read_value(cursor, "Environment:", SUB_LABELS),
        base_url: read_value(cursor, "Base URL:", SUB_LABELS),
        ..Default::default()
    };

    while let Some(line) = cursor.peek() {
        if is_banner(line) {
            break;
        }
        let trimmed = line.trim();
        cursor.advance();
        if trimmed.starts_with("Links:") {
            env.links = cursor
                .read_bullets()
                .iter()
                .map(|item| parse_link(item))
                .collect();
        } else if trimmed.starts_with("Notes:") {
            env.notes = cursor.read_bullets();
        }
    }

    env
}

/// Split a `label: url` bullet.
///
/// URLs contain `:` themselves, so only `": "` separates; a bare trailing
/// colon means an empty URL.
pub fn parse_link(item: &str) -> EnvironmentLink {
    if let Some((label, url)) = item.split_once(": ") {
        EnvironmentLink {
            label: label.trim().to_string(),
            url: url.trim().to_string(),
        }
    } else {
        EnvironmentLink {
            label: item.strip_suffix(':').unwrap_or(item).trim().to_string(),
            url: String::new(),
        }
    }
}

/// Collect free text up to the next banner.
pub fn read_non_functional(cursor: &mut LineCursor<'_>) -> String {
    let mut lines = Vec::new();
    while let Some(line) = cursor.peek() {
        if is_banner(line) {
            break;
        }
        lines.push(line);
        cursor.advance();
    }

    let text = lines.join("\n").trim().to_string();
    if text.is_empty() {
        NOT_APPLICABLE.to_string()
    } else {
        text
    }
}

pub fn read_risks(cursor: &mut LineCursor<'_>) -> Vec<Risk> {
    let mut risks = Vec::new();

    loop {
        cursor.skip_blank();
        let Some(line) = cursor.peek() else { break };
        if is_banner(line) {
            break;
        }
        cursor.advance();

        // A mitigation whose risk line was deleted
        if line.trim().starts_with("Mitigation:") {
            risks.push(Risk {
                risk: String::new(),
                mitigation: read_field(line, "Mitigation:"),
            });
            continue;
        }

        let risk = read_field(line, "Risk:");
        let mitigation = match cursor.peek() {
            Some(next)
                if !next.trim().is_empty()
                    && !is_banner(next)
                    && !next.trim().starts_with("Risk:") =>
            {
                cursor.advance();
                read_field(next, "Mitigation:")
            }
            _ => String::new(),
        };
        risks.push(Risk { risk, mitigation });
    }

    risks
}

pub fn is_scenario_header(line: &str) -> bool {
    line.trim().starts_with("--- Scenario")
}

/// Parse a scenario header into its number and name.
///
/// `index` is the scenario's position; a header without a usable number is
/// numbered `index + 1`.
pub fn parse_scenario_header(line: &str, index: usize) -> (u32, String) {
    let fallback = u32::try_from(index + 1).unwrap_or(u32::MAX);

    match SCENARIO_HEADER_REGEX.captures(line.trim()) {
        Some(caps) => {
            let number = caps
                .get(1)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(fallback);
            let name = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            (number, name.to_string())
        }
        None => (fallback, String::new()),
    }
}

/// Read every scenario sub-block until the end of input.
pub fn read_scenarios(cursor: &mut LineCursor<'_>) -> Vec<TestScenario> {
    let mut scenarios = Vec::new();

    loop {
        // Skip anything before the next header
        while let Some(line) = cursor.peek() {
            if is_scenario_header(line) {
                break;
            }
            cursor.advance();
        }
        let Some(header) = cursor.next_line() else {
            break;
        };

        let (number, name) = parse_scenario_header(header, scenarios.len());
        let mut scenario = TestScenario {
            scenario_number: number,
            scenario_name: name,
            ..Default::default()
        };
        read_scenario_fields(cursor, &mut scenario);
        scenarios.push(scenario);
    }

    scenarios
}

fn read_scenario_fields(cursor: &mut LineCursor<'_>, scenario: &mut TestScenario) {
    while let Some(line) = cursor.peek() {
        if is_scenario_header(line) {
            break;
        }
        let trimmed = line.trim();
        cursor.advance();

        if trimmed.starts_with("Release:") {
            scenario.release = read_field(trimmed, "Release:");
        } else if trimmed.starts_with("Objective:") {
            scenario.objective = read_field(trimmed, "Objective:");
        } else if trimmed.starts_with("Preconditions:") {
            scenario.preconditions = cursor.read_bullets();
        } else if trimmed.starts_with("Steps:") {
            scenario.steps = read_steps(cursor);
        } else if trimmed.starts_with("Expected Result:") {
            scenario.expected_result = read_field(trimmed, "Expected Result:");
        } else if trimmed.starts_with("Result:") {
            scenario.result = read_field(trimmed, "Result:");
        } else if trimmed.starts_with("Artifact:") {
            scenario.artifact = read_field(trimmed, "Artifact:");
        }
    }
}

/// Read indented `N. Action:` lines, each optionally followed by its
/// `Validation:` line. Stops at the first line that is neither.
pub fn read_steps(cursor: &mut LineCursor<'_>) -> Vec<TestStep> {
    let mut steps = Vec::new();

    while let Some(line) = cursor.peek() {
        let Some(caps) = STEP_ACTION_REGEX.captures(line) else {
            break;
        };
        cursor.advance();

        let fallback = u32::try_from(steps.len() + 1).unwrap_or(u32::MAX);
        let step_number = caps[1].parse::<u32>().unwrap_or(fallback);
        let action = caps[2].trim().to_string();

        let validation = match cursor.peek().and_then(|l| STEP_VALIDATION_REGEX.captures(l)) {
            Some(v) => {
                cursor.advance();
                v[1].trim().to_string()
            }
            None => String::new(),
        };

        steps.push(TestStep {
            step_number,
            action,
            validation,
            ask_human: false,
        });
    }

    steps
}
