pub mod parser;
pub mod types;

pub use parser::{SECTION_BANNERS, decode_plan, decode_plan_strict, encode_plan};
pub use types::{
    EnvironmentLink, FeatureDescription, FormattedTestPlan, NOT_APPLICABLE, Risk, TestEnvironment,
    TestScenario, TestStep, TestingScope,
};

use crate::error::{QaplanError, Result};

/// Parse a test plan from the backend's JSON form.
///
/// Missing fields take their defaults; only malformed JSON is an error.
pub fn plan_from_json(json: &str) -> Result<FormattedTestPlan> {
    if json.trim().is_empty() {
        return Err(QaplanError::EmptyInput);
    }
    Ok(serde_json::from_str(json)?)
}

/// Serialize a test plan to pretty-printed JSON.
pub fn plan_to_json(plan: &FormattedTestPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_json_empty_object() {
        let plan = plan_from_json("{}").unwrap();
        assert!(plan.is_blank());
    }

    #[test]
    fn test_plan_from_json_rejects_blank_input() {
        assert!(matches!(plan_from_json("  \n"), Err(QaplanError::EmptyInput)));
    }

    #[test]
    fn test_plan_from_json_malformed() {
        assert!(matches!(plan_from_json("{\"risks\": ["), Err(QaplanError::Json(_))));
    }

    #[test]
    fn test_json_to_text_and_back() {
        let json = r#"{
            "featureDescription": {"title": "Search", "description": "Full-text search"},
            "risks": [{"risk": "Slow index", "mitigation": "Warm cache"}],
            "scenarios": [{
                "release": "R1", "scenarioNumber": 1, "scenarioName": "Basic query",
                "objective": "Find by keyword", "preconditions": ["Index built"],
                "steps": [{"stepNumber": 1, "action": "Type query", "validation": "Results shown", "askHuman": false}],
                "expectedResult": "Matching results"
            }]
        }"#;

        let plan = plan_from_json(json).unwrap();
        let decoded = decode_plan(&encode_plan(&plan));
        assert_eq!(decoded, plan);

        let round = plan_from_json(&plan_to_json(&decoded).unwrap()).unwrap();
        assert_eq!(round, plan);
    }
}
