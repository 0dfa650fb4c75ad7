use serde::{Deserialize, Serialize};

/// Placeholder written for an absent non-functional testing section.
pub const NOT_APPLICABLE: &str = "N/A";

fn default_non_functional() -> String {
    NOT_APPLICABLE.to_string()
}

/// A generated test plan in its structured (JSON) form.
///
/// Every field is optional on input so that partially generated plans from
/// the backend still deserialize; missing values take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTestPlan {
    #[serde(default)]
    pub feature_description: FeatureDescription,

    #[serde(default)]
    pub testing_scope: TestingScope,

    #[serde(default)]
    pub prerequisites: Vec<String>,

    #[serde(default)]
    pub environment: TestEnvironment,

    /// Free text, possibly spanning several lines
    #[serde(default = "default_non_functional")]
    pub non_functional_testing: String,

    #[serde(default)]
    pub risks: Vec<Risk>,

    #[serde(default)]
    pub scenarios: Vec<TestScenario>,
}

impl Default for FormattedTestPlan {
    fn default() -> Self {
        FormattedTestPlan {
            feature_description: FeatureDescription::default(),
            testing_scope: TestingScope::default(),
            prerequisites: Vec::new(),
            environment: TestEnvironment::default(),
            non_functional_testing: default_non_functional(),
            risks: Vec::new(),
            scenarios: Vec::new(),
        }
    }
}

impl FormattedTestPlan {
    /// True when nothing beyond the defaults was recovered.
    ///
    /// A blank plan and a plan decoded from unstructured text look the same;
    /// callers use this to decide whether to warn the user.
    pub fn is_blank(&self) -> bool {
        *self == FormattedTestPlan::default()
    }

    /// Total number of steps across all scenarios
    pub fn step_count(&self) -> usize {
        self.scenarios.iter().map(|s| s.steps.len()).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDescription {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingScope {
    #[serde(default)]
    pub in_scope: Vec<String>,
    #[serde(default)]
    pub out_of_scope: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestEnvironment {
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub links: Vec<EnvironmentLink>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub mitigation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScenario {
    #[serde(default)]
    pub release: String,

    /// 1-based; taken from the scenario header or its position
    #[serde(default)]
    pub scenario_number: u32,

    #[serde(default)]
    pub scenario_name: String,

    #[serde(default)]
    pub objective: String,

    #[serde(default)]
    pub preconditions: Vec<String>,

    #[serde(default)]
    pub steps: Vec<TestStep>,

    #[serde(default)]
    pub expected_result: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub result: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub artifact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    #[serde(default)]
    pub step_number: u32,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub validation: String,
    /// Not carried by the text layout; always false after a text round trip.
    #[serde(default)]
    pub ask_human: bool,
}
