mod common;

use common::fixture;
use qaplan::plan::SECTION_BANNERS;
use qaplan::{FormattedTestPlan, decode_plan, decode_plan_strict, encode_plan, plan_from_json};

#[test]
fn test_fixture_text_round_trips_exactly() {
    let text = fixture("plan.txt");
    let plan = decode_plan(&text);

    assert_eq!(encode_plan(&plan), text);
    assert_eq!(decode_plan(&encode_plan(&plan)), plan);
}

#[test]
fn test_json_and_text_fixtures_agree() {
    let from_json = plan_from_json(&fixture("plan.json")).unwrap();
    let from_text = decode_plan(&fixture("plan.txt"));

    // askHuman is the only field the text layout cannot carry
    assert!(from_json.scenarios[0].steps[0].ask_human);
    assert!(!from_text.scenarios[0].steps[0].ask_human);

    let mut expected = from_json.clone();
    for step in expected.scenarios.iter_mut().flat_map(|s| s.steps.iter_mut()) {
        step.ask_human = false;
    }
    assert_eq!(from_text, expected);
}

#[test]
fn test_encode_snapshot() {
    let mut plan = plan_from_json(&fixture("plan.json")).unwrap();
    plan.scenarios.truncate(1);

    insta::assert_snapshot!(encode_plan(&plan), @r"
== FEATURE / DEFECT DESCRIPTION ==
Title: Password reset
Description: Users can reset a forgotten password

== TESTING SCOPE ==
In Scope:
- Reset via email
Out of Scope:
- SMS reset

== PREREQUISITES ==
- Mail catcher running

== TEST ENVIRONMENT ==
Environment: staging
Base URL: https://staging.example.com
Links:
- Wiki: https://wiki.example.com/reset
Notes:
- Tokens expire after 15 minutes

== NON-FUNCTIONAL TESTING ==
Reset email within 30s

== RISKS & MITIGATIONS ==
Risk: Mail delays
Mitigation: Poll mailbox for 60s

== TEST SCENARIOS ==

--- Scenario 1: Request reset ---
Release: R3
Objective: Send reset email
Preconditions:
- User is registered
Steps:
  1. Action: Submit email on reset form
     Validation: Confirmation shown
Expected Result: Email received
Result: PASS
Artifact: reset-email.png
");
}

#[test]
fn test_encode_emits_each_banner_once_in_order() {
    let text = encode_plan(&decode_plan(&fixture("plan.txt")));

    let mut last = 0;
    for banner in SECTION_BANNERS {
        assert_eq!(text.matches(banner).count(), 1, "{banner}");
        let pos = text.find(banner).unwrap();
        assert!(pos >= last, "{banner} out of order");
        last = pos;
    }
}

#[test]
fn test_decode_empty_string() {
    let plan = decode_plan("");
    assert_eq!(plan, FormattedTestPlan::default());
    assert_eq!(plan.non_functional_testing, "N/A");
    assert!(plan.testing_scope.in_scope.is_empty());
    assert!(plan.environment.links.is_empty());
}

#[test]
fn test_decode_garbage_never_fails() {
    let plan = decode_plan("just some notes\n- a bullet\nKey: value\n--- not a scenario\n");
    assert!(plan.is_blank());
}

#[test]
fn test_hand_edited_plan() {
    // Edited label, reordered noise, unnumbered scenario and a dropped validation
    let text = "\
== FEATURE / DEFECT DESCRIPTION ==
Feature: Wishlist
Description: Save items for later
some note the user typed

== TESTING SCOPE ==
In Scope:
- Add to wishlist

== PREREQUISITES ==

== TEST ENVIRONMENT ==
Environment: qa
Base URL: https://qa.example.com

== NON-FUNCTIONAL TESTING ==

== RISKS & MITIGATIONS ==

== TEST SCENARIOS ==
--- Scenario one: Add ---
Objective: Add an item
Steps:
  1. Action: Click heart icon
  2. Action: Open wishlist
     Validation: Item listed
Expected Result: Item saved
";

    let plan = decode_plan(text);
    assert_eq!(plan.feature_description.title, "Feature: Wishlist");
    assert_eq!(plan.feature_description.description, "Save items for later");
    assert_eq!(plan.testing_scope.in_scope, vec!["Add to wishlist"]);
    assert!(plan.testing_scope.out_of_scope.is_empty());
    assert!(plan.prerequisites.is_empty());
    assert_eq!(plan.non_functional_testing, "N/A");
    assert!(plan.risks.is_empty());

    let scenario = &plan.scenarios[0];
    assert_eq!(scenario.scenario_number, 1);
    assert_eq!(scenario.scenario_name, "one: Add");
    assert_eq!(scenario.steps.len(), 2);
    assert_eq!(scenario.steps[0].validation, "");
    assert_eq!(scenario.steps[1].validation, "Item listed");

    // Re-encoding the decoded plan is stable
    let encoded = encode_plan(&plan);
    assert_eq!(encode_plan(&decode_plan(&encoded)), encoded);
}

#[test]
fn test_strict_mode_is_additive() {
    let text = fixture("plan.txt");
    assert_eq!(decode_plan_strict(&text).unwrap(), decode_plan(&text));

    let partial = text.replace("== PREREQUISITES ==\n", "");
    let err = decode_plan_strict(&partial).unwrap_err();
    assert!(err.to_string().contains("== PREREQUISITES =="));
}
