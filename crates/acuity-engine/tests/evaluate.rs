use acuity_core::{AnswerSet, AnswerValue, RiskLevel};
use acuity_engine::{evaluate, evaluate_json, EngineError};
use serde_json::json;

fn answers(entries: &[(&str, i64)]) -> AnswerSet {
    AnswerSet::from_entries(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), AnswerValue::Integer(*v))),
    )
}

fn everything_maxed() -> AnswerSet {
    let mut entries: Vec<(String, AnswerValue)> = Vec::new();
    for i in 1..=9 {
        entries.push((format!("phq9_{i}"), AnswerValue::Integer(3)));
    }
    for i in 1..=7 {
        entries.push((format!("gad7_{i}"), AnswerValue::Integer(3)));
    }
    for key in ["phq2_1", "phq2_2", "gad2_1", "gad2_2"] {
        entries.push((key.to_string(), AnswerValue::Integer(3)));
    }
    for key in ["audit_c_1", "audit_c_2", "audit_c_3"] {
        entries.push((key.to_string(), AnswerValue::Integer(4)));
    }
    entries.push(("who5_index".to_string(), AnswerValue::Integer(0)));
    entries.push(("pain_severity".to_string(), AnswerValue::Integer(10)));
    entries.push(("pain_interference".to_string(), AnswerValue::Integer(10)));
    for key in ["social_support_low", "financial_stress", "housing_unstable"] {
        entries.push((key.to_string(), AnswerValue::Boolean(true)));
    }
    AnswerSet::from_entries(entries)
}

#[test]
fn evaluation_is_deterministic() {
    let set = everything_maxed();
    assert_eq!(evaluate(&set), evaluate(&set));

    let sparse = answers(&[("phq9_1", 2), ("pain_severity", 6)]);
    assert_eq!(evaluate(&sparse), evaluate(&sparse));
}

#[test]
fn composite_score_is_clamped_to_one_hundred() {
    let assessment = evaluate(&everything_maxed());

    // Per-instrument caps sum well past 100; the composite must not.
    assert!(assessment.composite_score <= 100.0);
    assert!(assessment.composite_score >= 0.0);
    assert_eq!(assessment.risk_level, RiskLevel::Critical);
}

#[test]
fn empty_answer_set_is_low_risk_with_empty_contributions() {
    let assessment = evaluate(&answers(&[]));

    assert_eq!(assessment.composite_score, 0.0);
    assert_eq!(assessment.risk_level, RiskLevel::Low);
    assert!(assessment
        .instrument_breakdown
        .values()
        .all(|r| !r.sufficient_data));
}

#[test]
fn breakdown_covers_all_eight_instruments() {
    let assessment = evaluate(&answers(&[]));
    let ids: Vec<&str> = assessment
        .instrument_breakdown
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        ids,
        ["audit_c", "gad2", "gad7", "pain", "phq2", "phq9", "social", "who5"]
    );
}

#[test]
fn suicide_item_overrides_to_critical_with_minimal_everything_else() {
    // Only the ideation item answered: the depression instrument
    // cannot even score, yet the assessment must still escalate.
    let assessment = evaluate(&answers(&[("phq9_9", 2)]));

    assert_eq!(assessment.risk_level, RiskLevel::Critical);
    assert!(assessment.instrument_breakdown["phq9"].flag("suicide_risk"));
    assert!(assessment.care_pathway.emergency_intervention);
    assert!(assessment.care_pathway.specialist_referral);
    assert!(assessment.care_pathway.care_management);
}

#[test]
fn insufficient_instruments_contribute_nothing() {
    // Three depression items: below the five-item minimum.
    let with_partial = evaluate(&answers(&[
        ("phq9_1", 3),
        ("phq9_2", 3),
        ("phq9_3", 3),
        ("pain_severity", 8),
    ]));
    let without = evaluate(&answers(&[("pain_severity", 8)]));

    assert!(!with_partial.instrument_breakdown["phq9"].sufficient_data);
    assert_eq!(with_partial.composite_score, without.composite_score);
}

#[test]
fn nan_answers_keep_the_composite_in_bounds() {
    let mut entries: Vec<(String, AnswerValue)> = (1..=9)
        .map(|i| (format!("phq9_{i}"), AnswerValue::Decimal(f64::NAN)))
        .collect();
    entries.push(("pain_severity".to_string(), AnswerValue::Decimal(f64::NAN)));
    let assessment = evaluate(&AnswerSet::from_entries(entries));

    assert!(assessment.composite_score.is_finite());
    assert!((0.0..=100.0).contains(&assessment.composite_score));
    assert_eq!(assessment.risk_level, RiskLevel::Low);
    assert!(!assessment.instrument_breakdown["phq9"].sufficient_data);
    assert!(!assessment.instrument_breakdown["pain"].sufficient_data);
}

#[test]
fn evaluate_json_accepts_an_object_payload() {
    let assessment = evaluate_json(&json!({
        "phq9_1": 2, "phq9_2": 2, "phq9_3": 1, "phq9_4": 3, "phq9_5": 1,
        "phq9_6": 2, "phq9_7": 1, "phq9_8": 2, "phq9_9": 0,
        "financial_stress": true,
        "pain_severity": 4.5,
        "ignored_free_text_key": 1,
    }))
    .unwrap();

    let phq9 = &assessment.instrument_breakdown["phq9"];
    assert_eq!(phq9.total_score, 14.0);
    assert!(assessment.instrument_breakdown["social"].sufficient_data);
}

#[test]
fn evaluate_json_rejects_non_object_payloads() {
    for payload in [json!([1, 2, 3]), json!("answers"), json!(42), json!(null)] {
        let err = evaluate_json(&payload).unwrap_err();
        assert!(matches!(err, EngineError::Core(_)), "payload {payload}");
    }
}

#[test]
fn evaluate_json_rejects_nested_values_and_skips_nulls() {
    let err = evaluate_json(&json!({ "phq9_1": { "value": 2 } })).unwrap_err();
    assert!(matches!(err, EngineError::Core(_)));

    let assessment = evaluate_json(&json!({ "phq9_1": null, "pain_severity": 3 })).unwrap();
    assert_eq!(assessment.instrument_breakdown["phq9"].completed_items, 0);
    assert!(assessment.instrument_breakdown["pain"].sufficient_data);
}
