use std::collections::BTreeMap;

use acuity_core::{
    ClinicalPriority, InstrumentResult, InterventionTimeframe, RiskLevel, Severity,
};
use acuity_engine::stratify::stratify;

fn instrument(id: &str, severity: Severity, weighted_risk: f64) -> InstrumentResult {
    InstrumentResult {
        instrument_id: id.to_string(),
        total_score: 0.0,
        severity,
        weighted_risk,
        completed_items: 9,
        sufficient_data: true,
        clinical_flags: BTreeMap::new(),
    }
}

fn breakdown(results: Vec<InstrumentResult>) -> BTreeMap<String, InstrumentResult> {
    results
        .into_iter()
        .map(|r| (r.instrument_id.clone(), r))
        .collect()
}

#[test]
fn priorities_follow_level_and_score() {
    let scored = breakdown(vec![instrument("phq9", Severity::Minimal, 2.0)]);

    let cases = [
        (85.0, RiskLevel::Critical, ClinicalPriority::Immediate),
        (65.0, RiskLevel::High, ClinicalPriority::Urgent),
        (45.0, RiskLevel::Moderate, ClinicalPriority::Routine),
        (10.0, RiskLevel::Low, ClinicalPriority::Preventive),
    ];
    for (score, level, priority) in cases {
        let (stratification, _) = stratify(score, level, &scored);
        assert_eq!(stratification.clinical_priority, priority, "score {score}");
    }

    // The suicide override can pin a critical level onto a low score;
    // priority must follow the level, not the number.
    let (stratification, _) = stratify(5.0, RiskLevel::Critical, &scored);
    assert_eq!(stratification.clinical_priority, ClinicalPriority::Immediate);
}

#[test]
fn timeframes_follow_level() {
    let scored = breakdown(vec![instrument("phq9", Severity::Minimal, 2.0)]);

    let cases = [
        (RiskLevel::Critical, InterventionTimeframe::Immediate),
        (RiskLevel::High, InterventionTimeframe::Within48Hours),
        (RiskLevel::Moderate, InterventionTimeframe::WithinTwoWeeks),
        (RiskLevel::Low, InterventionTimeframe::WithinOneMonth),
    ];
    for (level, timeframe) in cases {
        let (stratification, _) = stratify(50.0, level, &scored);
        assert_eq!(stratification.intervention_timeframe, timeframe);
    }
}

#[test]
fn nothing_scored_gets_the_longest_rescreen_window() {
    let empty = breakdown(vec![InstrumentResult::insufficient("phq9", 0)]);
    let (stratification, _) = stratify(0.0, RiskLevel::Low, &empty);
    assert_eq!(
        stratification.intervention_timeframe,
        InterventionTimeframe::WithinThreeMonths
    );
}

#[test]
fn care_coordination_kicks_in_at_sixty_or_critical() {
    let scored = breakdown(vec![instrument("phq9", Severity::Minimal, 2.0)]);

    assert!(!stratify(59.9, RiskLevel::Moderate, &scored).0.care_coordination_required);
    assert!(stratify(60.0, RiskLevel::High, &scored).0.care_coordination_required);
    assert!(stratify(10.0, RiskLevel::Critical, &scored).0.care_coordination_required);
}

#[test]
fn pathway_starts_at_primary_care_only() {
    let scored = breakdown(vec![instrument("phq9", Severity::Minimal, 2.0)]);
    let (_, pathway) = stratify(10.0, RiskLevel::Low, &scored);

    assert!(pathway.primary_care);
    assert!(!pathway.mental_health_referral);
    assert!(!pathway.emergency_intervention);
    assert!(!pathway.specialist_referral);
    assert!(!pathway.care_management);
}

#[test]
fn depression_beyond_mild_refers_to_mental_health() {
    let moderate = breakdown(vec![instrument("phq9", Severity::Moderate, 22.0)]);
    let (_, pathway) = stratify(22.0, RiskLevel::Low, &moderate);
    assert!(pathway.mental_health_referral);
    assert!(!pathway.specialist_referral);

    let mild = breakdown(vec![instrument("phq9", Severity::Mild, 12.0)]);
    let (_, pathway) = stratify(12.0, RiskLevel::Low, &mild);
    assert!(!pathway.mental_health_referral);
}

#[test]
fn severe_depression_adds_specialist_and_care_management() {
    let severe = breakdown(vec![instrument("phq9", Severity::Severe, 35.0)]);
    let (_, pathway) = stratify(35.0, RiskLevel::Low, &severe);

    assert!(pathway.mental_health_referral);
    assert!(pathway.specialist_referral);
    assert!(pathway.care_management);
}

#[test]
fn suicide_flag_escalates_even_with_low_severity() {
    let mut depression = instrument("phq9", Severity::Minimal, 2.0);
    depression
        .clinical_flags
        .insert("suicide_risk".to_string(), true);
    let results = breakdown(vec![depression]);

    let (_, pathway) = stratify(2.0, RiskLevel::Critical, &results);
    assert!(pathway.specialist_referral);
    assert!(pathway.care_management);
    assert!(pathway.emergency_intervention);
}

#[test]
fn moderate_or_severe_anxiety_refers_to_mental_health() {
    for severity in [Severity::Moderate, Severity::Severe] {
        let results = breakdown(vec![instrument("gad7", severity, 20.0)]);
        let (_, pathway) = stratify(20.0, RiskLevel::Low, &results);
        assert!(pathway.mental_health_referral, "{severity:?}");
    }

    let mild = breakdown(vec![instrument("gad7", Severity::Mild, 12.0)]);
    let (_, pathway) = stratify(12.0, RiskLevel::Low, &mild);
    assert!(!pathway.mental_health_referral);
}

#[test]
fn risk_levels_escalate_the_pathway() {
    let scored = breakdown(vec![instrument("phq9", Severity::Minimal, 2.0)]);

    let (_, critical) = stratify(85.0, RiskLevel::Critical, &scored);
    assert!(critical.emergency_intervention);
    assert!(critical.specialist_referral);
    assert!(critical.care_management);

    let (_, high) = stratify(65.0, RiskLevel::High, &scored);
    assert!(high.mental_health_referral);
    assert!(high.care_management);
    assert!(!high.emergency_intervention);

    let (_, moderate) = stratify(45.0, RiskLevel::Moderate, &scored);
    assert!(moderate.mental_health_referral);
    assert!(!moderate.care_management);
}

#[test]
fn overlapping_rules_union_their_flags() {
    // Severe depression and a critical level both fire; the pathway is
    // the union, and primary care is never switched back off.
    let results = breakdown(vec![
        instrument("phq9", Severity::Severe, 50.0),
        instrument("gad7", Severity::Severe, 25.0),
    ]);
    let (_, pathway) = stratify(85.0, RiskLevel::Critical, &results);

    assert!(pathway.primary_care);
    assert!(pathway.mental_health_referral);
    assert!(pathway.emergency_intervention);
    assert!(pathway.specialist_referral);
    assert!(pathway.care_management);
}
