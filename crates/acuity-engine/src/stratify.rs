//! Risk stratification and care-pathway resolution.

use std::collections::BTreeMap;

use acuity_core::{
    CarePathway, ClinicalPriority, InstrumentResult, InterventionTimeframe, RiskLevel, Severity,
    Stratification,
};

/// Map the composite score, risk level, and per-instrument outputs to
/// a clinical-priority tier, an intervention window, and a care
/// pathway.
///
/// Pathway flags are monotonic: each triggered rule only turns flags
/// on, so the result is the union of all applicable escalations and
/// rule order is irrelevant.
pub fn stratify(
    composite_score: f64,
    risk_level: RiskLevel,
    breakdown: &BTreeMap<String, InstrumentResult>,
) -> (Stratification, CarePathway) {
    let any_scored = breakdown.values().any(|r| r.sufficient_data);
    let stratification = Stratification {
        clinical_priority: priority_for(composite_score, risk_level),
        intervention_timeframe: timeframe_for(risk_level, any_scored),
        care_coordination_required: composite_score >= 60.0 || risk_level == RiskLevel::Critical,
    };

    let mut pathway = CarePathway::default();

    if let Some(depression) = breakdown.get("phq9") {
        if beyond_mild(depression.severity) {
            pathway.mental_health_referral = true;
        }
        if depression.severity == Severity::Severe || depression.flag("suicide_risk") {
            pathway.specialist_referral = true;
            pathway.care_management = true;
        }
    }

    if let Some(anxiety) = breakdown.get("gad7")
        && matches!(anxiety.severity, Severity::Moderate | Severity::Severe)
    {
        pathway.mental_health_referral = true;
    }

    match risk_level {
        RiskLevel::Critical => {
            pathway.emergency_intervention = true;
            pathway.specialist_referral = true;
            pathway.care_management = true;
        }
        RiskLevel::High => {
            pathway.mental_health_referral = true;
            pathway.care_management = true;
        }
        RiskLevel::Moderate => {
            pathway.mental_health_referral = true;
        }
        RiskLevel::Low => {}
    }

    (stratification, pathway)
}

fn priority_for(score: f64, level: RiskLevel) -> ClinicalPriority {
    if level == RiskLevel::Critical || score >= 80.0 {
        ClinicalPriority::Immediate
    } else if level == RiskLevel::High || score >= 60.0 {
        ClinicalPriority::Urgent
    } else if level == RiskLevel::Moderate || score >= 40.0 {
        ClinicalPriority::Routine
    } else {
        ClinicalPriority::Preventive
    }
}

/// Low-risk screenings where no instrument actually scored fall back
/// to the longest re-screening window.
fn timeframe_for(level: RiskLevel, any_scored: bool) -> InterventionTimeframe {
    match level {
        RiskLevel::Critical => InterventionTimeframe::Immediate,
        RiskLevel::High => InterventionTimeframe::Within48Hours,
        RiskLevel::Moderate => InterventionTimeframe::WithinTwoWeeks,
        RiskLevel::Low if any_scored => InterventionTimeframe::WithinOneMonth,
        RiskLevel::Low => InterventionTimeframe::WithinThreeMonths,
    }
}

fn beyond_mild(severity: Severity) -> bool {
    matches!(
        severity,
        Severity::Moderate | Severity::ModeratelySevere | Severity::Severe
    )
}
