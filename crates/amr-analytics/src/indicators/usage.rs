//! Antibiotic use indicators, computed over medicine and antibiotic users.

use crate::{Polarity, SurveyIndicator};

/// Share of medicine users who took antibiotics.
pub struct AntibioticUsage;

impl SurveyIndicator for AntibioticUsage {
    fn id(&self) -> &str {
        "antibiotic_usage"
    }

    fn name(&self) -> &str {
        "Antibiotic Usage"
    }

    fn formula(&self) -> &str {
        "(individuals who took antibiotics / individuals who took any medicine) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q10"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::LowerIsBetter
    }
}

/// Antibiotic users who obtained antibiotics without consulting a doctor.
pub struct SelfMedication;

impl SurveyIndicator for SelfMedication {
    fn id(&self) -> &str {
        "self_medication"
    }

    fn name(&self) -> &str {
        "Self-Medication Rate"
    }

    fn formula(&self) -> &str {
        "(antibiotic users who did not consult a doctor / antibiotic users) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q19", "Q31"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::LowerIsBetter
    }
}

pub struct PrescriptionAvailability;

impl SurveyIndicator for PrescriptionAvailability {
    fn id(&self) -> &str {
        "prescription_availability"
    }

    fn name(&self) -> &str {
        "Prescription Availability"
    }

    fn formula(&self) -> &str {
        "(antibiotic users with a prescription / antibiotic users) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q20"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::HigherIsBetter
    }
}

/// Antibiotic users who finished the full course.
pub struct CompletionRate;

impl SurveyIndicator for CompletionRate {
    fn id(&self) -> &str {
        "completion_rate"
    }

    fn name(&self) -> &str {
        "Course Completion Rate"
    }

    fn formula(&self) -> &str {
        "(antibiotic users who completed the full course / antibiotic users) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q21"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::HigherIsBetter
    }
}

pub struct RestartWithoutConsultation;

impl SurveyIndicator for RestartWithoutConsultation {
    fn id(&self) -> &str {
        "restart_without_consultation"
    }

    fn name(&self) -> &str {
        "Restart Without Consultation"
    }

    fn formula(&self) -> &str {
        "(individuals who restarted antibiotics without consultation / antibiotic users) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q22"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::LowerIsBetter
    }
}
