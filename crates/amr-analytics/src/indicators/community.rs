//! Indicators computed over all survey respondents.

use crate::{Polarity, SurveyIndicator};

/// Respondents aware of the consequences of antibiotic misuse.
pub struct MisuseAwareness;

impl SurveyIndicator for MisuseAwareness {
    fn id(&self) -> &str {
        "misuse_awareness"
    }

    fn name(&self) -> &str {
        "Antibiotic Misuse Awareness"
    }

    fn formula(&self) -> &str {
        "(individuals aware of the consequences of misuse / respondents) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q24", "Q25"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::HigherIsBetter
    }
}

pub struct LongTermIllness;

impl SurveyIndicator for LongTermIllness {
    fn id(&self) -> &str {
        "long_term_illness"
    }

    fn name(&self) -> &str {
        "Long-Term Illness Prevalence"
    }

    fn formula(&self) -> &str {
        "(individuals with a chronic illness / respondents) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q15"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::LowerIsBetter
    }
}

/// Respondents who prefer government health centres for care.
pub struct HealthFacilityPreference;

impl SurveyIndicator for HealthFacilityPreference {
    fn id(&self) -> &str {
        "health_facility_preference"
    }

    fn name(&self) -> &str {
        "Government Facility Preference"
    }

    fn formula(&self) -> &str {
        "(respondents preferring government health centres / respondents) * 100"
    }

    fn source_questions(&self) -> &[&'static str] {
        &["Q28"]
    }

    fn polarity(&self) -> Polarity {
        Polarity::HigherIsBetter
    }
}
