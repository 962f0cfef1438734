//! Rates on the ASHA worker dashboard, derived from the worker's weekly
//! counters.

use amr_core::models::record::RawRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rate::percentage;

/// Counters reported by one ASHA worker. Missing counters are 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AshaCounters {
    pub assigned_households: f64,
    pub completed_households: f64,
    pub households_visited: f64,
    pub households_with_sickness: f64,
    pub individuals_data_collected: f64,
    pub full_course_completed: f64,
    pub antibiotics_from_pharmacy: f64,
    pub want_to_learn_more: f64,
}

impl AshaCounters {
    /// Read counters from a backend row, coercing string and missing values.
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            assigned_households: record.number("assigned_households"),
            completed_households: record.number("completed_households"),
            households_visited: record.number("households_visited"),
            households_with_sickness: record.number("households_with_sickness"),
            individuals_data_collected: record.number("individuals_data_collected"),
            full_course_completed: record.number("full_course_completed"),
            antibiotics_from_pharmacy: record.number("antibiotics_from_pharmacy"),
            want_to_learn_more: record.number("want_to_learn_more"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AshaRates {
    /// Completed households over assigned households.
    pub survey_progress: f64,
    /// Households visited this week over assigned households.
    pub coverage: f64,
    /// Visited households reporting sickness.
    pub sickness: f64,
    pub course_completion: f64,
    /// Individuals who bought antibiotics at a pharmacy without a prescription.
    pub without_prescription: f64,
    /// Individuals asking for more information (IEC opportunity).
    pub iec_opportunity: f64,
}

pub fn asha_rates(c: &AshaCounters) -> AshaRates {
    AshaRates {
        survey_progress: percentage(c.completed_households, c.assigned_households),
        coverage: percentage(c.households_visited, c.assigned_households),
        sickness: percentage(c.households_with_sickness, c.households_visited),
        course_completion: percentage(c.full_course_completed, c.individuals_data_collected),
        without_prescription: percentage(
            c.antibiotics_from_pharmacy,
            c.individuals_data_collected,
        ),
        iec_opportunity: percentage(c.want_to_learn_more, c.individuals_data_collected),
    }
}
