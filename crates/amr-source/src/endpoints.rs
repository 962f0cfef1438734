//! Backend endpoint catalogue. Every endpoint returns a JSON array; anything
//! else is a decode error.

use amr_core::models::filter::DashboardFilter;
use amr_core::models::record::RawRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::RecordSource;
use crate::client::SourceClient;
use crate::error::SourceError;

pub const ANTIBIOGRAM_PATH: &str = "/dashboard";

/// Survey counters collected by ASHA workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisEndpoint {
    HouseholdsCompleted,
    HouseholdsSickness,
    CompletedCourses,
    MedicineSelf,
    WantInfo,
    SymptomCategories,
    WeeklyPrescriptionsScanned,
}

impl MisEndpoint {
    pub const ALL: [MisEndpoint; 7] = [
        MisEndpoint::HouseholdsCompleted,
        MisEndpoint::HouseholdsSickness,
        MisEndpoint::CompletedCourses,
        MisEndpoint::MedicineSelf,
        MisEndpoint::WantInfo,
        MisEndpoint::SymptomCategories,
        MisEndpoint::WeeklyPrescriptionsScanned,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            MisEndpoint::HouseholdsCompleted => "/mis/households-completed",
            MisEndpoint::HouseholdsSickness => "/mis/households-sickness",
            MisEndpoint::CompletedCourses => "/mis/completed-courses",
            MisEndpoint::MedicineSelf => "/mis/medicine-self",
            MisEndpoint::WantInfo => "/mis/want-info",
            MisEndpoint::SymptomCategories => "/mis/symptom-categories",
            MisEndpoint::WeeklyPrescriptionsScanned => "/mis/weekly-prescriptions-scanned",
        }
    }
}

/// Option lists for the lab dashboard's filter dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionList {
    Districts,
    TestNames,
    Organisms,
}

impl OptionList {
    pub fn path(&self) -> &'static str {
        match self {
            OptionList::Districts => "/districts",
            OptionList::TestNames => "/test-names",
            OptionList::Organisms => "/organisms",
        }
    }
}

/// All ASHA dashboard datasets, fetched together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AshaDashboardData {
    pub households_completed: Vec<RawRecord>,
    pub households_sickness: Vec<RawRecord>,
    pub completed_courses: Vec<RawRecord>,
    pub medicine_self: Vec<RawRecord>,
    pub want_info: Vec<RawRecord>,
    pub symptom_categories: Vec<RawRecord>,
    pub weekly_prescriptions: Vec<RawRecord>,
}

/// Query parameters for the antibiogram endpoint. An empty organism is
/// omitted.
pub fn antibiogram_query(filter: &DashboardFilter) -> Vec<(&str, &str)> {
    let mut query = vec![
        ("district", filter.district.as_str()),
        ("test_name", filter.test_name.as_str()),
        ("view_mode", filter.view_mode.as_str()),
    ];
    if !filter.organism.trim().is_empty() {
        query.push(("organism", filter.organism.as_str()));
    }
    query
}

impl SourceClient {
    pub fn fetch_mis(&self, endpoint: MisEndpoint) -> Result<Vec<RawRecord>, SourceError> {
        self.get_json(endpoint.path(), &[])
    }

    pub fn fetch_options(&self, list: OptionList) -> Result<Vec<String>, SourceError> {
        self.get_json(list.path(), &[])
    }

    /// Fetch every MIS dataset. Fails on the first failing endpoint; no
    /// partial result is returned.
    pub fn fetch_asha_dashboard(&self) -> Result<AshaDashboardData, SourceError> {
        let data = AshaDashboardData {
            households_completed: self.fetch_mis(MisEndpoint::HouseholdsCompleted)?,
            households_sickness: self.fetch_mis(MisEndpoint::HouseholdsSickness)?,
            completed_courses: self.fetch_mis(MisEndpoint::CompletedCourses)?,
            medicine_self: self.fetch_mis(MisEndpoint::MedicineSelf)?,
            want_info: self.fetch_mis(MisEndpoint::WantInfo)?,
            symptom_categories: self.fetch_mis(MisEndpoint::SymptomCategories)?,
            weekly_prescriptions: self.fetch_mis(MisEndpoint::WeeklyPrescriptionsScanned)?,
        };
        info!(endpoints = MisEndpoint::ALL.len(), "ASHA dashboard data fetched");
        Ok(data)
    }
}

impl RecordSource for SourceClient {
    fn fetch_antibiogram(&self, filter: &DashboardFilter) -> Result<Vec<RawRecord>, SourceError> {
        self.get_json(ANTIBIOGRAM_PATH, &antibiogram_query(filter))
    }
}
