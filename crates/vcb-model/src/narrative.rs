//! Narrative sections: the crisis, its impact, and the solution.

use serde::{Deserialize, Serialize};

use crate::document::{Feature, Source, Stat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CrisisSection {
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub key_stats: Vec<Stat>,
    pub suicide_rates: Vec<SuicideRate>,
    pub school_shootings: Vec<ShootingCount>,
    pub common_thread: CommonThread,
    pub sources: Vec<Source>,
}

/// Youth suicide rate per 100,000, ages 10-24.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SuicideRate {
    pub year: u16,
    pub rate: f64,
}

/// School shootings with injuries or deaths in a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShootingCount {
    pub year: u16,
    pub incidents: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommonThread {
    pub title: String,
    pub description: String,
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImpactSection {
    pub title: String,
    pub subtitle: String,
    pub forces: Vec<Force>,
    pub settlements: Vec<Settlement>,
    pub mandate_adoption: Vec<MandateAdoption>,
    pub convergence: String,
    pub sources: Vec<Source>,
}

/// One of the converging pressures on districts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Force {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub key_points: Vec<String>,
}

/// A liability settlement, amount in US dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settlement {
    pub case_name: String,
    pub year: u16,
    pub amount: u64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Cumulative number of states with a threat assessment mandate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MandateAdoption {
    pub year: u16,
    pub states: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolutionSection {
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub mission: String,
    pub replaces: Vec<Replacement>,
    pub capabilities: Vec<CapabilityGroup>,
    pub sources: Vec<Source>,
}

/// A legacy tool and what the platform replaces it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Replacement {
    pub legacy: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CapabilityGroup {
    pub category: String,
    pub features: Vec<Feature>,
}
