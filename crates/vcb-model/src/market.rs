//! Market sizing and competitive landscape.

use serde::{Deserialize, Serialize};

use crate::document::{Feature, Source};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MarketSection {
    pub title: String,
    pub subtitle: String,
    /// Total addressable market, US dollars.
    pub tam: u64,
    pub sam: u64,
    pub som: u64,
    pub total_schools: u64,
    pub mandated_states: u32,
    pub mandated_schools: u64,
    pub buyers: Vec<Buyer>,
    pub budget_cycles: String,
    pub growth_drivers: Vec<Feature>,
    pub traction: Traction,
    pub why_now: Vec<String>,
    pub outlook: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Buyer {
    pub title: String,
    pub description: String,
    pub pain_points: Vec<String>,
}

/// Display-ready traction figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Traction {
    pub districts: String,
    pub students_served: String,
    pub states_served: String,
    pub pipeline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompetitionSection {
    pub title: String,
    pub subtitle: String,
    pub positioning: String,
    pub competitors: Vec<Competitor>,
    pub moat: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Competitor {
    pub name: String,
    pub url: String,
    pub focus: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub gap: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Quote {
    pub text: String,
    pub attribution: String,
}
