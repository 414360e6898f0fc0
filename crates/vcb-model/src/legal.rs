//! Mandates, court cases and regulations.

use serde::{Deserialize, Serialize};

use crate::document::Source;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MandatesSection {
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub trendline: String,
    pub states: Vec<StateMandate>,
    pub california: Vec<CaliforniaBill>,
    pub federal_guidance: Vec<FederalGuidance>,
    pub sources: Vec<Source>,
}

/// A state statute requiring behavioral threat assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StateMandate {
    pub state: String,
    pub year: u16,
    pub statute: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub act: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaliforniaBill {
    pub bill: String,
    pub year: u16,
    pub status: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    pub url: String,
    pub requirements: Vec<RequirementMapping>,
}

/// A legal requirement and the product capability that satisfies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequirementMapping {
    pub requirement: String,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FederalGuidance {
    pub agency: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LegalSection {
    pub cases: Vec<LegalCase>,
    pub regulations: Vec<Regulation>,
}

/// Precedential weight of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    Precedential,
    NonPrecedential,
    Pending,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Precedential => "Precedential",
            Self::NonPrecedential => "Non-precedential",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LegalCase {
    pub id: String,
    pub title: String,
    pub jurisdiction: String,
    pub court: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub citation: String,
    pub status: CaseStatus,
    pub url: String,
    pub summary: String,
    pub relevance: String,
    pub tags: Vec<String>,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulationKind {
    Statute,
    Regulation,
    Guidance,
}

impl RegulationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Statute => "statute",
            Self::Regulation => "regulation",
            Self::Guidance => "guidance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulationStatus {
    InForce,
    Proposed,
    Sunset,
}

impl RegulationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InForce => "in-force",
            Self::Proposed => "proposed",
            Self::Sunset => "sunset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Regulation {
    pub id: String,
    pub title: String,
    pub jurisdiction: String,
    #[serde(rename = "type")]
    pub kind: RegulationKind,
    pub status: RegulationStatus,
    pub url: String,
    pub summary: String,
    pub implications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
}
