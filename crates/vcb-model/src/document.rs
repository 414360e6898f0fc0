//! Root content document and the small types shared by every section.

use serde::{Deserialize, Serialize};

use crate::finance::{FinancialsSection, FundingSection};
use crate::legal::{LegalSection, MandatesSection};
use crate::market::{CompetitionSection, MarketSection};
use crate::narrative::{CrisisSection, ImpactSection, SolutionSection};

/// The whole dossier. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentDocument {
    pub brand: Brand,
    pub crisis: CrisisSection,
    pub impact: ImpactSection,
    pub solution: SolutionSection,
    pub mandates: MandatesSection,
    pub legal: LegalSection,
    pub market: MarketSection,
    pub competition: CompetitionSection,
    pub financials: FinancialsSection,
    pub funding: FundingSection,
    pub appendix: Vec<AppendixLink>,
}

/// Company identity shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Brand {
    pub company: String,
    pub product: String,
    pub tagline: String,
    pub confidentiality: String,
    pub footer_note: String,
}

/// A cited source. Some citations are offline notes without a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Source {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Direction a headline metric is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// A headline number rendered as a stat card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

/// A titled external link in the appendix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppendixLink {
    pub title: String,
    pub url: String,
}

/// A title/description pair used by several sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub description: String,
}
