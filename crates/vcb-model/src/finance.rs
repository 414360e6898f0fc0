//! Financial projections and the funding ask.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FinancialsSection {
    pub title: String,
    pub subtitle: String,
    pub mrr: Vec<MrrPoint>,
    pub fiscal_years: Vec<FiscalYear>,
    pub milestones: Vec<Milestone>,
    pub profitability: Vec<ProfitPoint>,
}

/// Monthly recurring revenue, excluding onboarding fees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MrrPoint {
    pub month: String,
    pub month_number: u32,
    pub mrr: u64,
    pub contracts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FiscalYear {
    pub year: String,
    pub revenue: u64,
    /// Year-over-year revenue growth in percent. Absent for the first year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<f64>,
    pub contracts: u32,
    pub customers: u32,
    pub gross_margin: f64,
    pub net_income: i64,
    pub net_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Milestone {
    pub month: u32,
    pub label: String,
    pub description: String,
    pub metric: String,
    pub achieved: bool,
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfitPoint {
    pub month: String,
    pub month_number: u32,
    pub net_income: i64,
}

impl FinancialsSection {
    /// First projected month with positive net income.
    pub fn first_profitable_month(&self) -> Option<&ProfitPoint> {
        self.profitability.iter().find(|point| point.net_income > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FundingSection {
    pub vision: String,
    pub mission: String,
    /// Raise amount, US dollars.
    pub amount: u64,
    pub stage: String,
    pub use_of_funds: Vec<UseOfFunds>,
    pub opportunity: Opportunity,
    pub moral_case: String,
    pub financial_case: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UseOfFunds {
    pub category: String,
    pub amount: u64,
    pub percentage: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Opportunity {
    pub current: String,
    pub trend: String,
    pub future: String,
    pub advantage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
