//! Content model for the VC Brief investor dossier.
//!
//! - [`document`]: the root [`ContentDocument`] and shared record types
//! - [`narrative`], [`legal`], [`market`], [`finance`]: per-section schema
//! - [`validate`]: load-time rules, all problems collected at once
//! - [`store`]: the embedded document behind a process-wide `OnceLock`
//! - [`searchable`]: the text each searchable record exposes
//!
//! # Example
//!
//! ```rust,ignore
//! let doc = vcb_model::content()?;
//! println!("{} cases", doc.legal.cases.len());
//! ```

pub mod document;
pub mod embedded;
pub mod error;
pub mod finance;
pub mod legal;
pub mod market;
pub mod narrative;
pub mod searchable;
pub mod store;
pub mod validate;

pub use document::{AppendixLink, Brand, ContentDocument, Feature, Source, Stat, Trend};
pub use error::{ConfigurationError, Problem, Result};
pub use finance::{
    Contact, FinancialsSection, FiscalYear, FundingSection, Milestone, MrrPoint, Opportunity,
    ProfitPoint, UseOfFunds,
};
pub use legal::{
    CaliforniaBill, CaseStatus, FederalGuidance, LegalCase, LegalSection, MandatesSection,
    Regulation, RegulationKind, RegulationStatus, RequirementMapping, StateMandate,
};
pub use market::{Buyer, CompetitionSection, Competitor, MarketSection, Quote, Traction};
pub use narrative::{
    CapabilityGroup, CommonThread, CrisisSection, Force, ImpactSection, MandateAdoption,
    Replacement, Settlement, ShootingCount, SolutionSection, SuicideRate,
};
pub use searchable::SearchableRecord;
pub use store::{content, from_json_str, load_from_path};
pub use validate::{Problems, validate_document};
