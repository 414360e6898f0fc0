//! Command implementations. Each returns data; printing lives in `summary`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use vcb_core::splash::{FileSessionStore, INTRO_SEEN_KEY, SessionStore, session_file_path};
use vcb_core::{DossierTab, SearchQuery, filter_records};
use vcb_model::{
    ConfigurationError, ContentDocument, Problem, SearchableRecord, content, load_from_path,
};
use vcb_report::{
    DOSSIER_FILE_NAME, NEWSLETTER_FILE_NAME, render_dossier, render_newsletter, render_text,
    snapshot, write_pdf,
};

use crate::cli::{CollectionArg, DossierArgs, NewsletterArgs, SearchArgs, ValidateArgs};

const EMBEDDED_SOURCE: &str = "embedded";

/// Record count of one collection in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCount {
    pub section: &'static str,
    pub collection: &'static str,
    pub records: usize,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub source: String,
    pub sections: Vec<SectionCount>,
    pub problems: Vec<Problem>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

/// A search match flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRow {
    pub id: &'static str,
    pub label: &'static str,
    pub initial: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStatus {
    Seen,
    NotSeen,
}

/// The embedded document, or the one at `path`.
pub fn load_content(
    path: Option<&Path>,
) -> Result<Cow<'static, ContentDocument>, ConfigurationError> {
    match path {
        Some(path) => load_from_path(path).map(Cow::Owned),
        None => content().map(Cow::Borrowed),
    }
}

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(
        || EMBEDDED_SOURCE.to_string(),
        |path| path.display().to_string(),
    )
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let path = args.content.as_deref();
    let source = source_label(path);
    match load_content(path) {
        Ok(document) => {
            info!(source = %source, "Content is valid");
            Ok(ValidationReport {
                source,
                sections: section_counts(&document),
                problems: Vec::new(),
            })
        }
        Err(ConfigurationError::Invalid { problems }) => Ok(ValidationReport {
            source,
            sections: Vec::new(),
            problems,
        }),
        Err(err) => Err(err).with_context(|| format!("load content from {source}")),
    }
}

pub fn section_counts(document: &ContentDocument) -> Vec<SectionCount> {
    let row = |section, collection, records| SectionCount {
        section,
        collection,
        records,
    };
    vec![
        row("crisis", "key stats", document.crisis.key_stats.len()),
        row("crisis", "suicide rates", document.crisis.suicide_rates.len()),
        row("crisis", "school shootings", document.crisis.school_shootings.len()),
        row("impact", "forces", document.impact.forces.len()),
        row("impact", "settlements", document.impact.settlements.len()),
        row("solution", "capabilities", document.solution.capabilities.len()),
        row("mandates", "states", document.mandates.states.len()),
        row("mandates", "california bills", document.mandates.california.len()),
        row("mandates", "federal guidance", document.mandates.federal_guidance.len()),
        row("legal", "cases", document.legal.cases.len()),
        row("legal", "regulations", document.legal.regulations.len()),
        row("market", "buyers", document.market.buyers.len()),
        row("competition", "competitors", document.competition.competitors.len()),
        row("financials", "mrr points", document.financials.mrr.len()),
        row("financials", "profitability months", document.financials.profitability.len()),
        row("funding", "use of funds", document.funding.use_of_funds.len()),
        row("appendix", "links", document.appendix.len()),
    ]
}

pub fn run_search(args: &SearchArgs) -> Result<Vec<SearchHit>> {
    let document = load_content(args.content.as_deref()).context("load content")?;
    let query = SearchQuery::parse(&args.query);
    let hits = search_document(&document, &query, args.collection);
    debug!(query = query.as_str(), hits = hits.len(), "Search finished");
    Ok(hits)
}

pub fn search_document(
    document: &ContentDocument,
    query: &SearchQuery,
    collection: CollectionArg,
) -> Vec<SearchHit> {
    match collection {
        CollectionArg::Cases => hits(query, &document.legal.cases, |case| SearchHit {
            id: case.id.clone(),
            title: case.title.clone(),
            detail: format!("{} · {} · {}", case.court, case.date, case.status.label()),
        }),
        CollectionArg::Regulations => hits(query, &document.legal.regulations, |regulation| {
            SearchHit {
                id: regulation.id.clone(),
                title: regulation.title.clone(),
                detail: format!(
                    "{} · {} · {}",
                    regulation.jurisdiction,
                    regulation.kind.label(),
                    regulation.status.label()
                ),
            }
        }),
        CollectionArg::Mandates => hits(query, &document.mandates.states, |mandate| SearchHit {
            id: mandate.state.clone(),
            title: mandate
                .act
                .clone()
                .unwrap_or_else(|| mandate.statute.clone()),
            detail: format!("{} · {}", mandate.year, mandate.statute),
        }),
        CollectionArg::Competitors => {
            hits(query, &document.competition.competitors, |competitor| SearchHit {
                id: competitor.name.clone(),
                title: competitor.focus.clone(),
                detail: competitor.gap.clone(),
            })
        }
    }
}

fn hits<T: SearchableRecord>(
    query: &SearchQuery,
    records: &[T],
    to_hit: impl Fn(&T) -> SearchHit,
) -> Vec<SearchHit> {
    filter_records(query, records)
        .into_iter()
        .map(to_hit)
        .collect()
}

pub fn tab_rows() -> Vec<TabRow> {
    DossierTab::all()
        .iter()
        .map(|&tab| TabRow {
            id: tab.id(),
            label: tab.label(),
            initial: tab == DossierTab::INITIAL,
        })
        .collect()
}

/// What `newsletter` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterOutput {
    Written(PathBuf),
    Preview(String),
}

pub fn run_newsletter(args: &NewsletterArgs) -> Result<NewsletterOutput> {
    if args.preview {
        let snapshot = snapshot().context("load newsletter snapshot")?;
        return Ok(NewsletterOutput::Preview(render_text(snapshot)));
    }
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(NEWSLETTER_FILE_NAME));
    let bytes = render_newsletter().context("render newsletter")?;
    write_pdf(&path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "Newsletter written");
    Ok(NewsletterOutput::Written(path))
}

/// Tabs named by `ids`, or every tab when none are given.
pub fn resolve_tabs(ids: &[String]) -> Result<Vec<DossierTab>> {
    if ids.is_empty() {
        return Ok(DossierTab::all().to_vec());
    }
    let mut tabs = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(tab) = DossierTab::from_id(id.trim()) else {
            let known: Vec<&str> = DossierTab::all().iter().map(|tab| tab.id()).collect();
            bail!("unknown tab '{id}' (expected one of: {})", known.join(", "));
        };
        if !tabs.contains(&tab) {
            tabs.push(tab);
        }
    }
    Ok(tabs)
}

/// Prints the selected tabs to a PDF. Returns the written path.
pub fn run_dossier(args: &DossierArgs) -> Result<PathBuf> {
    let tabs = resolve_tabs(&args.tabs)?;
    let document = load_content(args.content.as_deref()).context("load content")?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DOSSIER_FILE_NAME));
    let bytes = render_dossier(&document, &tabs).context("render dossier")?;
    write_pdf(&path, &bytes)?;
    info!(path = %path.display(), tabs = tabs.len(), bytes = bytes.len(), "Dossier written");
    Ok(path)
}

/// The session store the desktop app reads, opened from disk.
pub fn open_session_store() -> Result<FileSessionStore> {
    let path = session_file_path()
        .context("this platform has no per-session runtime directory")?;
    FileSessionStore::open(&path)
        .with_context(|| format!("open session file {}", path.display()))
}

pub fn intro_status(store: &impl SessionStore) -> IntroStatus {
    if store.get(INTRO_SEEN_KEY).is_some() {
        IntroStatus::Seen
    } else {
        IntroStatus::NotSeen
    }
}

/// Clears the flag. Returns whether it was set.
pub fn intro_reset(store: &mut impl SessionStore) -> Result<bool> {
    let was_set = intro_status(store) == IntroStatus::Seen;
    store
        .remove(INTRO_SEEN_KEY)
        .context("clear intro flag")?;
    debug!(was_set, "Intro flag cleared");
    Ok(was_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcb_core::MemorySessionStore;

    #[test]
    fn section_counts_match_embedded_document() {
        let document = content().unwrap();
        let counts = section_counts(document);
        let cases = counts
            .iter()
            .find(|row| row.collection == "cases")
            .unwrap();
        assert_eq!(cases.records, 4);
        assert_eq!(counts.len(), 17);
    }

    #[test]
    fn reset_reports_previous_state() {
        let mut store = MemorySessionStore::with(INTRO_SEEN_KEY, "1");
        assert_eq!(intro_status(&store), IntroStatus::Seen);
        assert!(intro_reset(&mut store).unwrap());
        assert_eq!(intro_status(&store), IntroStatus::NotSeen);
        assert!(!intro_reset(&mut store).unwrap());
    }

    #[test]
    fn tabs_default_to_all_and_drop_repeats() {
        assert_eq!(resolve_tabs(&[]).unwrap(), DossierTab::all());
        let ids = ["legal".to_string(), "crisis".to_string(), "legal".to_string()];
        assert_eq!(
            resolve_tabs(&ids).unwrap(),
            [DossierTab::Legal, DossierTab::Crisis]
        );
    }

    #[test]
    fn unknown_tab_lists_the_known_ids() {
        let error = resolve_tabs(&["pricing".to_string()]).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("'pricing'"), "{message}");
        assert!(message.contains("appendix"), "{message}");
    }

    #[test]
    fn initial_tab_is_marked_once() {
        let rows = tab_rows();
        assert_eq!(rows.iter().filter(|row| row.initial).count(), 1);
        assert_eq!(rows[0].id, "crisis");
    }
}
