//! Command behavior against the embedded content and temporary files.

use std::fs;

use vcb_cli::cli::{CollectionArg, DossierArgs, NewsletterArgs, SearchArgs, ValidateArgs};
use vcb_cli::commands::{
    NewsletterOutput, run_dossier, run_newsletter, run_search, run_validate, search_document,
    tab_rows,
};
use vcb_cli::summary::tab_lines;
use vcb_core::SearchQuery;
use vcb_model::embedded::CONTENT_JSON;

fn search(query: &str, collection: CollectionArg) -> Vec<String> {
    let args = SearchArgs {
        query: query.to_string(),
        collection,
        content: None,
    };
    run_search(&args)
        .unwrap()
        .into_iter()
        .map(|hit| hit.id)
        .collect()
}

#[test]
fn tabs_listing_marks_the_initial_tab() {
    insta::assert_snapshot!(tab_lines(&tab_rows()), @r"
    * crisis       The Crisis
      impact       Impact
      solution     The Solution
      mandates     Mandates
      legal        Legal Cases
      market       Market
      competition  Why We Win
      financials   Financials
      funding      The Vision
      appendix     Appendix
    ");
}

#[test]
fn search_cases_by_tag() {
    let ids = search("Settlement", CollectionArg::Cases);
    insta::assert_snapshot!(ids.join("\n"), @r"
    fl-parkland-2018-003
    wa-marysville-2014-004
    ");
}

#[test]
fn search_each_collection() {
    assert_eq!(search("2023", CollectionArg::Mandates), ["Vermont", "Washington"]);
    assert_eq!(search("monitoring", CollectionArg::Competitors), ["Gaggle"]);
    assert_eq!(search("proposed", CollectionArg::Regulations), ["ca-sb1241"]);
}

#[test]
fn search_without_matches_is_empty_not_an_error() {
    assert!(search("zzz", CollectionArg::Cases).is_empty());
}

#[test]
fn blank_query_returns_whole_collection() {
    let document = vcb_model::content().unwrap();
    let hits = search_document(document, &SearchQuery::parse("   "), CollectionArg::Mandates);
    assert_eq!(hits.len(), document.mandates.states.len());
    assert_eq!(hits[0].id, "Virginia");
}

#[test]
fn validate_embedded_content() {
    let report = run_validate(&ValidateArgs { content: None }).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.source, "embedded");
    assert!(report.sections.iter().any(|row| row.collection == "competitors"));
}

#[test]
fn validate_lists_problems_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");
    let broken = CONTENT_JSON.replace(
        "\"https://4studentlives.com/glossary\"",
        "\"ftp://4studentlives.com/glossary\"",
    );
    fs::write(&path, broken).unwrap();

    let report = run_validate(&ValidateArgs {
        content: Some(path),
    })
    .unwrap();

    assert!(!report.is_valid());
    assert!(report.sections.is_empty());
    assert!(
        report
            .problems
            .iter()
            .any(|problem| problem.path == "appendix[0].url")
    );
}

#[test]
fn validate_reports_unreadable_file_as_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_validate(&ValidateArgs {
        content: Some(dir.path().join("missing.json")),
    });
    assert!(result.is_err());
}

#[test]
fn newsletter_writes_pdf_to_requested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("update.pdf");
    let output = run_newsletter(&NewsletterArgs {
        output: Some(path.clone()),
        preview: false,
    })
    .unwrap();
    assert_eq!(output, NewsletterOutput::Written(path.clone()));
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn newsletter_preview_is_text() {
    let output = run_newsletter(&NewsletterArgs {
        output: None,
        preview: true,
    })
    .unwrap();
    let NewsletterOutput::Preview(text) = output else {
        panic!("expected preview");
    };
    assert!(text.contains("Looking Ahead"));
}

#[test]
fn dossier_prints_selected_tabs_to_requested_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legal.pdf");
    let written = run_dossier(&DossierArgs {
        output: Some(path.clone()),
        tabs: vec!["legal".to_string()],
        content: None,
    })
    .unwrap();
    assert_eq!(written, path);
    let legal = fs::read(&path).unwrap();
    assert!(legal.starts_with(b"%PDF"));

    let all = dir.path().join("all.pdf");
    run_dossier(&DossierArgs {
        output: Some(all.clone()),
        tabs: Vec::new(),
        content: None,
    })
    .unwrap();
    assert!(fs::read(&all).unwrap().len() > legal.len());
}

#[test]
fn dossier_rejects_unknown_tab_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.pdf");
    let result = run_dossier(&DossierArgs {
        output: Some(path.clone()),
        tabs: vec!["pricing".to_string()],
        content: None,
    });
    assert!(result.is_err());
    assert!(!path.exists());
}
