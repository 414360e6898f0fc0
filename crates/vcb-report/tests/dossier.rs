//! Printed dossier end to end.

use vcb_core::DossierTab;
use vcb_report::{DOSSIER_FILE_NAME, render_dossier, write_pdf};

#[test]
fn full_dossier_renders_to_pdf() {
    let doc = vcb_model::content().unwrap();
    let bytes = render_dossier(doc, DossierTab::all()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DOSSIER_FILE_NAME);
    write_pdf(&path, &bytes).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn active_tab_renders_alone() {
    let doc = vcb_model::content().unwrap();
    let one = render_dossier(doc, &[DossierTab::Market]).unwrap();
    let all = render_dossier(doc, DossierTab::all()).unwrap();
    assert!(one.starts_with(b"%PDF"));
    assert!(one.len() < all.len());
}
