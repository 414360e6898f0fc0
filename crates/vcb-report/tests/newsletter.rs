//! End-to-end newsletter generation.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use vcb_report::{
    ExportPhase, NEWSLETTER_FILE_NAME, NewsletterExport, ReportError, compose, render_pdf,
    snapshot, write_pdf,
};

const WAIT: Duration = Duration::from_secs(30);

fn count_pages(pdf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(pdf).replace("/Type /", "/Type/");
    text.matches("/Type/Page").count() - text.matches("/Type/Pages").count()
}

#[test]
fn rendered_newsletter_is_a_two_page_pdf() {
    let layout = compose(snapshot().unwrap());
    let bytes = render_pdf(&layout).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(layout.pages.len(), 2);
    assert_eq!(count_pages(&bytes), 2);
}

#[test]
fn export_reaches_ready() {
    let mut export = NewsletterExport::new();
    assert_eq!(export.phase(), &ExportPhase::NotReady);
    assert!(!export.is_loading());

    assert!(export.start());
    assert!(export.is_loading());
    assert!(!export.start(), "second start while preparing is ignored");

    export.wait(WAIT);
    assert!(export.is_ready());
    assert!(!export.is_loading());
    assert!(export.bytes().unwrap().starts_with(b"%PDF"));
}

#[test]
fn failing_renderer_surfaces_failed_state() {
    let mut export = NewsletterExport::with_renderer(Arc::new(|| {
        Err(ReportError::Pdf {
            message: "font table missing".to_string(),
        })
    }));
    export.start();
    export.wait(WAIT);
    assert!(!export.is_loading());
    assert!(!export.is_ready());
    assert!(export.error().unwrap().contains("font table missing"));

    // The user may re-trigger after a failure.
    assert!(export.start());
    assert!(export.is_loading());
}

#[test]
fn panicking_renderer_does_not_leave_export_loading() {
    let mut export = NewsletterExport::with_renderer(Arc::new(|| -> vcb_report::Result<Vec<u8>> {
        panic!("renderer crashed")
    }));
    export.start();
    export.wait(WAIT);
    assert!(matches!(export.phase(), ExportPhase::Failed(_)));
}

#[test]
fn poll_picks_up_result_from_worker() {
    let (done_sender, done_receiver) = std::sync::mpsc::channel();
    let mut export = NewsletterExport::with_renderer(Arc::new(|| Ok(b"%PDF-1.3".to_vec())));
    export.start_with(move || {
        let _ = done_sender.send(());
    });
    done_receiver.recv_timeout(WAIT).unwrap();
    assert!(export.poll());
    assert_eq!(export.bytes(), Some(&b"%PDF-1.3"[..]));
    assert!(!export.poll());
}

#[test]
fn write_pdf_uses_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NEWSLETTER_FILE_NAME);
    write_pdf(&path, b"%PDF-1.3").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.3");
}

#[test]
fn panicking_renderer_fails_and_still_wakes_the_caller() {
    let mut export = NewsletterExport::with_renderer(Arc::new(|| -> vcb_report::Result<Vec<u8>> {
        panic!("layout bug")
    }));
    let (woke, wake_signal) = mpsc::channel();
    assert!(export.start_with(move || {
        let _ = woke.send(());
    }));

    wake_signal
        .recv_timeout(WAIT)
        .expect("on_done runs after a panic");
    assert!(export.poll());
    assert!(!export.is_loading());
    assert!(export.error().unwrap().contains("panicked"));
}
