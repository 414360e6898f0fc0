//! One view per dossier tab.

mod finance;
mod legal;
mod market;
mod narrative;

use egui::Ui;
use vcb_core::DossierTab;

use crate::state::{AppState, SearchPanel};

/// Renders the active tab's panel, and only that panel.
pub fn show_active(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        content,
        tabs,
        search,
        case_dialog,
        competitor_dialog,
        ..
    } = state;
    let content = *content;

    tabs.render_active(|tab| match tab {
        DossierTab::Crisis => narrative::crisis(ui, &content.crisis),
        DossierTab::Impact => narrative::impact(ui, &content.impact),
        DossierTab::Solution => narrative::solution(ui, &content.solution),
        DossierTab::Mandates => legal::mandates(
            ui,
            &content.mandates,
            search.text_mut(SearchPanel::Mandates),
        ),
        DossierTab::Legal => legal::cases(
            ui,
            &content.legal,
            search.text_mut(SearchPanel::Cases),
            case_dialog,
        ),
        DossierTab::Market => market::market(ui, &content.market),
        DossierTab::Competition => market::competition(
            ui,
            &content.competition,
            search.text_mut(SearchPanel::Competitors),
            competitor_dialog,
        ),
        DossierTab::Financials => finance::financials(ui, &content.financials),
        DossierTab::Funding => finance::funding(ui, &content.funding),
        DossierTab::Appendix => finance::appendix(ui, &content.appendix),
    });
}
