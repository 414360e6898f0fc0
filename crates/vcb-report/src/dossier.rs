//! Printable rendition of the dossier panels.
//!
//! Each selected tab starts on a fresh page. Text flows onto further pages
//! as needed, and every page carries the brand footer.

use vcb_core::{
    DossierTab, format_currency, format_currency_compact, format_number, format_percentage,
    format_signed_percentage,
};
use vcb_model::{ContentDocument, Source};

use crate::error::Result;
use crate::layout::{
    Align, BODY, CONTENT_WIDTH, DocumentLayout, FOOTER_Y, FontWeight, MARGIN, Page, PageWriter,
    Style, style, wrap_runs,
};
use crate::palette;
use crate::pdf::render_pdf;

/// Default download name of the printed dossier.
pub const DOSSIER_FILE_NAME: &str = "4SL_VC_Brief_Dossier.pdf";

/// Lowest baseline before the footer rule.
const BOTTOM: f32 = FOOTER_Y - 24.0;

const SUBTITLE: Style = style(10.0, FontWeight::Regular, palette::GRAY);
const HEADING: Style = style(10.5, FontWeight::Bold, palette::PRIMARY);
const BULLET: Style = style(8.5, FontWeight::Regular, palette::TEXT);
const SOURCE: Style = style(7.0, FontWeight::Regular, palette::GRAY);

type Runs<'a> = [(&'a str, FontWeight)];

/// Writes top-down across as many pages as the content needs.
struct FlowWriter {
    done: Vec<Page>,
    current: PageWriter,
}

impl FlowWriter {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: PageWriter::new(),
        }
    }

    fn is_blank(&self) -> bool {
        self.current.page.blocks.is_empty()
    }

    fn new_page(&mut self) {
        let full = std::mem::replace(&mut self.current, PageWriter::new());
        self.done.push(full.page);
    }

    /// Breaks the page unless `height` more points fit above the footer.
    fn reserve(&mut self, height: f32) {
        if self.current.y + height > BOTTOM && !self.is_blank() {
            self.new_page();
        }
    }

    fn lines(&mut self, x: f32, width: f32, body: Style, runs: &Runs<'_>) {
        let leading = body.size * 1.4;
        for line in wrap_runs(runs, width, body.size) {
            self.reserve(leading);
            self.current.y += leading;
            for span in line {
                let run = style(body.size, span.weight, body.color);
                let y = self.current.y;
                self.current.text(x + span.offset, y, run, Align::Left, &span.text);
            }
        }
    }

    fn paragraph(&mut self, text: &str) {
        self.lines(MARGIN, CONTENT_WIDTH, BODY, &[(text, FontWeight::Regular)]);
        self.current.y += 4.0;
    }

    fn bullet(&mut self, runs: &Runs<'_>) {
        self.reserve(BULLET.size * 2.0);
        self.current.y += 3.0;
        let mark_y = self.current.y + BULLET.size * 1.4 - 4.5;
        self.current.rect(MARGIN + 2.0, mark_y, 3.0, 3.0, palette::ACCENT);
        self.lines(MARGIN + 12.0, CONTENT_WIDTH - 12.0, BULLET, runs);
    }

    fn item(&mut self, text: &str) {
        self.bullet(&[(text, FontWeight::Regular)]);
    }

    fn lead_item(&mut self, lead: &str, text: &str) {
        let lead = format!("{lead}:");
        self.bullet(&[(lead.as_str(), FontWeight::Bold), (text, FontWeight::Regular)]);
    }

    fn heading(&mut self, title: &str) {
        self.reserve(48.0);
        self.current.y += 16.0;
        let y = self.current.y;
        self.current.text(MARGIN, y, HEADING, Align::Left, title);
        self.current.y += 2.0;
    }

    /// Tab label, section title and subtitle.
    fn section(&mut self, tab: DossierTab, title: &str, subtitle: &str) {
        let label = style(8.0, FontWeight::Bold, palette::ACCENT);
        let y = self.current.y + 8.0;
        self.current.text(MARGIN, y, label, Align::Left, &tab.label().to_uppercase());
        self.current.y = y;
        self.current.section_title(title);
        if !subtitle.is_empty() {
            self.lines(MARGIN, CONTENT_WIDTH, SUBTITLE, &[(subtitle, FontWeight::Regular)]);
        }
        self.current.y += 6.0;
        let y = self.current.y;
        self.current.rule(y, 1.0, palette::ACCENT);
        self.current.y += 4.0;
    }

    fn sources(&mut self, sources: &[Source]) {
        if sources.is_empty() {
            return;
        }
        self.heading("Sources");
        for source in sources {
            let detail = source
                .url
                .as_deref()
                .or(source.note.as_deref())
                .unwrap_or_default();
            let text = if detail.is_empty() {
                source.title.clone()
            } else {
                format!("{} ({detail})", source.title)
            };
            self.lines(MARGIN, CONTENT_WIDTH, SOURCE, &[(text.as_str(), FontWeight::Regular)]);
        }
    }

    fn finish(mut self, footer: &str) -> Vec<Page> {
        if !self.is_blank() || self.done.is_empty() {
            self.new_page();
        }
        let count = self.done.len();
        self.done
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                let mut writer = PageWriter { page, y: 0.0 };
                writer.footer(footer, index + 1, count);
                writer.page
            })
            .collect()
    }
}

fn cover(writer: &mut FlowWriter, doc: &ContentDocument) {
    let brand = &doc.brand;
    let company = style(20.0, FontWeight::Bold, palette::PRIMARY);
    let product = style(14.0, FontWeight::Bold, palette::SECONDARY);
    let top = writer.current.y;
    writer.current.text(MARGIN, top + 20.0, company, Align::Left, &brand.company);
    let right = MARGIN + CONTENT_WIDTH;
    writer.current.text(right, top + 14.0, product, Align::Right, &brand.product);
    writer.current.text(right, top + 28.0, SUBTITLE, Align::Right, &brand.confidentiality);
    writer.current.y = top + 34.0;
    let tagline = [(brand.tagline.as_str(), FontWeight::Regular)];
    writer.lines(MARGIN, CONTENT_WIDTH, SUBTITLE, &tagline);
    writer.current.y += 12.0;
    let y = writer.current.y;
    writer.current.rule(y, 2.0, palette::ACCENT);
}

fn series<T>(items: &[T], point: impl Fn(&T) -> String) -> String {
    items.iter().map(point).collect::<Vec<_>>().join(", ")
}

fn crisis(writer: &mut FlowWriter, doc: &ContentDocument) {
    let crisis = &doc.crisis;
    writer.section(DossierTab::Crisis, &crisis.title, &crisis.subtitle);
    writer.paragraph(&crisis.overview);
    writer.heading("Key statistics");
    for stat in &crisis.key_stats {
        let text = match &stat.description {
            Some(description) => format!("{} ({description})", stat.label),
            None => stat.label.clone(),
        };
        writer.lead_item(&stat.value, &text);
    }
    writer.heading("Youth suicide rate per 100k");
    writer.paragraph(&series(&crisis.suicide_rates, |point| {
        format!("{} {:.1}", point.year, point.rate)
    }));
    writer.heading("K-12 shooting incidents");
    writer.paragraph(&series(&crisis.school_shootings, |point| {
        format!("{} {}", point.year, format_number(f64::from(point.incidents)))
    }));
    let thread = &crisis.common_thread;
    writer.heading(&thread.title);
    writer.paragraph(&thread.description);
    writer.paragraph(&thread.result);
    writer.sources(&crisis.sources);
}

fn impact(writer: &mut FlowWriter, doc: &ContentDocument) {
    let impact = &doc.impact;
    writer.section(DossierTab::Impact, &impact.title, &impact.subtitle);
    for force in &impact.forces {
        writer.heading(&format!("{}: {}", force.title, force.subtitle));
        writer.paragraph(&force.description);
        for point in &force.key_points {
            writer.item(point);
        }
    }
    writer.heading("Settlements");
    for settlement in &impact.settlements {
        let lead = format!("{} ({})", settlement.case_name, settlement.year);
        let mut text = format!(
            "{}, {}",
            format_currency(settlement.amount as f64),
            settlement.location
        );
        if let Some(note) = &settlement.note {
            text.push_str(&format!(". {note}"));
        }
        writer.lead_item(&lead, &text);
    }
    writer.heading("States mandating threat assessment");
    writer.paragraph(&series(&impact.mandate_adoption, |point| {
        format!("{} {} ({})", point.year, point.states, point.label)
    }));
    writer.paragraph(&impact.convergence);
    writer.sources(&impact.sources);
}

fn solution(writer: &mut FlowWriter, doc: &ContentDocument) {
    let solution = &doc.solution;
    writer.section(DossierTab::Solution, &solution.title, &solution.subtitle);
    writer.paragraph(&solution.overview);
    writer.paragraph(&solution.mission);
    writer.heading("What it replaces");
    for replacement in &solution.replaces {
        writer.lead_item(&replacement.legacy, &replacement.replacement);
    }
    for group in &solution.capabilities {
        writer.heading(&group.category);
        for feature in &group.features {
            writer.lead_item(&feature.title, &feature.description);
        }
    }
    writer.sources(&solution.sources);
}

fn mandates(writer: &mut FlowWriter, doc: &ContentDocument) {
    let mandates = &doc.mandates;
    writer.section(DossierTab::Mandates, &mandates.title, &mandates.subtitle);
    writer.paragraph(&mandates.overview);
    writer.paragraph(&mandates.trendline);
    writer.heading("State mandates");
    for mandate in &mandates.states {
        let lead = format!("{} ({}, {})", mandate.state, mandate.year, mandate.statute);
        let text = mandate
            .act
            .as_deref()
            .or(mandate.significance.as_deref())
            .unwrap_or_default();
        writer.lead_item(&lead, text);
    }
    for bill in &mandates.california {
        writer.heading(&format!("{} ({}), {}", bill.bill, bill.year, bill.status));
        writer.paragraph(&bill.summary);
        if let Some(deadline) = &bill.deadline {
            writer.lead_item("Deadline", deadline);
        }
        for mapping in &bill.requirements {
            writer.lead_item(&mapping.requirement, &mapping.solution);
        }
    }
    writer.heading("Federal guidance");
    for guidance in &mandates.federal_guidance {
        let lead = format!("{}: {}", guidance.agency, guidance.title);
        writer.lead_item(&lead, &guidance.description);
    }
    writer.sources(&mandates.sources);
}

fn legal(writer: &mut FlowWriter, doc: &ContentDocument) {
    let legal = &doc.legal;
    writer.section(DossierTab::Legal, DossierTab::Legal.label(), "");
    for case in &legal.cases {
        writer.heading(&case.title);
        let meta = format!(
            "{} | {} | {} | {}",
            case.jurisdiction,
            case.court,
            case.date,
            case.status.label()
        );
        writer.lines(MARGIN, CONTENT_WIDTH, SOURCE, &[(meta.as_str(), FontWeight::Regular)]);
        writer.paragraph(&case.summary);
        writer.lead_item("Why it matters", &case.relevance);
    }
    writer.heading("Regulations");
    for regulation in &legal.regulations {
        let lead = format!(
            "{} ({}, {} {})",
            regulation.title,
            regulation.jurisdiction,
            regulation.status.label(),
            regulation.kind.label()
        );
        writer.lead_item(&lead, &regulation.summary);
    }
}

fn market(writer: &mut FlowWriter, doc: &ContentDocument) {
    let market = &doc.market;
    writer.section(DossierTab::Market, &market.title, &market.subtitle);
    writer.heading("Market size");
    writer.lead_item("TAM", &format_currency_compact(market.tam as f64));
    writer.lead_item("SAM", &format_currency_compact(market.sam as f64));
    writer.lead_item("SOM", &format_currency_compact(market.som as f64));
    writer.lead_item(
        "Mandated states",
        &format!(
            "{} covering {} of {} schools",
            market.mandated_states,
            format_number(market.mandated_schools as f64),
            format_number(market.total_schools as f64)
        ),
    );
    writer.heading("Buyers");
    for buyer in &market.buyers {
        writer.lead_item(&buyer.title, &buyer.description);
    }
    writer.paragraph(&market.budget_cycles);
    writer.heading("Traction");
    let traction = &market.traction;
    writer.lead_item("Districts", &traction.districts);
    writer.lead_item("Students served", &traction.students_served);
    writer.lead_item("States served", &traction.states_served);
    writer.lead_item("Pipeline", &traction.pipeline);
    writer.heading("Why now");
    for reason in &market.why_now {
        writer.item(reason);
    }
    writer.heading("Growth drivers");
    for driver in &market.growth_drivers {
        writer.lead_item(&driver.title, &driver.description);
    }
    writer.paragraph(&market.outlook);
}

fn competition(writer: &mut FlowWriter, doc: &ContentDocument) {
    let competition = &doc.competition;
    writer.section(DossierTab::Competition, &competition.title, &competition.subtitle);
    writer.paragraph(&competition.positioning);
    for competitor in &competition.competitors {
        writer.heading(&format!("{}: {}", competitor.name, competitor.focus));
        writer.lead_item("Strengths", &competitor.strengths.join("; "));
        writer.lead_item("Weaknesses", &competitor.weaknesses.join("; "));
        writer.lead_item("Gap", &competitor.gap);
    }
    writer.heading("Our moat");
    for point in &competition.moat {
        writer.item(point);
    }
    if let Some(quote) = &competition.quote {
        writer.paragraph(&format!("\"{}\" - {}", quote.text, quote.attribution));
    }
    writer.sources(&competition.sources);
}

fn financials(writer: &mut FlowWriter, doc: &ContentDocument) {
    let financials = &doc.financials;
    writer.section(DossierTab::Financials, &financials.title, &financials.subtitle);
    writer.heading("Monthly recurring revenue");
    writer.paragraph(&series(&financials.mrr, |point| {
        format!("{} {}", point.month, format_currency_compact(point.mrr as f64))
    }));
    writer.heading("Fiscal years");
    for year in &financials.fiscal_years {
        let mut text = format!(
            "revenue {}, {} customers, gross margin {}, net income {}",
            format_currency(year.revenue as f64),
            year.customers,
            format_percentage(year.gross_margin, 1),
            format_currency(year.net_income as f64)
        );
        if let Some(growth) = year.growth {
            text.push_str(&format!(", growth {}", format_signed_percentage(growth)));
        }
        writer.lead_item(&year.year, &text);
    }
    writer.heading("Milestones");
    for milestone in &financials.milestones {
        let lead = format!("Month {}: {}", milestone.month, milestone.label);
        let text = format!("{} ({})", milestone.description, milestone.metric);
        writer.lead_item(&lead, &text);
    }
    if let Some(first) = financials.profitability.iter().find(|point| point.net_income > 0) {
        writer.lead_item("First profitable month", &first.month);
    }
}

fn funding(writer: &mut FlowWriter, doc: &ContentDocument) {
    let funding = &doc.funding;
    let raise = format!("{} {}", format_currency_compact(funding.amount as f64), funding.stage);
    writer.section(DossierTab::Funding, DossierTab::Funding.label(), &raise);
    writer.paragraph(&funding.vision);
    writer.paragraph(&funding.mission);
    writer.heading("Use of funds");
    for item in &funding.use_of_funds {
        let lead = format!(
            "{} ({}, {})",
            item.category,
            format_currency_compact(item.amount as f64),
            format_percentage(item.percentage, 0)
        );
        writer.lead_item(&lead, &item.description);
    }
    writer.heading("The opportunity");
    let opportunity = &funding.opportunity;
    writer.lead_item("Today", &opportunity.current);
    writer.lead_item("Trend", &opportunity.trend);
    writer.lead_item("Future", &opportunity.future);
    writer.lead_item("Our advantage", &opportunity.advantage);
    writer.heading("The moral case");
    writer.paragraph(&funding.moral_case);
    writer.heading("The financial case");
    writer.paragraph(&funding.financial_case);
    let contact = &funding.contact;
    writer.heading("Contact");
    let mut details = format!("{}, {}, {}", contact.name, contact.role, contact.email);
    if let Some(phone) = &contact.phone {
        details.push_str(&format!(", {phone}"));
    }
    writer.paragraph(&details);
}

fn appendix(writer: &mut FlowWriter, doc: &ContentDocument) {
    writer.section(DossierTab::Appendix, DossierTab::Appendix.label(), "");
    for link in &doc.appendix {
        writer.lead_item(&link.title, &link.url);
    }
}

/// Lays out `tabs` in the given order, each starting on a new page.
pub fn compose_dossier(doc: &ContentDocument, tabs: &[DossierTab]) -> DocumentLayout {
    let mut writer = FlowWriter::new();
    // The first section shares its page with the cover lines.
    cover(&mut writer, doc);
    for (index, tab) in tabs.iter().enumerate() {
        if index > 0 {
            writer.new_page();
        }
        match tab {
            DossierTab::Crisis => crisis(&mut writer, doc),
            DossierTab::Impact => impact(&mut writer, doc),
            DossierTab::Solution => solution(&mut writer, doc),
            DossierTab::Mandates => mandates(&mut writer, doc),
            DossierTab::Legal => legal(&mut writer, doc),
            DossierTab::Market => market(&mut writer, doc),
            DossierTab::Competition => competition(&mut writer, doc),
            DossierTab::Financials => financials(&mut writer, doc),
            DossierTab::Funding => funding(&mut writer, doc),
            DossierTab::Appendix => appendix(&mut writer, doc),
        }
    }
    let pages = writer.finish(&doc.brand.footer_note);
    tracing::debug!(tabs = tabs.len(), pages = pages.len(), "Composed dossier");
    DocumentLayout {
        title: format!("{} {}", doc.brand.company, doc.brand.product),
        pages,
    }
}

/// Composes and renders `tabs` of `doc` to PDF bytes.
pub fn render_dossier(doc: &ContentDocument, tabs: &[DossierTab]) -> Result<Vec<u8>> {
    render_pdf(&compose_dossier(doc, tabs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> &'static ContentDocument {
        vcb_model::content().unwrap()
    }

    fn all_text(layout: &DocumentLayout) -> String {
        layout
            .pages
            .iter()
            .flat_map(|page| page.texts().map(|run| run.text.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn single_tab_carries_cover_and_section() {
        let layout = compose_dossier(doc(), &[DossierTab::Legal]);
        let first = &layout.pages[0];
        assert!(first.contains_text(&doc().brand.company));
        assert!(first.contains_text("LEGAL CASES"));
        let text = all_text(&layout);
        for case in &doc().legal.cases {
            assert!(text.contains(&case.title), "missing {}", case.title);
        }
        assert!(!text.contains(&doc().competition.positioning));
    }

    #[test]
    fn each_tab_starts_a_new_page() {
        let layout = compose_dossier(doc(), &[DossierTab::Appendix, DossierTab::Funding]);
        let appendix = layout
            .pages
            .iter()
            .position(|page| page.contains_text("APPENDIX"))
            .unwrap();
        let funding = layout
            .pages
            .iter()
            .position(|page| page.contains_text("THE VISION"))
            .unwrap();
        assert_eq!(appendix, 0);
        assert!(funding > appendix);
        assert!(!layout.pages[funding].contains_text("APPENDIX"));
    }

    #[test]
    fn long_sections_flow_above_the_footer() {
        let layout = compose_dossier(doc(), DossierTab::all());
        assert!(layout.pages.len() >= DossierTab::all().len());
        let count = layout.pages.len();
        for (index, page) in layout.pages.iter().enumerate() {
            assert!(page.contains_text(&format!("{} / {count}", index + 1)));
            for run in page.texts() {
                if run.y >= FOOTER_Y {
                    continue;
                }
                assert!(run.y <= BOTTOM + 1e-3, "{} at {}", run.text, run.y);
            }
        }
    }

    #[test]
    fn empty_selection_still_yields_a_cover_page() {
        let layout = compose_dossier(doc(), &[]);
        assert_eq!(layout.pages.len(), 1);
        assert!(layout.pages[0].contains_text(&doc().brand.footer_note));
    }
}
