//! Static HTML rendering of a session.
//!
//! The page mirrors the reading-list layout: a controls block (search box and
//! source tags with counts), then either the cards or a status message.
//! Record fields arrive already escaped from the projection; anything this
//! module interpolates on its own goes through [`escape_markup`] here.

use std::fmt::Write;

use gems_core::locale;
use gems_core::{
    DisplayRecord, FacetRow, Language, Session, SourceFilter, ViewStatus, escape_markup,
};
use serde::Serialize;

/// Everything a rendering surface needs, detached from the session.
#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub language: Language,
    pub query: String,
    pub active_source: String,
    #[serde(skip)]
    pub filter: SourceFilter,
    pub status: &'static str,
    pub message: Option<String>,
    pub facets: Vec<FacetRow>,
    pub items: Vec<DisplayRecord>,
}

impl PageModel {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let state = session.state();
        let status = session.status();
        Self {
            language: state.language,
            query: state.query.clone(),
            active_source: state.active_source.key().to_string(),
            filter: state.active_source.clone(),
            status: status_label(&status),
            message: status.message(state.language),
            facets: session.facets(),
            items: session.display_records(),
        }
    }
}

fn status_label(status: &ViewStatus) -> &'static str {
    match status {
        ViewStatus::Loading => "loading",
        ViewStatus::Ready => "ready",
        ViewStatus::Empty => "empty",
        ViewStatus::LoadFailed(_) => "load-failed",
    }
}

/// Render the whole page body.
#[must_use]
pub fn render_page(page: &PageModel) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<main lang=\"{}\">", page.language);
    let _ = writeln!(html, "{}", render_controls(page));

    let _ = writeln!(html, "<div id=\"list\">");
    for record in &page.items {
        let _ = writeln!(html, "{}", render_card(record));
    }
    let _ = writeln!(html, "</div>");

    match &page.message {
        Some(message) => {
            let _ = writeln!(html, "<div id=\"empty\">{}</div>", escape_markup(message));
        }
        None => {
            let _ = writeln!(html, "<div id=\"empty\" class=\"hidden\"></div>");
        }
    }
    let _ = writeln!(html, "</main>");
    html
}

/// Search box plus the source tags.
#[must_use]
pub fn render_controls(page: &PageModel) -> String {
    let placeholder = escape_markup(locale::search_placeholder(page.language));
    let mut html = String::new();
    let _ = writeln!(html, "<div class=\"controls\">");
    let _ = writeln!(
        html,
        "  <input id=\"search\" placeholder=\"{placeholder}\" value=\"{}\" autocomplete=\"off\"/>",
        escape_markup(&page.query)
    );
    let _ = writeln!(html, "  <div id=\"sources\" class=\"tags\">");
    for facet in &page.facets {
        let _ = writeln!(
            html,
            "    {}",
            render_facet(facet, page.language, &page.filter)
        );
    }
    let _ = writeln!(html, "  </div>");
    let _ = write!(html, "</div>");
    html
}

fn render_facet(facet: &FacetRow, lang: Language, active: &SourceFilter) -> String {
    let label = if facet.is_all() {
        locale::all_facet_label(lang, facet.count)
    } else {
        locale::source_facet_label(&facet.name, facet.count)
    };
    let class = if facet.filter() == *active {
        "tag active"
    } else {
        "tag"
    };
    format!(
        "<span class=\"{class}\" data-source=\"{}\">{}</span>",
        escape_markup(&facet.name),
        escape_markup(&label)
    )
}

/// One item card. Optional blocks are left out when the record has none.
#[must_use]
pub fn render_card(record: &DisplayRecord) -> String {
    let mut lines = vec![
        "<article class=\"card\">".to_string(),
        format!(
            "  <h3><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></h3>",
            record.link_target, record.title
        ),
    ];
    if let Some(summary) = &record.summary_text {
        lines.push(format!("  <p class=\"summary\">{summary}</p>"));
    }
    if let Some(quote) = &record.quote_text {
        lines.push(format!("  <blockquote>{quote}</blockquote>"));
    }
    lines.push(format!(
        "  <div class=\"meta\">{} · {} · {}</div>",
        record.source_text, record.tags_joined, record.date_text
    ));
    lines.push("</article>".to_string());
    lines.join("\n")
}
