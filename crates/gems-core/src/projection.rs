//! Display-safe projection of items.
//!
//! Every string in a [`DisplayRecord`] has been through [`escape_markup`]; the
//! escape is the last transformation applied, after labels and quote glyphs are
//! attached.

use serde::Serialize;

use crate::item::Item;
use crate::language::Language;
use crate::locale;
use crate::resolve::{LogicalField, resolve_tags, resolve_text};

/// Link target used when an item has no link.
pub const FALLBACK_LINK: &str = "#";

/// Language-resolved, escaped view of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    /// Localized label followed by the summary; absent when there is no summary.
    pub summary_text: Option<String>,
    /// Quote wrapped in language-specific glyphs; absent when there is no quote.
    pub quote_text: Option<String>,
    pub tags_joined: String,
    pub source_text: String,
    pub date_text: String,
    pub link_target: String,
}

/// Project `item` for display in `lang`.
#[must_use]
pub fn project(item: &Item, lang: Language) -> DisplayRecord {
    let title = resolve_text(item, LogicalField::Title, lang);
    let summary = resolve_text(item, LogicalField::Summary, lang);
    let quote = resolve_text(item, LogicalField::BestQuote, lang);
    let tags = resolve_tags(item, lang);

    let summary_text = (!summary.is_empty())
        .then(|| escape_markup(&format!("{}{summary}", locale::summary_label(lang))));
    let quote_text = (!quote.is_empty()).then(|| {
        let (open, close) = locale::quote_glyphs(lang);
        escape_markup(&format!("{open}{quote}{close}"))
    });

    DisplayRecord {
        title: escape_markup(&title),
        summary_text,
        quote_text,
        tags_joined: escape_markup(&tags.join(", ")),
        source_text: escape_markup(item.source()),
        date_text: escape_markup(item.date().unwrap_or_default()),
        link_target: escape_markup(item.link().unwrap_or(FALLBACK_LINK)),
    }
}

/// Replace `& < > " '` with entity references, leaving everything else intact.
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn item(value: Value) -> Item {
        serde_json::from_value(value).expect("item")
    }

    #[test]
    fn escape_covers_the_five_markup_characters() {
        assert_eq!(
            escape_markup(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_markup("纯文本 plain"), "纯文本 plain");
    }

    #[test]
    fn full_record_in_chinese() {
        let record = item(json!({
            "link": "https://example.com/a",
            "title_zh": "标题",
            "summary_zh": "摘要",
            "best_quote_zh": "金句",
            "tags_zh": ["标签一", "标签二"],
            "source": "blogA",
            "date": "2024-01-02",
        }));

        let display = project(&record, Language::Zh);
        assert_eq!(display.title, "标题");
        assert_eq!(display.summary_text.as_deref(), Some("AI总结：摘要"));
        assert_eq!(display.quote_text.as_deref(), Some("「金句」"));
        assert_eq!(display.tags_joined, "标签一, 标签二");
        assert_eq!(display.source_text, "blogA");
        assert_eq!(display.date_text, "2024-01-02");
        assert_eq!(display.link_target, "https://example.com/a");
    }

    #[test]
    fn latin_languages_use_curly_quotes() {
        let record = item(json!({"best_quote_en": "Less is more"}));
        assert_eq!(
            project(&record, Language::Ko).quote_text.as_deref(),
            Some("“Less is more”")
        );
    }

    #[test]
    fn empty_blocks_are_omitted() {
        let display = project(&Item::default(), Language::En);
        assert_eq!(display.title, "");
        assert_eq!(display.summary_text, None);
        assert_eq!(display.quote_text, None);
        assert_eq!(display.tags_joined, "");
        assert_eq!(display.source_text, "unknown");
        assert_eq!(display.date_text, "");
        assert_eq!(display.link_target, FALLBACK_LINK);
    }

    #[test]
    fn no_field_bypasses_escaping() {
        let hostile = "<script>alert('x')</script>";
        let record = item(json!({
            "link": hostile,
            "title": hostile,
            "summary": hostile,
            "best_quote": hostile,
            "tags": [hostile],
            "source": hostile,
            "date": hostile,
        }));

        let display = project(&record, Language::En);
        let fields = [
            display.title,
            display.summary_text.unwrap_or_default(),
            display.quote_text.unwrap_or_default(),
            display.tags_joined,
            display.source_text,
            display.date_text,
            display.link_target,
        ];
        for field in fields {
            assert!(!field.contains('<'), "unescaped '<' in {field}");
            assert!(!field.contains('>'), "unescaped '>' in {field}");
            assert!(field.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn escaping_leaves_slashes_alone() {
        assert_eq!(escape_markup("https://a.example/x?y=1#z"), "https://a.example/x?y=1#z");
        assert_eq!(escape_markup("</p>"), "&lt;/p&gt;");
    }
}
