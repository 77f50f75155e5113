//! Localized interface strings.

use crate::language::Language;

/// Label placed ahead of a non-empty summary.
#[must_use]
pub fn summary_label(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "AI总结：",
        Language::En => "AI Summary: ",
        Language::Ja => "AI要約：",
        Language::Ko => "AI 요약：",
    }
}

/// Opening and closing glyphs wrapped around a quote.
#[must_use]
pub fn quote_glyphs(lang: Language) -> (&'static str, &'static str) {
    match lang {
        Language::Zh | Language::Ja => ("「", "」"),
        Language::En | Language::Ko => ("“", "”"),
    }
}

#[must_use]
pub fn search_placeholder(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "👋 想找什么好东西？",
        Language::En => "👋 What are you looking for?",
        Language::Ja => "👋 何を探していますか？",
        Language::Ko => "👋 무엇을 찾고 있나요?",
    }
}

/// Label of the `"all"` facet including its count.
#[must_use]
pub fn all_facet_label(lang: Language, count: usize) -> String {
    let word = match lang {
        Language::Zh => "全部",
        Language::En => "All",
        Language::Ja => "すべて",
        Language::Ko => "전체",
    };
    format!("📚 {word} ({count})")
}

#[must_use]
pub fn source_facet_label(source: &str, count: usize) -> String {
    format!("✨ {source} ({count})")
}

/// Shown when the dataset loaded but nothing is visible.
#[must_use]
pub fn empty_message(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "🤔 暂时没找到，换个词试试？或许有惊喜",
        Language::En => "🤔 Nothing so far, try a different word. Maybe a surprise awaits.",
        Language::Ja => "🤔 見つかりませんでした。別のキーワードを試してみてください。",
        Language::Ko => "🤔 아직 찾지 못했어요. 다른 단어로 시도해보세요.",
    }
}

/// Shown while the first dataset snapshot is still loading.
#[must_use]
pub fn loading_message(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "⏳ 加载中…",
        Language::En => "⏳ Loading…",
        Language::Ja => "⏳ 読み込み中…",
        Language::Ko => "⏳ 불러오는 중…",
    }
}

#[must_use]
pub fn load_failed_message(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "数据加载失败，请刷新页面重试",
        Language::En => "Failed to load data, please reload and try again",
        Language::Ja => "データの読み込みに失敗しました。再読み込みしてください",
        Language::Ko => "데이터를 불러오지 못했습니다. 새로고침 후 다시 시도하세요",
    }
}

#[must_use]
pub fn error_prefix(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "❌ 错误：",
        Language::En => "❌ Error: ",
        Language::Ja => "❌ エラー：",
        Language::Ko => "❌ 오류：",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_and_latin_quote_styles_differ() {
        assert_eq!(quote_glyphs(Language::Zh), quote_glyphs(Language::Ja));
        assert_eq!(quote_glyphs(Language::En), quote_glyphs(Language::Ko));
        assert_ne!(quote_glyphs(Language::Zh), quote_glyphs(Language::En));
    }

    #[test]
    fn facet_labels_carry_counts() {
        assert_eq!(all_facet_label(Language::En, 3), "📚 All (3)");
        assert_eq!(all_facet_label(Language::Ko, 0), "📚 전체 (0)");
        assert_eq!(source_facet_label("blogA", 1), "✨ blogA (1)");
    }

    #[test]
    fn every_language_has_messages() {
        for lang in Language::ALL {
            assert!(!summary_label(lang).is_empty());
            assert!(!search_placeholder(lang).is_empty());
            assert!(!empty_message(lang).is_empty());
            assert!(!loading_message(lang).is_empty());
            assert!(!load_failed_message(lang).is_empty());
            assert!(error_prefix(lang).starts_with('❌'));
        }
    }
}
