use gems_core::{
    Dataset, FilterState, Item, Language, LogicalField, Resolved, Session, SourceFilter, project,
    recompute, resolve,
};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn source_filter() -> impl Strategy<Value = SourceFilter> {
    prop::sample::select(vec!["all", "s1", "s2", "s3", "absent"]).prop_map(SourceFilter::from_key)
}

fn text() -> impl Strategy<Value = String> {
    "[a-cA-C &<>'\"]{0,8}"
}

fn record() -> impl Strategy<Value = Map<String, Value>> {
    (
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(prop::collection::vec(text(), 0..3)),
        prop::option::of("[a-c, ]{0,8}"),
        prop::option::of(prop::sample::select(vec!["s1", "s2", " s3 ", "all", "unknown"])),
    )
        .prop_map(|(title_en, title, summary_zh, quote_ja, tags_en, tags, source)| {
            let mut fields = Map::new();
            let mut put = |key: &str, value: Option<Value>| {
                if let Some(value) = value {
                    fields.insert(key.to_string(), value);
                }
            };
            put("title_en", title_en.map(Value::from));
            put("title", title.map(Value::from));
            put("summary_zh", summary_zh.map(Value::from));
            put("best_quote_ja", quote_ja.map(Value::from));
            put("tags_en", tags_en.map(|tags| json!(tags)));
            put("tags", tags.map(Value::from));
            put("source", source.map(Value::from));
            fields
        })
}

/// Datasets whose links are their positions, so order can be checked.
fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record(), 0..12).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(position, mut fields)| {
                fields.insert("link".into(), Value::from(position.to_string()));
                Item::new(fields)
            })
            .collect()
    })
}

fn state() -> impl Strategy<Value = FilterState> {
    ("[a-cA-C ]{0,3}", source_filter(), language()).prop_map(|(query, source, lang)| {
        FilterState::new(lang).with_query(query).with_source(source)
    })
}

proptest! {
    #[test]
    fn resolution_is_total(fields in record(), lang in language()) {
        let item = Item::new(fields);
        for field in LogicalField::SEARCHABLE {
            match resolve(&item, field, lang) {
                Resolved::Text(text) => {
                    prop_assert_eq!(text.trim(), text.as_str());
                }
                Resolved::Tags(tags) => {
                    prop_assert!(tags.iter().all(|tag| !tag.trim().is_empty()));
                }
            }
        }
    }

    #[test]
    fn total_count_ignores_the_active_source(data in dataset(), state in state()) {
        let view = recompute(&data, &state);
        let unrestricted = recompute(&data, &state.clone().with_source(SourceFilter::All));

        let matching = data
            .iter()
            .filter(|item| gems_core::matches(item, state.language, &state.query))
            .count();
        prop_assert_eq!(view.counts.all(), matching);
        prop_assert_eq!(&view.counts, &unrestricted.counts);
        prop_assert_eq!(unrestricted.items.len(), matching);
    }

    #[test]
    fn offered_facets_agree_with_their_lists(data in dataset(), state in state()) {
        let mut session = Session::with_state(state);
        session.replace_dataset(data);
        for row in session.facets() {
            session.select_source(row.filter());
            prop_assert_eq!(session.view().len(), row.count);
        }
    }

    #[test]
    fn recompute_is_idempotent(data in dataset(), state in state()) {
        prop_assert_eq!(recompute(&data, &state), recompute(&data, &state));
    }

    #[test]
    fn filtering_keeps_dataset_order(data in dataset(), state in state()) {
        let positions: Vec<usize> = recompute(&data, &state)
            .items
            .iter()
            .filter_map(|item| item.link()?.parse().ok())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn projected_script_tags_are_escaped(
        prefix in "[a-z ]{0,4}",
        suffix in "[a-z<>&]{0,4}",
        lang in language(),
    ) {
        let hostile = format!("{prefix}<script>{suffix}");
        let item = Item::new(
            json!({
                "title": hostile,
                "summary": hostile,
                "best_quote": hostile,
                "tags": hostile,
                "source": hostile,
                "date": hostile,
                "link": hostile,
            })
            .as_object()
            .cloned()
            .unwrap_or_default(),
        );
        let record = project(&item, lang);
        for field in [
            record.title,
            record.summary_text.unwrap_or_default(),
            record.quote_text.unwrap_or_default(),
            record.tags_joined,
            record.source_text,
            record.date_text,
            record.link_target,
        ] {
            prop_assert!(!field.contains('<') && !field.contains('>'));
        }
    }
}
