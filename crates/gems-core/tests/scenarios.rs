use gems_core::{
    Dataset, FilterState, Language, LogicalField, Session, SourceFilter, ViewStatus, recompute,
    resolve_text,
};
use serde_json::json;

fn two_blogs() -> Dataset {
    Dataset::from_value(json!([
        {"link": "a", "title_zh": "你好", "title_en": "Hello", "source": "blogA"},
        {"link": "b", "title_en": "World", "source": "blogB"},
    ]))
    .expect("dataset")
}

fn links(items: &[&gems_core::Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.link().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn english_without_query_shows_everything() {
    let data = two_blogs();
    let view = recompute(&data, &FilterState::new(Language::En));

    assert_eq!(links(&view.items), vec!["a", "b"]);
    let titles: Vec<_> = view
        .items
        .iter()
        .map(|item| resolve_text(item, LogicalField::Title, Language::En))
        .collect();
    assert_eq!(titles, vec!["Hello", "World"]);
    assert_eq!(
        view.counts.iter().collect::<Vec<_>>(),
        vec![("all", 2), ("blogA", 1), ("blogB", 1)]
    );
}

#[test]
fn query_narrows_items_and_counts() {
    let data = two_blogs();
    let state = FilterState::new(Language::En)
        .with_query("hello")
        .with_source(SourceFilter::All);
    let view = recompute(&data, &state);

    assert_eq!(links(&view.items), vec!["a"]);
    assert_eq!(
        view.counts.iter().collect::<Vec<_>>(),
        vec![("all", 1), ("blogA", 1), ("blogB", 0)]
    );
}

#[test]
fn japanese_only_title_is_not_shown_in_english() {
    let only_ja = Dataset::from_value(json!([{"title_ja": "題名"}])).unwrap();
    let item = &only_ja.items()[0];
    assert_eq!(resolve_text(item, LogicalField::Title, Language::En), "");

    let with_bare = Dataset::from_value(json!([{"title_ja": "題名", "title": "Title"}])).unwrap();
    let item = &with_bare.items()[0];
    assert_eq!(resolve_text(item, LogicalField::Title, Language::En), "Title");
}

#[test]
fn empty_dataset_after_successful_load_is_empty_not_failed() {
    let mut session = Session::new(Language::Zh);
    let ticket = session.begin_load();
    session.finish_load(ticket, Dataset::from_json_str("[]"));

    assert_eq!(session.status(), ViewStatus::Empty);
    assert_eq!(session.counts().iter().collect::<Vec<_>>(), vec![("all", 0)]);
}

#[test]
fn session_drives_the_same_results_as_recompute() {
    let mut session = Session::new(Language::En);
    session.replace_dataset(two_blogs());
    session.edit_query("o");
    session.select_facet("blogB");

    let data = two_blogs();
    let expected = recompute(
        &data,
        &FilterState::new(Language::En)
            .with_query("o")
            .with_source(SourceFilter::Only("blogB".into())),
    );

    assert_eq!(session.view(), expected);
    assert_eq!(session.display_records()[0].title, "World");
}
