use noteboard_core::{
    filter_notes, resolve_display, BoardConfig, Category, CategorySeed, Note, NoteStore,
    SearchState,
};

fn groceries_board() -> Vec<Category> {
    vec![Category::new("c1", "Lists")
        .with_notes(vec![Note::new("n1", "Groceries", "milk", "c1")])]
}

fn two_category_store() -> NoteStore {
    let config = BoardConfig {
        categories: vec![CategorySeed::new("c1", "One"), CategorySeed::new("c2", "Two")],
    };
    NoteStore::from_config(&config).unwrap()
}

#[test]
fn filter_finds_matching_note() {
    let hits = filter_notes(&groceries_board(), "milk");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "n1");
}

#[test]
fn filter_without_match_is_empty() {
    assert!(filter_notes(&groceries_board(), "bread").is_empty());
}

#[test]
fn empty_query_means_no_filter() {
    assert!(filter_notes(&groceries_board(), "").is_empty());
}

#[test]
fn filter_searches_every_category_in_order() {
    let mut store = two_category_store();
    let second = store.add_note("c2", "Bread", "<p>rye</p>").unwrap();
    let first = store.add_note("c1", "Shopping", "<p>bread, eggs</p>").unwrap();
    store.add_note("c1", "Chores", "<p>laundry</p>").unwrap();

    let snapshot = store.snapshot();
    let hits = filter_notes(&snapshot.categories, "BREAD");
    let ids: Vec<_> = hits.iter().map(|note| note.id.clone()).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn display_without_search_groups_by_category() {
    let mut store = two_category_store();
    let a = store.add_note("c1", "a", "x").unwrap();
    let b = store.add_note("c2", "b", "y").unwrap();

    let views = resolve_display(&store.snapshot(), &SearchState::new());
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].category_id, "c1");
    assert_eq!(views[0].notes, vec![a]);
    assert_eq!(views[1].notes, vec![b]);
    assert!(views.iter().all(|view| !view.is_filtered));
}

#[test]
fn display_with_hits_repeats_flattened_list_under_every_heading() {
    let mut store = two_category_store();
    let hit = store.add_note("c2", "milk run", "x").unwrap();
    store.add_note("c1", "other", "y").unwrap();

    let mut search = SearchState::new();
    search.set_term("milk");
    search.apply();

    let views = resolve_display(&store.snapshot(), &search);
    assert_eq!(views.len(), 2);
    for view in &views {
        assert!(view.is_filtered);
        assert_eq!(view.notes, vec![hit.clone()]);
    }
    assert_eq!(views[0].name, "One");
}

#[test]
fn display_without_hits_falls_back_to_unfiltered_lists() {
    let mut store = two_category_store();
    let a = store.add_note("c1", "a", "x").unwrap();

    let mut search = SearchState::new();
    search.set_term("bread");
    search.apply();

    let views = resolve_display(&store.snapshot(), &search);
    assert!(!views[0].is_filtered);
    assert_eq!(views[0].notes, vec![a]);
}

#[test]
fn display_tracks_deletes_after_search_was_applied() {
    let mut store = two_category_store();
    let hit = store.add_note("c1", "milk", "x").unwrap();
    let mut search = SearchState::new();
    search.set_term("milk");
    search.apply();
    assert!(resolve_display(&store.snapshot(), &search)[0].is_filtered);

    store.delete_note("c1", &hit.id).unwrap();
    let views = resolve_display(&store.snapshot(), &search);
    assert!(views.iter().all(|view| view.notes.is_empty()));
}
