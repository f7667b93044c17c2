//! Randomized add/delete/move sequences checked against board invariants.

use noteboard_core::{BoardConfig, CategorySeed, Clock, NoteStore};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

#[derive(Debug)]
struct FixedClock;

impl Clock for FixedClock {
    fn now_epoch_ms(&self) -> i64 {
        42
    }
}

/// Small deterministic generator so failures replay exactly.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

const CATEGORY_IDS: [&str; 3] = ["c1", "c2", "c3"];

fn setup() -> NoteStore<FixedClock> {
    let config = BoardConfig {
        categories: CATEGORY_IDS
            .iter()
            .map(|id| CategorySeed::new(*id, id.to_uppercase()))
            .collect(),
    };
    NoteStore::with_clock(&config, FixedClock).unwrap()
}

fn id_multiset(store: &NoteStore<FixedClock>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for note in store.snapshot().notes() {
        *counts.entry(note.id.clone()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn random_operation_sequences_keep_invariants() {
    for seed in 1..=25_u64 {
        let mut rng = Lcg(seed);
        let mut store = setup();
        let mut issued = HashSet::new();

        for step in 0..200 {
            let category = CATEGORY_IDS[rng.next(CATEGORY_IDS.len())];
            match rng.next(3) {
                0 => {
                    let note = store
                        .add_note(category, format!("t{step}"), format!("<p>{step}</p>"))
                        .unwrap();
                    assert!(issued.insert(note.id.clone()), "id reused: {}", note.id);
                }
                1 => {
                    let len = store.category(category).unwrap().len();
                    if len > 0 {
                        let id = store.category(category).unwrap().notes[rng.next(len)]
                            .id
                            .clone();
                        store.delete_note(category, &id).unwrap();
                    }
                }
                _ => {
                    let destination = CATEGORY_IDS[rng.next(CATEGORY_IDS.len())];
                    let source_len = store.category(category).unwrap().len();
                    if source_len == 0 {
                        continue;
                    }
                    let destination_len = store.category(destination).unwrap().len();
                    let before_total = store.note_count();
                    let before_ids = id_multiset(&store);
                    let destination_bound = if destination == category {
                        destination_len
                    } else {
                        destination_len + 1
                    };

                    store
                        .move_note(
                            category,
                            rng.next(source_len),
                            destination,
                            rng.next(destination_bound),
                        )
                        .unwrap();

                    assert_eq!(store.note_count(), before_total);
                    assert_eq!(id_multiset(&store), before_ids);
                    if destination == category {
                        assert_eq!(store.category(category).unwrap().len(), source_len);
                    }
                }
            }

            store
                .snapshot()
                .check_invariants()
                .unwrap_or_else(|err| panic!("seed {seed} step {step}: {err}"));
        }
    }
}

#[test]
fn failed_operations_never_publish() {
    let mut store = setup();
    store.add_note("c1", "a", "x").unwrap();
    let before = store.snapshot();

    assert!(store.add_note("c9", "a", "x").is_err());
    assert!(store.add_note("c1", "", "x").is_err());
    assert!(store.delete_note("c1", "note0").is_err());
    assert!(store.move_note("c1", 1, "c2", 0).is_err());
    assert!(store.move_note("c1", 0, "c2", 5).is_err());
    assert!(store.move_note("c1", 0, "c1", 1).is_err());

    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn old_snapshots_stay_frozen() {
    let mut store = setup();
    let note = store.add_note("c1", "a", "x").unwrap();
    let frozen = store.snapshot();

    store.move_note("c1", 0, "c2", 0).unwrap();
    store.delete_note("c2", &note.id).unwrap();

    assert_eq!(frozen.category("c1").unwrap().notes[0], note);
    assert_eq!(frozen.note_count(), 1);
    assert_eq!(store.note_count(), 0);
    assert_eq!(store.version(), frozen.version + 2);
}
