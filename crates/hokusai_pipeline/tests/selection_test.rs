//! Integration tests for selection against a real corpus and ledger file.

use hokusai_core::{NoteId, UsageLedger};
use hokusai_pipeline::{select_next, LedgerStore, NoteCorpus};
use std::fs;
use tempfile::TempDir;

fn id(s: &str) -> NoteId {
    s.parse().unwrap()
}

fn three_note_corpus() -> (TempDir, NoteCorpus) {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("batch.md"),
        "## 【Note001】\na\n## 【Note002】\nb\n## 【Note003】\nc\n",
    )
    .unwrap();
    let corpus = NoteCorpus::new(dir.path());
    (dir, corpus)
}

#[test]
fn partially_used_ledger_selects_next_in_order() {
    let (_dir, corpus) = three_note_corpus();
    let all = corpus.list_note_ids().unwrap();

    let ledger = UsageLedger::default()
        .mark_used(&id("001"))
        .mark_used(&id("002"));
    assert_eq!(select_next(&ledger, &all), Some(id("003")));
}

#[test]
fn fully_used_ledger_selects_none() {
    let (_dir, corpus) = three_note_corpus();
    let all = corpus.list_note_ids().unwrap();

    let ledger = UsageLedger::default()
        .mark_used(&id("001"))
        .mark_used(&id("002"))
        .mark_used(&id("003"));
    assert_eq!(select_next(&ledger, &all), None);
}

#[test]
fn marking_the_selection_advances_to_the_next_id() {
    let (dir, corpus) = three_note_corpus();
    let all = corpus.list_note_ids().unwrap();
    let store = LedgerStore::new(dir.path().join("usage_log.json"));

    let mut seen = Vec::new();
    while let Some(next) = select_next(&store.load().unwrap(), &all) {
        store.mark_used(&next).unwrap();
        seen.push(next.to_string());
    }

    assert_eq!(seen, vec!["001", "002", "003"]);
    assert_eq!(select_next(&store.load().unwrap(), &all), None);
}

#[test]
fn selection_survives_a_rerun_before_the_ledger_update() {
    let (dir, corpus) = three_note_corpus();
    let all = corpus.list_note_ids().unwrap();
    let store = LedgerStore::new(dir.path().join("usage_log.json"));
    store.mark_used(&id("001")).unwrap();

    // A failed run never updated the ledger; the rerun must pick the same id.
    let first = select_next(&store.load().unwrap(), &all);
    let rerun = select_next(&store.load().unwrap(), &all);
    assert_eq!(first, Some(id("002")));
    assert_eq!(first, rerun);
}
