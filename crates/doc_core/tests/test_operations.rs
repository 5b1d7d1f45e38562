//! Operation contract tests against the default seed set

use doc_common::DocError;
use doc_config::default_documents;
use doc_core::operations::*;
use doc_core::DocumentStore;
use doc_test_helpers::logging::suppress_logs;

fn seeded() -> DocumentStore {
    suppress_logs();
    DocumentStore::from_documents(&default_documents()).expect("default seed is valid")
}

fn snapshot(store: &DocumentStore) -> Vec<(String, String)> {
    store
        .list_ids()
        .into_iter()
        .map(|id| {
            let content = store.get(&id).unwrap().to_string();
            (id, content)
        })
        .collect()
}

#[test]
fn test_list_ids_matches_seed() {
    let store = seeded();
    let expected: Vec<String> = default_documents().into_iter().map(|d| d.id).collect();

    assert_eq!(list_document_ids(&store), expected);
    assert_eq!(list_document_ids(&store), list_document_ids(&store));
}

#[test]
fn test_unknown_id_fails_everywhere_without_mutation() {
    let mut store = seeded();
    let before = snapshot(&store);

    let errors = vec![
        get_document_contents(&store, "missing.md").unwrap_err(),
        read_document(&store, "missing.md").unwrap_err(),
        summarize_document(&store, "missing.md").unwrap_err(),
        format_document_prompt(&store, "missing.md").unwrap_err(),
        edit_document(&mut store, "missing.md", "The", "A").unwrap_err(),
    ];

    for err in errors {
        assert!(
            matches!(err, DocError::NotFound { ref id } if id == "missing.md"),
            "unexpected error: {err}"
        );
    }
    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_read_and_get_agree() {
    let mut store = seeded();
    for id in store.list_ids() {
        assert_eq!(
            read_document(&store, &id).unwrap(),
            get_document_contents(&store, &id).unwrap()
        );
    }

    edit_document(&mut store, "plan.md", "plan", "roadmap").unwrap();
    assert_eq!(
        read_document(&store, "plan.md").unwrap(),
        get_document_contents(&store, "plan.md").unwrap()
    );
}

#[test]
fn test_edit_spec_scenario() {
    let mut store = seeded();

    let result = edit_document(
        &mut store,
        "spec.txt",
        "technical requirements",
        "functional requirements",
    )
    .unwrap();

    assert_eq!(result.matches_found, 1);
    assert_eq!(
        get_document_contents(&store, "spec.txt").unwrap(),
        "These specifications define the functional requirements for the equipment."
    );

    // Second pass finds nothing left to replace
    let again = edit_document(
        &mut store,
        "spec.txt",
        "technical requirements",
        "functional requirements",
    )
    .unwrap();
    assert_eq!(again.matches_found, 0);
    assert_eq!(
        get_document_contents(&store, "spec.txt").unwrap(),
        "These specifications define the functional requirements for the equipment."
    );
}

#[test]
fn test_edit_identity_leaves_content_unchanged() {
    let mut store = seeded();
    let before = snapshot(&store);

    edit_document(&mut store, "report.pdf", "condenser", "condenser").unwrap();

    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_edit_only_touches_target() {
    let mut store = seeded();
    edit_document(&mut store, "deposition.md", "the", "THE").unwrap();

    assert_eq!(
        get_document_contents(&store, "deposition.md").unwrap(),
        "This deposition covers THE testimony of Angela Smith, P.E."
    );
    assert_eq!(
        get_document_contents(&store, "outlook.pdf").unwrap(),
        "This document presents the projected future performance of the system."
    );
}

#[test]
fn test_summarize_returns_raw_content() {
    let store = seeded();
    assert_eq!(
        summarize_document(&store, "financials.docx").unwrap(),
        "These financials outline the project's budget and expenditures."
    );
}

#[test]
fn test_format_prompt_embeds_content_and_leaves_store() {
    let store = seeded();
    let before = snapshot(&store);

    let message = format_document_prompt(&store, "report.pdf").unwrap();

    assert_eq!(message.role, Role::User);
    assert!(message
        .text
        .contains("The report details the state of a 20m condenser tower."));
    assert!(message.text.contains("markdown"));
    assert_eq!(snapshot(&store), before);
}
