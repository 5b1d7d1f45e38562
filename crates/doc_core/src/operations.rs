//! Operations exposed on the document store
//!
//! Every id-taking operation looks the id up before doing anything else, so
//! an unknown id fails with `NotFound` and leaves the store untouched.

use crate::store::DocumentStore;
use doc_common::Result;
use serde::Serialize;

/// Instruction wrapped around a document by [`format_document_prompt`]
fn format_template(doc_id: &str, content: &str) -> String {
    format!(
        "Your goal is to reformat a document to be written with markdown syntax.

The id of the document you need to reformat is:
<document_id>
{doc_id}
</document_id>

The current content of the document is:
<document_content>
{content}
</document_content>

Add in headers, bullet points, tables, etc as necessary. Feel free to add in extra text, but don't change the meaning of the report.
Use the 'edit_doc' tool to edit the document. After the document has been edited, respond with the final version of the doc. Don't explain your changes."
    )
}

/// Outcome of an edit
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EditResult {
    pub doc_id: String,
    pub matches_found: usize,
}

/// Speaker of a prompt message
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single message handed to a downstream model, not evaluated here
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PromptMessage {
    pub role: Role,
    pub text: String,
}

impl PromptMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

/// Ids of every document, in store order
pub fn list_document_ids(store: &DocumentStore) -> Vec<String> {
    store.list_ids()
}

/// Resource-style read
pub fn get_document_contents(store: &DocumentStore, doc_id: &str) -> Result<String> {
    store.get(doc_id).map(str::to_owned)
}

/// Action-style read; same contract as [`get_document_contents`]
pub fn read_document(store: &DocumentStore, doc_id: &str) -> Result<String> {
    get_document_contents(store, doc_id)
}

/// Replace every literal, case-sensitive occurrence of `old_string`
///
/// Zero occurrences is a successful no-op. An empty `old_string` matches at
/// every char boundary, so `new_string` is inserted around each char.
pub fn edit_document(
    store: &mut DocumentStore,
    doc_id: &str,
    old_string: &str,
    new_string: &str,
) -> Result<EditResult> {
    let content = store.get(doc_id)?;

    // Same matches `str::replace` substitutes
    let matches_found = content.matches(old_string).count();

    if matches_found > 0 {
        let updated = content.replace(old_string, new_string);
        store.set(doc_id, updated)?;
    }

    tracing::debug!(doc_id, matches_found, "Edited document");
    Ok(EditResult {
        doc_id: doc_id.to_string(),
        matches_found,
    })
}

/// Returns the raw document content; no summary is generated here
pub fn summarize_document(store: &DocumentStore, doc_id: &str) -> Result<String> {
    get_document_contents(store, doc_id)
}

/// Build the markdown-rewrite prompt for `doc_id` without touching the store
pub fn format_document_prompt(store: &DocumentStore, doc_id: &str) -> Result<PromptMessage> {
    let content = store.get(doc_id)?;
    Ok(PromptMessage::user(format_template(doc_id, content)))
}
