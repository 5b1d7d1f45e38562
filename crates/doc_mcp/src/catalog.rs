//! Static discovery metadata for tools, resources and prompts
//!
//! Names, descriptions and parameter schemas live here, apart from the
//! handlers that execute them.

use doc_common::{DocError, Result};
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

pub const TOOL_READ_DOC: &str = "read_doc";
pub const TOOL_EDIT_DOC: &str = "edit_doc";
pub const TOOL_SUMMARIZE_DOC: &str = "summarize_doc";

pub const PROMPT_FORMAT: &str = "format";

pub const DOC_IDS_URI: &str = "docs://documents";
pub const DOC_CONTENTS_TEMPLATE: &str = "docs://documents/{doc_id}";

/// Arguments of `read_doc`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadDocParams {
    /// Id of the document to read
    pub doc_id: String,
}

/// Arguments of `edit_doc`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EditDocParams {
    /// Id of the document to edit
    pub doc_id: String,
    /// The string to replace, must match the string in the document exactly, including capitalization and spacing.
    pub old_string: String,
    /// The new string to replace the old string with
    pub new_string: String,
}

/// Arguments of `summarize_doc`
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SummarizeDocParams {
    /// Id of the document to summarize
    pub doc_id: String,
}

/// Arguments of the `format` prompt
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FormatPromptParams {
    /// Id of the document to format
    pub doc_id: String,
}

/// Declarative description of one tool
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    input_schema: fn() -> Value,
}

impl ToolSpec {
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": (self.input_schema)(),
        })
    }
}

pub static TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: TOOL_READ_DOC,
        description: "Read a document from the document store.",
        input_schema: schema_of::<ReadDocParams>,
    },
    ToolSpec {
        name: TOOL_EDIT_DOC,
        description: "Edit a document in the document store by replacing a string in the document with a new string.",
        input_schema: schema_of::<EditDocParams>,
    },
    ToolSpec {
        name: TOOL_SUMMARIZE_DOC,
        description: "Summarize a document in the document store. Currently returns the full document text for the caller to summarize.",
        input_schema: schema_of::<SummarizeDocParams>,
    },
];

/// Inline JSON Schema for a parameter struct
fn schema_of<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft07()
        .with(|s| {
            s.inline_subschemas = true;
            s.meta_schema = None;
        })
        .into_generator();
    let mut schema = serde_json::to_value(generator.into_root_schema_for::<T>())
        .unwrap_or_else(|_| json!({ "type": "object" }));
    // The struct doc comment becomes a title; tool descriptions already cover it
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("title");
        obj.remove("description");
    }
    schema
}

pub fn tool_definitions() -> Vec<Value> {
    TOOLS.iter().map(ToolSpec::to_json).collect()
}

pub fn find_tool(name: &str) -> Result<&'static ToolSpec> {
    TOOLS
        .iter()
        .find(|tool| tool.name == name)
        .ok_or_else(|| DocError::UnknownTool(name.to_string()))
}

pub fn resource_definitions() -> Vec<Value> {
    vec![json!({
        "uri": DOC_IDS_URI,
        "name": "get_doc_ids",
        "description": "Get all document ids from the document store.",
        "mimeType": "application/json",
    })]
}

pub fn resource_template_definitions() -> Vec<Value> {
    vec![json!({
        "uriTemplate": DOC_CONTENTS_TEMPLATE,
        "name": "get_doc_contents",
        "description": "Get the contents of a document from the document store.",
        "mimeType": "text/plain",
    })]
}

pub fn prompt_definitions() -> Vec<Value> {
    vec![json!({
        "name": PROMPT_FORMAT,
        "description": "Rewrites the contents of the document in Markdown format.",
        "arguments": [{
            "name": "doc_id",
            "description": "Id of the document to format",
            "required": true,
        }],
    })]
}

/// What a resource URI addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTarget {
    DocIds,
    Contents(String),
}

/// Resolve a URI against [`DOC_IDS_URI`] and [`DOC_CONTENTS_TEMPLATE`]
///
/// The id segment is percent-decoded, since clients expand the template
/// with reserved characters encoded.
pub fn parse_resource_uri(uri: &str) -> Result<ResourceTarget> {
    let rest = uri
        .strip_prefix(DOC_IDS_URI)
        .ok_or_else(|| DocError::InvalidUri(uri.to_string()))?;

    match rest {
        "" | "/" => Ok(ResourceTarget::DocIds),
        _ => match rest.strip_prefix('/') {
            Some(encoded) => urlencoding::decode(encoded)
                .map(|doc_id| ResourceTarget::Contents(doc_id.into_owned()))
                .map_err(|_| DocError::InvalidUri(uri.to_string())),
            None => Err(DocError::InvalidUri(uri.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_unique() {
        let mut names: Vec<_> = TOOLS.iter().map(|t| t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TOOLS.len());
    }

    #[test]
    fn test_edit_schema_lists_required_fields() {
        let tool = find_tool(TOOL_EDIT_DOC).unwrap().to_json();
        let schema = &tool["inputSchema"];

        assert_eq!(schema["type"], "object");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"doc_id"));
        assert!(required.contains(&"old_string"));
        assert!(required.contains(&"new_string"));
        assert_eq!(
            schema["properties"]["old_string"]["description"],
            "The string to replace, must match the string in the document exactly, including capitalization and spacing."
        );
    }

    #[test]
    fn test_unknown_tool() {
        assert!(matches!(find_tool("delete_doc"), Err(DocError::UnknownTool(_))));
    }

    #[test]
    fn test_parse_resource_uri() {
        assert_eq!(parse_resource_uri("docs://documents").unwrap(), ResourceTarget::DocIds);
        assert_eq!(
            parse_resource_uri("docs://documents/plan.md").unwrap(),
            ResourceTarget::Contents("plan.md".to_string())
        );
        assert!(parse_resource_uri("docs://other").is_err());
        assert!(parse_resource_uri("docs://documentsX").is_err());
        assert!(parse_resource_uri("file:///etc/passwd").is_err());
    }

    #[test]
    fn test_parse_resource_uri_decodes_id() {
        assert_eq!(
            parse_resource_uri("docs://documents/Q1%20report.md").unwrap(),
            ResourceTarget::Contents("Q1 report.md".to_string())
        );
        assert_eq!(
            parse_resource_uri("docs://documents/100%25%20done%3F%23.md").unwrap(),
            ResourceTarget::Contents("100% done?#.md".to_string())
        );
        // Unencoded ids still resolve as-is
        assert_eq!(
            parse_resource_uri("docs://documents/plan.md").unwrap(),
            ResourceTarget::Contents("plan.md".to_string())
        );
    }

    #[test]
    fn test_parse_resource_uri_rejects_invalid_utf8() {
        assert!(matches!(
            parse_resource_uri("docs://documents/%FF"),
            Err(DocError::InvalidUri(_))
        ));
    }
}
