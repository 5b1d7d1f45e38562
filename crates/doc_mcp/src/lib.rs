//! MCP (Model Context Protocol) server implementation
//!
//! JSON-RPC 2.0 server exposing the document store as tools, resources
//! and prompts.
//!
//! CRITICAL: stdout is reserved EXCLUSIVELY for JSON-RPC responses.
//! All logs (Info/Warn/Error) MUST go to stderr to avoid protocol corruption.

pub mod catalog;

use catalog::{
    EditDocParams, FormatPromptParams, ReadDocParams, ResourceTarget, SummarizeDocParams,
};
use doc_common::{DocError, Result};
use doc_config::{Config, ServerConfig};
use doc_core::{operations, DocumentStore, PromptMessage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Protocol revision answered when the client does not name one
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const RESOURCE_NOT_FOUND: i32 = -32002;

    /// Convert DocError to JSON-RPC error
    pub fn from_doc_error(err: &DocError) -> Self {
        let code = match err {
            DocError::NotFound { .. } => Self::RESOURCE_NOT_FOUND,
            DocError::UnknownMethod(_) => Self::METHOD_NOT_FOUND,
            DocError::UnknownTool(_)
            | DocError::UnknownPrompt(_)
            | DocError::InvalidUri(_)
            | DocError::ValidationError(_) => Self::INVALID_PARAMS,
            DocError::ParseError(_) => Self::PARSE_ERROR,
            _ => Self::INTERNAL_ERROR,
        };

        let data = match err {
            DocError::NotFound { id } => Some(json!({ "doc_id": id })),
            DocError::InvalidUri(uri) => Some(json!({ "uri": uri })),
            _ => None,
        };

        Self {
            code,
            message: err.to_string(),
            data,
        }
    }

    /// Error for a line that is not valid JSON-RPC
    pub fn parse_error(detail: impl std::fmt::Display) -> Self {
        Self::from_doc_error(&DocError::ParseError(detail.to_string()))
    }
}

/// Deserialize request params, requiring them to be present
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T> {
    params
        .ok_or_else(|| DocError::ValidationError("Missing params".to_string()))
        .and_then(|v| {
            serde_json::from_value(v)
                .map_err(|e| DocError::ValidationError(format!("Invalid params: {}", e)))
        })
}

/// Tool result carrying one text block
fn text_content(text: String) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": false,
    })
}

fn prompt_message_json(message: &PromptMessage) -> Value {
    json!({
        "role": message.role,
        "content": { "type": "text", "text": message.text },
    })
}

/// Server state: the document store plus identity reported to clients
///
/// Requests are handled through `&mut self`, one at a time, so an edit's
/// read-then-write cannot interleave with any other request.
pub struct McpServer {
    store: DocumentStore,
    info: ServerConfig,
}

impl McpServer {
    pub fn new(store: DocumentStore, info: ServerConfig) -> Self {
        Self { store, info }
    }

    /// Seed the store from the configured documents
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = DocumentStore::from_documents(&config.documents)?;
        Ok(Self::new(store, config.server.clone()))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Handle a single JSON-RPC message
    ///
    /// Returns `None` for notifications (requests without an id).
    pub async fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Log to stderr only
        tracing::info!(target: "mcp", method = %request.method, "Handling MCP request");

        let result = self.dispatch(&request.method, request.params);

        let Some(id) = request.id else {
            if let Err(e) = result {
                tracing::debug!(method = %request.method, error = %e, "Notification ignored");
            }
            return None;
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(Some(id), value),
            Err(e) => {
                tracing::warn!(method = %request.method, error = %e, "Request failed");
                JsonRpcResponse::failure(Some(id), JsonRpcError::from_doc_error(&e))
            }
        })
    }

    fn dispatch(&mut self, method: &str, params: Option<Value>) -> Result<Value> {
        match method {
            "initialize" => Ok(self.handle_initialize(params)),
            "notifications/initialized" => Ok(Value::Null),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": catalog::tool_definitions() })),
            "tools/call" => self.handle_tool_call(params),
            "resources/list" => Ok(json!({ "resources": catalog::resource_definitions() })),
            "resources/templates/list" => Ok(json!({
                "resourceTemplates": catalog::resource_template_definitions()
            })),
            "resources/read" => self.handle_resource_read(params),
            "prompts/list" => Ok(json!({ "prompts": catalog::prompt_definitions() })),
            "prompts/get" => self.handle_prompt_get(params),
            _ => Err(DocError::UnknownMethod(method.to_string())),
        }
    }

    fn handle_initialize(&self, params: Option<Value>) -> Value {
        let protocol_version = params
            .as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION)
            .to_string();

        json!({
            "protocolVersion": protocol_version,
            "capabilities": {
                "tools": { "listChanged": false },
                "resources": { "subscribe": false, "listChanged": false },
                "prompts": { "listChanged": false },
            },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version,
            },
        })
    }

    /// `tools/call` - route `{name, arguments}` to a document operation
    fn handle_tool_call(&mut self, params: Option<Value>) -> Result<Value> {
        #[derive(Deserialize)]
        struct CallToolParams {
            name: String,
            arguments: Option<Value>,
        }

        let call: CallToolParams = parse_params(params)?;
        let tool = catalog::find_tool(&call.name)?;
        tracing::debug!(tool = tool.name, "Calling tool");

        match tool.name {
            catalog::TOOL_READ_DOC => {
                let args: ReadDocParams = parse_params(call.arguments)?;
                operations::read_document(&self.store, &args.doc_id).map(text_content)
            }
            catalog::TOOL_EDIT_DOC => {
                let args: EditDocParams = parse_params(call.arguments)?;
                let result = operations::edit_document(
                    &mut self.store,
                    &args.doc_id,
                    &args.old_string,
                    &args.new_string,
                )?;
                Ok(text_content(serde_json::to_string(&result)?))
            }
            catalog::TOOL_SUMMARIZE_DOC => {
                let args: SummarizeDocParams = parse_params(call.arguments)?;
                operations::summarize_document(&self.store, &args.doc_id).map(text_content)
            }
            other => Err(DocError::UnknownTool(other.to_string())),
        }
    }

    /// `resources/read` - serve the id list or one document by URI
    fn handle_resource_read(&self, params: Option<Value>) -> Result<Value> {
        #[derive(Deserialize)]
        struct ReadResourceParams {
            uri: String,
        }

        let params: ReadResourceParams = parse_params(params)?;

        let (mime_type, text) = match catalog::parse_resource_uri(&params.uri)? {
            ResourceTarget::DocIds => {
                let ids = operations::list_document_ids(&self.store);
                ("application/json", serde_json::to_string(&ids)?)
            }
            ResourceTarget::Contents(doc_id) => (
                "text/plain",
                operations::get_document_contents(&self.store, &doc_id)?,
            ),
        };

        Ok(json!({
            "contents": [{
                "uri": params.uri,
                "mimeType": mime_type,
                "text": text,
            }]
        }))
    }

    /// `prompts/get` - build a prompt payload for a downstream model
    fn handle_prompt_get(&self, params: Option<Value>) -> Result<Value> {
        #[derive(Deserialize)]
        struct GetPromptParams {
            name: String,
            arguments: Option<Value>,
        }

        let request: GetPromptParams = parse_params(params)?;
        if request.name != catalog::PROMPT_FORMAT {
            return Err(DocError::UnknownPrompt(request.name));
        }

        let args: FormatPromptParams = parse_params(request.arguments)?;
        let message = operations::format_document_prompt(&self.store, &args.doc_id)?;

        Ok(json!({
            "description": format!("Rewrite {} in Markdown format", args.doc_id),
            "messages": [prompt_message_json(&message)],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::from_config(&Config::default()).unwrap()
    }

    fn request(id: Option<Value>, method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_ping() {
        let mut server = server();
        let resp = server
            .handle_request(request(Some(json!(1)), "ping", None))
            .await
            .unwrap();
        assert!(resp.result.is_some());
        assert!(resp.error.is_none());
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let mut server = server();
        let resp = server
            .handle_request(request(None, "notifications/initialized", None))
            .await;
        assert!(resp.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let mut server = server();
        let resp = server
            .handle_request(request(Some(json!(7)), "documents/delete", None))
            .await
            .unwrap();
        let error = resp.error.unwrap();
        assert_eq!(error.code, JsonRpcError::METHOD_NOT_FOUND);
        assert_eq!(resp.id, Some(json!(7)));
    }

    #[test]
    fn test_not_found_error_carries_id() {
        let error = JsonRpcError::from_doc_error(&DocError::not_found("missing.md"));
        assert_eq!(error.code, JsonRpcError::RESOURCE_NOT_FOUND);
        assert_eq!(error.message, "Document missing.md not found");
        assert_eq!(error.data, Some(json!({ "doc_id": "missing.md" })));
    }

    #[test]
    fn test_missing_params() {
        let err = parse_params::<ReadDocParams>(None).unwrap_err();
        assert!(matches!(err, DocError::ValidationError(ref m) if m == "Missing params"));
    }
}
