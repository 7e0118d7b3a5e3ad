//! Tool trait, registry, and context bridge.
//!
//! Every core operation is exposed as a [`Tool`]: a named, described,
//! JSON-Schema-parameterized action that agents can discover via
//! `GET /tools/list` and call via `POST /tools/{name}`. Users can
//! implement [`Tool`] in Rust to serve custom tools alongside the
//! built-ins.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              ToolRegistry                │
//! │  ┌────────────────────┐ ┌─────────────┐ │
//! │  │ Built-in            │ │  Custom     │ │
//! │  │ analyze/add/get/    │ │  (Rust)     │ │
//! │  │ list/search/...     │ │  Tools      │ │
//! │  └────────────────────┘ └─────────────┘ │
//! └──────────────┬───────────────────────────┘
//!                ▼
//!          run_server() → tool HTTP API
//! ```

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::analyze::Analyzer;
use crate::config::Config;
use crate::models::{
    Analysis, Document, DocumentDraft, DocumentPatch, SearchResult, TextReport,
};
use crate::search::{self, SearchOptions};
use crate::store::DocumentStore;

// ═══════════════════════════════════════════════════════════════════════
// Tool Trait
// ═══════════════════════════════════════════════════════════════════════

/// A tool that agents can discover and call.
///
/// # Lifecycle
///
/// 1. The tool is registered via [`ToolRegistry::register`].
/// 2. [`name`](Tool::name), [`description`](Tool::description), and
///    [`parameters_schema`](Tool::parameters_schema) are called at
///    startup for the tool list.
/// 3. [`execute`](Tool::execute) is called each time an agent invokes
///    the tool.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name; used as the route path (`POST /tools/{name}`).
    fn name(&self) -> &str;

    /// One-line description for agent discovery.
    fn description(&self) -> &str;

    /// Whether this tool is one of the built-ins. Defaults to `false`.
    fn is_builtin(&self) -> bool {
        false
    }

    /// JSON Schema for the tool's parameters: an object schema with
    /// `properties` and optionally `required`.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with validated parameters.
    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value>;
}

// ═══════════════════════════════════════════════════════════════════════
// ToolContext
// ═══════════════════════════════════════════════════════════════════════

/// Bridge between tools and the analysis core.
///
/// Holds the shared document store and analyzer for the life of the
/// process. All methods delegate to the same core functions used by the
/// CLI, so custom tools have identical capabilities.
pub struct ToolContext {
    config: Arc<Config>,
    store: Arc<DocumentStore>,
    analyzer: Arc<Analyzer>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>, store: Arc<DocumentStore>, analyzer: Arc<Analyzer>) -> Self {
        Self {
            config,
            store,
            analyzer,
        }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Analyze an ad-hoc piece of text without storing anything.
    pub fn analyze_text(&self, text: &str, keyword_limit: Option<usize>) -> TextReport {
        self.analyzer.report(text, keyword_limit)
    }

    /// Cached-or-fresh analysis of a stored document.
    pub fn analyze_document(&self, id: &str) -> Result<Analysis> {
        Ok(self.store.analyze_document(id, &self.analyzer)?)
    }

    /// Rank stored documents against a query.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let opts = SearchOptions {
            limit: Some(limit.unwrap_or(self.config.search.limit)),
            title_weight: self.config.search.title_weight,
            content_weight: self.config.search.content_weight,
        };
        search::search(&self.store.list(), query, &opts)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Parameter validation
// ═══════════════════════════════════════════════════════════════════════

/// Validate `params` against a tool's parameter schema: required fields,
/// primitive types, and enum membership. Returns the validated object.
pub fn validate_params(schema: &Value, params: &Value) -> Result<Value> {
    let empty = serde_json::Map::new();
    let params_obj = params.as_object().unwrap_or(&empty).clone();

    let properties = schema
        .get("properties")
        .and_then(|p| p.as_object())
        .cloned()
        .unwrap_or_default();

    let required: Vec<String> = schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default();

    for req_field in &required {
        if !params_obj.contains_key(req_field) {
            bail!("missing required parameter: {}", req_field);
        }
    }

    for (prop_name, prop_schema) in &properties {
        if let Some(value) = params_obj.get(prop_name) {
            if let Some(expected_type) = prop_schema.get("type").and_then(|t| t.as_str()) {
                let type_ok = match expected_type {
                    "string" => value.is_string(),
                    "integer" => value.is_i64() || value.is_u64(),
                    "number" => value.is_number(),
                    "boolean" => value.is_boolean(),
                    "array" => value.is_array(),
                    "object" => value.is_object(),
                    _ => true,
                };
                if !type_ok {
                    bail!(
                        "parameter '{}' must be of type '{}', got {}",
                        prop_name,
                        expected_type,
                        json_type_name(value)
                    );
                }
            }

            if let Some(enum_values) = prop_schema.get("enum").and_then(|e| e.as_array()) {
                if !enum_values.contains(value) {
                    bail!(
                        "parameter '{}' must be one of {:?}",
                        prop_name,
                        enum_values
                    );
                }
            }
        }
    }

    Ok(Value::Object(params_obj))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read an optional integer parameter, clamping negatives to 0.
fn optional_limit(params: &Value, key: &str) -> Option<usize> {
    params
        .get(key)
        .and_then(|v| v.as_i64())
        .map(|v| v.max(0) as usize)
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str> {
    match params.get(key).and_then(|v| v.as_str()) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => bail!("{} must not be empty", key),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Built-in Tool Implementations
// ═══════════════════════════════════════════════════════════════════════

/// Analyze an ad-hoc piece of text.
pub struct AnalyzeTextTool;

#[async_trait]
impl Tool for AnalyzeTextTool {
    fn name(&self) -> &str {
        "analyze_text"
    }

    fn description(&self) -> &str {
        "Analyze text for sentiment, keywords, readability, and statistics"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": { "type": "string", "description": "Text to analyze" },
                "keyword_limit": { "type": "integer", "description": "Max keywords to return", "default": 10 }
            },
            "required": ["text"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let text = params.get("text").and_then(|v| v.as_str()).unwrap_or("");
        let report = ctx.analyze_text(text, optional_limit(&params, "keyword_limit"));
        Ok(serde_json::to_value(&report)?)
    }
}

/// Cached-or-fresh analysis of a stored document.
pub struct AnalyzeDocumentTool;

#[async_trait]
impl Tool for AnalyzeDocumentTool {
    fn name(&self) -> &str {
        "analyze_document"
    }

    fn description(&self) -> &str {
        "Analyze a stored document, reusing the cached analysis when valid"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Document id" }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let id = required_str(&params, "id")?;
        let analysis = ctx.analyze_document(id)?;
        Ok(serde_json::to_value(&analysis)?)
    }
}

/// Create a document.
pub struct AddDocumentTool;

#[async_trait]
impl Tool for AddDocumentTool {
    fn name(&self) -> &str {
        "add_document"
    }

    fn description(&self) -> &str {
        "Add a document to the collection"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "title": { "type": "string", "description": "Document title" },
                "content": { "type": "string", "description": "Document body text" },
                "author": { "type": "string" },
                "category": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } },
                "metadata": { "type": "object" }
            },
            "required": ["title", "content"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let draft: DocumentDraft = serde_json::from_value(params)?;
        let document = ctx.store().add(draft);
        Ok(serde_json::to_value(&document)?)
    }
}

/// Fetch a document by id.
pub struct GetDocumentTool;

#[async_trait]
impl Tool for GetDocumentTool {
    fn name(&self) -> &str {
        "get_document"
    }

    fn description(&self) -> &str {
        "Retrieve a document by id"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Document id" }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let id = required_str(&params, "id")?;
        let document = ctx.store().get(id)?;
        Ok(serde_json::to_value(&document)?)
    }
}

/// List documents, optionally filtered and bounded.
pub struct ListDocumentsTool;

#[async_trait]
impl Tool for ListDocumentsTool {
    fn name(&self) -> &str {
        "list_documents"
    }

    fn description(&self) -> &str {
        "List documents in insertion order, with optional category/author filters"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": { "type": "integer", "description": "Max documents to return" },
                "category": { "type": "string", "description": "Exact-match category filter" },
                "author": { "type": "string", "description": "Exact-match author filter" }
            }
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let mut documents: Vec<Document> =
            if let Some(category) = params.get("category").and_then(|v| v.as_str()) {
                ctx.store().list_by_category(category)
            } else if let Some(author) = params.get("author").and_then(|v| v.as_str()) {
                ctx.store().list_by_author(author)
            } else {
                ctx.store().list()
            };

        if let Some(limit) = optional_limit(&params, "limit") {
            documents.truncate(limit);
        }

        Ok(serde_json::json!({ "documents": documents }))
    }
}

/// Rank documents against a query.
pub struct SearchDocumentsTool;

#[async_trait]
impl Tool for SearchDocumentsTool {
    fn name(&self) -> &str {
        "search_documents"
    }

    fn description(&self) -> &str {
        "Search the collection, ranking title matches above content matches"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Search query" },
                "limit": { "type": "integer", "description": "Max results", "default": 10 }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
        let results = ctx.search(query, optional_limit(&params, "limit"));
        Ok(serde_json::json!({ "results": results }))
    }
}

/// Merge new field values into a stored document.
pub struct UpdateDocumentTool;

#[async_trait]
impl Tool for UpdateDocumentTool {
    fn name(&self) -> &str {
        "update_document"
    }

    fn description(&self) -> &str {
        "Update fields of a stored document, invalidating its cached analysis"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Document id" },
                "title": { "type": "string" },
                "content": { "type": "string" },
                "author": { "type": "string" },
                "category": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } },
                "metadata": { "type": "object" }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let id = required_str(&params, "id")?.to_string();
        let patch: DocumentPatch = serde_json::from_value(params)?;
        let document = ctx.store().update(&id, patch)?;
        Ok(serde_json::to_value(&document)?)
    }
}

/// Remove a document and its cached analysis.
pub struct DeleteDocumentTool;

#[async_trait]
impl Tool for DeleteDocumentTool {
    fn name(&self) -> &str {
        "delete_document"
    }

    fn description(&self) -> &str {
        "Delete a document from the collection"
    }

    fn is_builtin(&self) -> bool {
        true
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Document id" }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, params: Value, ctx: &ToolContext) -> Result<Value> {
        let id = required_str(&params, "id")?;
        let deleted = ctx.store().delete(id);
        Ok(serde_json::json!({ "deleted": deleted }))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════

/// Registry for tools (built-in and custom Rust).
///
/// Use [`ToolRegistry::with_builtins`] to create a registry pre-loaded
/// with the core tools, then optionally call
/// [`register`](ToolRegistry::register) to add custom ones.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Create a registry pre-loaded with every built-in tool.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AnalyzeTextTool));
        registry.register(Box::new(AnalyzeDocumentTool));
        registry.register(Box::new(AddDocumentTool));
        registry.register(Box::new(GetDocumentTool));
        registry.register(Box::new(ListDocumentsTool));
        registry.register(Box::new(SearchDocumentsTool));
        registry.register(Box::new(UpdateDocumentTool));
        registry.register(Box::new(DeleteDocumentTool));
        registry
    }

    /// Register a tool.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Absorb every tool from `other`, keeping registration order.
    pub fn merge(&mut self, other: ToolRegistry) {
        self.tools.extend(other.tools);
    }

    /// Get all registered tools.
    pub fn tools(&self) -> &[Box<dyn Tool>] {
        &self.tools
    }

    /// Find a tool by name.
    pub fn find(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
