//! Tool wrapper layer.
//!
//! Adapts the resource clients into a uniform tool-calling convention: flat
//! parameter objects in, `{success, <key>, count, total}` envelopes out.
//! Parameters are validated against each tool's generated JSON schema
//! before execution; adapter errors propagate untouched to the invocation
//! boundary, which is responsible for failure envelopes.

use crate::api::GoHighLevelClient;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

pub mod tools;

/// Tool layer errors
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Parameter validation failed: {0}")]
    ValidationError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),
    #[error("Tool execution failed: {0}")]
    ExecutionError(String),
}

/// Describes one registered tool: name, human description, and the JSON
/// schema its parameters are validated against.
#[derive(Debug, Clone)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

type ToolHandler = Arc<
    dyn Fn(Arc<GoHighLevelClient>, Value) -> BoxFuture<'static, Result<Value, ToolError>>
        + Send
        + Sync,
>;

struct RegisteredTool {
    description: ToolDescription,
    handler: ToolHandler,
}

/// Registry of tool wrappers over one API client.
///
/// The client is an explicit constructor argument; registration functions
/// receive the registry they populate. No module-level state.
pub struct ToolRegistry {
    client: Arc<GoHighLevelClient>,
    tools: HashMap<String, RegisteredTool>,
}

impl ToolRegistry {
    pub fn new(client: Arc<GoHighLevelClient>) -> Self {
        Self {
            client,
            tools: HashMap::new(),
        }
    }

    /// Create a registry with every built-in tool registered.
    pub fn with_all_tools(client: Arc<GoHighLevelClient>) -> Self {
        let mut registry = Self::new(client);
        tools::register_all(&mut registry);
        registry
    }

    /// Register a tool. The parameter schema is generated from `P`; the
    /// handler receives the shared client and the decoded parameters.
    pub fn register<P, F, Fut>(&mut self, name: &str, description: &str, handler: F)
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(Arc<GoHighLevelClient>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
    {
        let schema = schemars::gen::SchemaGenerator::default().into_root_schema_for::<P>();
        let parameters = serde_json::to_value(schema).unwrap_or(Value::Null);

        let handler = Arc::new(handler);
        let boxed: ToolHandler = Arc::new(move |client, params| {
            let handler = handler.clone();
            Box::pin(async move {
                let params: P = serde_json::from_value(params)
                    .map_err(|e| ToolError::ValidationError(e.to_string()))?;
                handler(client, params).await
            })
        });

        self.tools.insert(
            name.to_string(),
            RegisteredTool {
                description: ToolDescription {
                    name: name.to_string(),
                    description: description.to_string(),
                    parameters,
                },
                handler: boxed,
            },
        );
    }

    /// Get a tool description
    pub fn describe_tool(&self, tool_name: &str) -> Option<&ToolDescription> {
        self.tools.get(tool_name).map(|tool| &tool.description)
    }

    /// Get the sorted list of registered tool names
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Execute a tool with schema-validated parameters
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        parameters: &Value,
    ) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        self.validate_parameters(tool, parameters)?;

        (tool.handler)(self.client.clone(), parameters.clone()).await
    }

    /// Validate a parameter object against the tool's schema
    fn validate_parameters(
        &self,
        tool: &RegisteredTool,
        parameters: &Value,
    ) -> Result<(), ToolError> {
        let validator = jsonschema::validator_for(&tool.description.parameters)
            .map_err(|e| ToolError::SchemaError(format!("Schema compilation error: {e}")))?;

        validator.validate(parameters).map_err(|errors| {
            let error_messages: Vec<String> = errors
                .map(|e| format!("At '{}': {}", e.instance_path, e))
                .collect();
            ToolError::ValidationError(error_messages.join("; "))
        })
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::ExecutionError(e.to_string()))
}

/// `{success, <key>: [...], count, total}` for list results.
pub(crate) fn page_envelope<T: Serialize>(
    key: &str,
    page: &crate::models::Page<T>,
) -> Result<Value, ToolError> {
    let mut envelope = serde_json::Map::new();
    envelope.insert("success".to_string(), Value::Bool(true));
    envelope.insert(key.to_string(), to_json(&page.items)?);
    envelope.insert("count".to_string(), Value::from(page.count as u64));
    envelope.insert("total".to_string(), Value::from(page.total as u64));
    Ok(Value::Object(envelope))
}

/// `{success, <key>: {...}}` for single-entity results.
pub(crate) fn entity_envelope<T: Serialize>(key: &str, entity: &T) -> Result<Value, ToolError> {
    let mut envelope = serde_json::Map::new();
    envelope.insert("success".to_string(), Value::Bool(true));
    envelope.insert(key.to_string(), to_json(entity)?);
    Ok(Value::Object(envelope))
}

/// `{success, message}` for delete/toggle results.
pub(crate) fn message_envelope(success: bool, message: &str) -> Value {
    serde_json::json!({ "success": success, "message": message })
}
