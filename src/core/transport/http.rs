//! HTTP transport.
//!
//! Stateless JSON-RPC 2.0 over `POST`, for clients that cannot hold an MCP
//! session (curl, browsers, edge proxies). Every method is answered from the
//! same `McpServer` the STDIO transport serves, so `initialize`,
//! `tools/list` and `tools/call` report exactly what an rmcp peer would see.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{CallToolRequestParam, ErrorCode},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{Span, debug, info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;

const JSONRPC_VERSION: &str = "2.0";

/// An incoming JSON-RPC call or notification.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// A JSON-RPC reply carrying either a result or an error.
#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(McpError),
}

impl RpcResponse {
    fn new(id: Option<Value>, outcome: Result<Value, McpError>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: match outcome {
                Ok(value) => Outcome::Result(value),
                Err(error) => Outcome::Error(error),
            },
        }
    }

    /// The result, or the error if the call failed.
    pub fn into_result(self) -> Result<Value, McpError> {
        match self.outcome {
            Outcome::Result(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

/// Build the axum application for `server`.
pub fn router(server: McpServer, config: &HttpConfig) -> Router {
    let app = Router::new()
        .route(&config.path, post(handle_rpc))
        .route("/health", get(health))
        .route("/", get(describe))
        .layer(TraceLayer::new_for_http())
        .with_state(server);

    if config.cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Bind the listener and serve until it fails.
pub async fn serve(server: McpServer, config: HttpConfig) -> TransportResult<()> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| TransportError::bind(&address, e))?;

    info!(
        "{} ready on http://{}{} (CORS {})",
        server.name(),
        address,
        config.path,
        if config.cors { "on" } else { "off" }
    );

    axum::serve(listener, router(server, &config))
        .await
        .map_err(|e| TransportError::Stopped(e.to_string()))
}

async fn describe(State(server): State<McpServer>) -> Json<Value> {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "http",
        "tools": server.tools().len(),
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcResponse> {
    Span::current().record("method", request.method.as_str());
    debug!("JSON-RPC request");
    Json(respond(&server, request))
}

/// Answer one JSON-RPC request.
pub fn respond(server: &McpServer, request: RpcRequest) -> RpcResponse {
    let outcome = if request.jsonrpc == JSONRPC_VERSION {
        dispatch(server, &request.method, request.params)
    } else {
        Err(McpError::invalid_request(
            format!("unsupported jsonrpc version '{}'", request.jsonrpc),
            None,
        ))
    };
    RpcResponse::new(request.id, outcome)
}

fn dispatch(server: &McpServer, method: &str, params: Value) -> Result<Value, McpError> {
    match method {
        "initialize" => to_value(&server.get_info()),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": server.tools() })),
        "tools/call" => {
            let call: CallToolRequestParam = serde_json::from_value(params)
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            info!("Calling tool: {}", call.name);
            let result = server.call_tool(&call.name, call.arguments)?;
            to_value(&result)
        }
        // Stateless: notifications need no state change.
        notification if notification.starts_with("notifications/") => Ok(Value::Null),
        other => {
            warn!("Unknown method: {}", other);
            Err(McpError::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("method not found: {}", other),
                None,
            ))
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, McpError> {
    serde_json::to_value(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::ToolError;

    fn rpc(method: &str, params: Value) -> Result<Value, McpError> {
        let server = McpServer::new(Config::default());
        let request = RpcRequest {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        };
        respond(&server, request).into_result()
    }

    #[test]
    fn test_initialize_matches_server_info() {
        let server = McpServer::new(Config::default());
        let result = rpc("initialize", Value::Null).unwrap();
        assert_eq!(result, serde_json::to_value(server.get_info()).unwrap());
        assert_eq!(result["serverInfo"]["name"], json!("remote-mcp-server"));
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_tools_list_in_registration_order() {
        let result = rpc("tools/list", Value::Null).unwrap();
        let names: Vec<_> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["whoami", "exampleTool"]);
        assert!(result["tools"][1]["inputSchema"]["properties"]["repeat"].is_object());
    }

    #[test]
    fn test_tools_call() {
        let result = rpc(
            "tools/call",
            json!({
                "name": "exampleTool",
                "arguments": { "message": "hello world", "repeat": 2.0 }
            }),
        )
        .unwrap();
        assert_eq!(result["isError"], json!(false));
        assert_eq!(
            result["content"][0]["text"],
            json!("Example Tool Result: Hello WorldHello World")
        );
    }

    #[test]
    fn test_tools_call_rejects_out_of_range_repeat() {
        let err = rpc(
            "tools/call",
            json!({ "name": "exampleTool", "arguments": { "message": "x", "repeat": 0 } }),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_tool_uses_rmcp_error_code() {
        let err = rpc("tools/call", json!({ "name": "nope" })).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.code, McpError::from(ToolError::not_found("nope")).code);
    }

    #[test]
    fn test_tools_call_without_name() {
        let err = rpc("tools/call", json!({ "arguments": {} })).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_invalid_version_and_unknown_method() {
        let server = McpServer::new(Config::default());
        let request = RpcRequest {
            jsonrpc: "1.0".to_string(),
            id: None,
            method: "ping".to_string(),
            params: Value::Null,
        };
        let err = respond(&server, request).into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_REQUEST);

        let err = rpc("resources/list", Value::Null).unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_response_envelope() {
        let server = McpServer::new(Config::default());
        let request: RpcRequest =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 7, "method": "ping" })).unwrap();
        let body = serde_json::to_value(respond(&server, request)).unwrap();
        assert_eq!(body, json!({ "jsonrpc": "2.0", "id": 7, "result": {} }));

        let request: RpcRequest =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 8, "method": "nope" })).unwrap();
        let body = serde_json::to_value(respond(&server, request)).unwrap();
        assert_eq!(body["error"]["code"], json!(-32601));
        assert!(body.get("result").is_none());
    }

    #[test]
    fn test_health_reports_rfc3339_timestamp() {
        let Json(body) = tokio_test::block_on(health());
        assert_eq!(body["status"], json!("ok"));
        let stamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
