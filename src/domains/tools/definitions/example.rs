//! Example tool definition.
//!
//! Processes a message with a formatting option and repeats it. This is the
//! smallest complete tool: a parameter struct with a derived schema, a
//! validation boundary, an `execute()` that cannot fail, and a `MODULE`
//! entry for the registrar.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, instrument};

use crate::core::context::ToolContext;
use crate::domains::tools::{ToolError, ToolModule};

/// Prefix of every result produced by the tool.
pub const RESULT_PREFIX: &str = "Example Tool Result: ";

/// Smallest accepted `repeat` value.
pub const MIN_REPEAT: u32 = 1;

/// Largest accepted `repeat` value.
pub const MAX_REPEAT: u32 = 10;

// ============================================================================
// Tool Parameters
// ============================================================================

/// How the message is formatted before being repeated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Uppercase,
    Lowercase,
    #[default]
    Titlecase,
}

impl TextFormat {
    /// Apply this format to a message.
    pub fn apply(self, message: &str) -> String {
        match self {
            Self::Uppercase => message.to_uppercase(),
            Self::Lowercase => message.to_lowercase(),
            Self::Titlecase => message
                .split(' ')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Parameters for the example tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExampleToolParams {
    /// The message to process.
    #[schemars(description = "The message to process")]
    pub message: String,

    /// How to format the output (default: titlecase).
    #[schemars(description = "How to format the output")]
    #[serde(default)]
    pub format: TextFormat,

    /// Number of times to repeat the message (1-10, default: 1).
    #[schemars(description = "Number of times to repeat the message")]
    #[schemars(range(min = 1, max = 10))]
    #[serde(default = "default_repeat", deserialize_with = "deserialize_repeat")]
    pub repeat: u32,
}

fn default_repeat() -> u32 {
    MIN_REPEAT
}

/// Accept any JSON number with no fractional part (`2` and `2.0` alike)
/// inside `[MIN_REPEAT, MAX_REPEAT]`.
fn deserialize_repeat<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    let whole = number
        .as_f64()
        .filter(|v| v.fract() == 0.0)
        .ok_or_else(|| de::Error::custom(format!("repeat must be an integer, got {}", number)))?;

    if whole < f64::from(MIN_REPEAT) || whole > f64::from(MAX_REPEAT) {
        return Err(de::Error::custom(format!(
            "repeat must be between {} and {}, got {}",
            MIN_REPEAT, MAX_REPEAT, number
        )));
    }

    Ok(whole as u32)
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Example tool - formats and repeats a message.
pub struct ExampleTool;

impl ExampleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "exampleTool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "A simple example tool that demonstrates how to create new tools for your MCP server. Processes text with different formatting options.";

    /// Registrar entry.
    pub const MODULE: ToolModule = ToolModule {
        name: Self::NAME,
        describe: Self::to_tool,
        call: Self::call,
    };

    /// Validate raw call arguments against the parameter schema.
    ///
    /// Everything the schema forbids is rejected here, so `execute()` only
    /// ever sees valid input.
    pub fn parse_params(arguments: JsonObject) -> Result<ExampleToolParams, ToolError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Build the result text for validated parameters.
    pub fn render(params: &ExampleToolParams) -> String {
        let processed = params.format.apply(&params.message);
        format!("{}{}", RESULT_PREFIX, processed.repeat(params.repeat as usize))
    }

    /// Execute the tool logic.
    #[instrument(skip_all, fields(format = ?params.format, repeat = params.repeat))]
    pub fn execute(params: &ExampleToolParams) -> CallToolResult {
        debug!("Example tool called");
        CallToolResult::success(vec![Content::text(Self::render(params))])
    }

    /// The example does not read the platform context.
    fn call(_ctx: &ToolContext, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        let params = Self::parse_params(arguments)?;
        Ok(Self::execute(&params))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ExampleToolParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Upper-case the first character of a word and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn run(value: serde_json::Value) -> String {
        let params = ExampleTool::parse_params(args(value)).unwrap();
        let result = ExampleTool::execute(&params);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_to_titlecase_once() {
        assert_eq!(
            run(json!({ "message": "hello world" })),
            "Example Tool Result: Hello World"
        );
    }

    #[test]
    fn test_uppercase_repeated() {
        assert_eq!(
            run(json!({ "message": "Ab Cd", "format": "uppercase", "repeat": 2 })),
            "Example Tool Result: AB CDAB CD"
        );
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(
            run(json!({ "message": "MiXeD Case", "format": "lowercase" })),
            "Example Tool Result: mixed case"
        );
    }

    #[test]
    fn test_titlecase_lowers_remainder() {
        assert_eq!(
            run(json!({ "message": "hELLO wORLD", "format": "titlecase" })),
            "Example Tool Result: Hello World"
        );
    }

    #[test]
    fn test_titlecase_splits_on_single_spaces() {
        assert_eq!(TextFormat::Titlecase.apply("a  b"), "A  B");
        assert_eq!(TextFormat::Titlecase.apply(" lead"), " Lead");
        assert_eq!(TextFormat::Titlecase.apply("tab\tsep"), "Tab\tsep");
        assert_eq!(TextFormat::Titlecase.apply(""), "");
    }

    #[test]
    fn test_titlecase_non_ascii() {
        assert_eq!(TextFormat::Titlecase.apply("élan ÉCOLE"), "Élan École");
    }

    #[test]
    fn test_output_scales_linearly_with_repeat() {
        let message = "abc";
        let base = run(json!({ "message": message, "repeat": 1 })).len() - RESULT_PREFIX.len();
        for repeat in MIN_REPEAT..=MAX_REPEAT {
            let out = run(json!({ "message": message, "repeat": repeat }));
            assert_eq!(out.len() - RESULT_PREFIX.len(), base * repeat as usize);
        }
    }

    #[test]
    fn test_repeat_out_of_range_rejected() {
        for repeat in [0, 11, 100] {
            let err =
                ExampleTool::parse_params(args(json!({ "message": "x", "repeat": repeat })))
                    .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)));
        }
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let cases = [
            json!({}),
            json!({ "message": 42 }),
            json!({ "message": "x", "format": "shouting" }),
            json!({ "message": "x", "repeat": -1 }),
            json!({ "message": "x", "repeat": 2.5 }),
            json!({ "message": "x", "repeat": "3" }),
        ];
        for case in cases {
            assert!(
                ExampleTool::parse_params(args(case.clone())).is_err(),
                "expected rejection for {}",
                case
            );
        }
    }

    #[test]
    fn test_whole_float_repeat_accepted() {
        assert_eq!(
            run(json!({ "message": "ab", "repeat": 2.0 })),
            "Example Tool Result: AbAb"
        );
        assert_eq!(
            run(json!({ "message": "x", "format": "lowercase", "repeat": 10.0 })),
            "Example Tool Result: xxxxxxxxxx"
        );
        assert!(ExampleTool::parse_params(args(json!({ "message": "x", "repeat": 10.5 }))).is_err());
        assert!(ExampleTool::parse_params(args(json!({ "message": "x", "repeat": 0.0 }))).is_err());
    }

    #[test]
    fn test_module_call_envelope() {
        let result = ExampleTool::MODULE
            .invoke(
                &ToolContext::default(),
                Some(args(json!({ "message": "hi", "format": "uppercase" }))),
            )
            .unwrap();
        let envelope = serde_json::to_value(&result).unwrap();
        assert_eq!(envelope["isError"], json!(false));
        assert_eq!(envelope["content"][0]["type"], json!("text"));
        assert_eq!(envelope["content"][0]["text"], json!("Example Tool Result: HI"));
    }

    #[test]
    fn test_module_call_requires_message() {
        let err = ExampleTool::MODULE.invoke(&ToolContext::default(), None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_tool_schema() {
        let tool = ExampleTool::to_tool();
        assert_eq!(tool.name, "exampleTool");
        assert_eq!(tool.description.as_deref(), Some(ExampleTool::DESCRIPTION));

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["required"], json!(["message"]));
        assert_eq!(schema["properties"]["repeat"]["maximum"].as_f64(), Some(10.0));
        assert_eq!(schema["properties"]["repeat"]["minimum"].as_f64(), Some(1.0));

        let rendered = schema.to_string();
        for value in ["uppercase", "lowercase", "titlecase"] {
            assert!(rendered.contains(value));
        }
    }
}
