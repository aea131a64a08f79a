//! MCP tool handlers for the searchable fields server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! Each tool validates its input against the configuration, calls into the
//! index and query builders, and records metrics.

use crate::algorithms;
use crate::config::Config;
use crate::domain::SearchMode;
use crate::error::{RequestError, RequestResult};
use crate::index;
use crate::metrics::Metrics;
use crate::query::{self, ContainmentPredicateFactory};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

/// The MCP server that exposes searchable field generation as tools.
#[derive(Clone)]
pub struct SearchableService {
    config: Config,
    metrics: Metrics,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for SearchableService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "searchable-fields".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Builds n-gram and prefix index fields for document databases, and the array-containment predicates that query them.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MakeSearchableParams {
    /// Original document field name
    pub key: String,
    /// Raw text to index
    pub value: String,
    /// Mode names (`fullTextSearch`, `autoComplete`); omitted means the configured defaults
    #[serde(default)]
    pub search_type: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchByParams {
    /// Original document field name
    pub key: String,
    /// Text to search for
    pub value: String,
    /// `fullTextSearch`; any other name queries the autocomplete field
    pub search_type: String,
    /// Require every trigram rather than any (full-text only)
    #[serde(default)]
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateGramsParams {
    /// Window size, 2 or 3
    pub n: usize,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratePrefixesParams {
    pub text: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: RequestError) -> McpError {
    let code = match e {
        RequestError::Encode(_) => ErrorCode::INTERNAL_ERROR,
        RequestError::ValueTooLong { .. } | RequestError::Gram(_) => ErrorCode::INVALID_PARAMS,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl SearchableService {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            metrics: Metrics::new(),
            tool_router: Self::tool_router(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the index fields for one value.
    #[tool(
        name = "makeSearchable",
        description = "Build the index fields for one document field. fullTextSearch adds trigrams under fts_tri_<key>, autoComplete adds lowercased word prefixes under ac_pre_<key>. Returns an object mapping field names to token arrays."
    )]
    async fn make_searchable(
        &self,
        params: Parameters<MakeSearchableParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("makeSearchable", || self.build_fields(params.0))
    }

    /// Build a search predicate for one value.
    #[tool(
        name = "searchBy",
        description = "Build the array-containment predicate that searches the index fields of a document field. Returns {field, op, value}."
    )]
    async fn search_by(
        &self,
        params: Parameters<SearchByParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("searchBy", || self.build_predicate(params.0))
    }

    /// Run the gram generator directly.
    #[tool(
        name = "generateGrams",
        description = "Generate the bigrams (n = 2) or trigrams (n = 3) of a text. Returns {type, arr}."
    )]
    async fn generate_grams(
        &self,
        params: Parameters<GenerateGramsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("generateGrams", || self.grams(params.0))
    }

    /// Run the prefix generator directly.
    #[tool(
        name = "generatePrefixes",
        description = "Generate the prefixes of every whitespace-separated word of a lowercased text. Returns {type, arr}."
    )]
    async fn generate_prefixes(
        &self,
        params: Parameters<GeneratePrefixesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("generatePrefixes", || self.prefixes(params.0))
    }

    /// Report service counters.
    #[tool(name = "getMetrics", description = "Report request and token counters")]
    async fn get_metrics(&self) -> Result<CallToolResult, McpError> {
        self.run_tool("getMetrics", || Ok(serde_json::to_value(self.metrics.summary())?))
    }
}

impl SearchableService {
    /// Build the `makeSearchable` result.
    pub fn build_fields(&self, params: MakeSearchableParams) -> RequestResult<Value> {
        self.check_length(&params.value)?;
        let fields = match params.search_type {
            Some(modes) => {
                let ignored = modes
                    .iter()
                    .filter(|m| SearchMode::from_name(m.as_str()).is_none())
                    .count();
                self.metrics.record_ignored_modes(ignored);
                index::make_searchable(&params.key, &params.value, modes.as_slice())
            }
            None => index::make_searchable_with(
                &params.key,
                &params.value,
                &self.config.default_modes,
            ),
        };
        self.metrics
            .record_fields_built(fields.len(), fields.token_count());
        Ok(serde_json::to_value(fields)?)
    }

    /// Build the `searchBy` result.
    pub fn build_predicate(&self, params: SearchByParams) -> RequestResult<Value> {
        self.check_length(&params.value)?;
        let mode = SearchMode::for_query(&params.search_type);
        let strict = params.strict.unwrap_or(self.config.default_strict);
        let predicate = query::search_by(
            &ContainmentPredicateFactory,
            &params.key,
            &params.value,
            mode,
            strict,
        );
        self.metrics.record_predicate_built();
        Ok(serde_json::to_value(predicate)?)
    }

    /// Build the `generateGrams` result.
    pub fn grams(&self, params: GenerateGramsParams) -> RequestResult<Value> {
        self.check_length(&params.text)?;
        let result = algorithms::generate_grams(params.n, &params.text)?;
        self.metrics.record_tokens_generated(result.len());
        Ok(serde_json::to_value(result)?)
    }

    /// Build the `generatePrefixes` result.
    pub fn prefixes(&self, params: GeneratePrefixesParams) -> RequestResult<Value> {
        self.check_length(&params.text)?;
        let result = algorithms::generate_prefixes(&params.text);
        self.metrics.record_tokens_generated(result.len());
        Ok(serde_json::to_value(result)?)
    }

    fn run_tool<F>(&self, tool_name: &'static str, f: F) -> Result<CallToolResult, McpError>
    where
        F: FnOnce() -> RequestResult<Value>,
    {
        self.metrics.record_request();

        let result = f().and_then(|value| Ok(serde_json::to_string_pretty(&value)?));
        match result {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                self.metrics.record_request_error();
                tracing::warn!(tool_name, error = %e, "Tool call failed");
                Err(to_mcp_error(e))
            }
        }
    }

    fn check_length(&self, value: &str) -> RequestResult<()> {
        let len = value.chars().count();
        if len > self.config.max_value_chars {
            return Err(RequestError::ValueTooLong {
                len,
                max: self.config.max_value_chars,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GramError;
    use serde_json::json;

    fn service() -> SearchableService {
        SearchableService::new(Config::default())
    }

    fn make_params(key: &str, value: &str, modes: Option<&[&str]>) -> MakeSearchableParams {
        MakeSearchableParams {
            key: key.to_string(),
            value: value.to_string(),
            search_type: modes.map(|m| m.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn search_params(key: &str, value: &str, mode: &str, strict: Option<bool>) -> SearchByParams {
        SearchByParams {
            key: key.to_string(),
            value: value.to_string(),
            search_type: mode.to_string(),
            strict,
        }
    }

    // Text content of a successful tool result, parsed back into JSON
    fn tool_output(result: CallToolResult) -> Value {
        let encoded = serde_json::to_value(&result).unwrap();
        let text = encoded["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_build_fields() {
        let value = service()
            .build_fields(make_params(
                "title",
                "test",
                Some(&["autoComplete", "fullTextSearch"]),
            ))
            .unwrap();
        assert_eq!(
            value,
            json!({"fts_tri_title": ["tes", "est"], "ac_pre_title": ["t", "te", "tes", "test"]})
        );
    }

    #[test]
    fn test_build_fields_uses_default_modes() {
        let config = Config {
            default_modes: vec![SearchMode::AutoComplete],
            ..Config::default()
        };
        let service = SearchableService::new(config);
        let value = service.build_fields(make_params("k", "ab", None)).unwrap();
        assert_eq!(value, json!({"ac_pre_k": ["a", "ab"]}));
    }

    #[test]
    fn test_build_fields_counts_ignored_modes() {
        let service = service();
        let value = service
            .build_fields(make_params("k", "ab", Some(&["nope"])))
            .unwrap();
        assert_eq!(value, json!({}));
        assert_eq!(service.metrics().ignored_modes_total(), 1);
    }

    #[test]
    fn test_build_predicate_default_strictness() {
        let config = Config {
            default_strict: false,
            ..Config::default()
        };
        let service = SearchableService::new(config);
        let value = service
            .build_predicate(search_params("name", "test", "fullTextSearch", None))
            .unwrap();
        assert_eq!(
            value,
            json!({"field": "fts_tri_name", "op": "array-contains-any", "value": ["tes", "est"]})
        );
    }

    #[test]
    fn test_build_predicate_autocomplete() {
        let value = service()
            .build_predicate(search_params("username", "al", "autoComplete", Some(false)))
            .unwrap();
        assert_eq!(
            value,
            json!({"field": "ac_pre_username", "op": "array-contains", "value": "al"})
        );
    }

    #[test]
    fn test_grams_invalid_n() {
        let result = service().grams(GenerateGramsParams {
            n: 4,
            text: "test".to_string(),
        });
        assert!(matches!(
            result,
            Err(RequestError::Gram(GramError::InvalidArgument { n: 4 }))
        ));
    }

    #[test]
    fn test_prefixes() {
        let value = service()
            .prefixes(GeneratePrefixesParams {
                text: "Hi".to_string(),
            })
            .unwrap();
        assert_eq!(value, json!({"type": "pre", "arr": ["h", "hi"]}));
    }

    #[test]
    fn test_value_too_long() {
        let config = Config {
            max_value_chars: 3,
            ..Config::default()
        };
        let service = SearchableService::new(config);
        let err = service
            .prefixes(GeneratePrefixesParams {
                text: "abcd".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "Value too long: 4 characters (max 3)");
    }

    #[test]
    fn test_error_codes() {
        let err = to_mcp_error(RequestError::ValueTooLong { len: 4, max: 3 });
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Value too long: 4 characters (max 3)");

        let err = to_mcp_error(GramError::InvalidArgument { n: 1 }.into());
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_make_searchable_tool() {
        let service = service();
        let result = service
            .make_searchable(Parameters(make_params("t", "abc", Some(&["fullTextSearch"]))))
            .await
            .unwrap();
        assert_eq!(tool_output(result), json!({"fts_tri_t": ["abc"]}));
        assert_eq!(service.metrics().requests_total(), 1);
        assert_eq!(service.metrics().fields_built_total(), 1);
    }

    #[tokio::test]
    async fn test_search_by_tool() {
        let result = service()
            .search_by(Parameters(search_params("name", "al", "prefix", None)))
            .await
            .unwrap();
        assert_eq!(
            tool_output(result),
            json!({"field": "ac_pre_name", "op": "array-contains", "value": "al"})
        );
    }

    #[tokio::test]
    async fn test_generate_grams_tool_error_is_counted() {
        let service = service();
        let err = service
            .generate_grams(Parameters(GenerateGramsParams {
                n: 5,
                text: "test".to_string(),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Value of n must be either 2 or 3 (got 5)");
        assert_eq!(service.metrics().request_errors_total(), 1);
    }

    #[tokio::test]
    async fn test_get_metrics_tool() {
        let service = service();
        service
            .generate_prefixes(Parameters(GeneratePrefixesParams {
                text: "abc".to_string(),
            }))
            .await
            .unwrap();
        let value = tool_output(service.get_metrics().await.unwrap());
        assert_eq!(value["requestsTotal"], json!(2));
        assert_eq!(value["tokensGeneratedTotal"], json!(3));
    }

    #[test]
    fn test_tools_are_listed() {
        let mut names: Vec<String> = SearchableService::tool_router()
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "generateGrams",
                "generatePrefixes",
                "getMetrics",
                "makeSearchable",
                "searchBy"
            ]
        );
    }

    #[test]
    fn test_server_info() {
        let info = service().get_info();
        assert_eq!(info.server_info.name, "searchable-fields");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_params_deserialize_camel_case() {
        let params: MakeSearchableParams = serde_json::from_str(
            r#"{"key":"k","value":"v","searchType":["autoComplete"]}"#,
        )
        .unwrap();
        assert_eq!(params.search_type, Some(vec!["autoComplete".to_string()]));

        let params: SearchByParams =
            serde_json::from_str(r#"{"key":"k","value":"v","searchType":"fullTextSearch"}"#)
                .unwrap();
        assert_eq!(params.strict, None);
    }
}
