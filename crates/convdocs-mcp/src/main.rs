use convdocs_core::{Resolver, Settings};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable naming an explicit settings file.
const CONFIG_ENV: &str = "CONVDOCS_CONFIG";

// --- Request types ---

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ListRulesRequest {
    /// Category key to filter by (e.g. "frontend", "backend"). Omit to list every rule.
    category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct GetRuleRequest {
    /// Rule id as returned by list_rules (e.g. "02-naming-convention")
    id: String,
}

// --- Tool bodies ---

fn list_rules_json(resolver: &Resolver, category: Option<&str>) -> Result<String, String> {
    let catalog = resolver.catalog();
    if let Some(key) = category {
        if catalog.category(key).is_none() {
            let known: Vec<&str> = catalog.categories().iter().map(|c| c.key.as_str()).collect();
            return Err(format!(
                "Unknown category '{}'. Known categories: {}",
                key,
                known.join(", ")
            ));
        }
    }
    let entries: Vec<_> = catalog
        .entries()
        .iter()
        .filter(|e| category.is_none() || e.category.as_deref() == category)
        .collect();
    serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())
}

fn get_rule_json(resolver: &Resolver, id: &str) -> Result<String, String> {
    match resolver.get_by_id(id) {
        Some(rule) => serde_json::to_string_pretty(&rule).map_err(|e| e.to_string()),
        None => Err(format!("Rule '{}' not found. Use list_rules to see valid ids.", id)),
    }
}

fn list_categories_json(resolver: &Resolver) -> Result<String, String> {
    let catalog = resolver.catalog();
    let categories: Vec<_> = catalog
        .categories()
        .iter()
        .map(|c| {
            serde_json::json!({
                "key": c.key,
                "label": c.label,
                "rules": catalog.entries_in(&c.key).count(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&categories).map_err(|e| e.to_string())
}

fn audit_json(resolver: &Resolver) -> Result<String, String> {
    let report = convdocs_core::audit(resolver).map_err(|e| e.to_string())?;
    serde_json::to_string_pretty(&report).map_err(|e| e.to_string())
}

fn into_result(res: Result<String, String>) -> Result<CallToolResult, McpError> {
    match res {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e)])),
    }
}

// --- Server ---

#[derive(Clone)]
pub struct ConvdocsServer {
    resolver: Arc<Resolver>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ConvdocsServer {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List coding convention rules in catalog order. Returns [{id, title, description, category?}]. Content is not included; use get_rule for that."
    )]
    fn list_rules(
        &self,
        Parameters(req): Parameters<ListRulesRequest>,
    ) -> Result<CallToolResult, McpError> {
        into_result(list_rules_json(&self.resolver, req.category.as_deref()))
    }

    #[tool(
        description = "Get one rule with its markdown content. Returns {id, title, description, content}. Rules without a content file return placeholder content ending in \"(content pending)\"."
    )]
    fn get_rule(
        &self,
        Parameters(req): Parameters<GetRuleRequest>,
    ) -> Result<CallToolResult, McpError> {
        into_result(get_rule_json(&self.resolver, &req.id))
    }

    #[tool(description = "List rule categories with their labels and rule counts")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        into_result(list_categories_json(&self.resolver))
    }

    #[tool(
        description = "Compare the catalog with the content directory. Returns {missing: [rule ids without a markdown file], orphaned: [markdown files no rule maps to]}."
    )]
    fn audit_content(&self) -> Result<CallToolResult, McpError> {
        into_result(audit_json(&self.resolver))
    }
}

#[tool_handler]
impl ServerHandler for ConvdocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

const INSTRUCTIONS: &str = r#"convdocs serves the project's coding convention rules.

Call `list_rules` to see which rules exist (optionally per category, see `list_categories`), then `get_rule` for the full markdown of the rules relevant to the code you are writing. Follow those rules when generating or reviewing code.
`audit_content` reports rules that still lack written content."#;

fn init_logging() {
    // stdout carries the MCP protocol, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("convdocs_core=warn,convdocs_mcp=info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn load_resolver() -> Result<Resolver, Box<dyn std::error::Error>> {
    let settings = match std::env::var_os(CONFIG_ENV) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::discover(&std::env::current_dir()?)?,
    };
    Ok(settings.resolver()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle `convdocs-mcp init` subcommand
    if std::env::args().nth(1).as_deref() == Some("init") {
        return init_project();
    }

    init_logging();
    let resolver = load_resolver()?;
    tracing::info!(
        rules = resolver.catalog().len(),
        root = %resolver.root().display(),
        "serving convdocs rules"
    );

    let service = ConvdocsServer::new(resolver)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "MCP server error"))?;
    service.waiting().await?;
    Ok(())
}

/// Register this binary in the project's `.mcp.json`, keeping other servers.
fn init_project() -> Result<(), Box<dyn std::error::Error>> {
    let binary_path = std::env::current_exe()?
        .canonicalize()?
        .to_string_lossy()
        .to_string();
    let cwd = std::env::current_dir()?;
    let path = write_mcp_json(&cwd, &binary_path)?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn write_mcp_json(dir: &Path, binary_path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mcp_json_path = dir.join(".mcp.json");
    let mut root: serde_json::Value = if mcp_json_path.exists() {
        let contents = std::fs::read_to_string(&mcp_json_path)?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("{} is not valid JSON: {e}", mcp_json_path.display()))?
    } else {
        serde_json::json!({})
    };

    if !root.get("mcpServers").is_some_and(|v| v.is_object()) {
        root["mcpServers"] = serde_json::json!({});
    }
    root["mcpServers"]["convdocs"] = serde_json::json!({
        "type": "stdio",
        "command": binary_path,
        "args": [],
    });

    std::fs::write(&mcp_json_path, serde_json::to_string_pretty(&root)?)?;
    Ok(mcp_json_path)
}
