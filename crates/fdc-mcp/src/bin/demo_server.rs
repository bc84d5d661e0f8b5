//! Small self-contained MCP stdio server used for demos and client smoke
//! tests. It is unrelated to the FDC tooling: two arithmetic tools, a menu
//! listing tool, and a `greeting://{name}` resource template.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    Annotated, CallToolResult, Content, ErrorData, ListResourceTemplatesResult,
    ListResourcesResult, PaginatedRequestParam, RawResourceTemplate, ReadResourceRequestParam,
    ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{RoleServer, ServerHandler, ServiceExt as _, tool, tool_handler, tool_router};
use tracing_subscriber::EnvFilter;

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
struct AddRequest {
    #[schemars(description = "the left hand side number")]
    a: i64,
    #[schemars(description = "the right hand side number")]
    b: i64,
}

#[derive(Clone)]
struct DemoServer {
    tool_router: ToolRouter<Self>,
}

impl DemoServer {
    fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl DemoServer {
    #[tool(description = "Add two numbers")]
    fn add(
        &self,
        Parameters(AddRequest { a, b }): Parameters<AddRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text(
            (a + b).to_string(),
        )]))
    }

    #[tool(description = "List the demo menus")]
    fn list_menus(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![
            Content::text("Menu 1"),
            Content::text("Menu 2"),
            Content::text("Menu 3"),
        ]))
    }
}

#[tool_handler]
impl ServerHandler for DemoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("A demo server with arithmetic tools and greetings".into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            resources: Vec::new(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        let template = RawResourceTemplate {
            uri_template: "greeting://{name}".to_string(),
            name: "greeting".to_string(),
            title: None,
            description: Some("A personalized greeting".to_string()),
            mime_type: Some("text/plain".to_string()),
            icons: None,
        };
        Ok(ListResourceTemplatesResult {
            resource_templates: vec![Annotated::new(template, None)],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri, .. }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let Some(name) = uri.strip_prefix("greeting://") else {
            return Err(ErrorData::resource_not_found(
                "resource not found",
                Some(serde_json::json!({ "uri": uri })),
            ));
        };
        let greeting = format!("Hello, {name}!");
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(greeting, uri)],
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = DemoServer::new().serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
