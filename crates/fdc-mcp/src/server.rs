//! MCP surface for the FDC service: tools, resources, and a prompt.
//!
//! Reads are reachable both ways, as the `get_tank_delivery` tool and as
//! the `tank://delivery[/{device_id}]` resources, all backed by one shared
//! [`FdcService`]. Output is a pre-serialized JSON string; failures become a
//! payload with a top-level `error` key and never surface as raised errors
//! past the framework boundary.

use crate::service::FdcService;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    Annotated, CallToolResult, Content, ErrorData, GetPromptRequestParam, GetPromptResult,
    JsonObject, ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult,
    PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
    RawResource, RawResourceTemplate, ReadResourceRequestParam, ReadResourceResult,
    ResourceContents, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, tool, tool_handler, tool_router};
use serde_json::{Value, json};
use tracing::{info, warn};

/// URI of the all-devices delivery resource.
pub const TANK_DELIVERY_URI: &str = "tank://delivery";
/// URI template for a single device's delivery resource.
pub const TANK_DELIVERY_TEMPLATE: &str = "tank://delivery/{device_id}";

/// Payload returned (as text) whenever delivery data could not be obtained.
pub const DELIVERY_ERROR_PAYLOAD: &str = r#"{"error":"Failed to retrieve tank delivery data"}"#;

const PROMPT_NAME: &str = "tank_delivery_prompt";

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetTankDeliveryRequest {
    #[schemars(description = "optional device id to filter the snapshot to one tank")]
    pub device_id: Option<u32>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CreateProductDeliveryRequest {
    #[schemars(description = "product number to deliver")]
    pub product_no: f64,
    #[schemars(description = "tank number receiving the delivery")]
    pub tank_no: f64,
    #[schemars(description = "volume to deliver")]
    pub volume_to_deliver: f64,
}

/// MCP handler owning the FDC service and the generated tool router.
#[derive(Clone)]
pub struct FdcToolServer {
    service: FdcService,
    tool_router: ToolRouter<Self>,
}

impl FdcToolServer {
    #[must_use]
    pub fn new(service: FdcService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Serialized delivery snapshot, or `None` when it could not be obtained.
    async fn delivery_json(&self, device_id: Option<u32>) -> Option<String> {
        let response = self.service.get_tank_delivery(device_id).await?;
        match serde_json::to_string(&response) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(error = %e, "failed to serialize tank delivery response");
                None
            }
        }
    }
}

#[tool_router]
impl FdcToolServer {
    #[tool(
        description = "Get the latest tank delivery data, optionally filtered to a single device"
    )]
    async fn get_tank_delivery(
        &self,
        Parameters(GetTankDeliveryRequest { device_id }): Parameters<GetTankDeliveryRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        info!(device_id, "get latest tank delivery data");
        Ok(match self.delivery_json(device_id).await {
            Some(body) => CallToolResult::success(vec![Content::text(body)]),
            None => CallToolResult::error(vec![Content::text(DELIVERY_ERROR_PAYLOAD)]),
        })
    }

    #[tool(description = "Create a product delivery order on the FDC")]
    async fn create_product_delivery(
        &self,
        Parameters(CreateProductDeliveryRequest {
            product_no,
            tank_no,
            volume_to_deliver,
        }): Parameters<CreateProductDeliveryRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        info!(
            product_no,
            tank_no, volume_to_deliver, "create product delivery"
        );
        let accepted = self
            .service
            .create_product_delivery(product_no, tank_no, volume_to_deliver)
            .await;
        Ok(if accepted {
            CallToolResult::success(vec![Content::text("Product delivery created successfully")])
        } else {
            CallToolResult::error(vec![Content::text("Error creating product delivery")])
        })
    }
}

#[tool_handler]
impl ServerHandler for FdcToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Query tank delivery snapshots from a fuel delivery controller and create \
                 product delivery orders."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        let mut resource = RawResource::new(TANK_DELIVERY_URI, "tank-delivery");
        resource.description = Some("Latest tank delivery data for all devices".to_string());
        resource.mime_type = Some("application/json".to_string());
        Ok(ListResourcesResult {
            resources: vec![Annotated::new(resource, None)],
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
            uri_template: TANK_DELIVERY_TEMPLATE.to_string(),
            name: "tank-delivery-by-device".to_string(),
            title: None,
            description: Some("Latest tank delivery data for a single device".to_string()),
            mime_type: Some("application/json".to_string()),
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
        let device_id = parse_delivery_uri(&uri)?;
        info!(uri = %uri, device_id, "read tank delivery resource");

        let body = self
            .delivery_json(device_id)
            .await
            .unwrap_or_else(|| DELIVERY_ERROR_PAYLOAD.to_string());
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(body, uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        let argument = |name: &str, description: &str| PromptArgument {
            name: name.to_string(),
            title: None,
            description: Some(description.to_string()),
            required: Some(true),
        };
        Ok(ListPromptsResult {
            prompts: vec![Prompt::new(
                PROMPT_NAME,
                Some("Draft a product delivery request"),
                Some(vec![
                    argument("product_no", "product number to deliver"),
                    argument("tank_no", "tank number receiving the delivery"),
                    argument("volume_to_deliver", "volume to deliver"),
                ]),
            )],
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, arguments, .. }: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        if name != PROMPT_NAME {
            return Err(ErrorData::invalid_params(
                format!("unknown prompt '{name}'"),
                None,
            ));
        }

        let arguments = arguments.unwrap_or_default();
        let product_no = prompt_number(&arguments, "product_no")?;
        let tank_no = prompt_number(&arguments, "tank_no")?;
        let volume_to_deliver = prompt_number(&arguments, "volume_to_deliver")?;

        Ok(GetPromptResult {
            description: Some("Product delivery request".to_string()),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                render_delivery_prompt(product_no, tank_no, volume_to_deliver),
            )],
        })
    }
}

/// Map a resource URI onto the optional device filter.
///
/// `tank://delivery` reads all devices; `tank://delivery/{device_id}` reads
/// one. Anything else is not a resource of this server.
fn parse_delivery_uri(uri: &str) -> Result<Option<u32>, ErrorData> {
    if uri == TANK_DELIVERY_URI {
        return Ok(None);
    }
    if let Some(rest) = uri.strip_prefix("tank://delivery/") {
        return rest.parse::<u32>().map(Some).map_err(|_| {
            ErrorData::invalid_params(
                format!("invalid device id '{rest}' in resource URI"),
                Some(json!({ "uri": uri })),
            )
        });
    }
    Err(ErrorData::resource_not_found(
        "resource not found",
        Some(json!({ "uri": uri })),
    ))
}

fn render_delivery_prompt(product_no: f64, tank_no: f64, volume_to_deliver: f64) -> String {
    format!(
        "I need to create a product delivery of product {product_no}, \
         with volume {volume_to_deliver} in tank {tank_no}."
    )
}

fn prompt_number(arguments: &JsonObject, key: &str) -> Result<f64, ErrorData> {
    let value = arguments.get(key).ok_or_else(|| {
        ErrorData::invalid_params(format!("missing prompt argument '{key}'"), None)
    })?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            ErrorData::invalid_params(format!("prompt argument '{key}' is out of range"), None)
        }),
        Value::String(s) => s.parse().map_err(|_| {
            ErrorData::invalid_params(
                format!("prompt argument '{key}' is not a number: '{s}'"),
                None,
            )
        }),
        _ => Err(ErrorData::invalid_params(
            format!("prompt argument '{key}' must be a number"),
            None,
        )),
    }
}
