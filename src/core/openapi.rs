use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::leads::{
    dtos as leads_dtos, handlers as leads_handlers, models as leads_models,
};
use crate::features::villages::{dtos as villages_dtos, handlers as villages_handlers};
use crate::shared::constants::ADMIN_API_KEY_HEADER;
use crate::shared::types::{ErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Leads
        leads_handlers::submit_lead,
        leads_handlers::list_leads,
        // Villages (public)
        villages_handlers::list_villages,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            FieldError,
            // Leads
            leads_models::Language,
            leads_models::LeadStatus,
            leads_models::LeadSource,
            leads_models::Lead,
            leads_dtos::SubmitLeadDto,
            leads_dtos::SubmitLeadResponseDto,
            leads_dtos::LeadListResponseDto,
            // Villages
            villages_dtos::VillageResponseDto,
            villages_dtos::DistrictVillagesDto,
            villages_dtos::VillageListResponseDto,
        )
    ),
    tags(
        (name = "leads", description = "Farmer callback requests"),
        (name = "villages", description = "Village reference table (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "CropFresh Leads API",
        version = "0.1.0",
        description = "Farmer lead intake API for the CropFresh website",
    )
)]
pub struct ApiDoc;

/// Adds the admin API key header scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ADMIN_API_KEY_HEADER))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
