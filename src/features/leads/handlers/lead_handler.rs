//! Farmer lead handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::leads::dtos::{LeadListResponseDto, SubmitLeadDto, SubmitLeadResponseDto};
use crate::features::leads::services::{LeadService, SubmitOutcome};
use crate::shared::constants::MAX_USER_AGENT_CHARS;
use crate::shared::types::ErrorResponse;

/// Submit a farmer callback request
///
/// Public endpoint behind the farmer page form. A repeat from the same phone
/// number within 24 hours is acknowledged but not stored again.
#[utoipa::path(
    post,
    path = "/api/leads/farmer",
    request_body = SubmitLeadDto,
    responses(
        (status = 200, description = "Lead captured, or duplicate acknowledged", body = SubmitLeadResponseDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Lead could not be stored", body = ErrorResponse)
    ),
    tag = "leads"
)]
pub async fn submit_lead(
    State(service): State<Arc<LeadService>>,
    headers: HeaderMap,
    AppJson(dto): AppJson<SubmitLeadDto>,
) -> Result<Json<SubmitLeadResponseDto>> {
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ua| !ua.is_empty())
        .map(|ua| ua.chars().take(MAX_USER_AGENT_CHARS).collect::<String>());

    let new_lead = dto.into_new_lead(user_agent)?;

    let response = match service.submit(new_lead).await? {
        SubmitOutcome::Created(lead) => SubmitLeadResponseDto::created(lead.id),
        SubmitOutcome::Duplicate { .. } => SubmitLeadResponseDto::duplicate(),
    };

    Ok(Json(response))
}

/// List all farmer leads, newest first
///
/// Requires the admin API key in the `x-api-key` header when admin auth is
/// enforced.
#[utoipa::path(
    get,
    path = "/api/leads/farmer",
    responses(
        (status = 200, description = "All leads", body = LeadListResponseDto),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Leads could not be read", body = ErrorResponse)
    ),
    tag = "leads",
    security(("api_key" = []))
)]
pub async fn list_leads(
    State(service): State<Arc<LeadService>>,
) -> Result<Json<LeadListResponseDto>> {
    let leads = service.list().await?;
    Ok(Json(leads.into()))
}
