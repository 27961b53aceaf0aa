use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::villages::dtos::{
    DistrictVillagesDto, VillageListResponseDto, VillageResponseDto,
};
use crate::features::villages::services::VillageService;

/// List villages grouped by district
///
/// Public endpoint backing the village dropdown of the callback form.
#[utoipa::path(
    get,
    path = "/api/villages",
    responses(
        (status = 200, description = "Villages grouped by district", body = VillageListResponseDto)
    ),
    tag = "villages"
)]
pub async fn list_villages(
    State(service): State<Arc<VillageService>>,
) -> Json<VillageListResponseDto> {
    let districts = service
        .grouped_by_district()
        .into_iter()
        .map(|(district, villages)| DistrictVillagesDto {
            district: district.to_string(),
            villages: villages.into_iter().map(VillageResponseDto::from).collect(),
        })
        .collect();

    Json(VillageListResponseDto {
        success: true,
        count: service.count(),
        districts,
    })
}
