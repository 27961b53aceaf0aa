use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::villages::models::Village;

/// Response DTO for a single village
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillageResponseDto {
    pub id: String,
    pub name: String,
    /// Kannada name
    pub name_kn: String,
    pub district: String,
}

impl From<&Village> for VillageResponseDto {
    fn from(village: &Village) -> Self {
        Self {
            id: village.id.to_string(),
            name: village.name.to_string(),
            name_kn: village.name_kn.to_string(),
            district: village.district.to_string(),
        }
    }
}

/// Villages belonging to one district
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictVillagesDto {
    pub district: String,
    pub villages: Vec<VillageResponseDto>,
}

/// Response DTO for the village listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillageListResponseDto {
    pub success: bool,
    /// Total number of villages across all districts
    pub count: usize,
    pub districts: Vec<DistrictVillagesDto>,
}
