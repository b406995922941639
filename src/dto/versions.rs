use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Version;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVersionRequest {
    pub product_id: i32,
    pub version_number: Decimal,
    pub version_name: String,
    #[serde(default)]
    pub is_actual: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVersionRequest {
    pub product_id: Option<i32>,
    pub version_number: Option<Decimal>,
    pub version_name: Option<String>,
    pub is_actual: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct VersionList {
    #[schema(value_type = Vec<Version>)]
    pub items: Vec<Version>,
}
