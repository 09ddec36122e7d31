//! Entrupy authentication DTOs

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::AuthenticationRecord;

#[derive(Debug, Serialize, ToSchema)]
pub struct EntrupyDto {
    pub id: i64,
    pub bag_id: i64,
    pub customer_item_id: String,
    pub entrupy_item_id: Option<String>,
    pub authentication_status: Option<String>,
    pub certificate_url: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub dimensions: Option<Value>,
    pub condition_grade: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub catalog_raw: Option<Value>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AuthenticationRecord> for EntrupyDto {
    fn from(r: AuthenticationRecord) -> Self {
        Self {
            id: r.id,
            bag_id: r.bag_id,
            customer_item_id: r.customer_item_id,
            entrupy_item_id: r.entrupy_item_id,
            authentication_status: r.authentication_status,
            certificate_url: r.certificate_url,
            brand: r.brand,
            model: r.model,
            style: r.style,
            color: r.color,
            material: r.material,
            dimensions: r.dimensions,
            condition_grade: r.condition_grade,
            catalog_raw: r.catalog_raw,
            created_at: r.created_at.to_rfc3339(),
            updated_at: r.updated_at.to_rfc3339(),
        }
    }
}
