//! Admin request DTOs

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{AuthenticationUpdate, NewBag};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBagRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub display_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub brand: String,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    /// RFID/NFC code to assign
    #[validate(length(min = 1, message = "must not be empty"))]
    pub tag_code: String,
    pub external_bag_id: Option<String>,
}

impl CreateBagRequest {
    /// Split into the bag fields and the tag code to bind.
    pub fn into_parts(self) -> (NewBag, String) {
        let bag = NewBag {
            external_bag_id: self.external_bag_id,
            display_name: self.display_name,
            brand: self.brand,
            model: self.model,
            style: self.style,
            color: self.color,
            material: self.material,
        };
        (bag, self.tag_code)
    }
}

/// Full replacement of a bag's authentication record.
/// Omitted optional fields are stored as null.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertEntrupyRequest {
    pub bag_id: i64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub customer_item_id: String,
    pub authentication_status: Option<String>,
    pub certificate_url: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub style: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub dimensions: Option<Map<String, Value>>,
    pub condition_grade: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub catalog_raw: Option<Map<String, Value>>,
    pub entrupy_item_id: Option<String>,
}

impl UpsertEntrupyRequest {
    pub fn into_update(self) -> (i64, AuthenticationUpdate) {
        let update = AuthenticationUpdate {
            customer_item_id: self.customer_item_id,
            entrupy_item_id: self.entrupy_item_id,
            authentication_status: self.authentication_status,
            certificate_url: self.certificate_url,
            brand: self.brand,
            model: self.model,
            style: self.style,
            color: self.color,
            material: self.material,
            dimensions: self.dimensions.map(Value::Object),
            condition_grade: self.condition_grade,
            catalog_raw: self.catalog_raw.map(Value::Object),
        };
        (self.bag_id, update)
    }
}
