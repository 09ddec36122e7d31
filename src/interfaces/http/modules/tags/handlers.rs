//! Tag lookup handler

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::LookupService;
use crate::interfaces::http::common::{ApiError, ErrorResponse};
use crate::interfaces::http::dto::TagLookupDto;

#[derive(Clone)]
pub struct TagState {
    pub lookup: Arc<LookupService>,
}

#[utoipa::path(
    get,
    path = "/api/tags/{tag_code}",
    tag = "Tags",
    params(("tag_code" = String, Path, description = "RFID/NFC tag code")),
    responses(
        (status = 200, description = "Tag with bound bag and authentication record", body = TagLookupDto),
        (status = 404, description = "Tag not found", body = ErrorResponse)
    )
)]
pub async fn get_tag(
    State(state): State<TagState>,
    Path(tag_code): Path<String>,
) -> Result<Json<TagLookupDto>, ApiError> {
    let lookup = state.lookup.lookup_tag(&tag_code).await?;
    Ok(Json(lookup.into()))
}
