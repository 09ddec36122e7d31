//! Admin handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CreateBagRequest, UpsertEntrupyRequest};
use crate::application::{AuthenticationService, BindingService};
use crate::interfaces::http::common::{ApiError, ErrorResponse, ValidatedJson};
use crate::interfaces::http::dto::{BagWithTagDto, EntrupyDto};

/// Admin handler state
#[derive(Clone)]
pub struct AdminState {
    pub binding: Arc<BindingService>,
    pub authentication: Arc<AuthenticationService>,
}

#[utoipa::path(
    post,
    path = "/api/admin/bags",
    tag = "Admin",
    request_body = CreateBagRequest,
    responses(
        (status = 201, description = "Bag created and tag bound", body = BagWithTagDto),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_bag(
    State(state): State<AdminState>,
    ValidatedJson(request): ValidatedJson<CreateBagRequest>,
) -> Result<(StatusCode, Json<BagWithTagDto>), ApiError> {
    let (bag, tag_code) = request.into_parts();
    let binding = state.binding.create_bag_with_tag(bag, &tag_code).await?;
    Ok((StatusCode::CREATED, Json(binding.into())))
}

#[utoipa::path(
    post,
    path = "/api/admin/entrupy",
    tag = "Admin",
    request_body = UpsertEntrupyRequest,
    responses(
        (status = 200, description = "Authentication record created or replaced", body = EntrupyDto),
        (status = 404, description = "Bag not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn upsert_entrupy(
    State(state): State<AdminState>,
    ValidatedJson(request): ValidatedJson<UpsertEntrupyRequest>,
) -> Result<Json<EntrupyDto>, ApiError> {
    let (bag_id, update) = request.into_update();
    let record = state.authentication.upsert(bag_id, update).await?;
    Ok(Json(record.into()))
}
