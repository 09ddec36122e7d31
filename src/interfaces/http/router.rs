//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AuthenticationService, BindingService, LookupService};
use crate::domain::Storage;
use crate::interfaces::http::common::ErrorResponse;
use crate::interfaces::http::dto::{BagDto, BagWithTagDto, EntrupyDto, TagDto, TagLookupDto};
use crate::interfaces::http::modules::{admin, health, tags};

/// Shared state for every route. Handlers extract their own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub binding: Arc<BindingService>,
    pub authentication: Arc<AuthenticationService>,
    pub lookup: Arc<LookupService>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            binding: Arc::new(BindingService::new(Arc::clone(&storage))),
            authentication: Arc::new(AuthenticationService::new(Arc::clone(&storage))),
            lookup: Arc::new(LookupService::new(storage)),
        }
    }
}

impl FromRef<AppState> for admin::AdminState {
    fn from_ref(s: &AppState) -> Self {
        admin::AdminState {
            binding: Arc::clone(&s.binding),
            authentication: Arc::clone(&s.authentication),
        }
    }
}

impl FromRef<AppState> for tags::TagState {
    fn from_ref(s: &AppState) -> Self {
        tags::TagState {
            lookup: Arc::clone(&s.lookup),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health_check,
        admin::create_bag,
        admin::upsert_entrupy,
        tags::get_tag,
    ),
    components(
        schemas(
            health::HealthResponse,
            admin::CreateBagRequest,
            admin::UpsertEntrupyRequest,
            BagDto,
            TagDto,
            BagWithTagDto,
            EntrupyDto,
            TagLookupDto,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness checks"),
        (name = "Admin", description = "Bag registration and authentication records"),
        (name = "Tags", description = "Public tag lookup"),
    ),
    info(
        title = "Bag Tagging API",
        version = "0.1.0",
        description = "Bind RFID/NFC tags to luxury bags and attach Entrupy authentication results"
    )
)]
pub struct ApiDoc;

/// CORS for the configured origins.
///
/// An explicit list allows credentials and mirrors the requested methods and
/// headers. An empty list allows any origin without credentials.
pub fn build_cors(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Create the API router with Swagger UI
pub fn create_api_router(state: AppState, cors_origins: &[String]) -> Router {
    let admin_routes = Router::new()
        .route("/bags", post(admin::create_bag))
        .route("/entrupy", post(admin::upsert_entrupy))
        .with_state(state.clone());

    let tag_routes = Router::new()
        .route("/{tag_code}", get(tags::get_tag))
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Admin
        .nest("/api/admin", admin_routes)
        // Public lookup
        .nest("/api/tags", tag_routes)
        // Middleware
        .layer(build_cors(cors_origins))
        .layer(TraceLayer::new_for_http())
}
