use crate::error::AppError;
use crate::store::StoreHub;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

/// Json extractor whose rejection is an [`AppError`], so malformed bodies
/// come back in the same error envelope as everything else.
#[derive(FromRequest, Deserialize)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.to_string(),
            code: status.as_u16(),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Shared request state: the store registry every handler resolves against.
#[derive(Clone)]
pub struct RequestState {
    pub hub: Arc<StoreHub>,
}

impl RequestState {
    pub fn new(hub: Arc<StoreHub>) -> Self {
        RequestState { hub }
    }
}

/// Compile-time registration of one route group. Each record kind submits
/// its group via `inventory`, and [`build_router`] collects them all.
pub struct StructInfo {
    pub name: &'static str,
    pub routes_fn: fn() -> OpenApiRouter<RequestState>,
}

inventory::collect!(StructInfo);

#[derive(OpenApi)]
#[openapi(info(
    title = "adminkit",
    description = "Record administration API",
    license(name = "MIT")
))]
pub struct ApiDoc;

pub fn build_router(
    state: RequestState,
    extras: Option<OpenApiRouter<RequestState>>,
    cors: Option<CorsLayer>,
) -> Router {
    let mut registered = OpenApiRouter::with_openapi(ApiDoc::openapi());
    for info in inventory::iter::<StructInfo> {
        crate::debug!("registering routes for {}", info.name);
        registered = registered.merge((info.routes_fn)());
    }
    if let Some(extras) = extras {
        registered = registered.merge(extras);
    }
    let (rest_router, api) = registered.split_for_parts();
    let mut router = rest_router
        .merge(SwaggerUi::new("/swagger-ui").url("/apidoc/openapi.json", api.clone()))
        .with_state(state);
    if let Some(cors) = cors {
        router = router.layer(cors);
    }
    router
}

/// Serves the collected routes until the shutdown channel flips to `true`.
pub async fn serve(
    state: RequestState,
    addr: SocketAddr,
    extras: Option<OpenApiRouter<RequestState>>,
    cors: Option<CorsLayer>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<(), AppError> {
    let router = build_router(state, extras, cors);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    crate::info!("Serving at http://{}/swagger-ui", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            while !*shutdown.borrow() {
                if shutdown.changed().await.is_err() {
                    break;
                }
            }
            crate::info!("shutting down");
        })
        .await?;
    Ok(())
}
