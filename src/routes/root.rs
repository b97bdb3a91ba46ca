use crate::config::database::Database;
use crate::config::parameter;
use crate::error::token_error::TokenError;
use crate::events::{BroadcastUserEvents, UserEventPublisher};
use crate::handler::auth_handler;
use crate::middleware::{auth as auth_middleware, authorization};
use crate::routes::{admin, auth, health, users};
use crate::state::admin_state::AdminState;
use crate::state::auth_state::AuthState;
use crate::state::token_state::TokenState;
use crate::state::user_state::UserState;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn routes(db_conn: Arc<Database>) -> Result<Router, TokenError> {
    let events: Arc<dyn UserEventPublisher> = Arc::new(BroadcastUserEvents::default());

    let auth_state = AuthState::new(&db_conn, events.clone())?;
    let admin_state = AdminState::new(&db_conn, events);
    let user_state = UserState::new(&db_conn);
    let token_state = TokenState::new(&db_conn)?;

    let authenticated = middleware::from_fn_with_state(token_state, auth_middleware::auth);

    let merged_router = auth::routes()
        .with_state(auth_state.clone())
        .merge(
            Router::new()
                .route("/auth/me", get(auth_handler::me))
                .layer(authenticated.clone())
                .with_state(auth_state),
        )
        .merge(
            users::routes()
                .layer(authenticated.clone())
                .with_state(user_state),
        )
        .merge(
            admin::routes()
                .layer(
                    ServiceBuilder::new()
                        .layer(authenticated)
                        .layer(middleware::from_fn(authorization::require_admin)),
                )
                .with_state(admin_state),
        )
        .merge(health::routes().with_state(db_conn));

    Ok(Router::new()
        .nest("/api", merged_router)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http()))
}

/// Browser clients live on another origin and authenticate with the refresh
/// cookie, so the allow-list must be explicit and credentials enabled.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_origins(&parameter::get("CORS_ORIGIN")))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// `CORS_ORIGIN` holds one origin or a comma-separated allow-list.
fn parse_origins(value: &str) -> Vec<HeaderValue> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect()
}
