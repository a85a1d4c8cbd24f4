use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        classes::{create_class, get_class, list_classes},
        health::{hello, livez},
        notices::{create_notice, delete_notice, list_notices, update_notice},
        users::{create_student, create_teacher, require_api_key},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // User routes, guarded by the API key before the body is read
    let user_routes = Router::new()
        .route("/user/teacher", post(create_teacher))
        .route("/user/student", post(create_student))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    let api_routes = Router::new()
        // Class routes
        .route("/class", post(create_class))
        .route("/class/list", get(list_classes))
        .route("/class/{class_id}", get(get_class))
        // Class notice routes
        .route("/class/notice/{class_id}", post(create_notice))
        .route("/class/notice/{class_id}/list", get(list_notices))
        .route(
            "/class/notice/{class_id}/{notice_id}",
            put(update_notice).delete(delete_notice),
        )
        .merge(user_routes);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/", get(hello))
        .route("/livez", get(livez))
        .nest("/v1", api_routes)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id
                )
            }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}
