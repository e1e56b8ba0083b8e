use axum::{
    Router,
    extract::{Request, State},
    http::header,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use crate::{ServerError, favorites, people, planets, user};
use engine::{Authentication, Engine};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Bearer token guard for the protected routes.
///
/// On success the authenticated [`engine::User`] is stored in the request
/// extensions for the handlers to pick up with `Extension<User>`.
async fn auth(
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    match state.engine.authenticate(authorization.as_deref()).await? {
        Authentication::Authenticated(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Authentication::Unauthenticated(failure) => {
            tracing::debug!(
                "rejected {} {}: {}",
                request.method(),
                request.uri().path(),
                failure.message()
            );
            Err(ServerError::Unauthorized(failure.message().to_string()))
        }
    }
}

/// Build the full application router around `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    let protected = Router::new()
        .route("/user/me", get(user::me))
        .route("/users/favorites", get(favorites::list))
        .route("/favorite/planet/{id}", post(favorites::add_planet))
        .route("/favorite/people/{id}", post(favorites::add_character))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route("/users", get(user::list).post(user::create))
        .route("/users/{id}", get(user::get))
        .route("/token", post(user::token))
        .route("/planets", get(planets::list).post(planets::create))
        .route("/planets/{id}", get(planets::get))
        .route("/people", get(people::list).post(people::create))
        .route("/people/{id}", get(people::get))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
