pub mod health;
pub mod hotel;

use axum::Router;
use registry::AppRegistry;
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use self::{health::build_health_check_routers, hotel::build_hotel_routers};

pub fn routes(registry: AppRegistry) -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_hotel_routers(registry))
}

/// The full application service. Trailing slashes are trimmed before routing,
/// so `/hotels/` and `/hotels/1/` reach the same handlers as their bare forms.
pub fn build_app(registry: AppRegistry) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(routes(registry.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
