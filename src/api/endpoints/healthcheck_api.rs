use std::sync::Arc;

use axum::response::IntoResponse;

use crate::api::model::app_state::AppState;
use crate::model::Healthcheck;

fn create_healthcheck() -> Healthcheck {
    Healthcheck {
        status: String::from("ok"),
        version: String::from(env!("CARGO_PKG_VERSION")),
        build_time: option_env!("VERGEN_BUILD_TIMESTAMP").map(String::from),
        time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

async fn healthcheck() -> impl axum::response::IntoResponse + Send {
    axum::Json(create_healthcheck()).into_response()
}

pub fn healthcheck_api_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/healthcheck", axum::routing::get(healthcheck))
}
