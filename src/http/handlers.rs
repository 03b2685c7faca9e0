//! Example function handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::context::{for_event, Context};
use crate::logger::Logging;

/// HTTP function: logs at info and error under the request's execution id.
pub async fn hello_function(State(logging): State<Arc<Logging>>, ctx: Context) -> &'static str {
    logging.info(Some(&ctx)).println(&[&"Hello logs"]);
    logging.error(Some(&ctx)).println(&[&"Hello logs"]);
    "Hello logs"
}

/// Background function: takes an event envelope and logs its delivery.
pub async fn event_function(
    State(logging): State<Arc<Logging>>,
    Json(envelope): Json<Value>,
) -> StatusCode {
    let ctx = for_event(&envelope);

    match ctx.metadata() {
        Some(metadata) => {
            logging.notice(Some(&ctx)).printf(format_args!(
                "Received event {} of type {}",
                metadata.event_id, metadata.event_type
            ));
            StatusCode::NO_CONTENT
        }
        None => {
            logging
                .warning(Some(&ctx))
                .println(&[&"Event envelope without context metadata"]);
            StatusCode::BAD_REQUEST
        }
    }
}
