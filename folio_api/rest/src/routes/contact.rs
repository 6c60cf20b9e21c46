use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactReceipt, ContactSubmitError};
use serde::Serialize;

use super::{failure, internal_server_error};
use crate::models::{contact::ApiContactMessage, ApiFieldError};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(message): Json<ApiContactMessage>,
) -> Response {
    let message = match message.validate() {
        Ok(message) => message,
        Err(errors) => {
            return failure(
                StatusCode::BAD_REQUEST,
                "Invalid submission. Check the fields and try again.",
                errors,
            )
        }
    };

    match service.submit(message).await {
        Ok(receipt) => Json(SubmitResponse::from(receipt)).into_response(),
        Err(ContactSubmitError::NotConfigured { missing }) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email delivery is not configured on the server.",
            missing
                .into_iter()
                .map(|key| {
                    ApiFieldError::new(key, format!("Configuration value `{key}` is not set."))
                })
                .collect(),
        ),
        Err(ContactSubmitError::Send(err)) => internal_server_error(err),
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResponse {
    success: bool,
    email: DeliveryStatus,
    auto_reply: DeliveryStatus,
}

#[derive(Serialize)]
struct DeliveryStatus {
    sent: bool,
}

impl From<ContactReceipt> for SubmitResponse {
    fn from(receipt: ContactReceipt) -> Self {
        Self {
            success: true,
            email: DeliveryStatus { sent: true },
            auto_reply: DeliveryStatus {
                sent: receipt.auto_reply_sent,
            },
        }
    }
}
