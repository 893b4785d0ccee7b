//! Contact form handler

use axum::{extract::rejection::JsonRejection, Json};
use shared::{ContactMessage, ContactReceipt};

use crate::error::AppResult;
use crate::services::ContactService;

/// Accept a contact message.
///
/// Unreadable bodies are answered with the same 400 error shape as
/// failed validation.
pub async fn submit_contact(
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> AppResult<Json<ContactReceipt>> {
    let Json(message) = payload?;
    let receipt = ContactService::new().submit(&message)?;
    Ok(Json(receipt))
}
