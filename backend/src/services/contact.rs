//! Contact form handling
//!
//! Messages are validated and acknowledged. Nothing is persisted.

use shared::{validate_contact_message, ContactMessage, ContactReceipt};

use crate::error::AppResult;

#[derive(Clone, Debug, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, message: &ContactMessage) -> AppResult<ContactReceipt> {
        validate_contact_message(message)?;

        let receipt = ContactReceipt::new();
        tracing::info!(
            receipt_id = %receipt.id,
            subject = %message.subject,
            "Contact message received"
        );
        Ok(receipt)
    }
}
