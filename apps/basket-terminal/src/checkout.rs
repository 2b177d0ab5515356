//! # Checkout Submission
//!
//! Where a checkout payload goes after "Buy Now".
//!
//! There is no order service. [`PreviewSubmitter`] accepts the payload, logs
//! it and hands back a receipt; the view then shows the JSON that would have
//! been sent.

use basket_core::{CheckoutPayload, Money};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;

/// Acknowledgement of a submitted checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Reference for this submission
    pub reference: Uuid,

    pub submitted_at: DateTime<Utc>,

    pub item_count: usize,

    pub total: Money,
}

/// Receives checkout payloads.
pub trait Submitter {
    /// Hands off one payload.
    fn submit(&mut self, payload: &CheckoutPayload) -> Result<SubmissionReceipt, ApiError>;
}

/// Display-only submitter. Keeps the receipts it issued.
#[derive(Debug, Default)]
pub struct PreviewSubmitter {
    receipts: Vec<SubmissionReceipt>,
}

impl PreviewSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receipts issued so far, oldest first.
    pub fn receipts(&self) -> &[SubmissionReceipt] {
        &self.receipts
    }
}

impl Submitter for PreviewSubmitter {
    fn submit(&mut self, payload: &CheckoutPayload) -> Result<SubmissionReceipt, ApiError> {
        if payload.is_empty() {
            return Err(ApiError::checkout("Your basket is empty"));
        }

        let body = payload.to_json()?;
        debug!(bytes = body.len(), body = %body, "Checkout payload");

        let receipt = SubmissionReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            item_count: payload.items.len(),
            total: payload.total,
        };

        info!(
            reference = %receipt.reference,
            items = receipt.item_count,
            total = %receipt.total,
            "Checkout previewed"
        );

        self.receipts.push(receipt.clone());
        Ok(receipt)
    }
}
