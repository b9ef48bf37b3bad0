//! # Order Submission
//!
//! Builds the order-creation payload from a finalized cart and submits it
//! (`POST /orders`).
//!
//! ## Checkout flow position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart ──► NewOrder::build(cart, customer, ...)                      │
//! │               │  validates customer info, projects order lines,    │
//! │               │  computes subtotal/tax/fee totals                  │
//! │               ▼                                                     │
//! │  card payment? ──► external confirmation ──► mark_paid(intent_id)   │
//! │               │ no                                                  │
//! │               ▼                                                     │
//! │  submit_order(client, &order) ──► OrderConfirmation                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment-intent creation and card confirmation stay external; this
//! module only records their outcome on the payload.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use goldwok_core::cart::{Cart, CartTotals, FulfillmentType};
use goldwok_core::error::ValidationError;
use goldwok_core::order::{order_lines, OrderLine};
use goldwok_core::validation::{validate_customer_name, validate_email, validate_phone};

use crate::client::ApiClient;
use crate::error::ApiResult;

// =============================================================================
// Customer Info
// =============================================================================

/// Who the order is for, from the checkout form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Street address; required for delivery orders only.
    pub address: Option<String>,
}

impl CustomerInfo {
    /// Validates the form fields for the given fulfillment type.
    pub fn validate(&self, fulfillment: FulfillmentType) -> Result<(), ValidationError> {
        validate_customer_name("firstName", &self.first_name)?;
        validate_customer_name("lastName", &self.last_name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;

        if fulfillment == FulfillmentType::Delivery
            && self.address.as_deref().map_or(true, |a| a.trim().is_empty())
        {
            return Err(ValidationError::Required {
                field: "address".to_string(),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Payment
// =============================================================================

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card, confirmed online before submission.
    Card,
    /// Cash (or card) on pickup/arrival.
    Cash,
}

/// Payment state recorded on the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Payment confirmed online before the order was created.
    Paid,
    /// Payment due on pickup/arrival.
    Pending,
}

// =============================================================================
// New Order
// =============================================================================

/// The `POST /orders` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Account id when the customer is signed in; guests submit without.
    pub user_id: Option<String>,

    pub customer_email: String,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_phone: String,
    /// Present for delivery orders only.
    pub customer_address: Option<String>,

    pub order_type: FulfillmentType,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// External payment reference once a card payment is confirmed.
    pub stripe_payment_intent_id: Option<String>,

    pub items: Vec<OrderLine>,

    /// Totals in decimal dollars (wire format).
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,

    pub notes: Option<String>,

    /// Client-generated reference so a retried submission can be
    /// de-duplicated server-side.
    pub client_reference: String,
}

impl NewOrder {
    /// Builds a submission from the cart and checkout form.
    ///
    /// Validates the customer info, projects the cart into order lines,
    /// and computes totals in cents before converting to the wire's
    /// decimal dollars. Payment starts `Pending`; card checkouts call
    /// [`NewOrder::mark_paid`] after external confirmation.
    pub fn build(
        cart: &Cart,
        customer: &CustomerInfo,
        fulfillment: FulfillmentType,
        payment_method: PaymentMethod,
        user_id: Option<String>,
        notes: Option<String>,
    ) -> Result<NewOrder, ValidationError> {
        customer.validate(fulfillment)?;

        let totals = CartTotals::compute(cart, fulfillment);

        Ok(NewOrder {
            user_id,
            customer_email: customer.email.trim().to_string(),
            customer_first_name: customer.first_name.trim().to_string(),
            customer_last_name: customer.last_name.trim().to_string(),
            customer_phone: customer.phone.trim().to_string(),
            customer_address: match fulfillment {
                FulfillmentType::Delivery => customer.address.clone(),
                FulfillmentType::Pickup => None,
            },
            order_type: fulfillment,
            payment_method,
            payment_status: PaymentStatus::Pending,
            stripe_payment_intent_id: None,
            items: order_lines(cart),
            subtotal: totals.subtotal.to_major_units(),
            tax: totals.tax.to_major_units(),
            delivery_fee: totals.delivery_fee.to_major_units(),
            total: totals.total.to_major_units(),
            notes,
            client_reference: Uuid::new_v4().to_string(),
        })
    }

    /// Records a confirmed card payment on the payload.
    pub fn mark_paid(&mut self, payment_intent_id: impl Into<String>) {
        self.payment_status = PaymentStatus::Paid;
        self.stripe_payment_intent_id = Some(payment_intent_id.into());
    }
}

// =============================================================================
// Confirmation
// =============================================================================

/// What the order service returns for a created order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub id: i64,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Submits the order (`POST /orders`).
pub async fn submit_order(client: &ApiClient, order: &NewOrder) -> ApiResult<OrderConfirmation> {
    debug!(
        lines = order.items.len(),
        total = order.total,
        reference = %order.client_reference,
        "submitting order"
    );
    client.post("/orders", order).await
}

// =============================================================================
// Unit Tests
// =============================================================================
