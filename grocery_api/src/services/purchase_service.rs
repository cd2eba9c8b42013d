// grocery_api/src/services/purchase_service.rs

//! Turns a purchase submission into the denormalized rows the store persists.

use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{CartItem, NewPurchase, PurchasePayload};

pub const INVALID_PURCHASE: &str = "Invalid purchase data. All fields and a valid cart are required.";

/// Price of a single cart line. A missing or zero quantity counts as one unit.
/// `None` if the product does not fit in a `Decimal`.
pub fn line_price(item: &CartItem) -> Option<Decimal> {
  let quantity = item.quantity.filter(|q| !q.is_zero()).unwrap_or(Decimal::ONE);
  item.price.checked_mul(quantity)
}

/// Sum of all line prices in the cart, `None` on overflow.
pub fn cart_total(cart: &[CartItem]) -> Option<Decimal> {
  cart
    .iter()
    .try_fold(Decimal::ZERO, |total, item| total.checked_add(line_price(item)?))
}

/// Validates a purchase submission and expands it into one row per cart item.
///
/// # Arguments
/// * `payload`: The submitted purchase body.
///
/// # Returns
/// The rows to insert, in cart order, each carrying the cart total as
/// `total_amount`. Returns `AppError::Validation` if a customer field is
/// missing or empty, if the cart is absent or empty, or if a line price or the
/// total overflows.
#[instrument(name = "purchase_service::prepare_purchase", skip(payload), err(Display))]
pub fn prepare_purchase(payload: PurchasePayload) -> Result<Vec<NewPurchase>> {
  let invalid = || AppError::Validation(INVALID_PURCHASE.to_string());
  let required = |value: Option<String>| value.filter(|s| !s.is_empty()).ok_or_else(invalid);

  let user_name = required(payload.user_name)?;
  let phone = required(payload.phone)?;
  let location = required(payload.location)?;
  let payment_method = required(payload.payment_method)?;
  let cart = payload.cart.filter(|c| !c.is_empty()).ok_or_else(|| {
    warn!("Purchase rejected: cart is missing or empty.");
    invalid()
  })?;

  let total_amount = cart_total(&cart).ok_or_else(|| {
    warn!("Purchase rejected: cart total overflows.");
    invalid()
  })?;
  debug!(items = cart.len(), %total_amount, "Priced purchase cart.");

  cart
    .iter()
    .map(|item| {
      Ok::<_, AppError>(NewPurchase {
        user_name: user_name.clone(),
        product_name: item.name.clone(),
        price: line_price(item).ok_or_else(invalid)?,
        phone: phone.clone(),
        location: location.clone(),
        payment_method: payment_method.clone(),
        total_amount,
      })
    })
    .collect()
}
