//! Checkout flow state machine.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use voyage_store::Repository;

use crate::cart::{Cart, CartLedger, CartLine};
use crate::checkout::{Booking, CustomerDetails};
use crate::error::CommerceError;
use crate::log::BookingLog;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Cart review.
    #[default]
    Cart,
    /// Customer details form.
    Checkout,
    /// Booking placed.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Checkout => "checkout",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Checkout => "Checkout",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Checkout => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

/// One pass through cart → checkout → confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    confirmation: Option<Booking>,
}

impl CheckoutFlow {
    /// Start at the cart step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The booking created by [`submit`](Self::submit), once confirmed.
    pub fn confirmation(&self) -> Option<&Booking> {
        self.confirmation.as_ref()
    }

    /// Move from the cart to the details form. The cart must not be empty.
    pub fn proceed(&mut self, cart: &Cart) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Cart, CheckoutStep::Checkout)?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        self.step = CheckoutStep::Checkout;
        Ok(self.step)
    }

    /// Return from the details form to the cart.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Checkout, CheckoutStep::Cart)?;
        self.step = CheckoutStep::Cart;
        Ok(self.step)
    }

    /// Place the booking using the current local time.
    pub fn submit<C, B>(
        &mut self,
        ledger: &CartLedger<'_, C>,
        bookings: &BookingLog<B>,
        customer: CustomerDetails,
    ) -> Result<&Booking, CommerceError>
    where
        C: Repository<CartLine>,
        B: Repository<Booking>,
    {
        self.submit_at(ledger, bookings, customer, &Local::now())
    }

    /// Place the booking as of `now`.
    ///
    /// Validates the form, snapshots the cart into a booking, appends it to
    /// `bookings`, moves to confirmation and clears the cart, in that order.
    /// Any failure before the append leaves both the cart and the log
    /// untouched. If only the clear fails, the error is returned but the
    /// flow is already at confirmation holding the booking.
    pub fn submit_at<C, B, Tz>(
        &mut self,
        ledger: &CartLedger<'_, C>,
        bookings: &BookingLog<B>,
        customer: CustomerDetails,
        now: &DateTime<Tz>,
    ) -> Result<&Booking, CommerceError>
    where
        C: Repository<CartLine>,
        B: Repository<Booking>,
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.expect_step(CheckoutStep::Checkout, CheckoutStep::Confirmation)?;
        customer.validate()?;

        let cart = ledger.cart()?;
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let id = bookings.next_id(now.timestamp_millis())?;
        let booking = Booking::from_cart(id, &cart, customer, now)?;
        bookings.append(booking.clone())?;

        info!(
            booking = %booking.id,
            total = %booking.total,
            items = booking.items.len(),
            "booking created"
        );

        // The booking is logged from here on; a failed clear must not let
        // the same cart be submitted twice.
        self.step = CheckoutStep::Confirmation;
        let booking = self.confirmation.insert(booking);
        if let Err(e) = ledger.clear() {
            warn!(booking = %booking.id, error = %e, "booking placed but cart not cleared");
            return Err(e);
        }
        Ok(&*booking)
    }

    /// Leave the confirmation and begin a new session at the cart.
    pub fn start_over(&mut self) -> Result<CheckoutStep, CommerceError> {
        self.expect_step(CheckoutStep::Confirmation, CheckoutStep::Cart)?;
        self.confirmation = None;
        self.step = CheckoutStep::Cart;
        Ok(self.step)
    }

    fn expect_step(&self, from: CheckoutStep, to: CheckoutStep) -> Result<(), CommerceError> {
        if self.step == from {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }
}
