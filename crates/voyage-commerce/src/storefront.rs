//! Storefront facade wiring the catalog to persisted collections.

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::info;
use voyage_store::{Collection, KeyValueStore};

use crate::cart::{CartLedger, CartLine};
use crate::catalog::Catalog;
use crate::checkout::{Booking, CheckoutFlow, CustomerDetails};
use crate::contact::{ContactForm, Inquiry};
use crate::error::CommerceError;
use crate::log::{BookingLog, InquiryLog};

/// Storage key of the active cart.
pub const CART_KEY: &str = "cart";
/// Storage key of the booking log.
pub const BOOKINGS_KEY: &str = "bookings";
/// Storage key of the inquiry log.
pub const INQUIRIES_KEY: &str = "inquiries";

/// A catalog plus the cart, bookings and inquiries kept in one store.
#[derive(Debug, Clone)]
pub struct Storefront<S> {
    catalog: Catalog,
    store: S,
}

impl<S: KeyValueStore + Clone> Storefront<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self { catalog, store }
    }

    /// Storefront over the bundled catalog.
    pub fn with_builtin_catalog(store: S) -> Self {
        Self::new(Catalog::builtin(), store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The active cart.
    pub fn cart(&self) -> CartLedger<'_, Collection<S, CartLine>> {
        CartLedger::new(&self.catalog, Collection::new(self.store.clone(), CART_KEY))
    }

    pub fn bookings(&self) -> BookingLog<Collection<S, Booking>> {
        BookingLog::new(Collection::new(self.store.clone(), BOOKINGS_KEY))
    }

    pub fn inquiries(&self) -> InquiryLog<Collection<S, Inquiry>> {
        InquiryLog::new(Collection::new(self.store.clone(), INQUIRIES_KEY))
    }

    /// Run the whole checkout for the current cart in one step.
    pub fn checkout(&self, customer: CustomerDetails) -> Result<Booking, CommerceError> {
        self.checkout_at(customer, &Local::now())
    }

    /// [`checkout`](Self::checkout) as of `now`.
    pub fn checkout_at<Tz>(
        &self,
        customer: CustomerDetails,
        now: &DateTime<Tz>,
    ) -> Result<Booking, CommerceError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let ledger = self.cart();
        let mut flow = CheckoutFlow::new();
        flow.proceed(&ledger.cart()?)?;
        let booking = flow.submit_at(&ledger, &self.bookings(), customer, now)?;
        Ok(booking.clone())
    }

    /// Record a contact-form submission.
    pub fn submit_inquiry(&self, form: ContactForm) -> Result<Inquiry, CommerceError> {
        self.submit_inquiry_at(form, Utc::now())
    }

    /// [`submit_inquiry`](Self::submit_inquiry) as of `now`.
    pub fn submit_inquiry_at(
        &self,
        form: ContactForm,
        now: DateTime<Utc>,
    ) -> Result<Inquiry, CommerceError> {
        form.validate()?;

        let inquiries = self.inquiries();
        let id = inquiries.next_id(now.timestamp_millis())?;
        let inquiry = Inquiry::from_form(id, form, now);
        inquiries.append(inquiry.clone())?;

        info!(inquiry = %inquiry.id, subject = %inquiry.subject, "inquiry received");
        Ok(inquiry)
    }
}
