//! Contact module.
//!
//! Contact-form input and the inquiries created from it.

mod inquiry;

pub use inquiry::{ContactForm, Inquiry};
