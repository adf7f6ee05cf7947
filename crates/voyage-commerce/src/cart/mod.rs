//! Cart module.
//!
//! Contains cart line types, pricing, and the persisted cart ledger.

mod cart;
mod ledger;
mod line;
mod pricing;

pub use cart::Cart;
pub use ledger::CartLedger;
pub use line::{
    CartLine, CartLineRef, ItemType, Rental, TourLine, VehicleLine, MAX_QUANTITY_PER_LINE,
    MAX_RENTAL_DAYS,
};
pub use pricing::{tax_on, CartSummary, TAX_RATE_PERCENT};
