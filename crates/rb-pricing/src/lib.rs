//! `rb-pricing` — turn road distance into a delivery charge.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`policy`]  | `PricingPolicy`, `calculate_delivery_price`                 |
//! | [`quote`]   | `quote`, `DeliveryQuote` (pincode pair → price)             |
//! | [`error`]   | `PricingError`, `PricingResult<T>`                          |
//!
//! ```text
//! price = base + per_km * max(road_km, min_km)
//! ```

pub mod error;
pub mod policy;
pub mod quote;


pub use error::{PricingError, PricingResult};
pub use policy::{PricingPolicy, calculate_delivery_price};
pub use quote::{DeliveryQuote, quote};
