//! Single-pair quote: pincodes in, price out.
//!
//! This is the entry point a conversational caller uses once it has pulled
//! two pincodes out of free text.  It holds no state between calls.

use rb_distance::{RoadEstimate, RoadEstimator};

use crate::{PricingPolicy, PricingResult};

/// Estimated distance and delivery charge for one pincode pair.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryQuote {
    pub origin:   String,
    pub dest:     String,
    pub estimate: RoadEstimate,
    pub price:    f64,
}

/// Quote a delivery.
///
/// An unknown pincode is a [`crate::PricingError::Distance`] failure, never
/// a zero-distance price.
pub fn quote<E: RoadEstimator + ?Sized>(
    estimator: &E,
    policy:    &PricingPolicy,
    origin:    &str,
    dest:      &str,
) -> PricingResult<DeliveryQuote> {
    let estimate = estimator.estimate(origin, dest)?;
    let price = policy.price(estimate.road_km)?;
    log::debug!("quote {origin} -> {dest}: {:.2} km, price {price:.2}", estimate.road_km);
    Ok(DeliveryQuote {
        origin: origin.to_owned(),
        dest:   dest.to_owned(),
        estimate,
        price,
    })
}
