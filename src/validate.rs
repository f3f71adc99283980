//! Client-side order validation.
//!
//! Every order is checked here before any network call: a malformed order
//! submitted to the venue burns request-rate budget for a guaranteed
//! rejection. The checks mirror the venue's own filters so client-side
//! rejections predict exchange-side ones exactly.
//!
//! All quantity arithmetic is exact decimal arithmetic. Step-multiple
//! checking in particular must not go through binary floats: 0.003 is an
//! exact multiple of 0.001 even though `0.003_f64 % 0.001_f64` is nonzero.

use rust_decimal::Decimal;

use crate::models::{InstrumentConstraints, OrderRequest};
use crate::{Error, Result};

/// Validate a candidate order against its instrument constraints.
///
/// Pure: same request and constraints always yield the same result.
/// Checks run in a fixed order and the first failure wins; validation is
/// all-or-nothing, never partial.
///
/// Side and order kind are already constrained by the type system, which
/// discharges the enum-membership rules at parse time.
pub fn validate(request: &OrderRequest, constraints: &InstrumentConstraints) -> Result<()> {
    let quantity = request.quantity();

    if quantity <= Decimal::ZERO {
        return Err(Error::validation("quantity must be positive"));
    }

    if let Some(price) = request.price() {
        if price <= Decimal::ZERO {
            return Err(Error::validation("price must be specified and positive"));
        }
    }

    if quantity < constraints.min_quantity {
        return Err(Error::validation(format!(
            "quantity must be at least {}",
            constraints.min_quantity
        )));
    }

    // Exact decimal remainder; zero step means the venue declared no filter.
    if !constraints.quantity_step.is_zero() && quantity % constraints.quantity_step != Decimal::ZERO
    {
        return Err(Error::validation(format!(
            "quantity must be a multiple of {}",
            constraints.quantity_step
        )));
    }

    match request {
        OrderRequest::StopLimit { stop_price, .. } => {
            if *stop_price <= Decimal::ZERO {
                return Err(Error::validation("stop price must be positive"));
            }
        }
        OrderRequest::Oco {
            stop_price,
            stop_limit_price,
            ..
        } => {
            if *stop_price <= Decimal::ZERO || *stop_limit_price <= Decimal::ZERO {
                return Err(Error::validation("stop prices must be positive"));
            }
        }
        OrderRequest::Market { .. } | OrderRequest::Limit { .. } => {}
    }

    Ok(())
}
