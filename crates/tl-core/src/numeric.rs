use crate::{TlError, TlResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> TlResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TlError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> TlResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(TlError::NonPositive { what, value: v })
    }
}

/// Geometric mean `(x1 * x2 * ... * xn)^(1/n)`.
pub fn geometric_mean(values: &[Real]) -> TlResult<Real> {
    if values.is_empty() {
        return Err(TlError::InvalidArg {
            what: "geometric mean of an empty set",
        });
    }
    let product: Real = values.iter().product();
    Ok(product.powf(1.0 / values.len() as Real))
}
