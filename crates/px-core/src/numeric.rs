use crate::PxError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute/relative tolerance pair for float comparisons.
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PxError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PxError::NonFinite { what, value: v })
    }
}

/// Strictly positive, finite step size.
pub fn ensure_step(v: Real, what: &'static str) -> Result<Real, PxError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(PxError::InvalidArg { what });
    }
    Ok(v)
}

/// Case-insensitive name comparison used for entity role markers.
pub fn name_is(name: &str, marker: &str) -> bool {
    name.eq_ignore_ascii_case(marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_step_rejects_zero_and_negative() {
        assert!(ensure_step(0.01, "step").is_ok());
        assert!(ensure_step(0.0, "step").is_err());
        assert!(ensure_step(-0.01, "step").is_err());
        assert!(ensure_step(Real::INFINITY, "step").is_err());
    }

    #[test]
    fn name_is_ignores_case() {
        assert!(name_is("Gravity", "gravity"));
        assert!(name_is("FLOOR", "floor"));
        assert!(!name_is("gravity2", "gravity"));
    }
}
