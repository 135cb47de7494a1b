//! Fixed coupon instrument terms.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GiltError, GiltResult};

/// Terms of an annual-pay fixed coupon bond.
///
/// Holds only what the duration calculation needs. Derived quantities
/// (coupon payment, duration, portfolio weight) are computed on demand and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Face (redemption) value in currency units.
    pub face_value: Decimal,

    /// Annual coupon rate as a fraction (0.05 for 5%).
    pub coupon_rate: Decimal,

    /// Yield to maturity as a fraction, annually compounded.
    pub yield_to_maturity: f64,

    /// Number of annual periods until redemption.
    pub maturity_periods: u32,
}

impl Instrument {
    /// Creates a new instrument. No validation is performed; see [`Instrument::validate`].
    #[must_use]
    pub fn new(
        face_value: Decimal,
        coupon_rate: Decimal,
        yield_to_maturity: f64,
        maturity_periods: u32,
    ) -> Self {
        Self {
            face_value,
            coupon_rate,
            yield_to_maturity,
            maturity_periods,
        }
    }

    /// Checks every term against its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidInput`] naming the first offending term:
    /// - `face_value` must be positive
    /// - `coupon_rate` must not be negative
    /// - `yield_to_maturity` must be finite and greater than -1
    /// - `maturity_periods` must be at least 1
    /// - the final payment (coupon plus face value) must fit a `Decimal`
    pub fn validate(&self) -> GiltResult<()> {
        if self.face_value <= Decimal::ZERO {
            return Err(GiltError::invalid_input(
                "face_value",
                self.face_value,
                "must be positive",
            ));
        }
        if self.coupon_rate < Decimal::ZERO {
            return Err(GiltError::invalid_input(
                "coupon_rate",
                self.coupon_rate,
                "must not be negative",
            ));
        }
        validate_yield(self.yield_to_maturity)?;
        validate_maturity(self.maturity_periods)?;
        self.final_payment()?;
        Ok(())
    }

    /// Returns the annual coupon payment (face value × coupon rate).
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidInput`] if the product overflows `Decimal`.
    pub fn annual_coupon(&self) -> GiltResult<Decimal> {
        self.face_value
            .checked_mul(self.coupon_rate)
            .ok_or_else(|| overflow("coupon_rate", self.coupon_rate, "annual coupon"))
    }

    /// Returns the redemption payment: last coupon plus face value.
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidInput`] if either step overflows `Decimal`.
    pub fn final_payment(&self) -> GiltResult<Decimal> {
        self.annual_coupon()?
            .checked_add(self.face_value)
            .ok_or_else(|| overflow("face_value", self.face_value, "final payment"))
    }

    /// Returns true if the instrument pays no coupon.
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate.is_zero()
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} face, ", self.face_value)?;
        match self.coupon_rate.checked_mul(Decimal::ONE_HUNDRED) {
            Some(pct) => write!(f, "{pct}% coupon")?,
            None => write!(f, "{} coupon rate", self.coupon_rate)?,
        }
        write!(
            f,
            ", {:.3}% yield, {}y",
            self.yield_to_maturity * 100.0,
            self.maturity_periods
        )
    }
}

fn overflow(field: &str, value: Decimal, what: &str) -> GiltError {
    GiltError::invalid_input(field, value, format!("{what} overflows the decimal range"))
}

/// Converts a money amount to `f64` for discounting.
///
/// # Errors
///
/// Returns [`GiltError::InvalidInput`] naming `field` if the value has no
/// `f64` representation.
pub fn decimal_to_f64(field: &str, value: Decimal) -> GiltResult<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GiltError::invalid_input(field, value, "has no f64 representation"))
}

/// Validates a discount rate: `1 + ytm` must be a positive base.
pub fn validate_yield(yield_to_maturity: f64) -> GiltResult<()> {
    if !yield_to_maturity.is_finite() || 1.0 + yield_to_maturity <= 0.0 {
        return Err(GiltError::invalid_input(
            "yield_to_maturity",
            yield_to_maturity,
            "must be finite and greater than -1",
        ));
    }
    Ok(())
}

/// Validates a maturity expressed in annual periods.
pub fn validate_maturity(maturity_periods: u32) -> GiltResult<()> {
    if maturity_periods < 1 {
        return Err(GiltError::invalid_input(
            "maturity_periods",
            maturity_periods,
            "must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bond_a() -> Instrument {
        Instrument::new(dec!(1_000_000), dec!(0.05), 0.052, 5)
    }

    #[test]
    fn test_annual_coupon() {
        assert_eq!(bond_a().annual_coupon().unwrap(), dec!(50_000));
        assert_eq!(
            Instrument::new(dec!(500_000), dec!(0.045), 0.047, 7)
                .annual_coupon()
                .unwrap(),
            dec!(22_500)
        );
        assert_eq!(bond_a().final_payment().unwrap(), dec!(1_050_000));
    }

    #[test]
    fn test_oversized_terms_rejected_not_panicking() {
        // face × coupon overflows
        let huge_coupon = Instrument::new(Decimal::MAX, dec!(2), 0.05, 5);
        let err = huge_coupon.annual_coupon().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(huge_coupon.validate().unwrap_err().is_invalid_input());

        // coupon fits, coupon + face does not
        let huge_face = Instrument::new(Decimal::MAX, dec!(0.5), 0.05, 5);
        assert!(huge_face.annual_coupon().is_ok());
        let err = huge_face.validate().unwrap_err();
        assert!(err.to_string().contains("final payment"));
    }

    #[test]
    fn test_decimal_to_f64() {
        assert_eq!(decimal_to_f64("amount", dec!(1_050.5)).unwrap(), 1_050.5);
        assert!(decimal_to_f64("amount", Decimal::MAX).unwrap() > 7.9e28);
    }

    #[test]
    fn test_valid_instrument() {
        assert!(bond_a().validate().is_ok());
        assert!(Instrument::new(dec!(100), dec!(0), 0.0, 1).validate().is_ok());
        assert!(Instrument::new(dec!(100), dec!(0.03), -0.5, 3)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let err = Instrument::new(dec!(100), dec!(0.05), 0.05, 0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("maturity_periods"));
    }

    #[test]
    fn test_discount_base_rejected() {
        for ytm in [-1.0, -1.5, f64::NAN, f64::INFINITY] {
            let err = Instrument::new(dec!(100), dec!(0.05), ytm, 5)
                .validate()
                .unwrap_err();
            assert!(err.to_string().contains("yield_to_maturity"));
        }
    }

    #[test]
    fn test_face_and_coupon_rejected() {
        let err = Instrument::new(dec!(0), dec!(0.05), 0.05, 5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("face_value"));

        let err = Instrument::new(dec!(100), dec!(-0.01), 0.05, 5)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("coupon_rate"));
    }

    #[test]
    fn test_zero_coupon_flag() {
        assert!(Instrument::new(dec!(100), dec!(0), 0.05, 5).is_zero_coupon());
        assert!(!bond_a().is_zero_coupon());
    }

    #[test]
    fn test_serde() {
        let bond = bond_a();
        let json = serde_json::to_string(&bond).unwrap();
        let parsed: Instrument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.face_value, bond.face_value);
        assert_eq!(parsed.maturity_periods, 5);
        assert!((parsed.yield_to_maturity - 0.052).abs() < 1e-12);
    }
}
