//! Annual cash flows of a fixed coupon bond.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::instrument::decimal_to_f64;
use crate::error::{GiltError, GiltResult};

/// Kind of payment, derived from whether principal is redeemed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Coupon only.
    Coupon,
    /// Last coupon together with the face value.
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Coupon => "Coupon",
            Self::CouponAndPrincipal => "Coupon+Principal",
        })
    }
}

/// What the holder receives at the end of one annual period.
///
/// ```rust
/// use gilt_core::types::{CashFlow, CashFlowType};
/// use rust_decimal_macros::dec;
///
/// let last = CashFlow::final_payment(5, dec!(50_000), dec!(1_000_000)).unwrap();
/// assert_eq!(last.amount().unwrap(), dec!(1_050_000));
/// assert_eq!(last.flow_type(), CashFlowType::CouponAndPrincipal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    period: u32,
    coupon: Decimal,
    principal: Decimal,
}

impl CashFlow {
    /// Coupon paid at the end of `period` (1-based years).
    #[must_use]
    pub fn coupon(period: u32, coupon: Decimal) -> Self {
        Self {
            period,
            coupon,
            principal: Decimal::ZERO,
        }
    }

    /// Last coupon plus redemption of `principal`.
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidCashFlow`] if the payment overflows `Decimal`.
    pub fn final_payment(period: u32, coupon: Decimal, principal: Decimal) -> GiltResult<Self> {
        let cf = Self {
            period,
            coupon,
            principal,
        };
        cf.amount()?;
        Ok(cf)
    }

    /// Payment period, 1-based.
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Payment time in years; annual periods make this the period number.
    #[must_use]
    pub fn time(&self) -> f64 {
        f64::from(self.period)
    }

    /// Coupon part of the payment.
    #[must_use]
    pub fn coupon_amount(&self) -> Decimal {
        self.coupon
    }

    /// Principal part of the payment, zero before maturity.
    #[must_use]
    pub fn principal_amount(&self) -> Decimal {
        self.principal
    }

    /// Total received.
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidCashFlow`] if coupon plus principal
    /// overflows `Decimal`.
    pub fn amount(&self) -> GiltResult<Decimal> {
        self.coupon
            .checked_add(self.principal)
            .ok_or_else(|| GiltError::InvalidCashFlow {
                reason: format!(
                    "payment at t = {} overflows: {} + {}",
                    self.period, self.coupon, self.principal
                ),
            })
    }

    /// Payment kind.
    #[must_use]
    pub fn flow_type(&self) -> CashFlowType {
        if self.is_principal() {
            CashFlowType::CouponAndPrincipal
        } else {
            CashFlowType::Coupon
        }
    }

    /// True when the payment redeems principal.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        !self.principal.is_zero()
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Ok(amount) => write!(f, "t={}: {} ({})", self.period, amount, self.flow_type()),
            Err(_) => write!(
                f,
                "t={}: {} + {} ({})",
                self.period,
                self.coupon,
                self.principal,
                self.flow_type()
            ),
        }
    }
}

/// Cash flows of one bond, ordered by period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSchedule(Vec<CashFlow>);

impl CashFlowSchedule {
    /// Empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty schedule with room for `capacity` payments.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends a payment; callers push in period order.
    pub fn push(&mut self, cf: CashFlow) {
        self.0.push(cf);
    }

    /// Payments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.0
    }

    /// Number of payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no payments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Payments in period order.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.0.iter()
    }

    /// Sum of all payments, undiscounted.
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidCashFlow`] if the sum overflows `Decimal`.
    pub fn total(&self) -> GiltResult<Decimal> {
        self.0.iter().try_fold(Decimal::ZERO, |acc, cf| {
            checked_sum(acc, cf.amount()?, "total payments")
        })
    }

    /// Sum of coupon payments only.
    ///
    /// # Errors
    ///
    /// Returns [`GiltError::InvalidCashFlow`] if the sum overflows `Decimal`.
    pub fn total_coupons(&self) -> GiltResult<Decimal> {
        self.0.iter().try_fold(Decimal::ZERO, |acc, cf| {
            checked_sum(acc, cf.coupon_amount(), "total coupons")
        })
    }

    /// Redemption payment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&CashFlow> {
        self.0.last()
    }

    /// Payment times and amounts as `f64`, for the discounting kernels.
    ///
    /// # Errors
    ///
    /// Fails if a payment overflows `Decimal` or cannot be represented as `f64`.
    pub fn times_and_amounts(&self) -> GiltResult<(Vec<f64>, Vec<f64>)> {
        let mut times = Vec::with_capacity(self.0.len());
        let mut amounts = Vec::with_capacity(self.0.len());
        for cf in &self.0 {
            times.push(cf.time());
            amounts.push(decimal_to_f64("amount", cf.amount()?)?);
        }
        Ok((times, amounts))
    }
}

fn checked_sum(acc: Decimal, next: Decimal, what: &str) -> GiltResult<Decimal> {
    acc.checked_add(next).ok_or_else(|| GiltError::InvalidCashFlow {
        reason: format!("{what} overflow the decimal range"),
    })
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
