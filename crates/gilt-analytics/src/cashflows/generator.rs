//! Annual cash flow schedule generation.

use gilt_core::types::{CashFlow, CashFlowSchedule, Instrument};

use crate::error::AnalyticsResult;

/// Builds cash flow schedules from instrument terms.
pub struct CashFlowGenerator;

impl CashFlowGenerator {
    /// Generates the annual schedule of an instrument.
    ///
    /// Periods `1..maturity` pay the coupon; the final period pays the
    /// coupon plus the face value. A single-period instrument produces only
    /// the final payment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the instrument fails validation, including
    /// terms whose payments overflow `Decimal`.
    pub fn annual(instrument: &Instrument) -> AnalyticsResult<CashFlowSchedule> {
        instrument.validate()?;

        let maturity = instrument.maturity_periods;
        let coupon = instrument.annual_coupon()?;
        let mut schedule = CashFlowSchedule::with_capacity(maturity as usize);

        for period in 1..=maturity {
            if period == maturity {
                schedule.push(CashFlow::final_payment(
                    period,
                    coupon,
                    instrument.face_value,
                )?);
            } else {
                schedule.push(CashFlow::coupon(period, coupon));
            }
        }

        Ok(schedule)
    }
}
