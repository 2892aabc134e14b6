multiversx_sc::imports!();

use crate::errors::{CoffeeError, OrSignal};

/// EGLD is denominated in 10^-18 units.
pub const NATIVE_DECIMALS: u32 = 18;

/// Smallest EGLD amount (in 10^-18 units) that covers `idr_amount`.
///
/// `price` is USD per EGLD scaled by `10^price_decimals`. Everything is multiplied
/// up front and divided once, rounding up, so no precision is lost on the way:
///
/// `ceil(idr * 10^18 * 10^price_decimals / (rate * price))`
pub fn native_amount_for_idr<M: ManagedTypeApi>(
    idr_amount: &BigUint<M>,
    usd_to_idr_rate: u64,
    price: &BigUint<M>,
    price_decimals: u8,
) -> Result<BigUint<M>, CoffeeError> {
    if *idr_amount == 0u64 {
        return Err(CoffeeError::ZeroIdrAmount);
    }
    if usd_to_idr_rate == 0 {
        return Err(CoffeeError::RateOutOfBounds);
    }
    if *price == 0u64 {
        return Err(CoffeeError::InvalidPrice);
    }

    let scale = BigUint::<M>::from(10u64).pow(NATIVE_DECIMALS + price_decimals as u32);
    let numerator = idr_amount * &scale;
    let denominator = price * &BigUint::from(usd_to_idr_rate);

    let quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    if remainder > 0u64 {
        return Ok(quotient + 1u64);
    }

    Ok(quotient)
}

#[multiversx_sc::module]
pub trait ConversionModule:
    crate::rate_config::RateConfigModule
    + crate::price_oracle::PriceOracleModule
    + crate::access_control::AccessControlModule
    + crate::events::EventsModule
{
    /// Amount of EGLD, in 10^-18 units, a donor has to attach to pay `idr_amount`.
    #[view(idrToNative)]
    fn idr_to_native(&self, idr_amount: BigUint) -> BigUint {
        self.required_native_amount(&idr_amount)
    }

    fn required_native_amount(&self, idr_amount: &BigUint) -> BigUint {
        // input errors take precedence over a broken feed
        if *idr_amount == 0u64 {
            CoffeeError::ZeroIdrAmount.signal::<Self::Api>();
        }

        let round = self.latest_round();
        let rate = self.usd_to_idr_rate().get();

        native_amount_for_idr(idr_amount, rate, &round.answer, round.decimals)
            .or_signal::<Self::Api>()
    }
}
