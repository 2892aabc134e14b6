multiversx_sc::imports!();

use crate::errors::{CoffeeError, OrSignal};

pub const MIN_RATE: u64 = 1_000;
pub const MAX_RATE: u64 = 100_000;
pub const DEFAULT_USD_TO_IDR_RATE: u64 = 15_000;

pub fn validate_rate(rate: u64) -> Result<u64, CoffeeError> {
    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(CoffeeError::RateOutOfBounds);
    }

    Ok(rate)
}

#[multiversx_sc::module]
pub trait RateConfigModule:
    crate::access_control::AccessControlModule + crate::events::EventsModule
{
    /// IDR per one USD, no decimals.
    #[endpoint(updateUsdToIdrRate)]
    fn update_usd_to_idr_rate(&self, new_rate: u64) {
        let caller = self.require_caller_is_owner();
        let new_rate = validate_rate(new_rate).or_signal::<Self::Api>();

        let rate_mapper = self.usd_to_idr_rate();
        let old_rate = rate_mapper.get();
        rate_mapper.set(new_rate);

        self.emit_rate_updated_event(old_rate, new_rate, &caller);
    }

    #[view(minRate)]
    fn min_rate(&self) -> u64 {
        MIN_RATE
    }

    #[view(maxRate)]
    fn max_rate(&self) -> u64 {
        MAX_RATE
    }

    #[view(usdToIdrRate)]
    #[storage_mapper("usdToIdrRate")]
    fn usd_to_idr_rate(&self) -> SingleValueMapper<u64>;
}
