multiversx_sc::imports!();

use price_feed::round::PriceRound;

use crate::errors::{CoffeeError, OrSignal};

/// Feeds with a finer scale than the native currency itself are rejected.
pub const MAX_FEED_DECIMALS: u8 = 18;

pub fn validate_price_feed_address<M: ManagedTypeApi>(
    address: &ManagedAddress<M>,
) -> Result<(), CoffeeError> {
    if address.is_zero() {
        return Err(CoffeeError::InvalidPriceFeedAddress);
    }

    Ok(())
}

pub fn validate_round<M: ManagedTypeApi>(round: &PriceRound<M>) -> Result<(), CoffeeError> {
    if round.round_id == 0 || round.updated_at == 0 {
        return Err(CoffeeError::PriceFeedNotInitialized);
    }
    if round.answer == 0u64 {
        return Err(CoffeeError::InvalidPrice);
    }
    if round.decimals > MAX_FEED_DECIMALS {
        return Err(CoffeeError::InvalidPriceDecimals);
    }

    Ok(())
}

/// Read-only access to the EGLD/USD feed living in the same shard.
#[multiversx_sc::module]
pub trait PriceOracleModule {
    fn latest_round(&self) -> PriceRound<Self::Api> {
        let feed_address = self.price_feed_address().get();
        let round_mapper = self.external_latest_round(feed_address);
        if round_mapper.is_empty() {
            CoffeeError::PriceFeedNotInitialized.signal::<Self::Api>();
        }

        let round = round_mapper.get();
        validate_round(&round).or_signal::<Self::Api>();

        round
    }

    /// EGLD price in USD, scaled by `getPriceFeedDecimals`.
    #[view(getLatestPrice)]
    fn get_latest_price(&self) -> BigUint {
        self.latest_round().answer
    }

    #[view(getPriceFeedDecimals)]
    fn get_price_feed_decimals(&self) -> u8 {
        self.latest_round().decimals
    }

    #[view(getPriceFeedAddress)]
    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper_from_address("latestRound")]
    fn external_latest_round(
        &self,
        feed_address: ManagedAddress,
    ) -> SingleValueMapper<PriceRound<Self::Api>, ManagedAddress>;
}
