#![no_std]

multiversx_sc::imports!();

pub mod round;

use round::PriceRound;

pub static INVALID_DECIMALS_ERR_MSG: &[u8] = b"Invalid decimals";
pub static NO_ROUND_ERR_MSG: &[u8] = b"No price submitted yet";

pub const MAX_DECIMALS: u8 = 18;

/// Owner-published EGLD/USD price feed.
/// The feed does not judge the submitted answers, consumers validate what they read.
#[multiversx_sc::contract]
pub trait PriceFeed {
    #[init]
    fn init(&self, decimals: u8, description: ManagedBuffer) {
        require!(decimals <= MAX_DECIMALS, INVALID_DECIMALS_ERR_MSG);

        self.decimals().set(decimals);
        self.description().set(description);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(submitPrice)]
    fn submit_price(&self, answer: BigUint) -> u64 {
        let round_mapper = self.latest_round();
        let previous_round_id = if round_mapper.is_empty() {
            0
        } else {
            round_mapper.get().round_id
        };

        let updated_at = self.blockchain().get_block_timestamp();
        let round = PriceRound::next(previous_round_id, answer, self.decimals().get(), updated_at);
        round_mapper.set(&round);

        self.price_submitted_event(round.round_id, &round.answer, updated_at);

        round.round_id
    }

    #[view(latestRoundData)]
    fn latest_round_data(&self) -> PriceRound<Self::Api> {
        let round_mapper = self.latest_round();
        require!(!round_mapper.is_empty(), NO_ROUND_ERR_MSG);

        round_mapper.get()
    }

    #[event("priceSubmitted")]
    fn price_submitted_event(
        &self,
        #[indexed] round_id: u64,
        #[indexed] answer: &BigUint,
        #[indexed] updated_at: u64,
    );

    #[view(getDecimals)]
    #[storage_mapper("decimals")]
    fn decimals(&self) -> SingleValueMapper<u8>;

    #[view(getDescription)]
    #[storage_mapper("description")]
    fn description(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("latestRound")]
    fn latest_round(&self) -> SingleValueMapper<PriceRound<Self::Api>>;
}
