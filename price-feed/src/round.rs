multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// One published EGLD/USD observation.
/// `answer` is a fixed-point value scaled by `10^decimals`.
/// Consumers in the same shard read it directly from the `latestRound` storage key.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PriceRound<M: ManagedTypeApi> {
    pub round_id: u64,
    pub answer: BigUint<M>,
    pub decimals: u8,
    pub updated_at: u64,
}

impl<M: ManagedTypeApi> PriceRound<M> {
    pub fn next(previous_round_id: u64, answer: BigUint<M>, decimals: u8, updated_at: u64) -> Self {
        PriceRound {
            round_id: previous_round_id + 1,
            answer,
            decimals,
            updated_at,
        }
    }
}
