use crate::memo_ledger::Memo;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[inline]
    fn emit_new_memo_event(&self, memo: &Memo<Self::Api>) {
        self.new_memo_event(&memo.from, memo.timestamp, &memo.name, &memo.message);
    }

    fn emit_tips_withdrawn_event(&self, owner: &ManagedAddress, amount: &BigUint) {
        let timestamp = self.blockchain().get_block_timestamp();
        self.tips_withdrawn_event(owner, amount, timestamp);
    }

    #[inline]
    fn emit_rate_updated_event(&self, old_rate: u64, new_rate: u64, updated_by: &ManagedAddress) {
        self.rate_updated_event(old_rate, new_rate, updated_by);
    }

    #[event("newMemo")]
    fn new_memo_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] timestamp: u64,
        #[indexed] name: &ManagedBuffer,
        message: &ManagedBuffer,
    );

    #[event("tipsWithdrawn")]
    fn tips_withdrawn_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] timestamp: u64,
    );

    #[event("rateUpdated")]
    fn rate_updated_event(
        &self,
        #[indexed] old_rate: u64,
        #[indexed] new_rate: u64,
        #[indexed] updated_by: &ManagedAddress,
    );
}
