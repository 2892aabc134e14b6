multiversx_sc::imports!();

use crate::errors::CoffeeError;

#[multiversx_sc::module]
pub trait CustodyModule:
    crate::access_control::AccessControlModule + crate::events::EventsModule
{
    /// Sends the whole EGLD balance to the owner.
    #[endpoint(withdraw)]
    fn withdraw(&self) -> BigUint {
        let owner = self.require_caller_is_owner();

        let amount = self.get_balance();
        if amount == 0u64 {
            CoffeeError::NoFundsToWithdraw.signal::<Self::Api>();
        }

        self.transfer_native(&owner, &amount);
        self.emit_tips_withdrawn_event(&owner, &amount);

        amount
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// A failed transfer fails the whole transaction, so callers must finish
    /// their own bookkeeping before calling this.
    fn transfer_native(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }

        self.send().direct_egld(to, amount);
    }
}
