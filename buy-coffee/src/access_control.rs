multiversx_sc::imports!();

use crate::errors::{CoffeeError, OrSignal};

pub fn check_owner<M: ManagedTypeApi>(
    caller: &ManagedAddress<M>,
    owner: &ManagedAddress<M>,
) -> Result<(), CoffeeError> {
    if caller != owner {
        return Err(CoffeeError::NotOwner);
    }

    Ok(())
}

#[multiversx_sc::module]
pub trait AccessControlModule {
    /// Returns the caller, which is guaranteed to be the owner.
    fn require_caller_is_owner(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        check_owner(&caller, &self.owner().get()).or_signal::<Self::Api>();

        caller
    }

    #[view(owner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;
}
