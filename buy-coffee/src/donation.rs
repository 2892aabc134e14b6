multiversx_sc::imports!();

use crate::errors::{CoffeeError, OrSignal};
use crate::memo_ledger::Memo;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Lengths are in bytes. An empty message is allowed, an empty name is not.
pub fn validate_memo_fields(name_len: usize, message_len: usize) -> Result<(), CoffeeError> {
    if name_len == 0 {
        return Err(CoffeeError::EmptyName);
    }
    if name_len > MAX_NAME_LENGTH {
        return Err(CoffeeError::NameTooLong);
    }
    if message_len > MAX_MESSAGE_LENGTH {
        return Err(CoffeeError::MessageTooLong);
    }

    Ok(())
}

/// Returns the part of the payment that has to go back to the donor.
pub fn excess_payment<M: ManagedTypeApi>(
    attached_value: &BigUint<M>,
    required: &BigUint<M>,
) -> Result<BigUint<M>, CoffeeError> {
    if attached_value < required {
        return Err(CoffeeError::InsufficientPayment);
    }

    Ok(attached_value - required)
}

#[multiversx_sc::module]
pub trait DonationModule:
    crate::access_control::AccessControlModule
    + crate::rate_config::RateConfigModule
    + crate::price_oracle::PriceOracleModule
    + crate::conversion::ConversionModule
    + crate::memo_ledger::MemoLedgerModule
    + crate::custody::CustodyModule
    + crate::events::EventsModule
{
    #[payable("EGLD")]
    #[endpoint(buyCoffee)]
    fn buy_coffee(
        &self,
        name: ManagedBuffer,
        message: ManagedBuffer,
        idr_amount: BigUint,
    ) -> Memo<Self::Api> {
        validate_memo_fields(name.len(), message.len()).or_signal::<Self::Api>();

        let required = self.required_native_amount(&idr_amount);
        let attached_value = self.call_value().egld().clone_value();
        let excess = excess_payment(&attached_value, &required).or_signal::<Self::Api>();

        let sender = self.blockchain().get_caller();
        let memo = Memo {
            from: sender.clone(),
            timestamp: self.blockchain().get_block_timestamp(),
            name,
            message,
        };

        // ledger first, refund last
        self.append_memo(&memo);
        self.total_tips_received()
            .update(|total| *total += &required);

        self.transfer_native(&sender, &excess);
        self.emit_new_memo_event(&memo);

        memo
    }

    #[view(maxNameLength)]
    fn max_name_length(&self) -> usize {
        MAX_NAME_LENGTH
    }

    #[view(maxMessageLength)]
    fn max_message_length(&self) -> usize {
        MAX_MESSAGE_LENGTH
    }

    /// Sum of every accepted donation, withdrawals do not decrease it.
    #[view(totalTipsReceived)]
    #[storage_mapper("totalTipsReceived")]
    fn total_tips_received(&self) -> SingleValueMapper<BigUint>;
}
