#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod conversion;
pub mod custody;
pub mod donation;
pub mod errors;
pub mod events;
pub mod memo_ledger;
pub mod price_oracle;
pub mod rate_config;

use errors::OrSignal;
use price_oracle::validate_price_feed_address;
use rate_config::{validate_rate, DEFAULT_USD_TO_IDR_RATE};

/// Tips denominated in IDR and paid in EGLD at the live EGLD/USD price.
#[multiversx_sc::contract]
pub trait BuyCoffee:
    access_control::AccessControlModule
    + rate_config::RateConfigModule
    + price_oracle::PriceOracleModule
    + conversion::ConversionModule
    + memo_ledger::MemoLedgerModule
    + custody::CustodyModule
    + donation::DonationModule
    + events::EventsModule
{
    #[init]
    fn init(&self, price_feed_address: ManagedAddress) {
        validate_price_feed_address(&price_feed_address).or_signal::<Self::Api>();

        self.owner().set(self.blockchain().get_caller());
        self.price_feed_address().set(&price_feed_address);
        self.usd_to_idr_rate().set(DEFAULT_USD_TO_IDR_RATE);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.require_caller_is_owner();

        validate_rate(self.usd_to_idr_rate().get()).or_signal::<Self::Api>();
    }
}
