#![allow(deprecated)]
#![allow(dead_code)]

use buy_coffee::conversion::ConversionModule;
use buy_coffee::custody::CustodyModule;
use buy_coffee::donation::DonationModule;
use buy_coffee::memo_ledger::MemoLedgerModule;
use buy_coffee::rate_config::RateConfigModule;
use buy_coffee::BuyCoffee;
use multiversx_sc::codec::{top_encode_to_vec_u8_or_panic, TopEncode};
use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, rust_biguint, whitebox_legacy::*, DebugApi,
};
use price_feed::PriceFeed;

pub type RustBigUint = num_bigint::BigUint;

pub const FEED_DECIMALS: u8 = 8;
pub const EGLD_USD_PRICE: u64 = 200_000_000_000; // 2000 USD, 8 decimals
pub const START_TIMESTAMP: u64 = 1_700_000_000;

pub const COFFEE_IDR_AMOUNT: u64 = 150_000;
pub const COFFEE_REQUIRED_EGLD: u64 = 5_000_000_000_000_000; // 0.005 EGLD
pub const USER_INITIAL_BALANCE: u64 = 10_000_000_000_000_000_000; // 10 EGLD

/// Fields of a logged event, the identifier topic stripped.
pub struct EventFields {
    pub topics: Vec<Vec<u8>>,
    pub data: Vec<Vec<u8>>,
}

/// Returns the only `identifier` event the transaction logged.
pub fn single_event(result: &TxResult, identifier: &[u8]) -> EventFields {
    let mut matching = result
        .result_logs
        .iter()
        .filter(|log| log.topics.first().map(|first| first.as_slice()) == Some(identifier));
    let log = matching.next().unwrap_or_else(|| {
        panic!("no {} event", String::from_utf8_lossy(identifier))
    });
    assert!(
        matching.next().is_none(),
        "more than one {} event",
        String::from_utf8_lossy(identifier)
    );

    EventFields {
        topics: log.topics[1..].to_vec(),
        data: log.data.clone(),
    }
}

pub fn topic<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

pub fn address_topic(address: &Address) -> Vec<u8> {
    address.as_bytes().to_vec()
}

pub struct CoffeeSetup<CoffeeObjBuilder, FeedObjBuilder>
where
    CoffeeObjBuilder: 'static + Copy + Fn() -> buy_coffee::ContractObj<DebugApi>,
    FeedObjBuilder: 'static + Copy + Fn() -> price_feed::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub owner_address: Address,
    pub first_user: Address,
    pub second_user: Address,
    pub coffee_wrapper: ContractObjWrapper<buy_coffee::ContractObj<DebugApi>, CoffeeObjBuilder>,
    pub feed_wrapper: ContractObjWrapper<price_feed::ContractObj<DebugApi>, FeedObjBuilder>,
    pub coffee_builder: CoffeeObjBuilder,
    pub feed_builder: FeedObjBuilder,
}

impl<CoffeeObjBuilder, FeedObjBuilder> CoffeeSetup<CoffeeObjBuilder, FeedObjBuilder>
where
    CoffeeObjBuilder: 'static + Copy + Fn() -> buy_coffee::ContractObj<DebugApi>,
    FeedObjBuilder: 'static + Copy + Fn() -> price_feed::ContractObj<DebugApi>,
{
    pub fn new(coffee_builder: CoffeeObjBuilder, feed_builder: FeedObjBuilder) -> Self {
        let rust_zero = rust_biguint!(0u64);
        let mut b_mock = BlockchainStateWrapper::new();
        b_mock.set_block_timestamp(START_TIMESTAMP);

        let owner_addr = b_mock.create_user_account(&rust_zero);
        let first_user = b_mock.create_user_account(&rust_biguint!(USER_INITIAL_BALANCE));
        let second_user = b_mock.create_user_account(&rust_biguint!(USER_INITIAL_BALANCE));

        // price feed with one published round

        let feed_wrapper =
            b_mock.create_sc_account(&rust_zero, Some(&owner_addr), feed_builder, "price feed");
        b_mock
            .execute_tx(&owner_addr, &feed_wrapper, &rust_zero, |sc| {
                sc.init(FEED_DECIMALS, managed_buffer!(b"EGLD / USD"));
                sc.submit_price(managed_biguint!(EGLD_USD_PRICE));
            })
            .assert_ok();

        // coffee SC

        let coffee_wrapper =
            b_mock.create_sc_account(&rust_zero, Some(&owner_addr), coffee_builder, "buy coffee");
        b_mock
            .execute_tx(&owner_addr, &coffee_wrapper, &rust_zero, |sc| {
                sc.init(managed_address!(feed_wrapper.address_ref()));
            })
            .assert_ok();

        CoffeeSetup {
            b_mock,
            owner_address: owner_addr,
            first_user,
            second_user,
            coffee_wrapper,
            feed_wrapper,
            coffee_builder,
            feed_builder,
        }
    }

    pub fn buy_coffee(
        &mut self,
        user: &Address,
        name: &[u8],
        message: &[u8],
        idr_amount: u64,
        payment: &RustBigUint,
    ) -> TxResult {
        self.b_mock
            .execute_tx(user, &self.coffee_wrapper, payment, |sc| {
                let _ = sc.buy_coffee(
                    managed_buffer!(name),
                    managed_buffer!(message),
                    managed_biguint!(idr_amount),
                );
            })
    }

    pub fn withdraw(&mut self, caller: &Address) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.coffee_wrapper, &rust_biguint!(0), |sc| {
                let _ = sc.withdraw();
            })
    }

    pub fn update_rate(&mut self, caller: &Address, new_rate: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.coffee_wrapper, &rust_biguint!(0), |sc| {
                sc.update_usd_to_idr_rate(new_rate);
            })
    }

    pub fn submit_price(&mut self, price: u64) {
        let owner = self.owner_address.clone();
        self.b_mock
            .execute_tx(&owner, &self.feed_wrapper, &rust_biguint!(0), |sc| {
                sc.submit_price(managed_biguint!(price));
            })
            .assert_ok();
    }

    pub fn required_for(&mut self, idr_amount: u64) -> u64 {
        let mut required = 0u64;
        self.b_mock
            .execute_query(&self.coffee_wrapper, |sc| {
                let amount = sc.idr_to_native(managed_biguint!(idr_amount));
                required = amount
                    .to_u64()
                    .expect("required amount does not fit in u64");
            })
            .assert_ok();

        required
    }

    pub fn check_memos_count(&mut self, expected_count: usize) {
        self.b_mock
            .execute_query(&self.coffee_wrapper, |sc| {
                assert_eq!(sc.get_memos_count(), expected_count);
            })
            .assert_ok();
    }

    pub fn check_balance(&mut self, expected_balance: u64) {
        self.b_mock
            .check_egld_balance(self.coffee_wrapper.address_ref(), &rust_biguint!(expected_balance));
        self.b_mock
            .execute_query(&self.coffee_wrapper, |sc| {
                assert_eq!(sc.get_balance(), managed_biguint!(expected_balance));
            })
            .assert_ok();
    }

    pub fn check_total_tips_received(&mut self, expected_total: u64) {
        self.b_mock
            .execute_query(&self.coffee_wrapper, |sc| {
                assert_eq!(sc.total_tips_received().get(), managed_biguint!(expected_total));
            })
            .assert_ok();
    }
}
