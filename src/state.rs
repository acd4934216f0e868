use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Owner identity and fee parameters, fixed at instantiation and mutated only by the owner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    /// fee charged on business transfers, in parts per 1000
    pub standard_fee: u16,
    /// upper bound of a single business transfer fee
    pub maximum_fee: Uint128,
    /// native coin accepted by deposit and paid out by withdraw
    pub denom: String,
    /// decimal places between `denom` and its largest denomination
    pub decimals: u8,
}

/// Fee override applied when the address is the recipient of a business transfer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
pub struct Discount {
    pub rate: u16,
    pub valid: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

// address -> ledger units
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

// units minted minus units burned
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

// recipient address -> discount entry
pub const DISCOUNTS: Map<&Addr, Discount> = Map::new("discounts");
