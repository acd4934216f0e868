use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Config, Discount};

/// Every field falls back to its default when omitted: a 10 per mille
/// standard fee, `usei` with 6 decimals as base asset and a fee cap of
/// 12 whole units of that asset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub standard_fee: Option<u16>,
    pub maximum_fee: Option<Uint128>,
    pub denom: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Mint units 1:1 for the base asset attached to the call
    Deposit {},

    /// Burn units and get the base asset back
    Withdraw { amount: Uint128 },

    /// Move units to another address, free of charge
    Transfer { recipient: String, amount: Uint128 },

    /// Move units to another address, paying the recipient's fee rate to the owner
    TransferBusiness { recipient: String, amount: Uint128 },

    /// Owner only. Responds with the previous rate as data
    ChangeStandardFee { rate: u16 },

    /// Owner only. Responds with the previous cap as data
    ChangeMaximumFee { amount: Uint128 },

    /// Owner only. Business transfers to `address` use `rate` instead of the standard fee
    AddDiscount { rate: u16, address: String },

    /// Owner only
    RemoveDiscount { address: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Balance { address: String },
    Discount { address: String },
    StandardFee {},
    MaximumFee {},
    Owner {},
    TotalSupply {},
    Config {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DiscountResponse {
    pub rate: u16,
    pub valid: bool,
}

impl From<Discount> for DiscountResponse {
    fn from(discount: Discount) -> Self {
        Self {
            rate: discount.rate,
            valid: discount.valid,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct StandardFeeResponse {
    pub rate: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MaximumFeeResponse {
    pub amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

pub type ConfigResponse = Config;
