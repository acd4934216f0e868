use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Insufficient balance (available: {available}, requested: {requested})")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Amount must be greater than zero")]
    InvalidAmount {},

    #[error("Invalid rate {rate}: must not exceed {max} per mille")]
    InvalidRate { rate: u16, max: u16 },

    #[error("Recipient cannot be the null account")]
    InvalidRecipient {},

    #[error("Base asset transfer failed: {reason}")]
    AssetTransferFailed { reason: String },

    #[error("This message does not accept funds")]
    NonPayable {},

    #[error("Base asset decimals {decimals} are too large for the default fee cap")]
    InvalidDecimals { decimals: u8 },
}
