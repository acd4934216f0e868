pub mod contract;
mod error;
pub mod events;
pub mod fees;
pub mod helpers;
pub mod ledger;
pub mod msg;
pub mod rail;
pub mod state;

pub use crate::error::ContractError;
