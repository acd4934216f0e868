use cosmwasm_std::{coins, Addr, BankMsg, Coin, CosmosMsg, Uint128};

use crate::error::ContractError;

/// Moves the base asset in and out of the ledger.
///
/// Both calls are all-or-nothing: an `Err` means no value moved.
pub trait AssetRail {
    fn lock(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError>;
    fn release(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError>;
}

/// Native bank coins. Deposits arrive as funds attached to the call and
/// withdrawals leave as `BankMsg::Send`, which reverts the whole transaction
/// if it cannot be delivered.
#[derive(Clone, Debug)]
pub struct BankRail {
    denom: String,
    funds: Vec<Coin>,
    messages: Vec<CosmosMsg>,
}

impl BankRail {
    pub fn new(denom: impl Into<String>, funds: &[Coin]) -> Self {
        Self {
            denom: denom.into(),
            funds: funds.to_vec(),
            messages: vec![],
        }
    }

    /// Bank messages queued by `release`, to be attached to the response.
    pub fn into_messages(self) -> Vec<CosmosMsg> {
        self.messages
    }
}

impl AssetRail for BankRail {
    fn lock(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
        // exactly one coin of the base asset, for exactly the minted amount
        match self.funds.as_slice() {
            [coin] if coin.denom == self.denom && coin.amount == amount => Ok(()),
            funds => Err(ContractError::AssetTransferFailed {
                reason: format!(
                    "{} attached {:?}, expected {}{}",
                    account, funds, amount, self.denom
                ),
            }),
        }
    }

    fn release(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::AssetTransferFailed {
                reason: "cannot send an empty coin".to_string(),
            });
        }
        self.messages.push(
            BankMsg::Send {
                to_address: account.to_string(),
                amount: coins(amount.u128(), self.denom.clone()),
            }
            .into(),
        );
        Ok(())
    }
}
