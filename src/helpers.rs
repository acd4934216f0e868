use crate::ContractError;
use cosmwasm_std::{Coin, Uint128};

// messages other than deposit must not carry coins, they would be held without backing any units
pub fn nonpayable(sent_funds: &[Coin]) -> Result<(), ContractError> {
    if !sent_funds.is_empty() {
        return Err(ContractError::NonPayable {});
    }
    Ok(())
}

// total amount offered with a deposit; whether it is the right coin is up to the rail
pub fn offered_amount(sent_funds: &[Coin]) -> Result<Uint128, ContractError> {
    sent_funds
        .iter()
        .try_fold(Uint128::zero(), |total, coin| {
            total.checked_add(coin.amount)
        })
        .map_err(ContractError::from)
}
