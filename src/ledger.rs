//! Accounting core of the fee ledger.
//!
//! Every mutating operation follows the same shape: check the caller and the
//! parameters, stage the balance changes, move the base asset if needed,
//! commit, then notify. Nothing is written and nothing is notified when any of
//! those steps fails, so `sum(balances) == total_supply` holds between calls.

use std::collections::BTreeMap;

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::events::{LedgerEvent, NotificationSink, NULL_ACCOUNT};
use crate::fees::{effective_rate, split_fee, validate_rate, FeeSplit};
use crate::rail::AssetRail;
use crate::state::{Config, Discount, BALANCES, CONFIG, DISCOUNTS, TOTAL_SUPPLY};

/// Writes the initial configuration and an empty supply.
pub fn initialize(storage: &mut dyn Storage, config: &Config) -> Result<(), ContractError> {
    validate_rate(config.standard_fee)?;
    CONFIG.save(storage, config)?;
    TOTAL_SUPPLY.save(storage, &Uint128::zero())?;
    Ok(())
}

pub fn balance_of(storage: &dyn Storage, address: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, address)?.unwrap_or_default())
}

pub fn discount_of(storage: &dyn Storage, address: &Addr) -> StdResult<Discount> {
    Ok(DISCOUNTS.may_load(storage, address)?.unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOTAL_SUPPLY.may_load(storage)?.unwrap_or_default())
}

pub fn config(storage: &dyn Storage) -> StdResult<Config> {
    CONFIG.load(storage)
}

pub fn standard_fee(storage: &dyn Storage) -> StdResult<u16> {
    Ok(CONFIG.load(storage)?.standard_fee)
}

pub fn maximum_fee(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(CONFIG.load(storage)?.maximum_fee)
}

pub fn owner(storage: &dyn Storage) -> StdResult<Addr> {
    Ok(CONFIG.load(storage)?.owner)
}

/// Balance changes of one operation, applied to storage only on `commit`.
///
/// Reads go through the staged values first, so the same account may appear
/// on several legs (self transfers, the owner paying or receiving a business
/// transfer) without double counting.
#[derive(Default)]
struct Postings {
    balances: BTreeMap<Addr, Uint128>,
}

impl Postings {
    fn current(&self, storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
        match self.balances.get(account) {
            Some(balance) => Ok(*balance),
            None => balance_of(storage, account),
        }
    }

    fn debit(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        let available = self.current(storage, account)?;
        if available < amount {
            return Err(ContractError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        self.balances.insert(account.clone(), available - amount);
        Ok(())
    }

    fn credit(
        &mut self,
        storage: &dyn Storage,
        account: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        let balance = self.current(storage, account)?.checked_add(amount)?;
        self.balances.insert(account.clone(), balance);
        Ok(())
    }

    fn commit(self, storage: &mut dyn Storage) -> StdResult<()> {
        for (account, balance) in self.balances {
            BALANCES.save(storage, &account, &balance)?;
        }
        Ok(())
    }
}

fn ensure_recipient(to: &Addr) -> Result<(), ContractError> {
    if to.as_str() == NULL_ACCOUNT {
        return Err(ContractError::InvalidRecipient {});
    }
    Ok(())
}

/// The ledger bound to a store, a base-asset rail and a notification sink for
/// the duration of one call.
pub struct Ledger<'a, R, N> {
    storage: &'a mut dyn Storage,
    rail: R,
    sink: N,
}

impl<'a, R, N> Ledger<'a, R, N>
where
    R: AssetRail,
    N: NotificationSink,
{
    pub fn new(storage: &'a mut dyn Storage, rail: R, sink: N) -> Self {
        Self {
            storage,
            rail,
            sink,
        }
    }

    /// Hands back the rail and the sink so their output can reach the caller.
    pub fn into_parts(self) -> (R, N) {
        (self.rail, self.sink)
    }

    fn ensure_owner(&self, caller: &Addr) -> Result<Config, ContractError> {
        let config = CONFIG.load(&*self.storage)?;
        if *caller != config.owner {
            return Err(ContractError::Unauthorized {});
        }
        Ok(config)
    }

    /// Locks `amount` of the base asset and mints the same number of units to the caller.
    pub fn deposit(&mut self, caller: &Addr, amount: Uint128) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::InvalidAmount {});
        }

        let mut postings = Postings::default();
        postings.credit(self.storage, caller, amount)?;
        let supply = total_supply(self.storage)?.checked_add(amount)?;

        self.rail.lock(caller, amount)?;

        postings.commit(self.storage)?;
        TOTAL_SUPPLY.save(self.storage, &supply)?;

        self.sink.notify(LedgerEvent::Transfer {
            from: None,
            to: Some(caller.clone()),
            amount,
        });
        Ok(())
    }

    /// Burns `amount` units of the caller and releases the same amount of base asset.
    pub fn withdraw(&mut self, caller: &Addr, amount: Uint128) -> Result<(), ContractError> {
        if amount.is_zero() {
            return Err(ContractError::InvalidAmount {});
        }

        let balance = balance_of(self.storage, caller)?;
        let supply = total_supply(self.storage)?;

        let mut postings = Postings::default();
        postings.debit(self.storage, caller, amount)?;
        let remaining_supply = supply.checked_sub(amount)?;

        postings.commit(self.storage)?;
        TOTAL_SUPPLY.save(self.storage, &remaining_supply)?;

        if let Err(err) = self.rail.release(caller, amount) {
            BALANCES.save(self.storage, caller, &balance)?;
            TOTAL_SUPPLY.save(self.storage, &supply)?;
            return Err(err);
        }

        self.sink.notify(LedgerEvent::Transfer {
            from: Some(caller.clone()),
            to: None,
            amount,
        });
        Ok(())
    }

    /// Moves units between accounts without a fee.
    pub fn transfer(
        &mut self,
        caller: &Addr,
        to: &Addr,
        amount: Uint128,
    ) -> Result<(), ContractError> {
        ensure_recipient(to)?;

        let mut postings = Postings::default();
        postings.debit(self.storage, caller, amount)?;
        postings.credit(self.storage, to, amount)?;
        postings.commit(self.storage)?;

        self.sink.notify(LedgerEvent::Transfer {
            from: Some(caller.clone()),
            to: Some(to.clone()),
            amount,
        });
        Ok(())
    }

    /// Moves units to `to` and routes a fee to the owner. The rate is picked
    /// by the recipient: its discount if one is valid, the standard fee otherwise.
    pub fn transfer_business(
        &mut self,
        caller: &Addr,
        to: &Addr,
        amount: Uint128,
    ) -> Result<FeeSplit, ContractError> {
        ensure_recipient(to)?;

        let config = CONFIG.load(self.storage)?;
        let discount = DISCOUNTS.may_load(self.storage, to)?;
        let rate = effective_rate(discount.as_ref(), config.standard_fee);
        let split = split_fee(amount, rate, config.maximum_fee);

        let mut postings = Postings::default();
        postings.debit(self.storage, caller, amount)?;
        postings.credit(self.storage, to, split.net)?;
        postings.credit(self.storage, &config.owner, split.fee)?;
        postings.commit(self.storage)?;

        self.sink.notify(LedgerEvent::Transfer {
            from: Some(caller.clone()),
            to: Some(to.clone()),
            amount: split.net,
        });
        if !split.fee.is_zero() {
            self.sink.notify(LedgerEvent::Transfer {
                from: Some(caller.clone()),
                to: Some(config.owner.clone()),
                amount: split.fee,
            });
        }
        self.sink.notify(LedgerEvent::TransferBusiness {
            from: caller.clone(),
            to: to.clone(),
            wad: amount,
            fee: split.fee,
        });
        Ok(split)
    }

    /// Returns the rate that was replaced.
    pub fn change_standard_fee(&mut self, caller: &Addr, rate: u16) -> Result<u16, ContractError> {
        let mut config = self.ensure_owner(caller)?;
        let rate = validate_rate(rate)?;

        let previous = config.standard_fee;
        config.standard_fee = rate;
        CONFIG.save(self.storage, &config)?;
        Ok(previous)
    }

    /// Returns the cap that was replaced.
    pub fn change_maximum_fee(
        &mut self,
        caller: &Addr,
        amount: Uint128,
    ) -> Result<Uint128, ContractError> {
        let mut config = self.ensure_owner(caller)?;

        let previous = config.maximum_fee;
        config.maximum_fee = amount;
        CONFIG.save(self.storage, &config)?;
        Ok(previous)
    }

    pub fn add_discount(
        &mut self,
        caller: &Addr,
        rate: u16,
        address: &Addr,
    ) -> Result<(), ContractError> {
        self.ensure_owner(caller)?;
        let rate = validate_rate(rate)?;

        DISCOUNTS.save(self.storage, address, &Discount { rate, valid: true })?;
        Ok(())
    }

    // the stored rate is kept, it is ignored once the entry is invalid
    pub fn remove_discount(&mut self, caller: &Addr, address: &Addr) -> Result<(), ContractError> {
        self.ensure_owner(caller)?;

        if let Some(mut discount) = DISCOUNTS.may_load(self.storage, address)? {
            discount.valid = false;
            DISCOUNTS.save(self.storage, address, &discount)?;
        }
        Ok(())
    }
}
