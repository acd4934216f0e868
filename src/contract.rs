#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::events::EventLog;
use crate::fees::{default_maximum_fee, DEFAULT_STANDARD_FEE};
use crate::helpers::{nonpayable, offered_amount};
use crate::ledger::{self, Ledger};
use crate::msg::{
    BalanceResponse, DiscountResponse, ExecuteMsg, InstantiateMsg, MaximumFeeResponse,
    OwnerResponse, QueryMsg, StandardFeeResponse, TotalSupplyResponse,
};
use crate::rail::BankRail;
use crate::state::{Config, CONFIG};

const CONTRACT_NAME: &str = "crates.io:fee-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DENOM: &str = "usei";
const DEFAULT_DECIMALS: u8 = 6;

type BankLedger<'a> = Ledger<'a, BankRail, EventLog>;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info.funds)?;

    let decimals = msg.decimals.unwrap_or(DEFAULT_DECIMALS);
    let maximum_fee = match msg.maximum_fee {
        Some(maximum_fee) => maximum_fee,
        None => default_maximum_fee(decimals)?,
    };
    let config = Config {
        owner: info.sender.clone(),
        standard_fee: msg.standard_fee.unwrap_or(DEFAULT_STANDARD_FEE),
        maximum_fee,
        denom: msg.denom.unwrap_or_else(|| DEFAULT_DENOM.to_string()),
        decimals,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // save the configuration and start with an empty supply
    ledger::initialize(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("standard_fee", config.standard_fee.to_string())
        .add_attribute("maximum_fee", config.maximum_fee)
        .add_attribute("denom", config.denom)
        .add_attribute("decimals", config.decimals.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // only a deposit may carry coins
    if !matches!(msg, ExecuteMsg::Deposit {}) {
        nonpayable(&info.funds)?;
    }

    let api = deps.api;
    let denom = CONFIG.load(deps.storage)?.denom;
    let rail = BankRail::new(denom, &info.funds);
    let mut ledger = Ledger::new(deps.storage, rail, EventLog::new());

    let response = match msg {
        ExecuteMsg::Deposit {} => deposit(&mut ledger, &info),
        ExecuteMsg::Withdraw { amount } => withdraw(&mut ledger, &info, amount),
        ExecuteMsg::Transfer { recipient, amount } => {
            let recipient = api.addr_validate(&recipient)?;
            transfer(&mut ledger, &info, recipient, amount)
        }
        ExecuteMsg::TransferBusiness { recipient, amount } => {
            let recipient = api.addr_validate(&recipient)?;
            transfer_business(&mut ledger, &info, recipient, amount)
        }
        ExecuteMsg::ChangeStandardFee { rate } => change_standard_fee(&mut ledger, &info, rate),
        ExecuteMsg::ChangeMaximumFee { amount } => change_maximum_fee(&mut ledger, &info, amount),
        ExecuteMsg::AddDiscount { rate, address } => {
            let address = api.addr_validate(&address)?;
            add_discount(&mut ledger, &info, rate, address)
        }
        ExecuteMsg::RemoveDiscount { address } => {
            let address = api.addr_validate(&address)?;
            remove_discount(&mut ledger, &info, address)
        }
    }?;

    // hand the queued bank sends and ledger notifications to the chain
    let (rail, log) = ledger.into_parts();
    Ok(response
        .add_messages(rail.into_messages())
        .add_events(log.into_events()))
}

fn deposit(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
) -> Result<Response, ContractError> {
    let amount = offered_amount(&info.funds)?;
    ledger.deposit(&info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("method", "deposit")
        .add_attribute("to", info.sender.clone())
        .add_attribute("amount", amount))
}

fn withdraw(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ledger.withdraw(&info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("method", "withdraw")
        .add_attribute("from", info.sender.clone())
        .add_attribute("amount", amount))
}

fn transfer(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    recipient: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ledger.transfer(&info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender.clone())
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

fn transfer_business(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    recipient: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let split = ledger.transfer_business(&info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_business")
        .add_attribute("from", info.sender.clone())
        .add_attribute("to", recipient)
        .add_attribute("amount", amount)
        .add_attribute("fee", split.fee))
}

fn change_standard_fee(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    rate: u16,
) -> Result<Response, ContractError> {
    let previous = ledger.change_standard_fee(&info.sender, rate)?;

    Ok(Response::new()
        .add_attribute("method", "change_standard_fee")
        .add_attribute("previous", previous.to_string())
        .add_attribute("rate", rate.to_string())
        .set_data(to_binary(&previous)?))
}

fn change_maximum_fee(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let previous = ledger.change_maximum_fee(&info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("method", "change_maximum_fee")
        .add_attribute("previous", previous)
        .add_attribute("amount", amount)
        .set_data(to_binary(&previous)?))
}

fn add_discount(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    rate: u16,
    address: Addr,
) -> Result<Response, ContractError> {
    ledger.add_discount(&info.sender, rate, &address)?;

    Ok(Response::new()
        .add_attribute("method", "add_discount")
        .add_attribute("address", address)
        .add_attribute("rate", rate.to_string()))
}

fn remove_discount(
    ledger: &mut BankLedger<'_>,
    info: &MessageInfo,
    address: Addr,
) -> Result<Response, ContractError> {
    ledger.remove_discount(&info.sender, &address)?;

    Ok(Response::new()
        .add_attribute("method", "remove_discount")
        .add_attribute("address", address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_binary(&BalanceResponse {
                balance: ledger::balance_of(deps.storage, &address)?,
            })
        }
        QueryMsg::Discount { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_binary(&DiscountResponse::from(ledger::discount_of(
                deps.storage,
                &address,
            )?))
        }
        QueryMsg::StandardFee {} => to_binary(&StandardFeeResponse {
            rate: ledger::standard_fee(deps.storage)?,
        }),
        QueryMsg::MaximumFee {} => to_binary(&MaximumFeeResponse {
            amount: ledger::maximum_fee(deps.storage)?,
        }),
        QueryMsg::Owner {} => to_binary(&OwnerResponse {
            owner: ledger::owner(deps.storage)?,
        }),
        QueryMsg::TotalSupply {} => to_binary(&TotalSupplyResponse {
            total_supply: ledger::total_supply(deps.storage)?,
        }),
        QueryMsg::Config {} => to_binary(&ledger::config(deps.storage)?),
    }
}
