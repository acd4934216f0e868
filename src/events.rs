use cosmwasm_std::{Addr, Event, Uint128};

/// Rendered in place of the missing side of a mint or burn.
pub const NULL_ACCOUNT: &str = "null";

/// Notifications raised by the ledger once an operation has completed.
///
/// `None` on either side of a transfer stands for the null account, so a
/// deposit is `from: None` and a withdraw is `to: None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    Transfer {
        from: Option<Addr>,
        to: Option<Addr>,
        amount: Uint128,
    },
    TransferBusiness {
        from: Addr,
        to: Addr,
        wad: Uint128,
        fee: Uint128,
    },
}

pub trait NotificationSink {
    fn notify(&mut self, event: LedgerEvent);
}

/// Sink that keeps notifications in emission order until the response is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<LedgerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events.into_iter().map(Event::from).collect()
    }
}

impl NotificationSink for EventLog {
    fn notify(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

fn account_or_null(account: Option<&Addr>) -> String {
    account
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| NULL_ACCOUNT.to_string())
}

impl From<LedgerEvent> for Event {
    fn from(event: LedgerEvent) -> Self {
        match event {
            LedgerEvent::Transfer { from, to, amount } => Event::new("transfer")
                .add_attribute("from", account_or_null(from.as_ref()))
                .add_attribute("to", account_or_null(to.as_ref()))
                .add_attribute("amount", amount),
            LedgerEvent::TransferBusiness { from, to, wad, fee } => {
                Event::new("transfer_business")
                    .add_attribute("from", from)
                    .add_attribute("to", to)
                    .add_attribute("wad", wad)
                    .add_attribute("fee", fee)
            }
        }
    }
}
