//! Screens rendered by the plugin

use chrono::{DateTime, Utc};

use super::components::{
    button, divider, form, heading, input, panel, row, secondary_button, submit_button, text,
    Component, InputType,
};
use super::names;
use crate::models::{Credential, DraftOracle, EventKind, FilterKey, Oracle, State};

/// Notification rows shown on the history screen
pub const HISTORY_LIMIT: usize = 10;

/// Error panel appended below a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub title: String,
    pub message: String,
}

impl FormError {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn oracle_card(oracle: &Oracle) -> Component {
    let mut children = vec![
        text(format!("{} **{}**", oracle.emoji, oracle.name)),
        row("Event", text(oracle.event.label())),
    ];
    children.extend(
        oracle
            .filters
            .iter()
            .map(|filter| row(filter.key.title(), text(filter.value.clone()))),
    );

    let last_triggered = oracle
        .notifications
        .first()
        .map(|notification| display_timestamp(&notification.created_at))
        .unwrap_or_else(|| "N/A".to_string());
    children.push(row("Last Triggered", text(last_triggered)));
    children.push(button(
        "View Notifications",
        format!("{}{}", names::LOGS_PREFIX, oracle.id),
    ));
    children.push(secondary_button(
        "Delete",
        format!("{}{}", names::DELETE_PREFIX, oracle.id),
    ));

    panel(children)
}

/// Home screen: connect prompt, first-oracle call to action, or the oracle list.
pub fn home(state: &State) -> Component {
    if state.jwt.is_none() {
        return panel(vec![
            heading("Welcome to L3MBDA 👋"),
            text(
                "Open up [l3mbda.com](https://l3mbda.com/integrations) and connect your Metamask to get started!",
            ),
        ]);
    }

    if state.oracles.is_empty() {
        return panel(vec![
            heading("🔮 L3MBDA"),
            button("Create your first Oracle!", names::ADD),
        ]);
    }

    let mut list = vec![heading("ORACLES")];
    list.extend(state.oracles.iter().map(oracle_card));

    panel(vec![button("CREATE ✨", names::ADD), divider(), panel(list)])
}

pub fn notifications(oracle: &Oracle) -> Component {
    let mut children = vec![heading(format!("{} {}", oracle.emoji, oracle.name))];
    children.extend(
        oracle
            .notifications
            .iter()
            .take(HISTORY_LIMIT)
            .map(|notification| row("Triggered", text(display_timestamp(&notification.created_at)))),
    );
    children.push(secondary_button("Go back", names::HOME));
    panel(children)
}

pub fn event_picker() -> Component {
    let mut children = vec![
        heading("Create New Oracle"),
        text("Please pick the event you want to subscribe to:"),
    ];
    children.extend(EventKind::ALL.iter().map(|kind| {
        let label = match kind {
            EventKind::EthTransfer => "Native Transfer",
            other => other.label(),
        };
        button(label, kind.as_str())
    }));
    children.push(secondary_button("Go back", names::HOME));
    panel(children)
}

fn address_input(key: FilterKey, label: &str) -> Component {
    input(key.as_str(), label, Some("eg. 0x..."), InputType::Text, None)
}

fn number_input(key: FilterKey, label: &str, placeholder: &str) -> Component {
    input(key.as_str(), label, Some(placeholder), InputType::Number, None)
}

fn filter_inputs(event: EventKind) -> Vec<Component> {
    let token = || address_input(FilterKey::Token, "TOKEN (Address)");
    let amount = || number_input(FilterKey::Amount, "AMOUNT (Minimum)", "eg. 120.5");
    // Token ids travel under the `value` filter key.
    let token_id = || number_input(FilterKey::Value, "TOKEN ID", "eg. 1278");

    let mut inputs = vec![
        address_input(FilterKey::From, "FROM (Address or ENS)"),
        address_input(FilterKey::To, "TO (Address or ENS)"),
    ];
    match event {
        EventKind::Erc20Transfer => inputs.extend([token(), amount()]),
        EventKind::EthTransfer => inputs.push(amount()),
        EventKind::Erc721Transfer => inputs.extend([token(), token_id()]),
        EventKind::Erc1155Transfer => inputs.extend([token(), token_id(), amount()]),
    }
    inputs
}

/// Filter form for the pending draft, with an optional error below it.
pub fn filter_form(draft: &DraftOracle, error: Option<&FormError>) -> Component {
    let mut fields = filter_inputs(draft.event);
    fields.push(submit_button("CREATE", "submit"));
    fields.push(secondary_button("Go back", names::ADD));

    let mut children = vec![
        heading("Configure Your Oracle"),
        text("Add filters to configure your Oracle:"),
        form(names::NEW_ORACLE_FORM, fields),
    ];
    if let Some(error) = error {
        children.push(text(format!("**{}**", error.title)));
        children.push(text(error.message.clone()));
    }
    panel(children)
}

pub fn api_key_form(jwt: Option<&Credential>) -> Component {
    panel(vec![
        heading("API Key"),
        form(
            names::API_KEY_FORM,
            vec![
                input(
                    names::API_KEY_FIELD,
                    "API Key",
                    None,
                    InputType::Password,
                    jwt.map(|token| token.expose().to_string()),
                ),
                submit_button("Submit", "submit"),
            ],
        ),
    ])
}

pub fn connected_dialog() -> Component {
    panel(vec![heading("Success!"), text("Connected successfully!")])
}
