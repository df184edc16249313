use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name given to every draft until the user renames it.
pub const DEFAULT_ORACLE_NAME: &str = "My Metamask Oracle";

/// On-chain event class an oracle subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "erc20-transfer")]
    Erc20Transfer,
    // The event picker historically emitted `native-transfer` for this kind.
    #[serde(rename = "eth-transfer", alias = "native-transfer")]
    EthTransfer,
    #[serde(rename = "erc721-transfer")]
    Erc721Transfer,
    #[serde(rename = "erc1155-transfer")]
    Erc1155Transfer,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Erc20Transfer,
        EventKind::EthTransfer,
        EventKind::Erc721Transfer,
        EventKind::Erc1155Transfer,
    ];

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Erc20Transfer => "erc20-transfer",
            EventKind::EthTransfer => "eth-transfer",
            EventKind::Erc721Transfer => "erc721-transfer",
            EventKind::Erc1155Transfer => "erc1155-transfer",
        }
    }

    /// Human-readable name used in views and notification labels
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Erc20Transfer => "ERC20 Transfer",
            EventKind::EthTransfer => "ETH Transfer",
            EventKind::Erc721Transfer => "ERC721 Transfer",
            EventKind::Erc1155Transfer => "ERC1155 Transfer",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "erc20-transfer" => Ok(EventKind::Erc20Transfer),
            "eth-transfer" | "native-transfer" => Ok(EventKind::EthTransfer),
            "erc721-transfer" => Ok(EventKind::Erc721Transfer),
            "erc1155-transfer" => Ok(EventKind::Erc1155Transfer),
            _ => Err(()),
        }
    }
}

/// Field a filter constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    From,
    To,
    Token,
    Amount,
    Value,
}

impl FilterKey {
    /// Recognized keys, in the order filters are emitted
    pub const ALL: [FilterKey; 5] = [
        FilterKey::From,
        FilterKey::To,
        FilterKey::Token,
        FilterKey::Amount,
        FilterKey::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::From => "from",
            FilterKey::To => "to",
            FilterKey::Token => "token",
            FilterKey::Amount => "amount",
            FilterKey::Value => "value",
        }
    }

    /// Row label shown in the oracle list, e.g. `From`
    pub fn title(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "type")]
    pub key: FilterKey,
    pub value: String,
}

impl Filter {
    pub fn new(key: FilterKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// One matched log surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Event label, e.g. `ERC20 Transfer`
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<HashMap<String, String>>,
    pub created_at: String,
}

/// Oracle under construction, before the API has assigned it an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftOracle {
    pub name: String,
    pub event: EventKind,
}

impl DraftOracle {
    pub fn new(event: EventKind) -> Self {
        Self {
            name: DEFAULT_ORACLE_NAME.to_string(),
            event,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oracle {
    pub id: String,
    pub name: String,
    pub event: EventKind,
    pub filters: Vec<Filter>,
    pub emoji: String,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Bearer token authorizing calls to the oracle API
///
/// Only [`Credential::parse`] constructs one, including when state is loaded.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Placeholder some hosts submit for an unset input.
    pub const PLACEHOLDER: &'static str = "undefined";

    /// Returns `None` for the empty string and the placeholder.
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() || token == Self::PLACEHOLDER {
            return None;
        }
        Some(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}
