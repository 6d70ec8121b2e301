use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use zbus::zvariant::OwnedValue;

use crate::hints::Hints;

/// Expiration timeout of a notification, decoded from the wire `i32`.
///
/// The wire carries milliseconds with two sentinel values: `-1` leaves the
/// timeout to the server, `0` means the notification never expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeout {
    #[default]
    ServerDefault,
    Never,
    Millis(u32),
}

impl Timeout {
    pub fn from_wire(raw: i32) -> Self {
        match raw {
            0 => Self::Never,
            ms if ms > 0 => Self::Millis(ms as u32),
            _ => Self::ServerDefault,
        }
    }

    pub fn to_wire(self) -> i32 {
        match self {
            Self::ServerDefault => -1,
            Self::Never => 0,
            // The wire field is signed; anything past i32::MAX would flip
            // into the sentinel range.
            Self::Millis(ms) => ms.min(i32::MAX as u32) as i32,
        }
    }
}

impl Display for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServerDefault => write!(f, "default"),
            Self::Never => write!(f, "never"),
            Self::Millis(ms) => write!(f, "{ms}ms"),
        }
    }
}

/// One `Notify` call, plus the id the server assigned to it.
///
/// These are transient call parameters, not stored entities; field names and
/// types follow the wire protocol argument list.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Notification {
    pub id: u32,
    pub app_name: String,
    pub app_icon: String,
    pub body: String,
    pub summary: String,
    pub actions: Vec<String>,
    pub hints: HashMap<String, OwnedValue>,
    pub replaces_id: u32,
    pub expire_timeout: i32,
}

impl Notification {
    pub fn hints(&self) -> Hints<'_> {
        Hints::new(&self.hints)
    }

    pub fn timeout(&self) -> Timeout {
        Timeout::from_wire(self.expire_timeout)
    }

    /// The actions list as (action id, localized label) pairs.
    /// A trailing unpaired element is ignored.
    pub fn action_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.actions
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}
