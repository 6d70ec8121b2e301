use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;

use common::capabilities::{CapabilitySet, ServerCapability};
use common::herald_err;
use common::utils::errors::{HeraldError, HeraldErrorKind};
use common::utils::paths::get_config_dir;
use serde::{Deserialize, Serialize};

/// Identity reported by `GetServerInformation`.
#[derive(Debug, Clone)]
pub struct ServerIdentity {
    pub name: String,
    pub vendor: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DaemonConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_vendor")]
    pub vendor: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Capability names to advertise, wire spelling (`body-markup`, ...).
    /// Absent means the built-in default set.
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            vendor: default_vendor(),
            version: default_version(),
            capabilities: None,
        }
    }
}

impl DaemonConfig {
    pub fn identity(&self) -> ServerIdentity {
        ServerIdentity {
            name: self.name.clone(),
            vendor: self.vendor.clone(),
            version: self.version.clone(),
        }
    }

    pub fn capability_set(&self) -> Result<CapabilitySet, HeraldError> {
        match &self.capabilities {
            None => Ok(CapabilitySet::advertised_default()),
            Some(names) => names
                .iter()
                .map(|name| {
                    ServerCapability::from_str(name).map_err(|_| {
                        herald_err!(HeraldErrorKind::UnknownCapability, "{}", name)
                    })
                })
                .collect(),
        }
    }
}

/// Reads `$XDG_CONFIG_HOME/herald/daemon.json`; a missing file yields the
/// defaults.
pub fn load_config() -> Result<DaemonConfig, HeraldError> {
    let loc = get_config_dir()?.join("daemon.json");
    if !loc.exists() {
        return Ok(DaemonConfig::default());
    }

    let file = File::open(loc).map_err(|e| herald_err!(HeraldErrorKind::FileOpen, e.to_string()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader::<_, DaemonConfig>(reader)
        .map_err(|e| herald_err!(HeraldErrorKind::Deserialize, e.to_string()))
}

fn default_name() -> String {
    "herald".into()
}
fn default_vendor() -> String {
    "herald".into()
}
fn default_version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_fills_defaults() {
        let config: DaemonConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.name, "herald");
        assert_eq!(
            config.capability_set().unwrap(),
            CapabilitySet::advertised_default()
        );
    }

    #[test]
    fn configured_capabilities_parse_wire_names() {
        let config: DaemonConfig =
            serde_json::from_str(r#"{"capabilities": ["body", "body-markup", "sound"]}"#).unwrap();

        let set = config.capability_set().unwrap();
        assert_eq!(set.to_strings(), vec!["body", "body-markup", "sound"]);
    }

    #[test]
    fn unknown_capability_is_rejected() {
        let config: DaemonConfig =
            serde_json::from_str(r#"{"capabilities": ["telepathy"]}"#).unwrap();

        let err = config.capability_set().unwrap_err();
        assert_eq!(err.kind, HeraldErrorKind::UnknownCapability);
        assert_eq!(err.message, "telepathy");
    }
}
