use std::fmt::Display;

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// Optional-feature vocabulary a server may advertise through
/// `GetCapabilities`. Absence of a feature is communicated by omission
/// from the advertised set, not by an error.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ServerCapability {
    ActionIcons = 0,
    Actions = 1,
    Body = 2,
    BodyHyperlinks = 3,
    BodyImages = 4,
    BodyMarkup = 5,
    IconMulti = 6,
    IconStatic = 7,
    Persistence = 8,
    Sound = 9,
}

/// Bitmask over [`ServerCapability`].
///
/// Format:
/// ```text
/// 0000000000
/// 0. ActionIcons
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    bits: u16,
}

#[allow(dead_code)]
impl CapabilitySet {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// The set advertised when no configuration says otherwise.
    pub fn advertised_default() -> Self {
        [ServerCapability::Body, ServerCapability::Actions]
            .into_iter()
            .collect()
    }

    pub fn register(&mut self, capability: ServerCapability) {
        self.bits |= 1 << capability as u16;
    }

    pub fn unregister(&mut self, capability: ServerCapability) {
        self.bits &= !(1 << capability as u16);
    }

    pub fn contains(&self, capability: ServerCapability) -> bool {
        let mask = 1 << capability as u16;
        (self.bits & mask) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The reply shape of `GetCapabilities`.
    pub fn to_strings(&self) -> Vec<String> {
        ServerCapability::iter()
            .filter(|capability| self.contains(*capability))
            .map(|capability| capability.as_ref().to_string())
            .collect()
    }
}

impl FromIterator<ServerCapability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = ServerCapability>>(iter: I) -> Self {
        let mut set = Self::new();
        for capability in iter {
            set.register(capability);
        }
        set
    }
}

impl Display for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        let mut found_any = false;

        for capability in ServerCapability::iter() {
            if self.contains(capability) {
                if !found_any {
                    write!(f, "Advertised capabilities: ")?;
                    found_any = true;
                }

                if !first {
                    write!(f, ", ")?;
                }

                write!(f, "{}", capability.as_ref())?;
                first = false;
            }
        }

        if !found_any {
            write!(f, "No advertised capabilities")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn register_and_unregister() {
        let mut set = CapabilitySet::new();
        assert!(set.is_empty());

        set.register(ServerCapability::BodyMarkup);
        assert!(set.contains(ServerCapability::BodyMarkup));
        assert!(!set.contains(ServerCapability::Sound));

        set.unregister(ServerCapability::BodyMarkup);
        assert!(set.is_empty());
    }

    #[test]
    fn wire_names_are_kebab_case() {
        assert_eq!(ServerCapability::BodyMarkup.as_ref(), "body-markup");
        assert_eq!(ServerCapability::ActionIcons.as_ref(), "action-icons");
        assert_eq!(
            ServerCapability::from_str("body-hyperlinks").unwrap(),
            ServerCapability::BodyHyperlinks
        );
        assert!(ServerCapability::from_str("telepathy").is_err());
    }

    #[test]
    fn default_advertised_set() {
        let set = CapabilitySet::advertised_default();
        assert_eq!(set.to_strings(), vec!["actions", "body"]);
    }

    #[test]
    fn display_lists_active_capabilities() {
        let set: CapabilitySet = [ServerCapability::Body, ServerCapability::Sound]
            .into_iter()
            .collect();
        assert_eq!(set.to_string(), "Advertised capabilities: body, sound");

        assert_eq!(
            CapabilitySet::new().to_string(),
            "No advertised capabilities"
        );
    }
}
