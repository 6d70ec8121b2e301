use std::collections::HashMap;

use zbus::zvariant::Value;

/// Well-known bus name every conforming server owns.
pub const BUS_NAME: &str = "org.freedesktop.Notifications";
/// Object path the interface is served at.
pub const OBJECT_PATH: &str = "/org/freedesktop/Notifications";
/// Protocol revision this contract tracks.
pub const SPEC_VERSION: &str = "1.2";

/// Client stub for the `org.freedesktop.Notifications` interface.
///
/// Method names, argument order and argument types are fixed by the wire
/// protocol and reproduced here bit-exact; interoperating clients and
/// servers depend on them.
#[zbus::proxy(
    gen_blocking = false,
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
pub trait Notifications {
    /// Returns the optional features the server supports. Must not fail
    /// under normal operation; a missing feature is simply omitted from
    /// the returned set.
    async fn get_capabilities(&self) -> zbus::Result<Vec<String>>;

    /// Requests display of a notification. Returns the assigned id, or
    /// re-uses the one referenced by `replaces_id` when nonzero and still
    /// live on the server.
    ///
    /// `actions` is interpreted pairwise (action id, localized label).
    /// `expire_timeout` is in milliseconds; `-1` leaves the timeout to the
    /// server and `0` means never expire.
    #[allow(clippy::too_many_arguments)]
    async fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: &[&str],
        hints: HashMap<&str, Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;

    /// Server identity: name, vendor, version, protocol spec version.
    async fn get_server_information(&self) -> zbus::Result<(String, String, String, String)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use zbus::zvariant::{LE, serialized::Context, to_bytes};

    #[test]
    fn example_notify_call_marshals() {
        let hints: HashMap<&str, Value<'_>> = HashMap::new();
        let args = (
            "myapp",
            0u32,
            "icon-name",
            "Title",
            "Body text",
            Vec::<&str>::new(),
            hints,
            -1i32,
        );

        let ctxt = Context::new_dbus(LE, 0);
        let encoded = to_bytes(ctxt, &args).unwrap();
        assert!(!encoded.is_empty());
    }

    #[test]
    fn hints_with_values_marshal() {
        let mut hints: HashMap<&str, Value<'_>> = HashMap::new();
        hints.insert(crate::hints::keys::URGENCY, Value::U8(2));
        hints.insert(crate::hints::keys::CATEGORY, Value::from("email.arrived"));

        let ctxt = Context::new_dbus(LE, 0);
        let encoded = to_bytes(ctxt, &hints).unwrap();
        assert!(!encoded.is_empty());
    }
}
