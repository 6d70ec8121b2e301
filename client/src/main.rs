use std::collections::HashMap;

use common::herald_err;
use common::hints::keys;
use common::proxy::NotificationsProxy;
use common::utils::errors::{HeraldError, HeraldErrorKind};
use zbus::zvariant::Value;

use crate::flags::{Flags, Mode, USAGE};

mod flags;

#[tokio::main]
async fn main() -> Result<(), HeraldError> {
    let flags = Flags::parse(std::env::args())?;

    if flags.mode == Mode::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let conn = zbus::Connection::session()
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::DBusConnect, e.to_string()))?;
    let proxy = NotificationsProxy::new(&conn)
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::ProxyCreate, e.to_string()))?;

    match flags.mode {
        Mode::Capabilities => {
            let capabilities = proxy
                .get_capabilities()
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::ProxyCall, e.to_string()))?;
            for capability in capabilities {
                println!("{capability}");
            }
        }
        Mode::ServerInfo => {
            let (name, vendor, version, spec_version) = proxy
                .get_server_information()
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::ProxyCall, e.to_string()))?;
            println!("{name} {version} ({vendor}), spec {spec_version}");
        }
        Mode::Send => {
            let mut hints: HashMap<&str, Value<'_>> = HashMap::new();
            if let Some(urgency) = flags.urgency {
                hints.insert(keys::URGENCY, urgency.into());
            }
            if let Some(category) = &flags.category {
                hints.insert(keys::CATEGORY, Value::from(category.as_str()));
            }
            if flags.transient {
                hints.insert(keys::TRANSIENT, Value::Bool(true));
            }

            let actions: Vec<&str> = flags.actions.iter().map(String::as_str).collect();

            let id = proxy
                .notify(
                    &flags.app_name,
                    flags.replaces_id,
                    &flags.icon,
                    &flags.summary,
                    &flags.body,
                    &actions,
                    hints,
                    flags.expire_timeout,
                )
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::ProxyCall, e.to_string()))?;
            println!("{id}");
        }
        // handled above
        Mode::Help => {}
    }

    Ok(())
}
