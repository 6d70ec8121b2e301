use std::collections::HashMap;
use std::sync::Arc;

use common::capabilities::CapabilitySet;
use common::notification::Notification;
use common::proxy::SPEC_VERSION;
use tokio::sync::RwLock;
use zbus::interface;
use zbus::zvariant::OwnedValue;

use crate::config::ServerIdentity;
use crate::registry::NotificationRegistry;
use crate::sink::NotificationSink;

/// Server skeleton for `org.freedesktop.Notifications`. Owns the id
/// registry and forwards accepted notifications to the sink.
pub struct DaemonHandle {
    registry: Arc<RwLock<NotificationRegistry>>,
    sink: Arc<dyn NotificationSink>,
    identity: ServerIdentity,
    capabilities: CapabilitySet,
}

impl DaemonHandle {
    pub fn new(
        identity: ServerIdentity,
        capabilities: CapabilitySet,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            registry: Arc::new(RwLock::new(NotificationRegistry::new())),
            sink,
            identity,
            capabilities,
        }
    }
}

#[interface(name = "org.freedesktop.Notifications")]
impl DaemonHandle {
    async fn notify(
        &self,
        app_name: String,
        replaces_id: u32,
        app_icon: String,
        summary: String,
        body: String,
        actions: Vec<String>,
        hints: HashMap<String, OwnedValue>,
        expire_timeout: i32,
    ) -> u32 {
        let id = {
            let mut registry = self.registry.write().await;
            registry.assign(replaces_id)
        };

        let notification = Notification {
            id,
            app_name,
            app_icon,
            body,
            summary,
            actions,
            hints,
            replaces_id,
            expire_timeout,
        };

        tracing::debug!(id, replaces_id, "notification accepted");
        self.sink.deliver(&notification).await;
        self.registry.write().await.insert(notification);

        id
    }

    fn get_capabilities(&self) -> Vec<String> {
        self.capabilities.to_strings()
    }

    fn get_server_information(&self) -> (String, String, String, String) {
        (
            self.identity.name.clone(),
            self.identity.vendor.clone(),
            self.identity.version.clone(),
            SPEC_VERSION.into(),
        )
    }
}
