use async_trait::async_trait;
use common::notification::Notification;

/// The application seam of the skeleton: every accepted `Notify` call is
/// handed to a sink after an id has been assigned. A presentation layer
/// implements this; the daemon stays agnostic of rendering.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notification: &Notification);
}

/// Default sink. Logs what a presentation layer would render.
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn deliver(&self, notification: &Notification) {
        let urgency = notification.hints().urgency().ok().flatten().unwrap_or_default();

        tracing::info!(
            id = notification.id,
            app = %notification.app_name,
            urgency = %urgency,
            timeout = %notification.timeout(),
            "{}: {}",
            notification.summary,
            notification.body
        );
    }
}
