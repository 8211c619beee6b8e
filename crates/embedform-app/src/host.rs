//! Host bridge - container measurement relayed to the embedding page
//!
//! The widget renders inside an iframe the host page owns. Whenever the
//! rendered content changes height, the host page must resize the iframe;
//! the bridge forwards a `changeContainerStyle` directive for that.

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Wire name of the resize directive understood by the embed script
pub const CHANGE_CONTAINER_STYLE: &str = "changeContainerStyle";

/// A directive forwarded verbatim to the embedding page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMessage {
    pub message: String,
    pub style: String,
}

impl HostMessage {
    /// Build a resize directive for a measured pixel height
    pub fn change_container_style(height: u32) -> Self {
        Self {
            message: CHANGE_CONTAINER_STYLE.to_string(),
            style: format!("height: {height}px;"),
        }
    }
}

/// Lookup of the rendered widget container
///
/// Provided by the rendering collaborator. Returns `None` while no
/// container is mounted, which is a normal transient condition.
pub trait ContainerHandle: Send + Sync {
    fn client_height(&self) -> Option<u32>;
}

/// Relays measurements to the embedding page
pub struct HostBridge {
    container: Box<dyn ContainerHandle>,
    host_tx: mpsc::UnboundedSender<HostMessage>,
}

impl HostBridge {
    pub fn new(
        container: Box<dyn ContainerHandle>,
        host_tx: mpsc::UnboundedSender<HostMessage>,
    ) -> Self {
        Self { container, host_tx }
    }

    /// Measure the container and post a resize directive
    ///
    /// No-op while nothing is mounted; a closed host channel is logged
    /// and dropped (the page is navigating away, nothing to resize).
    pub fn report_height(&self) {
        let Some(height) = self.container.client_height() else {
            debug!("no container mounted, skipping height report");
            return;
        };

        if self
            .host_tx
            .send(HostMessage::change_container_style(height))
            .is_err()
        {
            warn!("host channel closed, dropping height report");
        }
    }
}
