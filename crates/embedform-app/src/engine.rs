//! Engine - owns the widget state and the message loop
//!
//! One engine instance per widget mount. Collaborators send [`Message`]s
//! through [`Engine::handle`] and observe state changes through
//! [`Engine::subscribe`]; all state mutation happens on the engine's own
//! task inside [`Engine::apply`].

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use embedform_core::ConfigSnapshot;
use embedform_gateway::FormGateway;

use crate::engine_event::WidgetEvent;
use crate::host::HostBridge;
use crate::message::Message;
use crate::process::process_message;
use crate::state::WidgetState;

/// Capacity of the inbound message channel
const MESSAGE_BUFFER: usize = 64;

/// Capacity of the outbound event broadcast
const EVENT_BUFFER: usize = 64;

/// The widget controller runtime
pub struct Engine<G> {
    state: WidgetState,
    gateway: Arc<G>,
    host: HostBridge,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    event_tx: broadcast::Sender<WidgetEvent>,
}

impl<G> Engine<G>
where
    G: FormGateway + Send + Sync + 'static,
{
    pub fn new(config: Arc<ConfigSnapshot>, gateway: G, host: HostBridge) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_BUFFER);
        let (event_tx, _) = broadcast::channel(EVENT_BUFFER);

        Self {
            state: WidgetState::new(config),
            gateway: Arc::new(gateway),
            host,
            msg_tx,
            msg_rx,
            event_tx,
        }
    }

    /// Sender collaborators use to request transitions
    pub fn handle(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Subscribe to state-change events
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetEvent> {
        self.event_tx.subscribe()
    }

    /// Current controller state (reads only; mutation goes through
    /// messages)
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Apply one message (plus its follow-ups) and broadcast the diff
    pub fn apply(&mut self, message: Message) {
        let popup_before = self.state.is_popup_visible;
        let surface_before = self.state.visible_surface();
        let status_before = self.state.current_status.clone();

        process_message(
            &mut self.state,
            message,
            &self.msg_tx,
            &self.gateway,
            &self.host,
        );

        // Broadcast after the full cycle so subscribers see settled state.
        // Send errors mean "no subscribers" and are ignored.
        if self.state.is_popup_visible != popup_before {
            let event = if self.state.is_popup_visible {
                WidgetEvent::PopupOpened
            } else {
                WidgetEvent::PopupClosed
            };
            let _ = self.event_tx.send(event);
        }

        let surface = self.state.visible_surface();
        if surface != surface_before {
            let _ = self.event_tx.send(WidgetEvent::SurfaceChanged { surface });
        }

        if self.state.current_status != status_before {
            let _ = self.event_tx.send(WidgetEvent::SubmissionStatusChanged {
                status: self.state.current_status.clone(),
            });
        }
    }

    /// Run the widget until a `Shutdown` message arrives
    ///
    /// Picks the initial surface first, then processes messages from
    /// collaborators and side-effect completions in arrival order.
    pub async fn run(mut self) {
        self.apply(Message::Initialize);

        while let Some(message) = self.msg_rx.recv().await {
            if matches!(message, Message::Shutdown) {
                debug!("widget unmounted, stopping engine");
                break;
            }
            self.apply(message);
        }
    }
}
