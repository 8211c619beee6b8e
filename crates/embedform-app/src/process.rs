//! Message processing - drives the TEA update loop

use std::sync::Arc;

use tokio::sync::mpsc;

use embedform_gateway::FormGateway;

use crate::actions::handle_action;
use crate::handler;
use crate::host::HostBridge;
use crate::message::Message;
use crate::state::WidgetState;

/// Process a message through the TEA update function
///
/// Follow-up messages are chained synchronously; actions are dispatched
/// to background tasks as they appear.
pub fn process_message<G>(
    state: &mut WidgetState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    gateway: &Arc<G>,
    host: &HostBridge,
) where
    G: FormGateway + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, Arc::clone(gateway), msg_tx.clone(), host);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
