//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use embedform_gateway::FormGateway;

use crate::handler::UpdateAction;
use crate::host::HostBridge;
use crate::message::Message;

/// Execute an action, spawning a background task for gateway calls
///
/// Completions re-enter the update loop through `msg_tx`; best-effort
/// effects (view count, email) swallow their failures.
pub fn handle_action<G>(
    action: UpdateAction,
    gateway: Arc<G>,
    msg_tx: mpsc::Sender<Message>,
    host: &HostBridge,
) where
    G: FormGateway + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitForm { request } => {
            tokio::spawn(async move {
                let message = match gateway.save_form(*request).await {
                    Ok(response) => Message::SubmissionCompleted { response },
                    Err(e) => Message::SubmissionFailed {
                        error: e.to_string(),
                    },
                };
                if msg_tx.send(message).await.is_err() {
                    warn!("engine stopped before submission result arrived");
                }
            });
        }

        UpdateAction::IncrementViewCount { form_id } => {
            tokio::spawn(async move {
                if let Err(e) = gateway.increment_view_count(&form_id).await {
                    // Best-effort: the failure is folded back only so the
                    // update loop can log it
                    let _ = msg_tx
                        .send(Message::ViewCountFailed {
                            form_id,
                            error: e.to_string(),
                        })
                        .await;
                }
            });
        }

        UpdateAction::SendEmail { params } => {
            tokio::spawn(async move {
                if let Err(e) = gateway.send_email(params).await {
                    warn!("Notification email failed: {}", e);
                }
            });
        }

        // Height reporting is synchronous: measure and forward, or no-op
        UpdateAction::ReportHeight => host.report_height(),
    }
}
