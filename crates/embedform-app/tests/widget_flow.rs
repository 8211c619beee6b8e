//! End-to-end widget flow through the engine with a recording gateway

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::time::timeout;

use embedform_app::{
    ContainerHandle, Engine, HostBridge, HostMessage, Message, Surface, WidgetEvent,
};
use embedform_core::{
    BrowserInfo, Callout, ConfigSnapshot, FieldError, Form, FormDoc, FormSettings, Integration,
    LoadType, Result, SubmissionStatus,
};
use embedform_gateway::{
    ConnectRequest, ConnectResponse, EmailParams, FormGateway, SaveFormRequest, SaveFormResponse,
};

/// Gateway double that records calls and answers from a script
#[derive(Clone, Default)]
struct RecordingGateway {
    calls: Arc<Mutex<Vec<String>>>,
    reject_with: Option<Vec<FieldError>>,
}

impl RecordingGateway {
    fn rejecting(errors: Vec<FieldError>) -> Self {
        Self {
            calls: Arc::default(),
            reject_with: Some(errors),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FormGateway for RecordingGateway {
    async fn connect(&self, _request: ConnectRequest) -> Result<ConnectResponse> {
        unimplemented!("the engine never connects; the snapshot is injected")
    }

    async fn save_form(&self, request: SaveFormRequest) -> Result<SaveFormResponse> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("save_form:{}", request.form_id));
        Ok(match &self.reject_with {
            Some(errors) => SaveFormResponse::failed(errors.clone()),
            None => SaveFormResponse::ok(),
        })
    }

    async fn send_email(&self, params: EmailParams) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("send_email:{}", params.to_emails.join(",")));
        Ok(())
    }

    async fn increment_view_count(&self, form_id: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("increment_view_count:{form_id}"));
        Ok(())
    }
}

struct MeasuredContainer(u32);

impl ContainerHandle for MeasuredContainer {
    fn client_height(&self) -> Option<u32> {
        Some(self.0)
    }
}

fn snapshot(load_type: LoadType, callout: Option<Callout>) -> Arc<ConfigSnapshot> {
    Arc::new(ConfigSnapshot {
        integration: Integration {
            id: "int-1".to_string(),
            name: "Contact us".to_string(),
            form_data: FormSettings {
                load_type,
                callout,
                ..Default::default()
            },
        },
        form: Form {
            id: "form-1".to_string(),
            title: "Contact".to_string(),
            description: None,
            button_text: None,
            fields: vec![],
        },
        has_popup_handlers: false,
        browser_info: BrowserInfo::default(),
    })
}

struct Harness {
    gateway: RecordingGateway,
    handle: mpsc::Sender<Message>,
    events: broadcast::Receiver<WidgetEvent>,
    host_rx: mpsc::UnboundedReceiver<HostMessage>,
}

fn start(load_type: LoadType, callout: Option<Callout>, gateway: RecordingGateway) -> Harness {
    let (host_tx, host_rx) = mpsc::unbounded_channel();
    let host = HostBridge::new(Box::new(MeasuredContainer(360)), host_tx);
    let engine = Engine::new(snapshot(load_type, callout), gateway.clone(), host);

    let handle = engine.handle();
    let events = engine.subscribe();
    tokio::spawn(engine.run());

    Harness {
        gateway,
        handle,
        events,
        host_rx,
    }
}

async fn next_event(events: &mut broadcast::Receiver<WidgetEvent>) -> WidgetEvent {
    timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

/// Wait until the recorded calls satisfy a predicate
async fn wait_for_calls(gateway: &RecordingGateway, pred: impl Fn(&[String]) -> bool) {
    timeout(Duration::from_secs(1), async {
        loop {
            if pred(&gateway.calls()) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("timed out waiting for gateway calls");
}

#[tokio::test]
async fn popup_flow_callout_form_submit_close() {
    let mut h = start(
        LoadType::Popup,
        Some(Callout {
            skip: false,
            ..Default::default()
        }),
        RecordingGateway::default(),
    );

    // Initialize: popup shell + callout teaser
    assert!(matches!(next_event(&mut h.events).await, WidgetEvent::PopupOpened));
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::Callout
        }
    ));

    // Visitor accepts the teaser
    h.handle.send(Message::ConfirmCallout).await.unwrap();
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::Form
        }
    ));

    // Visitor submits; the async result folds back as a status change
    h.handle
        .send(Message::Submit {
            doc: FormDoc::default(),
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SubmissionStatusChanged {
            status: SubmissionStatus::Success
        }
    ));

    // Close collapses everything and counts exactly one view
    h.handle.send(Message::ClosePopup).await.unwrap();
    assert!(matches!(next_event(&mut h.events).await, WidgetEvent::PopupClosed));
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::None
        }
    ));

    wait_for_calls(&h.gateway, |calls| {
        calls
            .iter()
            .filter(|c| c.starts_with("increment_view_count"))
            .count()
            == 1
    })
    .await;

    let calls = h.gateway.calls();
    assert!(calls.contains(&"save_form:form-1".to_string()));
    assert!(calls.contains(&"increment_view_count:form-1".to_string()));

    h.handle.send(Message::Shutdown).await.unwrap();
}

#[tokio::test]
async fn rejected_submission_surfaces_field_errors() {
    let errors = vec![FieldError::for_field("f1", "email is required")];
    let mut h = start(
        LoadType::Embedded,
        None,
        RecordingGateway::rejecting(errors.clone()),
    );

    // No callout: straight to the form
    assert!(matches!(next_event(&mut h.events).await, WidgetEvent::PopupOpened));
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::Form
        }
    ));

    h.handle
        .send(Message::Submit {
            doc: FormDoc::default(),
        })
        .await
        .unwrap();

    let WidgetEvent::SubmissionStatusChanged { status } = next_event(&mut h.events).await else {
        panic!("expected a status change");
    };
    assert_eq!(status, SubmissionStatus::Error(errors));

    // Visitor starts over
    h.handle.send(Message::ResetSubmission).await.unwrap();
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SubmissionStatusChanged {
            status: SubmissionStatus::Initial
        }
    ));

    h.handle.send(Message::Shutdown).await.unwrap();
}

#[tokio::test]
async fn shoutbox_toggle_counts_views_only_when_opening_from_closed() {
    let mut h = start(
        LoadType::Shoutbox,
        Some(Callout {
            skip: true,
            ..Default::default()
        }),
        RecordingGateway::default(),
    );

    // Shoutbox carve-out: callout shown once despite skip
    assert!(matches!(next_event(&mut h.events).await, WidgetEvent::PopupOpened));
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::Callout
        }
    ));

    // Toggle with no flag: counts one view
    h.handle
        .send(Message::ToggleShoutbox { visible: None })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::Form
        }
    ));
    wait_for_calls(&h.gateway, |calls| {
        calls.iter().any(|c| c.starts_with("increment_view_count"))
    })
    .await;

    // Toggle reporting "already visible": collapses without counting
    h.handle
        .send(Message::ToggleShoutbox {
            visible: Some(true),
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&mut h.events).await,
        WidgetEvent::SurfaceChanged {
            surface: Surface::None
        }
    ));

    h.handle.send(Message::Shutdown).await.unwrap();

    let count = h
        .gateway
        .calls()
        .iter()
        .filter(|c| c.starts_with("increment_view_count"))
        .count();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn report_height_reaches_the_host_page() {
    let mut h = start(LoadType::Embedded, None, RecordingGateway::default());

    h.handle.send(Message::ReportHeight).await.unwrap();

    let msg = timeout(Duration::from_secs(1), h.host_rx.recv())
        .await
        .expect("timed out waiting for host message")
        .expect("host channel closed");
    assert_eq!(msg.message, "changeContainerStyle");
    assert_eq!(msg.style, "height: 360px;");

    h.handle.send(Message::Shutdown).await.unwrap();
}

#[tokio::test]
async fn send_email_is_fire_and_forget() {
    let h = start(LoadType::Embedded, None, RecordingGateway::default());

    h.handle
        .send(Message::SendEmail {
            params: EmailParams {
                to_emails: vec!["lead@example.com".to_string()],
                ..Default::default()
            },
        })
        .await
        .unwrap();

    wait_for_calls(&h.gateway, |calls| {
        calls.contains(&"send_email:lead@example.com".to_string())
    })
    .await;

    h.handle.send(Message::Shutdown).await.unwrap();
}
