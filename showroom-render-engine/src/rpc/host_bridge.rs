use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

use crate::engine::core::view_state::ViewKind;
use crate::engine::scene::materials::ModelQuality;
use crate::overlay::nav::NavigateTo;

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Request to leave the engine for an external URL. Emitted by redirect
/// flights, the loader fallback and modal CTA buttons; consumed in one
/// place so every navigation goes through the same code path.
#[derive(Event, Debug, Clone)]
pub struct ExternalRedirectRequest {
    pub url: String,
}

/// Resource queueing outbound messages to the host page.
#[derive(Resource, Default)]
pub struct HostBridge {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl HostBridge {
    /// Send a notification to the host without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the host communication layer for iframe
/// deployment.
pub struct HostBridgePlugin;

impl Plugin for HostBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HostBridge>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<ExternalRedirectRequest>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    handle_external_redirects,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Ownership moves to the JS side for the lifetime of the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Thread-safe inbound queue filled by the wasm message listener.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut bridge: ResMut<HostBridge>,
    mut quality: ResMut<ModelQuality>,
    mut navigations: EventWriter<NavigateTo>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, &diagnostics, &mut quality, &mut navigations)
                {
                    bridge.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Malformed RPC message: {parse_error}");
            }
        }
    }
}

fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    quality: &mut ModelQuality,
    navigations: &mut EventWriter<NavigateTo>,
) -> Option<RpcResponse> {
    // Notifications carry no id and get no response.
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "set_quality" => handle_set_quality(&request.params, quality),
        "navigate" => handle_navigate(&request.params, navigations),
        "get_fps" => handle_get_fps(diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(RpcResponse {
                jsonrpc: "2.0".to_string(),
                result: None,
                error: Some(RpcError {
                    code: -32601,
                    message: "Method not found".to_string(),
                    data: Some(serde_json::json!({"method": request.method})),
                }),
                id: Some(id),
            });
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_set_quality(
    params: &serde_json::Value,
    quality: &mut ModelQuality,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct SetQualityParams {
        quality: String,
    }

    let parsed = serde_json::from_value::<SetQualityParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'quality' parameter"))?;
    let tier = ModelQuality::parse(&parsed.quality)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown quality: {}", parsed.quality)))?;

    *quality = tier;
    info!("Quality set via host: {tier:?}");
    Ok(serde_json::json!({ "success": true, "quality": parsed.quality }))
}

fn handle_navigate(
    params: &serde_json::Value,
    navigations: &mut EventWriter<NavigateTo>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct NavigateParams {
        view: String,
    }

    let parsed = serde_json::from_value::<NavigateParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'view' parameter"))?;
    let view = match parsed.view.as_str() {
        "home" => ViewKind::Home,
        "sponsorships" => ViewKind::Sponsorships,
        "publishing" => ViewKind::Publishing,
        other => {
            return Err(RpcError::invalid_params(&format!("Unknown view: {other}")));
        }
    };

    navigations.write(NavigateTo(view));
    Ok(serde_json::json!({ "success": true, "view": parsed.view }))
}

fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({ "fps": fps }))
}

// Every external navigation funnels through here
pub fn handle_external_redirects(mut redirects: EventReader<ExternalRedirectRequest>) {
    for redirect in redirects.read() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = window() {
                if let Err(e) = window.open_with_url_and_target(&redirect.url, "_blank") {
                    error!("Failed to open external URL: {e:?}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            info!("External redirect requested: {}", redirect.url);
        }
    }
}

fn send_outgoing_messages(mut bridge: ResMut<HostBridge>) {
    for notification in bridge.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }
    for response in bridge.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {e:?}");
                        }
                    }
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {e}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
