use buddy_shared::{const_config::client::CLIENT_DEFAULT_SERVER_ADDRESS, const_config::path::PathSpec};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::{AwaitingType, ClientError};

pub mod api;
pub mod response;

/// Called after a response arrived so the UI can repaint
pub type WakeFn = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Client {
    api_client: reqwest::Client,
    inner: Arc<Mutex<ClientInner>>,
}

struct ClientInner {
    server_address: String,
    ui_notify: Option<WakeFn>,
}

/// Body attached to a request
///
/// Not `Debug` as it may contain exposed secrets
pub(crate) enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(&'static str, String)>),
}

impl Default for Client {
    fn default() -> Self {
        Self::new(CLIENT_DEFAULT_SERVER_ADDRESS.to_string())
    }
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("inner", &self.inner).finish()
    }
}

impl Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("server_address", &self.server_address)
            .field("has_ui_notify", &self.ui_notify.is_some())
            .finish()
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE")]
    pub fn new(server_address: String) -> Self {
        let builder = reqwest::Client::builder();
        // The browser keeps the session cookie on the web
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let api_client = builder.build().expect("Unable to create reqwest client");
        Self {
            api_client,
            inner: Arc::new(Mutex::new(ClientInner {
                server_address: trim_trailing_slash(server_address),
                ui_notify: None,
            })),
        }
    }

    /// Registers the function called each time a response arrives
    pub fn set_ui_notify(&self, ui_notify: WakeFn) {
        self.inner.lock().expect("mutex poisoned").ui_notify = Some(ui_notify);
    }

    pub fn server_address(&self) -> String {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .server_address
            .clone()
    }

    #[tracing::instrument(skip(body, on_done))]
    // WARNING: Must skip body as it may contain sensitive info and "safe" versions
    // would usually already be logged by the caller
    fn initiate_request<F, O>(&self, path_spec: PathSpec, body: RequestBody, on_done: F)
    where
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let url = self.path_to_url(&path_spec.path);
        let request = self.api_client.request(path_spec.method, url);
        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Form(fields) => request.form(&fields),
        };
        reqwest_cross::fetch(request, on_done)
    }

    pub(crate) fn send_request_expect_json<U>(
        &self,
        path_spec: PathSpec,
        body: RequestBody,
    ) -> AwaitingType<U>
    where
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let ui_notify = self.ui_notify();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body(resp).await;
            buddy_shared::log_err_as_warn!(tx.send(msg));
            notify(ui_notify);
        };
        self.initiate_request(path_spec, body, on_done);
        AwaitingType::new(rx)
    }

    /// Any success status is accepted and the body is ignored
    pub(crate) fn send_request_expect_empty(
        &self,
        path_spec: PathSpec,
        body: RequestBody,
    ) -> AwaitingType<()> {
        let (tx, rx) = oneshot::channel();
        let ui_notify = self.ui_notify();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_empty(resp).await;
            buddy_shared::log_err_as_warn!(tx.send(msg));
            notify(ui_notify);
        };
        self.initiate_request(path_spec, body, on_done);
        AwaitingType::new(rx)
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self
                .inner
                .lock()
                .expect("failed to unlock client mutex")
                .server_address
        )
    }

    fn ui_notify(&self) -> Option<WakeFn> {
        self.inner.lock().expect("mutex poisoned").ui_notify.clone()
    }
}

fn notify(ui_notify: Option<WakeFn>) {
    if let Some(ui_notify) = ui_notify {
        ui_notify();
    }
}

/// Percent-encodes `segment` so it is sent as a single path segment
pub(crate) fn encode_path_segment(segment: &str) -> String {
    let mut url = reqwest::Url::parse("http://localhost/").expect("static url is valid");
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

fn trim_trailing_slash(mut server_address: String) -> String {
    while server_address.ends_with('/') {
        server_address.pop();
    }
    server_address
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(response: reqwest::Result<reqwest::Response>) -> Result<(), ClientError> {
    let response = extract_response(response)?;
    if response.status().is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_json_body<T>(response: reqwest::Result<reqwest::Response>) -> Result<T, ClientError>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let response = extract_response(response)?;
    if !response.status().is_success() {
        return Err(handle_error(response).await);
    }
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(format!("failed to read body: {e}")))?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let Ok(body) = response.text().await else {
        return ClientError::Http {
            status: status.as_u16(),
            message: String::new(),
        };
    };
    response::classify_error(status.as_u16(), content_type.as_deref(), &body)
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> Result<reqwest::Response, ClientError> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    response.map_err(|e| ClientError::Network(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
