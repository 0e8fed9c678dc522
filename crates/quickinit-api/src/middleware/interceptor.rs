//! Request interceptors: lifecycle hooks around handler dispatch.
//!
//! For each request the chain runs `pre_handle` in registration order. If
//! every interceptor accepts, the handler runs and, unless it failed or was
//! rejected with a 4xx/5xx status, `post_handle` runs in reverse order. `after_completion` always runs in
//! reverse order for every interceptor whose `pre_handle` was called and
//! accepted. A rejection from `pre_handle` aborts the request and is
//! rendered like any handler error.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::info;
use uuid::Uuid;

use quickinit_core::error::AppError;
use quickinit_core::result::AppResult;

use crate::error::{ApiError, HandledError};

/// Header carrying the request id in and out.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// The id assigned to the current request, available as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What interceptors see of a request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Assigned or propagated request id.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request URI.
    pub uri: Uri,
}

/// A hook around request handling.
#[async_trait]
pub trait HandlerInterceptor: Send + Sync + 'static {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Runs before the handler. Returning an error aborts the request.
    async fn pre_handle(&self, _ctx: &RequestContext) -> AppResult<()> {
        Ok(())
    }

    /// Runs after the handler returned without error.
    async fn post_handle(&self, _ctx: &RequestContext, _status: StatusCode) {}

    /// Runs once the response is complete, whether or not the request failed.
    async fn after_completion(
        &self,
        _ctx: &RequestContext,
        _status: StatusCode,
        _error: Option<&AppError>,
    ) {
    }
}

/// Logs each lifecycle hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl HandlerInterceptor for LoggingInterceptor {
    fn name(&self) -> &'static str {
        "logging"
    }

    async fn pre_handle(&self, ctx: &RequestContext) -> AppResult<()> {
        info!(request_id = %ctx.request_id, method = %ctx.method, uri = %ctx.uri, "preHandle");
        Ok(())
    }

    async fn post_handle(&self, ctx: &RequestContext, status: StatusCode) {
        info!(request_id = %ctx.request_id, status = status.as_u16(), "postHandle");
    }

    async fn after_completion(
        &self,
        ctx: &RequestContext,
        status: StatusCode,
        error: Option<&AppError>,
    ) {
        match error {
            Some(err) => info!(
                request_id = %ctx.request_id,
                status = status.as_u16(),
                error = %err,
                "afterCompletion"
            ),
            None => info!(request_id = %ctx.request_id, status = status.as_u16(), "afterCompletion"),
        }
    }
}

/// Ordered interceptor chain, composed once at startup.
#[derive(Clone, Default)]
pub struct InterceptorRegistry {
    interceptors: Vec<Arc<dyn HandlerInterceptor>>,
}

impl InterceptorRegistry {
    /// An empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain installed by default: a single [`LoggingInterceptor`].
    pub fn with_defaults() -> Self {
        Self::new().add(LoggingInterceptor)
    }

    /// Append an interceptor to the end of the chain.
    pub fn add(mut self, interceptor: impl HandlerInterceptor) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// Number of registered interceptors.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Interceptor names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }
}

impl fmt::Debug for InterceptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorRegistry")
            .field("interceptors", &self.names())
            .finish()
    }
}

fn request_id_of(request: &Request) -> RequestId {
    let incoming = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match incoming {
        Some(id) => RequestId(id.to_string()),
        None => RequestId(Uuid::new_v4().to_string()),
    }
}

/// Whether the inner service failed, either through an [`ApiError`] or
/// through a framework rejection that bypassed it.
fn handler_failed(response: &Response) -> bool {
    let status = response.status();
    response.extensions().get::<HandledError>().is_some()
        || status.is_client_error()
        || status.is_server_error()
}

/// Middleware running the registry around the inner service.
pub async fn intercept(
    State(registry): State<Arc<InterceptorRegistry>>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = request_id_of(&request);
    let ctx = RequestContext {
        request_id: request_id.clone(),
        method: request.method().clone(),
        uri: request.uri().clone(),
    };
    request.extensions_mut().insert(request_id.clone());

    let mut accepted = 0;
    let mut rejection = None;
    for interceptor in &registry.interceptors {
        match interceptor.pre_handle(&ctx).await {
            Ok(()) => accepted += 1,
            Err(err) => {
                info!(
                    request_id = %ctx.request_id,
                    interceptor = interceptor.name(),
                    "Request rejected before handling"
                );
                rejection = Some(err);
                break;
            }
        }
    }

    let mut response = match rejection {
        Some(err) => ApiError(err).into_response(),
        None => {
            let response = next.run(request).await;
            if !handler_failed(&response) {
                for interceptor in registry.interceptors.iter().rev() {
                    interceptor.post_handle(&ctx, response.status()).await;
                }
            }
            response
        }
    };

    let status = response.status();
    let error = response
        .extensions()
        .get::<HandledError>()
        .map(|handled| handled.0.clone());
    for interceptor in registry.interceptors[..accepted].iter().rev() {
        interceptor
            .after_completion(&ctx, status, error.as_ref())
            .await;
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        response.headers_mut().insert(X_REQUEST_ID.clone(), value);
    }
    response
}
