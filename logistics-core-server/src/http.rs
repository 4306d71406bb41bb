//! HTTP transport for the tracking service
//!
//! [`Router`] maps verb and path to a [`TrackingService`] call and renders
//! the result as JSON. [`HttpServer`] accepts connections with `tiny_http`
//! and hands every request to its own thread, which drives the async
//! service on the shared tokio runtime.

use logistics_core_api::domain::{
    ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, UpdateStatusRequest,
};
use logistics_core_api::error::{ApiError, ApiResult};
use logistics_core_api::service::TrackingService;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Method, Request, Response, Server};
use tokio::runtime::Handle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::credentials::CredentialLookup;

/// Largest request body accepted; longer bodies are rejected with 400
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Status and optional JSON body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<String>,
}

impl Reply {
    fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                body: Some(body),
            },
            Err(err) => Self::error(&ApiError::InternalError(err.to_string())),
        }
    }

    fn error(err: &ApiError) -> Self {
        let body = ErrorResponse {
            error: err.to_string(),
        };
        Self {
            status: err.status_code(),
            body: serde_json::to_string(&body).ok(),
        }
    }

    fn route_not_found() -> Self {
        let body = ErrorResponse {
            error: "route not found".to_string(),
        };
        Self {
            status: 404,
            body: serde_json::to_string(&body).ok(),
        }
    }

    fn from_result<T: Serialize>(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Self::json(200, &value),
            Err(err) => Self::error(&err),
        }
    }
}

/// Binds HTTP verbs and paths to tracking operations
#[derive(Clone)]
pub struct Router {
    service: Arc<dyn TrackingService>,
    credentials: Arc<dyn CredentialLookup>,
}

impl Router {
    pub fn new(service: Arc<dyn TrackingService>, credentials: Arc<dyn CredentialLookup>) -> Self {
        Self {
            service,
            credentials,
        }
    }

    /// Route one request; query strings are ignored
    pub async fn dispatch(&self, method: &Method, url: &str, body: &[u8]) -> Reply {
        let path = url.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        match (method, segments.as_slice()) {
            (Method::Post, ["register"]) => self.register(body).await,
            (Method::Post, ["update"]) => self.update_status(body).await,
            (Method::Post, ["login"]) => self.login(body),
            (Method::Get, ["packages"]) => Reply::from_result(self.service.list_packages().await),
            (Method::Get, ["packages", id, "history"]) => {
                Reply::from_result(self.service.get_history(id).await)
            }
            _ => Reply::route_not_found(),
        }
    }

    async fn register(&self, body: &[u8]) -> Reply {
        let request: RegisterRequest = match parse_body(body) {
            Ok(request) => request,
            Err(err) => return Reply::error(&err),
        };
        Reply::from_result(self.service.register(request.description).await)
    }

    async fn update_status(&self, body: &[u8]) -> Reply {
        let request: UpdateStatusRequest = match parse_body(body) {
            Ok(request) => request,
            Err(err) => return Reply::error(&err),
        };
        match self.service.update_status(&request.id, request.status).await {
            Ok(()) => Reply::empty(200),
            Err(err) => Reply::error(&err),
        }
    }

    fn login(&self, body: &[u8]) -> Reply {
        let request: LoginRequest = match parse_body(body) {
            Ok(request) => request,
            Err(err) => return Reply::error(&err),
        };
        if !self.credentials.verify(&request.email, &request.password) {
            return Reply::error(&ApiError::Unauthorized("invalid credentials".to_string()));
        }
        Reply::json(
            200,
            &LoginResponse {
                email: request.email,
                token: Uuid::new_v4().to_string(),
            },
        )
    }
}

/// Read at most [`MAX_BODY_BYTES`] from `reader`
fn read_body<R: Read>(reader: R) -> ApiResult<Vec<u8>> {
    let mut body = Vec::new();
    reader
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|err| ApiError::ValidationError(format!("failed to read request body: {err}")))?;
    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(ApiError::ValidationError(format!(
            "request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }
    Ok(body)
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Blocking HTTP server dispatching each request on its own thread
pub struct HttpServer {
    server: Arc<Server>,
    router: Router,
    runtime: Handle,
}

impl HttpServer {
    /// Listen on `addr`; port 0 picks a free port
    pub fn bind(
        addr: &str,
        router: Router,
        runtime: Handle,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let server = Server::http(addr)?;
        Ok(Self {
            server: Arc::new(server),
            router,
            runtime,
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Handle that makes a running [`HttpServer::serve`] return
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: self.server.clone(),
        }
    }

    /// Accept requests until shut down. Must not be called from an async context.
    pub fn serve(&self) {
        for request in self.server.incoming_requests() {
            let router = self.router.clone();
            let runtime = self.runtime.clone();
            let spawned = std::thread::Builder::new()
                .name("http-request".to_string())
                .spawn(move || handle_request(&router, &runtime, request));
            if let Err(err) = spawned {
                warn!("Failed to spawn request thread: {err}");
            }
        }
        info!("HTTP server stopped");
    }
}

#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.server.unblock();
    }
}

fn handle_request(router: &Router, runtime: &Handle, mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = match read_body(request.as_reader()) {
        Ok(body) => runtime.block_on(router.dispatch(&method, &url, &body)),
        Err(err) => Reply::error(&err),
    };
    info!(method = %method, path = %url, status = reply.status, "Handled request");

    let response = match reply.body {
        Some(body) => {
            let response = Response::from_string(body).with_status_code(reply.status);
            match Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
                Ok(header) => response.with_header(header),
                Err(()) => response,
            }
        }
        None => Response::from_string(String::new()).with_status_code(reply.status),
    };
    if let Err(err) = request.respond(response) {
        warn!("Failed to send response: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserCredential;
    use crate::credentials::StaticCredentials;
    use async_trait::async_trait;
    use chrono::Utc;
    use logistics_core_api::domain::{Package, StatusHistoryEntry};

    /// Service double answering every call with canned values
    struct FakeService {
        fail: bool,
    }

    #[async_trait]
    impl TrackingService for FakeService {
        async fn register(&self, description: String) -> ApiResult<Package> {
            if self.fail {
                return Err(ApiError::DatabaseError("disk full".to_string()));
            }
            Ok(Package {
                id: Uuid::nil(),
                status: "registered".to_string(),
                description,
                timestamp: Utc::now(),
            })
        }

        async fn update_status(&self, id: &str, _status: String) -> ApiResult<()> {
            if id == "missing" {
                return Err(ApiError::NotFound(format!("package {id}")));
            }
            Ok(())
        }

        async fn list_packages(&self) -> ApiResult<Vec<Package>> {
            if self.fail {
                return Err(ApiError::DatabaseError("disk full".to_string()));
            }
            Ok(Vec::new())
        }

        async fn get_history(&self, package_id: &str) -> ApiResult<Vec<StatusHistoryEntry>> {
            Ok(vec![StatusHistoryEntry {
                id: Uuid::nil(),
                package_id: Uuid::parse_str(package_id).unwrap_or_default(),
                status: "registered".to_string(),
                timestamp: Utc::now(),
            }])
        }
    }

    fn router(fail: bool) -> Router {
        let credentials = StaticCredentials::new(&[UserCredential {
            email: "user@example.com".to_string(),
            password: "password123".to_string(),
        }]);
        Router::new(Arc::new(FakeService { fail }), Arc::new(credentials))
    }

    fn body_json(reply: &Reply) -> serde_json::Value {
        serde_json::from_str(reply.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_register() {
        let reply = router(false)
            .dispatch(&Method::Post, "/register", br#"{"description":"books"}"#)
            .await;
        assert_eq!(reply.status, 200);
        let body = body_json(&reply);
        assert_eq!(body["description"], "books");
        assert_eq!(body["status"], "registered");
    }

    #[tokio::test]
    async fn test_register_malformed_body() {
        let reply = router(false).dispatch(&Method::Post, "/register", b"{oops").await;
        assert_eq!(reply.status, 400);
        assert!(body_json(&reply)["error"].is_string());
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let reply = router(true).dispatch(&Method::Get, "/packages", b"").await;
        assert_eq!(reply.status, 500);
        assert!(body_json(&reply)["error"].as_str().unwrap().contains("disk full"));
    }

    #[tokio::test]
    async fn test_update_replies_with_empty_body() {
        let reply = router(false)
            .dispatch(&Method::Post, "/update", br#"{"id":"abc","status":"in_transit"}"#)
            .await;
        assert_eq!(reply, Reply::empty(200));
    }

    #[tokio::test]
    async fn test_update_unknown_package_is_404() {
        let reply = router(false)
            .dispatch(&Method::Post, "/update", br#"{"id":"missing","status":"lost"}"#)
            .await;
        assert_eq!(reply.status, 404);
    }

    #[tokio::test]
    async fn test_update_missing_field_is_400() {
        let reply = router(false)
            .dispatch(&Method::Post, "/update", br#"{"id":"abc"}"#)
            .await;
        assert_eq!(reply.status, 400);
    }

    #[tokio::test]
    async fn test_list_packages_empty_array() {
        let reply = router(false).dispatch(&Method::Get, "/packages?page=2", b"").await;
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_history_path_parameter() {
        let id = Uuid::new_v4();
        let reply = router(false)
            .dispatch(&Method::Get, &format!("/packages/{id}/history"), b"")
            .await;
        assert_eq!(reply.status, 200);
        assert_eq!(body_json(&reply)[0]["package_id"], id.to_string());
    }

    #[tokio::test]
    async fn test_login() {
        let router = router(false);

        let ok = router
            .dispatch(
                &Method::Post,
                "/login",
                br#"{"email":"user@example.com","password":"password123"}"#,
            )
            .await;
        assert_eq!(ok.status, 200);
        let body = body_json(&ok);
        assert_eq!(body["email"], "user@example.com");
        assert!(Uuid::parse_str(body["token"].as_str().unwrap()).is_ok());
        assert!(body.get("password").is_none());

        let denied = router
            .dispatch(
                &Method::Post,
                "/login",
                br#"{"email":"user@example.com","password":"nope"}"#,
            )
            .await;
        assert_eq!(denied.status, 401);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let router = router(false);
        let reply = router.dispatch(&Method::Get, "/nowhere", b"").await;
        assert_eq!(reply.status, 404);
        assert_eq!(reply.body.as_deref(), Some(r#"{"error":"route not found"}"#));
        assert_eq!(router.dispatch(&Method::Delete, "/packages", b"").await.status, 404);
        assert_eq!(router.dispatch(&Method::Get, "/register", b"").await.status, 404);
    }

    #[test]
    fn test_read_body_within_limit() {
        let body = read_body(&br#"{"description":"books"}"#[..]).unwrap();
        assert_eq!(body, br#"{"description":"books"}"#);

        let exact = read_body(std::io::repeat(b'a').take(MAX_BODY_BYTES)).unwrap();
        assert_eq!(exact.len() as u64, MAX_BODY_BYTES);
    }

    #[test]
    fn test_read_body_rejects_oversized_body() {
        let result = read_body(std::io::repeat(b'a').take(MAX_BODY_BYTES * 4));
        let err = result.unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
        assert_eq!(Reply::error(&err).status, 400);
    }
}
