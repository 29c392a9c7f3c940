use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{AppError, ClientConfig, Employee, EmployeeFormData, LoginRequest, LoginResponse};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::auth::store::{platform_store, TokenStore};

/// Events the client raises for the shell to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEvent {
    /// An employee call came back 401; the stored token has been cleared.
    Unauthorized,
}

/// The employee operations, as seen by controllers.
#[allow(async_fn_in_trait)]
pub trait EmployeeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError>;
    async fn get_employee(&self, id: i64) -> Result<Employee, AppError>;
    async fn create_employee(&self, data: &EmployeeFormData) -> Result<Employee, AppError>;
    async fn update_employee(&self, id: i64, data: &EmployeeFormData) -> Result<Employee, AppError>;
    async fn delete_employee(&self, id: i64) -> Result<(), AppError>;
}

/// REST client for the employee API. Clones share the HTTP pool, the token
/// store and the event channel.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    store: Arc<dyn TokenStore>,
    events: broadcast::Sender<ApiEvent>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            store,
            events,
        }
    }

    /// Client for the configured API, backed by the platform token store.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base(), platform_store(&config.auth.token_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Receive [`ApiEvent`]s raised after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ApiEvent> {
        self.events.subscribe()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn dispatch(&self, request: RequestBuilder, context: &str) -> Result<Response, AppError> {
        self.with_token(request)
            .send()
            .await
            .map_err(|e| AppError::request_failed(format!("{context}: {e}")))
    }

    /// Send an employee call and map its status. A 401 ends the session.
    async fn send(&self, request: RequestBuilder, context: &str) -> Result<Response, AppError> {
        let response = self.dispatch(request, context).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let err = AppError::from_status(status.as_u16(), context);
        if err.is_unauthorized() {
            self.expire_session();
        } else {
            tracing::warn!(status = status.as_u16(), context, "API call failed");
        }
        Err(err)
    }

    async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T, AppError> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::request_failed(format!("{context}: unreadable response: {e}")))
    }

    fn expire_session(&self) {
        tracing::warn!("API rejected the session token, signing out");
        self.store.clear();
        // No receivers simply means no shell is listening.
        let _ = self.events.send(ApiEvent::Unauthorized);
    }

    /// Exchange credentials for a raw token. Does not store it.
    ///
    /// A 401 here means bad credentials and leaves any session alone.
    #[tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<String, AppError> {
        let context = "login";
        let response = self
            .dispatch(self.http.post(self.url("/auth/login")).json(request), context)
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "Login rejected");
            return Err(AppError::from_status(status.as_u16(), context));
        }

        let body: LoginResponse = Self::read_json(response, context).await?;
        match body.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Ok(token),
            None => Err(AppError::request_failed("login: response carried no token")),
        }
    }
}

impl EmployeeApi for ApiClient {
    #[tracing::instrument(skip(self))]
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let context = "list employees";
        let response = self.send(self.http.get(self.url("/employees")), context).await?;
        let employees: Vec<Employee> = Self::read_json(response, context).await?;
        tracing::debug!(count = employees.len(), "Employees fetched");
        Ok(employees)
    }

    #[tracing::instrument(skip(self))]
    async fn get_employee(&self, id: i64) -> Result<Employee, AppError> {
        let context = "get employee";
        let response = self
            .send(self.http.get(self.url(&format!("/employees/{id}"))), context)
            .await?;
        Self::read_json(response, context).await
    }

    #[tracing::instrument(skip(self, data))]
    async fn create_employee(&self, data: &EmployeeFormData) -> Result<Employee, AppError> {
        let context = "create employee";
        let response = self
            .send(self.http.post(self.url("/employees")).json(data), context)
            .await?;
        let created: Employee = Self::read_json(response, context).await?;
        tracing::info!(id = created.id, "Employee created");
        Ok(created)
    }

    #[tracing::instrument(skip(self, data))]
    async fn update_employee(&self, id: i64, data: &EmployeeFormData) -> Result<Employee, AppError> {
        let context = "update employee";
        let response = self
            .send(self.http.put(self.url(&format!("/employees/{id}"))).json(data), context)
            .await?;
        let updated: Employee = Self::read_json(response, context).await?;
        tracing::info!(id, "Employee updated");
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        self.send(self.http.delete(self.url(&format!("/employees/{id}"))), "delete employee")
            .await?;
        tracing::info!(id, "Employee deleted");
        Ok(())
    }
}
