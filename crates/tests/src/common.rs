use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use client::auth::store::MemoryTokenStore;
use client::ApiClient;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use shared_types::{Employee, EmployeeFormData, LoginRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Credentials the mock accepts.
pub const USERNAME: &str = "amy";
pub const PASSWORD: &str = "secret";

/// How the mock answers employee calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    Unauthorized,
    ServerError,
}

/// In-memory stand-in for the employee REST API.
pub struct MockState {
    employees: Mutex<Vec<Employee>>,
    next_id: Mutex<i64>,
    failure: Mutex<Failure>,
    requests: AtomicUsize,
    token: String,
}

impl MockState {
    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }

    /// Requests received so far, login included.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = failure;
    }

    /// The token login hands out and employee calls expect.
    pub fn token(&self) -> &str {
        &self.token
    }

    fn check(&self, headers: &HeaderMap) -> Result<(), StatusCode> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match *self.failure.lock().unwrap() {
            Failure::Unauthorized => return Err(StatusCode::UNAUTHORIZED),
            Failure::ServerError => return Err(StatusCode::INTERNAL_SERVER_ERROR),
            Failure::None => {}
        }
        let expected = format!("Bearer {}", self.token);
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some(value) if value == expected => Ok(()),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }
}

pub struct MockApi {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockApi {
    /// A client with an empty in-memory token store.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Arc::new(MemoryTokenStore::new()))
    }

    /// A client already holding the token the mock accepts.
    pub fn signed_in_client(&self) -> ApiClient {
        ApiClient::new(
            &self.base_url,
            Arc::new(MemoryTokenStore::with_token(self.state.token.clone())),
        )
    }
}

/// Mint an HS256 token with the given claims. The console never checks the
/// signature, so the key is arbitrary.
pub fn mint_token(sub: &str, roles: &[&str], exp_secs: i64) -> String {
    encode(
        &Header::default(),
        &json!({ "sub": sub, "exp": exp_secs, "roles": roles }),
        &EncodingKey::from_secret(b"mock-api"),
    )
    .unwrap()
}

/// Expiry one hour from now, in epoch seconds.
pub fn in_an_hour() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

pub fn employee(id: i64, name: &str, department: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        department: department.to_string(),
        email: format!("{}@corp.io", name.to_lowercase()),
        phone: format!("555-{id:04}"),
        reporting_manager: "Dana".to_string(),
    }
}

pub fn form_data(name: &str) -> EmployeeFormData {
    EmployeeFormData {
        name: name.to_string(),
        department: "Engineering".to_string(),
        email: format!("{}@corp.io", name.to_lowercase()),
        phone: "555-0100".to_string(),
        reporting_manager: "Dana".to_string(),
    }
}

/// Start the mock API on a loopback port, seeded with `seed`.
pub async fn mock_api(seed: Vec<Employee>) -> MockApi {
    let next_id = seed.iter().map(|e| e.id).max().unwrap_or(0) + 1;
    let state = Arc::new(MockState {
        employees: Mutex::new(seed),
        next_id: Mutex::new(next_id),
        failure: Mutex::new(Failure::None),
        requests: AtomicUsize::new(0),
        token: mint_token(USERNAME, &["ADMIN", "HR"], in_an_hour()),
    });

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/employees", get(list).post(create))
        .route("/api/employees/{id}", get(fetch).put(update).delete(remove))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

type Shared = State<Arc<MockState>>;

async fn login(State(state): Shared, Json(body): Json<LoginRequest>) -> Result<Json<Value>, StatusCode> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if body.username == USERNAME && body.password == PASSWORD {
        Ok(Json(json!({ "token": state.token })))
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn list(State(state): Shared, headers: HeaderMap) -> Result<Json<Vec<Employee>>, StatusCode> {
    state.check(&headers)?;
    Ok(Json(state.employees()))
}

async fn fetch(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, StatusCode> {
    state.check(&headers)?;
    state
        .employees()
        .into_iter()
        .find(|e| e.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create(
    State(state): Shared,
    headers: HeaderMap,
    Json(data): Json<EmployeeFormData>,
) -> Result<(StatusCode, Json<Employee>), StatusCode> {
    state.check(&headers)?;
    let id = {
        let mut next = state.next_id.lock().unwrap();
        let id = *next;
        *next += 1;
        id
    };
    let created = with_id(id, data);
    state.employees.lock().unwrap().push(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(data): Json<EmployeeFormData>,
) -> Result<Json<Employee>, StatusCode> {
    state.check(&headers)?;
    let mut employees = state.employees.lock().unwrap();
    let slot = employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = with_id(id, data);
    Ok(Json(slot.clone()))
}

async fn remove(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    state.check(&headers)?;
    let mut employees = state.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.id != id);
    if employees.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

fn with_id(id: i64, data: EmployeeFormData) -> Employee {
    Employee {
        id,
        name: data.name,
        department: data.department,
        email: data.email,
        phone: data.phone,
        reporting_manager: data.reporting_manager,
    }
}
