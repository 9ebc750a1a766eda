// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use baike_admin::{
    config::Config,
    error::ServiceError,
    models::{
        baike::Baike,
        request::{BaikeSearch, IdsReq},
    },
    routes,
    services::baike::BaikeService,
    state::AppState,
    utils::jwt::sign_jwt,
};

pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

/// One call the handlers made into the service.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Baike),
    Delete(Baike),
    DeleteByIds(Vec<i64>),
    Update(Baike),
    Get(i64),
    List(BaikeSearch),
}

/// In-memory `BaikeService` that records every call and can be told to fail.
#[derive(Default)]
pub struct RecordingService {
    calls: Mutex<Vec<Call>>,
    rows: Vec<Baike>,
    failure: Option<String>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows served by `get_baike` and `get_baike_info_list`.
    pub fn with_rows(mut self, rows: Vec<Baike>) -> Self {
        self.rows = rows;
        self
    }

    /// Every call fails with a database error carrying `reason`.
    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(reason) => Err(ServiceError::Database(sqlx::Error::Protocol(reason.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BaikeService for RecordingService {
    async fn create_baike(&self, baike: Baike) -> Result<(), ServiceError> {
        self.record(Call::Create(baike))
    }

    async fn delete_baike(&self, baike: Baike) -> Result<(), ServiceError> {
        self.record(Call::Delete(baike))
    }

    async fn delete_baike_by_ids(&self, ids: IdsReq) -> Result<(), ServiceError> {
        self.record(Call::DeleteByIds(ids.ids))
    }

    async fn update_baike(&self, baike: Baike) -> Result<(), ServiceError> {
        self.record(Call::Update(baike))
    }

    async fn get_baike(&self, id: i64) -> Result<Baike, ServiceError> {
        self.record(Call::Get(id))?;
        self.rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    async fn get_baike_info_list(&self, search: &BaikeSearch) -> Result<(Vec<Baike>, i64), ServiceError> {
        self.record(Call::List(search.clone()))?;
        let page = self
            .rows
            .iter()
            .skip(search.offset() as usize)
            .take(search.limit() as usize)
            .cloned()
            .collect();
        Ok((page, self.rows.len() as i64))
    }
}

/// A record with all seven required fields filled in.
pub fn sample_baike(id: i64) -> Baike {
    Baike {
        id,
        category_id: Some(2),
        question: format!("第{}题：应县木塔建于哪个朝代？", id),
        option_a: "辽".to_string(),
        option_b: "宋".to_string(),
        option_c: "元".to_string(),
        option_d: "明".to_string(),
        answer: "A".to_string(),
        ..Default::default()
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        server_addr: "127.0.0.1:0".parse().unwrap(),
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        cors_origins: vec!["http://localhost:8080".to_string()],
    }
}

pub fn app_state(service: Arc<RecordingService>) -> AppState {
    AppState {
        service,
        config: test_config(),
    }
}

pub fn admin_token() -> String {
    sign_jwt(1, "admin", JWT_SECRET, 600).expect("Failed to sign test token")
}

/// Spawns the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app(service: Arc<RecordingService>) -> String {
    let app = routes::create_router(app_state(service));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}
