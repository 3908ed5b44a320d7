//! 应用层：路由装配与服务启动

pub mod user;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use crate::infrastructure::{
    config::{Config, HttpConfig},
    database::DatabaseManager,
};
use user::{handler, UserService};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub db: DatabaseManager,
}

pub struct App {
    router: Router,
    db: DatabaseManager,
    http: HttpConfig,
}

impl App {
    /// 连接数据库、建表并装配路由
    pub async fn initialize(config: &Config) -> Result<Self, sqlx::Error> {
        let db = DatabaseManager::new(&config.database).await?;
        Self::with_database(db, config.http.clone()).await
    }

    pub async fn with_database(db: DatabaseManager, http: HttpConfig) -> Result<Self, sqlx::Error> {
        db.ensure_table_exists().await?;

        let state = AppState {
            user_service: UserService::new(db.get_pool().clone()),
            db: db.clone(),
        };
        let router = create_routes(state, Duration::from_secs(http.timeout_seconds));

        Ok(Self { router, db, http })
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }

    /// 绑定配置的地址并提供服务，直到收到 Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.http.addr()).await?;
        let addr = listener.local_addr()?;

        info!("User API server running on http://{}", addr);
        info!("   GET    /users?start=0&count=10 - List users");
        info!("   GET    /user/:id               - Get user by ID");
        info!("   POST   /user                   - Create user");
        info!("   PUT    /user/:id               - Update user");
        info!("   DELETE /user/:id               - Delete user");
        info!("   GET    /health                 - Health check");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.db.get_pool().close().await;
        info!("Server stopped");
        Ok(())
    }
}

/// 创建路由
pub fn create_routes(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(handler::get_users))
        .route("/user", post(handler::create_user))
        .route(
            "/user/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}

// 健康检查
async fn health_check(State(state): State<AppState>) -> Result<Json<serde_json::Value>, CoreError> {
    state.db.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
