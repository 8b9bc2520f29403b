use forum_api::{
    application::{
        comment_likes::use_case::ToggleCommentLikeUseCase, comments::use_case::CommentUseCase,
        replies::use_case::ReplyUseCase, threads::use_case::ThreadUseCase,
    },
    config::Config,
    domain::{
        comment::repository::CommentRepository, reply::repository::ReplyRepository,
        thread::repository::ThreadRepository,
    },
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            sqlx_comment_repository::SqlxCommentRepository,
            sqlx_reply_repository::SqlxReplyRepository,
            sqlx_thread_repository::SqlxThreadRepository,
        },
    },
    presentation::http::{routes::create_router, state::AppState},
};
use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,forum_api=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await?;

    let thread_repo: Arc<dyn ThreadRepository> = Arc::new(SqlxThreadRepository::new(db.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(SqlxCommentRepository::new(db.clone()));
    let reply_repo: Arc<dyn ReplyRepository> = Arc::new(SqlxReplyRepository::new(db.clone()));

    let state = AppState {
        db: db.clone(),
        config: config.clone(),
        threads: Arc::new(ThreadUseCase::new(
            thread_repo.clone(),
            comment_repo.clone(),
            reply_repo.clone(),
        )),
        comments: Arc::new(CommentUseCase::new(
            thread_repo.clone(),
            comment_repo.clone(),
        )),
        replies: Arc::new(ReplyUseCase::new(
            thread_repo.clone(),
            comment_repo.clone(),
            reply_repo.clone(),
        )),
        toggle_comment_like: Arc::new(ToggleCommentLikeUseCase::new(thread_repo, comment_repo)),
    };

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Forum API listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
