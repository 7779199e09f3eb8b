use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::config::LogConfig;
use sso_service::config::LogFormat;
use sso_service::domain::identity::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::PostgresAppRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use sso_service::proto::auth_server::AuthServer;
use tonic::transport::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;
    init_tracing(&config.log)?;

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    tracing::info!(
        grpc_port = config.server.grpc_port,
        max_connections = config.database.max_connections,
        query_timeout_ms = config.database.query_timeout_ms,
        token_ttl_seconds = config.token.ttl_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.query_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let query_timeout = config.database.query_timeout();
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone(), query_timeout));
    let app_repository = Arc::new(PostgresAppRepository::new(pg_pool.clone(), query_timeout));

    let mut auth_service = AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&user_repository),
        app_repository,
        config.token.ttl(),
    );
    if let Some(password) = &config.password {
        auth_service = auth_service.with_password_hasher(auth::PasswordHasher::with_params(
            password.memory_kib,
            password.iterations,
            password.parallelism,
        )?);
    }
    let auth_service = Arc::new(auth_service);

    let grpc_address: SocketAddr = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .timeout(config.server.request_timeout())
        .trace_fn(|request| tracing::info_span!("grpc_request", path = %request.uri().path()))
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await?;

    pg_pool.close().await;
    tracing::info!("Server exited successfully");

    Ok(())
}

fn init_tracing(log: &LogConfig) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.filter))?;
    let subscriber = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Pretty => subscriber.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?,
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining requests");
}
