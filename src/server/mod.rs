//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, DEFAULT_BIND, DEFAULT_DATABASE_URL, ServerConfig, SummarizerConfig};

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use crate::domain::ports::{HeuristicSummarizer, InMemorySessionStore, Summarizer};
use crate::inbound::http::{self, HttpState, HttpStatePorts};
use crate::middleware::trace::Trace;
use crate::outbound::persistence::{
    DbPool, DieselCaseRepository, DieselCredentialService, DieselTaskRepository, PoolConfig,
};
use crate::outbound::summarizer::RemoteSummarizer;

fn build_summarizer(config: &ServerConfig) -> std::io::Result<Arc<dyn Summarizer>> {
    match &config.summarizer {
        SummarizerConfig::Heuristic => Ok(Arc::new(HeuristicSummarizer)),
        SummarizerConfig::Remote { endpoint, timeout } => {
            let remote = RemoteSummarizer::with_timeout(endpoint.clone(), *timeout)
                .map_err(|err| std::io::Error::other(format!("summariser client: {err}")))?;
            Ok(Arc::new(remote))
        }
    }
}

fn build_http_state(config: &ServerConfig, pool: DbPool) -> std::io::Result<HttpState> {
    let ports = HttpStatePorts {
        credentials: Arc::new(DieselCredentialService::new(pool.clone())),
        sessions: Arc::new(InMemorySessionStore::with_ttl(config.session_ttl)),
        cases: Arc::new(DieselCaseRepository::new(pool.clone())),
        tasks: Arc::new(DieselTaskRepository::new(pool)),
        summarizer: build_summarizer(config)?,
    };
    Ok(HttpState::with_cookie_policy(
        ports,
        config.session_ttl,
        config.cookie_secure,
    ))
}

/// Build the pool, apply migrations, wire the adapters, and bind the server.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let pool = DbPool::new(PoolConfig::new(&config.database_url))
        .map_err(|err| std::io::Error::other(format!("database pool: {err}")))?;
    pool.run_migrations()
        .map_err(|err| std::io::Error::other(format!("migrations: {err}")))?;

    let state = web::Data::new(build_http_state(&config, pool)?);
    tracing::info!(bind = %config.bind, database = %config.database_url, "starting server");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .configure(http::routes)
    })
    .bind(config.bind)?
    .run();
    Ok(server)
}
