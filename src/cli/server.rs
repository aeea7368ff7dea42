use actix_web::{web, HttpServer};
use clap::Parser;
use error_stack::{Result, ResultExt};
use std::net::IpAddr;
use std::num::NonZeroUsize;
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use quill::{config::Server as Config, http, App};

/// Expose the Quill API HTTP server
#[derive(Debug, Parser)]
pub struct ServerCommand {
    #[clap(long)]
    pub address: Option<IpAddr>,
    #[clap(long)]
    pub port: Option<u16>,
    #[clap(long)]
    pub workers: Option<NonZeroUsize>,
}

#[derive(Debug, Error)]
#[error("Failed to start the HTTP server")]
pub struct StartServerError;

pub fn run(args: ServerCommand) -> Result<(), StartServerError> {
    let mut config = Config::load().change_context(StartServerError)?;
    args.override_config(&mut config);

    quill::logging::init(&config.logging).change_context(StartServerError)?;
    super::build_runtime(config.workers.map(NonZeroUsize::get))
        .change_context(StartServerError)
        .attach_printable("could not build tokio runtime")?
        .block_on(serve(config))
}

async fn serve(config: Config) -> Result<(), StartServerError> {
    let addr = (config.ip, config.port);
    let workers = config.workers;
    let cors = config.cors.clone();

    let app = App::new(config).await.change_context(StartServerError)?;
    let data = web::Data::new(app);

    let mut server = HttpServer::new(move || {
        actix_web::App::new()
            .app_data(data.clone())
            .wrap(http::cors(&cors))
            .wrap(TracingLogger::default())
            .configure(http::controllers::configure)
    });

    if let Some(workers) = workers {
        server = server.workers(workers.get());
    }

    let server = server
        .bind(addr)
        .change_context(StartServerError)
        .attach_printable_lazy(|| format!("could not bind to {}:{}", addr.0, addr.1))?;

    tracing::info!("Listening on http://{}:{}", addr.0, addr.1);
    server.run().await.change_context(StartServerError)
}

impl ServerCommand {
    fn override_config(&self, config: &mut Config) {
        // override server configurations if set by the cli
        if let Some(address) = self.address {
            config.ip = address;
        }

        if let Some(port) = self.port {
            config.port = port;
        }

        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }
    }
}
