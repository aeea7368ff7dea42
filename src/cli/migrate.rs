use clap::Parser;
use error_stack::{Report, Result, ResultExt};
use thiserror::Error;

use quill::{config::Server as Config, database::Pool};

/// Apply pending database migrations and exit
#[derive(Debug, Parser)]
pub struct MigrateCommand {}

#[derive(Debug, Error)]
#[error("Failed to migrate the database")]
pub struct MigrateError;

pub fn run(_args: MigrateCommand) -> Result<(), MigrateError> {
    let config = Config::load().change_context(MigrateError)?;
    quill::logging::init(&config.logging).change_context(MigrateError)?;

    let Some(db) = config.db else {
        return Err(Report::new(MigrateError)
            .attach_printable("no database configured, set `DATABASE_URL` or `QUILL_DB_URL`"));
    };

    super::build_runtime(Some(1))
        .change_context(MigrateError)
        .attach_printable("could not build tokio runtime")?
        .block_on(async move {
            let pool = Pool::new(&db).await.change_context(MigrateError)?;
            pool.migrate().await.change_context(MigrateError)?;
            tracing::info!("Database migrations applied");
            Ok(())
        })
}
