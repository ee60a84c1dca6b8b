mod cli;
mod infra;
mod routes;
mod server;

use employment_history::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
