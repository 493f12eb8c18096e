mod cli;
mod infra;
mod report;
mod routes;
mod server;

use employee_insights::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
