mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use packaging_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
