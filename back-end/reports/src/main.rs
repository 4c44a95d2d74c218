#[tokio::main]
async fn main() {
    if let Err(e) = reports::runner::run().await {
        tracing::error!(error = %e, code = e.error_code(), "Report queries failed");
        std::process::exit(1);
    }
}
