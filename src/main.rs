#[tokio::main]
async fn main() {
    if let Err(e) = movie_catalog::start_server().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
