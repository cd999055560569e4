use std::sync::Arc;

use crate::{config::Config, error, info, server::start_api_server};

pub async fn serve(config: Arc<Config>) {
    info!("Serving podsearch on http://{}", config.server_address);
    if let Err(e) = start_api_server(config).await {
        error!("Server stopped. Err: {}", e);
    }
}
