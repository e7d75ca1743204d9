use anyhow::Result;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::{find_source, AppConfig};
use crate::http::SheetClient;
use crate::services::loader::StandingsLoader;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let fetcher = SheetClient::new(
            self.config.loader.user_agent,
            self.config.loader.timeout_secs,
        )?;
        let loader = Arc::new(StandingsLoader::new(
            Box::new(fetcher),
            self.config.loader.default_source,
        ));

        self.spawn_initial_load(&loader);

        let state = Arc::new(AppState {
            loader,
            config: self.config.clone(),
        });
        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Kick off the first load in the background; the API serves the empty
    /// snapshot until it lands.
    fn spawn_initial_load(&self, loader: &Arc<StandingsLoader>) {
        let Some(source) = find_source(self.config.loader.default_source) else {
            error!(
                "Default source {} is not configured",
                self.config.loader.default_source
            );
            return;
        };

        let loader = loader.clone();
        tokio::spawn(async move {
            if let Err(e) = loader.refresh(&source).await {
                error!("Initial standings load failed: {}", e);
            }
        });
    }
}
