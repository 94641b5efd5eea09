use database::DatabaseLoader;
use env_logger::Env;
use log::info;
use scoreboard::scene::{ImageId, ImageRuntime, MemoryScene, SceneError};
use scoreboard::{BoardConfig, BoardSession, GatewayClient, TeamPalette};
use std::env;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;
use web::{GatewayAppData, GatewayConfig, GatewayServer};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let started = Instant::now();
    let database = DatabaseLoader::load()?;
    info!(
        "database loaded: {} ms, {} teams",
        started.elapsed().as_millis(),
        database.teams.len()
    );

    let palette = Arc::new(database.palette());

    if env::var("MODE") == Ok(String::from("PREVIEW")) {
        info!("board preview started");
        return run_preview(palette).await;
    }

    let data = GatewayAppData::new(GatewayConfig::load())?;

    GatewayServer::new(data).run().await?;

    Ok(())
}

/// Drives one board session against a running gateway and prints the scene.
async fn run_preview(palette: Arc<TeamPalette>) -> color_eyre::Result<()> {
    let config = BoardConfig::load();
    let images = Arc::new(PreviewImages::default());

    let mut session = BoardSession::new(
        MemoryScene::new(),
        Arc::new(GatewayClient::new(&config)?),
        images.clone(),
        palette,
        &config,
    );

    session.initialize().await?;

    if let Some(first) = session.cards().first().map(|slot| slot.card) {
        session.open_match(first).await;
    }

    for line in session.scene().describe() {
        println!("{line}");
    }

    session.shutdown();

    info!("preview done, {} images still decoded", images.live());

    Ok(())
}

#[derive(Default)]
struct PreviewImages {
    next_id: AtomicU64,
    live: AtomicUsize,
}

impl PreviewImages {
    fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl ImageRuntime for PreviewImages {
    fn decode(&self, bytes: &[u8]) -> Result<ImageId, SceneError> {
        if bytes.is_empty() {
            return Err(SceneError::Decode(String::from("empty image")));
        }

        self.live.fetch_add(1, Ordering::SeqCst);

        Ok(ImageId(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    fn release(&self, _image: ImageId) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}
