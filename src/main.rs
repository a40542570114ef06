use std::path::PathBuf;
use std::time::Duration;

use anyhow::ensure;
use clap::Parser;
use macroquad::prelude::*;
use strat_board::{
    code_from_url, compose, draw_scene, load_board, IconAtlas, JsonDecoder, RenderConfig,
    StaticAssets, TextureCache, ViewportScaler, DEFAULT_CODE,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "strat-board-viewer", about = "Render a strategy board code")]
struct Cli {
    /// Board code to render
    #[arg(long, env = "STRATBOARD_CODE")]
    code: Option<String>,

    /// Page URL carrying the code in its fragment or `code` query parameter; `--code` wins
    #[arg(long)]
    url: Option<String>,

    /// Directory holding `background/` and `objects/`
    #[arg(long, env = "STRATBOARD_ASSETS", default_value = "assets")]
    assets: PathBuf,

    /// Quiet window before a window resize is applied
    #[arg(long, default_value_t = 100)]
    resize_quiet_ms: u64,
}

impl Cli {
    fn board_code(&self) -> String {
        self.code
            .clone()
            .or_else(|| self.url.as_deref().and_then(code_from_url))
            .unwrap_or_else(|| DEFAULT_CODE.to_owned())
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Strategy Board".into(),
        window_width: 1024,
        window_height: 768,
        window_resizable: true,
        ..Default::default()
    }
}

fn screen_size() -> Vec2 {
    vec2(screen_width(), screen_height())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = RenderConfig {
        resize_quiet: Duration::from_millis(cli.resize_quiet_ms),
        assets_root: cli.assets.clone(),
        ..RenderConfig::default()
    };
    ensure!(
        config.assets_root.is_dir(),
        "asset directory {} not found",
        config.assets_root.display()
    );

    let board = load_board(&JsonDecoder, &cli.board_code());
    let atlas = IconAtlas::standard();
    let scene = compose(&board, &atlas);
    tracing::info!(
        background = ?scene.background,
        markers = board.markers.len(),
        primitives = scene.primitives.len(),
        skipped = scene.skipped.len(),
        "board ready"
    );

    let assets = StaticAssets::new(&config.assets_root);
    let mut textures = TextureCache::new();
    textures.queue_sheets(&atlas, &assets);
    let mut viewport = ViewportScaler::new(screen_size(), &config);

    loop {
        let now = get_time();
        viewport.observe(screen_size(), now);
        viewport.poll(now);

        clear_background(BLACK);
        draw_scene(&scene, &mut textures, &assets, &viewport);

        if textures.pending() > 0 {
            textures.load_pending(config.textures_per_frame).await;
        }
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Cli::parse()).await {
        tracing::error!(error = %err, "viewer stopped");
        std::process::exit(1);
    }
}
