//! # YASP Main Entry Point
//!
//! Loads the configuration, builds the game state, starts the game loop on a
//! tokio runtime and hands the main thread to the macroquad window.

use clap::Parser;
use log::{error, info};
use macroquad::window::Conf;
use std::path::PathBuf;
use std::sync::Arc;
use yasp::rendering::assets::Tilemap;
use yasp::{
    generate_map, layouts, load_config_file, Config, GameState, InputHandler, MacroquadDisplay,
    SpriteSheet, YaspResult, CONFIG_ERROR_EXIT_CODE, DEFAULT_DUNGEON_HEIGHT,
    DEFAULT_DUNGEON_WIDTH, TITLE,
};

/// Command line arguments for YASP.
#[derive(Parser, Debug)]
#[command(name = "yasp")]
#[command(about = "A small roguelike prototype")]
#[command(version)]
struct Args {
    /// YAML config file path
    #[arg(long, default_value = "test/config.yml")]
    config: PathBuf,

    /// Generate a random map from this seed instead of the starting room
    #[arg(short, long)]
    seed: Option<u64>,

    /// Width of a generated map in tiles
    #[arg(long, default_value_t = DEFAULT_DUNGEON_WIDTH)]
    map_width: i32,

    /// Height of a generated map in tiles
    #[arg(long, default_value_t = DEFAULT_DUNGEON_HEIGHT)]
    map_height: i32,

    /// Sprite sheet (PNG) to draw tiles with instead of glyphs
    #[arg(long)]
    tiles: Option<PathBuf>,

    /// Log the map at startup
    #[arg(long)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting {TITLE} v{}", yasp::VERSION);

    // Nothing is created before the configuration is known to be valid.
    let config = match load_config_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load config from {:?}: {e}", args.config);
            eprintln!("failed to load config from {:?}: {e}", args.config);
            std::process::exit(CONFIG_ERROR_EXIT_CODE);
        }
    };

    let game = match build_game(&args) {
        Ok(game) => Arc::new(game),
        Err(e) => {
            error!("failed to create game: {e}");
            std::process::exit(1);
        }
    };

    macroquad::Window::from_config(window_conf(&config), async move {
        if let Err(e) = run(args, game).await {
            error!("{e}");
        }
        info!("... goodbye for now");
    });
}

/// Initializes env_logger at the requested level; `RUST_LOG` takes precedence.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

fn window_conf(config: &Config) -> Conf {
    let mut conf = Conf {
        window_title: TITLE.to_string(),
        window_width: config.win_width,
        window_height: config.win_height,
        ..Default::default()
    };
    conf.platform.swap_interval = Some(i32::from(config.vsync));
    conf
}

fn build_game(args: &Args) -> YaspResult<GameState> {
    let map = match args.seed {
        Some(seed) => {
            info!(
                "Generating {}x{} map with seed {seed}",
                args.map_width, args.map_height
            );
            generate_map(seed, args.map_width, args.map_height)?
        }
        None => layouts::one(),
    };

    if args.debug {
        info!("Map:\n{map}");
    }

    Ok(GameState::new(map, (1, 1)))
}

async fn run(args: Args, game: Arc<GameState>) -> YaspResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("yasp-game")
        .enable_all()
        .build()?;

    let handle = {
        let _guard = runtime.enter();
        Arc::clone(&game).spawn()
    };

    let mut display = MacroquadDisplay::default();
    if let Some(path) = &args.tiles {
        let tilemap = Tilemap::load_file("tiles", path)?;
        display = display.with_sprites(SpriteSheet::new(
            tilemap,
            SpriteSheet::default_glyph_sprites(),
        ));
    }

    let mut input = InputHandler::new();
    let result = display.run(&handle, &mut input).await;

    let processed = runtime.block_on(handle.shutdown());
    info!(
        "Processed {processed} events, quest log has {} entries",
        game.quest_log().len()
    );
    result
}
