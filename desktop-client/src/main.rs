mod config;
mod ui;

use clap::Parser;
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Difficulty, GameMode, TicTacToeGame};
use tictactoe_common::{LogLevel, log, log_warn, logger};

use config::{ClientConfig, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-Tac-Toe against a friend or the computer")]
struct Args {
    /// pvp or pvc; overrides the saved setting for this session only
    #[arg(long)]
    mode: Option<GameMode>,
    /// easy, medium or hard; not saved
    #[arg(long)]
    difficulty: Option<Difficulty>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager();
    let (config, load_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, args.log_level.unwrap_or(config.log_level));

    if let Some(e) = load_error {
        log_warn!("Failed to load settings, using defaults: {}", e);
    }

    let session = config.session_game(args.mode, args.difficulty);
    let rng = SessionRng::from_optional_seed(args.seed);
    log!(
        "Starting {} ({}), seed {}",
        session.mode.label(),
        session.difficulty.label(),
        rng.seed()
    );

    let game = TicTacToeGame::new(session, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 600.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(game, config_manager, config)))),
    )?;

    log!("Window closed");
    Ok(())
}
