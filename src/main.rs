use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use clap::Parser;
use wrap_snake::audio::{AudioHandle, SoundEffect};
use wrap_snake::config::{GameConfig, FRAME_SLEEP, GAME_OVER_HOLD, TICK_INTERVAL};
use wrap_snake::error::RunError;
use wrap_snake::food::RandomFoodPlacer;
use wrap_snake::input::{GameInput, InputHandler, PendingDirection};
use wrap_snake::{logging, renderer};
use wrap_snake::session::{GameOverEvent, SessionController};
use wrap_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use wrap_snake::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Wrap-around terminal Snake with unlockable obstacles")]
struct Cli {
    /// Path to the JSON board configuration.
    config: PathBuf,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable sound cues.
    #[arg(long)]
    mute: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Usage errors exit with 1 like every other startup failure; help and
    // version output still exit cleanly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(error) = logging::init(cli.log_file.as_deref()) {
        eprintln!("Failed to open log file: {error}");
        return ExitCode::FAILURE;
    }

    let config = match GameConfig::load(&cli.config) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("session ended: {error}");
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: GameConfig) -> Result<(), RunError> {
    let placer = match cli.seed {
        Some(seed) => RandomFoodPlacer::from_seed(seed),
        None => RandomFoodPlacer::from_entropy(),
    };
    let mut session = SessionController::new(config, placer)?;

    let mut terminal = TerminalSession::enter()?;
    let mut audio = AudioHandle::open(cli.mute);
    let mut input = InputHandler::new();
    let mut pending = PendingDirection::default();
    let hud_info = HudInfo { muted: audio.is_muted() };

    let mut game_over: Option<(GameOverEvent, Instant)> = None;
    let mut last_tick = Instant::now();

    'run: loop {
        terminal.draw(|frame| {
            renderer::render(
                frame,
                session.state(),
                hud_info,
                game_over.map(|(event, _)| event),
            )
        })?;

        for game_input in input.drain()? {
            match game_input {
                GameInput::Quit => break 'run,
                GameInput::Direction(direction) => pending.request(direction),
            }
        }

        if let Some((_, shown_at)) = game_over {
            // Input during the popup must not steer the next game.
            pending.clear();
            if shown_at.elapsed() < GAME_OVER_HOLD {
                thread::sleep(FRAME_SLEEP);
                continue;
            }
            game_over = None;
            last_tick = Instant::now();
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            let outcome = session.tick(pending.take())?;
            last_tick = Instant::now();

            if outcome.report.eaten.is_some() {
                audio.play(SoundEffect::Eat);
            }
            if let Some(event) = outcome.game_over {
                audio.play(SoundEffect::GameOver);
                game_over = Some((event, Instant::now()));
            }
        }

        thread::sleep(FRAME_SLEEP);
    }

    let _ = audio.close();
    log::info!("quit with high score {}", session.high_score());
    Ok(())
}
