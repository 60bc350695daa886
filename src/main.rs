use color_eyre::{Result, eyre::WrapErr};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;

use rocket_patrol::{App, GameConfig, assets, screen};

/// Log file used while the terminal is in the alternate screen
const LOG_PATH: &str = "debug.log";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let config = GameConfig::default();
    log::info!(
        "Starting \"{}\" at {}x{}",
        config.title,
        config.width,
        config.height
    );

    // Load before touching the terminal so a missing asset reports cleanly
    let tile = assets::load_starfield(&config.starfield_path)?;

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::info!("Keyboard enhancement supported: {supports_keyboard_enhancement}");

    let mut stdout = stdout();
    screen::enter(&mut stdout, &config.title, supports_keyboard_enhancement)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(config, tile, supports_keyboard_enhancement).run(&mut terminal);

    let restored = screen::restore(terminal.backend_mut(), supports_keyboard_enhancement);

    // The game loop error comes first; a restore failure only surfaces on its own
    if let Err(err) = &result {
        log::error!("Game loop failed: {err:#}");
    }
    result?;
    restored.wrap_err("failed to restore the terminal")
}

/// Routes `log` output to a file; the default level is `info`, `RUST_LOG` overrides it
fn init_logging() -> Result<()> {
    let file = File::create(LOG_PATH)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
