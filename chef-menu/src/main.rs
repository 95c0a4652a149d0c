use chef_menu::console::Console;
use chef_menu::{AppState, Config, init_logger_with_file};
use std::io;

fn main() -> anyhow::Result<()> {
    // 1. Environment (.env) and logging
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!(courses = ?config.courses, id_strategy = ?config.id_strategy, "Chef Menu starting");

    // 2. State (seed menu, session, filter)
    let state = AppState::initialize(config)?;

    // 3. Console
    let mut console = Console::new(state);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
