use std::io::{self, IsTerminal};
use std::process::ExitCode;

use stroopwafel::cli::args;
use stroopwafel::io::TerminalIO;
use stroopwafel::services::game::Game;
use stroopwafel::ui::style::Painter;

fn main() -> ExitCode {
    let args = args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level().to_string()),
    )
    .init();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {}", seed);

    let painter = Painter::new(args.color_enabled(io::stdout().is_terminal()));
    let mut game = Game::new(seed, config, painter);
    let mut terminal = TerminalIO;
    let mut output = TerminalIO;
    if let Err(e) = game.run(&mut terminal, &mut output) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
