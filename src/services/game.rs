use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter};
use crate::models::color::Color;
use crate::models::config::GameConfig;
use crate::models::errors::{GameError, GameResult};
use crate::services::race::{self, Track};
use crate::ui::style::Painter;
use crate::ui::presenters::{RacePresenter, RoundPresenter, TitlePresenter};

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Color),
    Reset,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> GameResult<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Ok(Command::Quit),
        "reset" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "" => Err(GameError::InvalidInput("pick a color".into())),
        other => other.parse::<Color>().map(Command::Click),
    }
}

pub struct Game {
    engine: GameEngine,
    config: GameConfig,
    painter: Painter,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig, painter: Painter) -> Self {
        Game {
            engine: GameEngine::with_win_score(seed, config.win_score),
            config,
            painter,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run(
        &mut self,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<()> {
        TitlePresenter::show_title(&self.painter, output);
        TitlePresenter::show_rules(self.config.win_score, output);

        loop {
            self.show_board(output)?;

            let Some(line) = input.read_line("COLOR?")? else {
                output.writeln("");
                output.writeln("GOODBYE.");
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line.trim(), e);
                    output.writeln(&e.to_string());
                    TitlePresenter::show_commands(output);
                    continue;
                }
            };

            match command {
                Command::Click(color) => {
                    let outcome = self.engine.click(color);
                    RoundPresenter::show_result(outcome.correct, output);
                }
                Command::Reset => {
                    if self.engine.is_won() {
                        self.engine.reset();
                        output.writeln("SCORE RESET. GO AGAIN!");
                    } else {
                        output.writeln("RESET IS ONLY AVAILABLE AFTER A WIN");
                    }
                }
                Command::Help => TitlePresenter::show_rules(self.config.win_score, output),
                Command::Quit => {
                    output.writeln("GOODBYE.");
                    break;
                }
            }
        }
        Ok(())
    }

    fn show_board(&self, output: &mut dyn OutputWriter) -> GameResult<()> {
        let goal = self.config.win_score;
        let track = Track::new(self.config.track_width, self.config.track_fraction);
        let lanes = race::lay_out(
            &self.config.roster(),
            &self.config.points(self.engine.score()),
            goal,
            &track,
        )?;

        output.writeln("");
        RoundPresenter::show_round(&self.engine.round(), &self.painter, output);
        RoundPresenter::show_score(self.engine.score(), output);
        RacePresenter::show_race(
            &lanes,
            self.config.track_width,
            self.config.track_columns,
            &self.painter,
            output,
        );
        if self.engine.is_won() {
            RoundPresenter::show_win(output);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};

    fn plain_game(seed: u64) -> Game {
        Game::new(seed, GameConfig::default(), Painter::new(false))
    }

    fn label_input(game: &Game) -> &'static str {
        match game.engine().round().label {
            Color::Red => "r",
            Color::Green => "g",
            Color::Blue => "b",
            Color::Yellow => "y",
        }
    }

    fn wrong_input(game: &Game) -> &'static str {
        if game.engine().round().label == Color::Red {
            "blue"
        } else {
            "red"
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("Q\n").unwrap(), Command::Quit);
        assert_eq!(parse_command("reset").unwrap(), Command::Reset);
        assert_eq!(parse_command("?").unwrap(), Command::Help);
        assert_eq!(parse_command(" Yellow ").unwrap(), Command::Click(Color::Yellow));
        assert!(parse_command("").is_err());
        assert!(parse_command("teal").is_err());
    }

    #[test]
    fn quits_on_command() {
        let mut game = plain_game(42);
        let mut input = MockInput::new(vec!["q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        let text = output.text();
        assert!(text.contains("STROOPWAFEL"));
        assert!(text.contains("SCORE 0"));
        assert!(text.ends_with("GOODBYE.\n"));
    }

    #[test]
    fn end_of_input_quits() {
        let mut game = plain_game(42);
        let mut input = MockInput::new(vec![]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        assert_eq!(input.prompts, vec!["COLOR?"]);
        assert!(output.text().ends_with("GOODBYE.\n"));
    }

    #[test]
    fn correct_click_scores() {
        let mut game = plain_game(7);
        let pick = label_input(&game);
        let mut input = MockInput::new(vec![pick, "q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        assert_eq!(game.engine().score(), 1);
        assert!(output.text().contains("CORRECT!"));
        assert!(output.text().contains("SCORE 1"));
    }

    #[test]
    fn wrong_click_keeps_score_at_zero() {
        let mut game = plain_game(7);
        let pick = wrong_input(&game);
        let mut input = MockInput::new(vec![pick, "q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        assert_eq!(game.engine().score(), 0);
        assert!(output.text().contains("WRONG!"));
    }

    #[test]
    fn bad_input_is_reported_and_play_continues() {
        let mut game = plain_game(7);
        let mut input = MockInput::new(vec!["purple", "q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        assert!(output.text().contains("Invalid input: unknown color 'purple'"));
        assert_eq!(input.prompts.len(), 2);
    }

    #[test]
    fn reset_refused_while_playing() {
        let mut game = plain_game(7);
        game.engine.set_score(5);
        let mut input = MockInput::new(vec!["reset", "q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        assert_eq!(game.engine().score(), 5);
        assert!(output.text().contains("RESET IS ONLY AVAILABLE AFTER A WIN"));
    }

    #[test]
    fn winning_shows_banner_and_reset_restarts() {
        let mut game = plain_game(11);
        game.engine.set_score(12);
        let pick = label_input(&game);
        let mut input = MockInput::new(vec![pick, "reset", "q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        let text = output.text();
        assert!(text.contains("SCORE 13"));
        assert!(text.contains("*** YOU WIN! ***"));
        assert!(text.contains("SCORE RESET"));
        assert_eq!(game.engine().score(), 0);
        assert!(!game.engine().is_won());
    }

    #[test]
    fn race_shows_local_player_and_rival() {
        let mut game = plain_game(1);
        let mut input = MockInput::new(vec!["q"]);
        let mut output = MockOutput::new();

        game.run(&mut input, &mut output).unwrap();
        let text = output.text();
        assert!(text.contains("moop |M"));
        assert!(text.contains("boop |"));
    }
}
