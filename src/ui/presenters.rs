use crate::io::OutputWriter;
use crate::models::color::Color;
use crate::models::constants::{TITLE, TROPHY};
use crate::models::round::Round;
use crate::services::race::LanePosition;
use crate::ui::style::Painter;

/// Ink for each title letter, mismatched on purpose.
const TITLE_INKS: [Color; 11] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::Yellow,
    Color::Yellow,
];

pub struct TitlePresenter;

impl TitlePresenter {
    pub fn show_title(painter: &Painter, output: &mut dyn OutputWriter) {
        let title: String = TITLE
            .chars()
            .zip(TITLE_INKS.iter().cycle())
            .map(|(c, ink)| painter.ink(*ink, &c.to_string()))
            .collect();
        output.writeln(&format!("*** {} ***", title));
        output.writeln("");
    }

    pub fn show_rules(win_score: u32, output: &mut dyn OutputWriter) {
        output.writeln("A COLOR WORD IS SHOWN PRINTED IN SOME COLOR.");
        output.writeln("PICK THE SQUARE THAT MATCHES WHAT THE WORD SAYS,");
        output.writeln("NOT THE INK IT IS PRINTED IN.");
        output.writeln("");
        output.writeln("A RIGHT PICK SCORES 1 POINT AND DEALS A NEW WORD.");
        output.writeln("A WRONG PICK COSTS 2 POINTS.");
        output.writeln(&format!(
            "FIRST TO {} POINTS REACHES THE TROPHY AND WINS!",
            win_score
        ));
        output.writeln("");
        Self::show_commands(output);
    }

    pub fn show_commands(output: &mut dyn OutputWriter) {
        output.writeln("   R = RED     G = GREEN");
        output.writeln("   B = BLUE    Y = YELLOW");
        output.writeln("   RESET = START OVER (AFTER A WIN)");
        output.writeln("   HELP  = SHOW THE RULES");
        output.writeln("   Q     = QUIT");
    }
}

pub struct RoundPresenter;

impl RoundPresenter {
    /// The word names `label` and is painted in `render_color`. Without
    /// color the ink is spelled out instead.
    pub fn show_round(round: &Round, painter: &Painter, output: &mut dyn OutputWriter) {
        let word = painter.ink(round.render_color, round.label.name());
        if painter.is_enabled() {
            output.writeln(&format!("      {}", word));
        } else {
            output.writeln(&format!("      {} (IN {})", word, round.render_color.name()));
        }
    }

    pub fn show_score(score: u32, output: &mut dyn OutputWriter) {
        output.writeln(&format!("SCORE {}", score));
    }

    pub fn show_result(correct: bool, output: &mut dyn OutputWriter) {
        if correct {
            output.writeln("CORRECT!");
        } else {
            output.writeln("WRONG!");
        }
    }

    pub fn show_win(output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("*** YOU WIN! ***");
        output.writeln("TYPE RESET TO PLAY AGAIN");
        output.writeln("");
    }
}

pub struct RacePresenter;

impl RacePresenter {
    /// Draw one line per lane. `track_width` is in the same units as the
    /// lane offsets; `columns` is the drawn track length.
    pub fn show_race(
        lanes: &[LanePosition],
        track_width: f64,
        columns: usize,
        painter: &Painter,
        output: &mut dyn OutputWriter,
    ) {
        let name_width = lanes.iter().map(|l| l.handle.chars().count()).max().unwrap_or(0);
        for lane in lanes {
            let col = Self::column_for(lane.offset, track_width, columns);
            let glyph: String = lane
                .handle
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_else(|| "?".to_string());

            let mut line = String::new();
            line.push_str(&".".repeat(col));
            line.push_str(&painter.avatar(lane.color, &glyph));
            line.push_str(&".".repeat(columns.saturating_sub(col + 1)));

            output.writeln(&format!(
                "{:<width$} |{}| {}",
                lane.handle,
                line,
                TROPHY,
                width = name_width
            ));
        }
    }

    /// Track column holding the avatar. Offsets past the track are drawn
    /// in the last column.
    pub fn column_for(offset: i64, track_width: f64, columns: usize) -> usize {
        if columns == 0 || track_width <= 0.0 || offset <= 0 {
            return 0;
        }
        let col = (offset as f64 / track_width * columns as f64).round() as usize;
        col.min(columns - 1)
    }
}
