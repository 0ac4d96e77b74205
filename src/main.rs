use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::GameConfig;
use connect_four::game::{GameEngine, Lifecycle, Outcome};

/// Replay a sequence of column drops through the Connect Four engine.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play a scripted game of Connect Four")]
struct Cli {
    /// Columns to drop into, in turn order (0-based, comma separated)
    #[arg(long, value_delimiter = ',', required = true)]
    moves: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override player one's name
    #[arg(long)]
    player_one: Option<String>,

    /// Override player two's name
    #[arg(long)]
    player_two: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(name) = cli.player_one {
        config.player_one = name;
    }
    if let Some(name) = cli.player_two {
        config.player_two = name;
    }

    let mut engine = GameEngine::from_config(&config).context("invalid configuration")?;

    for line in replay(&mut engine, &cli.moves) {
        println!("{line}");
    }

    println!();
    print!("{}", engine.board());

    match engine.lifecycle() {
        Lifecycle::Finished(winner) => {
            println!("The winner is: {}", engine.player_name(winner));
        }
        Lifecycle::InProgress => {
            println!(
                "No winner yet, {} to move.",
                engine.player_name(engine.current_player())
            );
        }
        Lifecycle::MoveInFlight => bail!("game stopped with a drop still in flight"),
    }

    Ok(())
}

/// Drop each column in turn, describing every accepted or rejected move.
/// Moves after the game ends are still attempted and reported as rejected.
fn replay(engine: &mut GameEngine, moves: &[usize]) -> Vec<String> {
    let mut lines = Vec::new();
    for (turn, &column) in moves.iter().enumerate() {
        let mover = engine.player_name(engine.current_player()).to_string();
        match engine.drop_piece(column) {
            Ok(result) => {
                lines.push(format!(
                    "{:>3}. {} -> row {}, column {}",
                    turn + 1,
                    mover,
                    result.row,
                    result.column
                ));
                if result.outcome == Outcome::Win {
                    lines.push(format!("     {} wins.", engine.player_name(result.player)));
                } else if engine.is_board_full() {
                    lines.push("     Board is full, nobody wins.".to_string());
                }
            }
            Err(e) => lines.push(format!("{:>3}. {} -> rejected: {}", turn + 1, mover, e)),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four::game::Player;

    #[test]
    fn test_replay_reports_moves_after_win() {
        let mut engine = GameEngine::default();
        let lines = replay(&mut engine, &[3, 4, 3, 4, 3, 4, 3, 0, 1]);

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[6], "  7. Player One -> row 2, column 3");
        assert_eq!(lines[7], "     Player One wins.");
        assert_eq!(
            lines[8],
            "  8. Player One -> rejected: game is not accepting moves (state: Finished(One))"
        );
        assert!(lines[9].starts_with("  9. Player One -> rejected"));
        assert_eq!(engine.winner(), Some(Player::One));
    }

    #[test]
    fn test_replay_reports_rejected_column_and_continues() {
        let mut engine = GameEngine::default();
        let lines = replay(&mut engine, &[9, 2]);

        assert_eq!(
            lines,
            vec![
                "  1. Player One -> rejected: column 9 is out of range (board has 7 columns)",
                "  2. Player One -> row 5, column 2",
            ]
        );
    }
}
