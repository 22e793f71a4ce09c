//! Console Othello against the minimax engine.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use othello::config::MAX_DEPTH;
use othello::{AIEngine, AppConfig, Board, Game, GameOutcome, Pos, Side, Stone, BOARD_SIZE};

/// Play Othello in the terminal.
#[derive(Parser)]
#[command(name = "othello-cli", version, about = "Play Othello against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Override search depth (1-10)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Side you play: black or white
    #[arg(short, long, value_parser = parse_side)]
    side: Option<Side>,
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Side::Black),
        "white" | "w" => Ok(Side::White),
        other => Err(format!("unknown side '{}' (expected 'black' or 'white')", other)),
    }
}

fn render(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'a' + col as u8) as char);
    }
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{:>2} ", row + 1));
        for col in 0..BOARD_SIZE {
            let cell = match board.get(Pos::new(row as u8, col as u8)) {
                Stone::Black => 'X',
                Stone::White => 'O',
                Stone::Empty => '.',
            };
            out.push(' ');
            out.push(cell);
        }
        out.push('\n');
    }
    out
}

/// Disc counts shown under the board each turn
fn render_counts(game: &Game) -> String {
    let (black, white) = game.stone_counts();
    format!("Black (X): {}  White (O): {}", black, white)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(depth) = cli.depth {
        if depth == 0 || depth > MAX_DEPTH {
            bail!("--depth must be in 1..={}", MAX_DEPTH);
        }
        config.engine.depth = depth;
    }
    if let Some(side) = cli.side {
        config.human_side = side;
    }

    let human = config.human_side;
    let mut engine = AIEngine::from_config(&config.engine);
    let mut game = Game::new();

    println!(
        "You play {} ({}). Enter moves like d3, or 'exit' to quit.",
        human,
        if human == Side::Black { 'X' } else { 'O' }
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.is_over() {
            break;
        }

        let side = game.to_move();
        if game.must_pass() {
            println!("{} has no legal move and passes.", side);
            game.pass()?;
            continue;
        }

        if side == human {
            print!(
                "\n{}{}\n\n{} to move> ",
                render(game.board()),
                render_counts(&game),
                side
            );
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("exit") {
                println!("Bye.");
                return Ok(());
            }

            let pos: Pos = match input.parse() {
                Ok(pos) => pos,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            match game.play(pos) {
                Ok(report) => println!("You flipped {}.", report.flipped),
                Err(e) => println!("{}", e),
            }
        } else {
            let result = engine.get_move_with_stats(game.board(), side);
            let Some(pos) = result.best_move else {
                // The engine only reports no move when a pass is forced
                game.pass()?;
                continue;
            };
            let report = game.play(pos)?;
            println!(
                "{} plays {} flipping {} ({}ms).",
                side, pos, report.flipped, result.time_ms
            );
        }
    }

    let (black, white) = game.stone_counts();
    println!("\n{}", render(game.board()));
    match game.outcome() {
        GameOutcome::Winner(side) => println!("{} wins, {} to {}.", side, black.max(white), black.min(white)),
        GameOutcome::Draw => println!("Draw, {} to {}.", black, white),
    }
    Ok(())
}
