use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minimax_connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use minimax_connect_four::config::{AppConfig, Opponent};
use minimax_connect_four::game::{GameState, Player};
use minimax_connect_four::session::GameSession;

/// Play Connect Four against a minimax engine in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Let the engine play Red and move first
    #[arg(long)]
    engine_first: bool,

    /// Watch the engine play a full game instead of playing yourself
    #[arg(long)]
    self_play: bool,

    /// Self-play opponent: minimax or random
    #[arg(long)]
    opponent: Option<String>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if cli.engine_first {
        app_config.game.engine_first = true;
    }
    if let Some(opponent) = &cli.opponent {
        app_config.game.opponent = match opponent.as_str() {
            "minimax" => Opponent::Minimax,
            "random" => Opponent::Random,
            other => anyhow::bail!("unknown opponent '{}' (expected 'minimax' or 'random')", other),
        };
    }
    app_config.validate().context("validating configuration")?;

    if cli.self_play {
        run_self_play(&app_config, cli.seed)
    } else {
        run_interactive(&app_config)
    }
}

fn run_self_play(config: &AppConfig, seed: Option<u64>) -> Result<()> {
    let mut red = MinimaxAgent::new(config.search.depth);
    let mut yellow: Box<dyn Agent> = match config.game.opponent {
        Opponent::Minimax => Box::new(MinimaxAgent::new(config.search.depth)),
        Opponent::Random => Box::new(match seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        }),
    };

    println!(
        "Self-play: {} (Red) vs {} (Yellow), depth {}",
        red.name(),
        yellow.name(),
        config.search.depth
    );
    println!("-------------------------------------------");

    let mut state = GameState::initial();
    while !state.is_game_over() {
        let player = state.current_player();
        let column = match player {
            Player::Red => red.select_move(&state),
            Player::Yellow => yellow.select_move(&state),
        };
        let Some(column) = column else { break };
        state = state
            .apply_move(column)
            .with_context(|| format!("{} chose column {}", player.name(), column))?;

        match (player, red.last_report()) {
            (Player::Red, Some(report)) => println!(
                "Ply {:>2}: {:<6} -> {} | value {} | nodes {} | cache {}",
                state.ply_count(),
                player.name(),
                column,
                report.result.value,
                report.stats.nodes,
                red.cache().len()
            ),
            _ => println!("Ply {:>2}: {:<6} -> {}", state.ply_count(), player.name(), column),
        }
    }

    println!("-------------------------------------------");
    println!("{}", state.occupancy());
    print_result(&state);
    println!("Moves: {}", state);
    Ok(())
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let mut session = GameSession::new(&config.search);
    let engine_player = if config.game.engine_first {
        Player::Red
    } else {
        Player::Yellow
    };

    println!(
        "Connect Four: you are {}, the engine is {}.",
        engine_player.other().name(),
        engine_player.name()
    );
    println!("Enter a column 0-6, 'h' for a hint, 'r' to restart, 'q' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !session.is_game_over() && session.state().current_player() == engine_player {
            if let Some(column) = session.play_engine_move()? {
                println!("Engine plays {column}");
            }
        }

        println!("{}", session.state().occupancy());
        if session.is_game_over() {
            print_result(session.state());
            println!("'r' to restart, 'q' to quit.");
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("reading input")?;

        match line.trim() {
            "q" => break,
            "r" => {
                session.restart();
                println!("New game.");
            }
            "h" => match session.suggest_move() {
                Some(column) => println!("Hint: column {column}"),
                None => println!("No move available."),
            },
            input => match input.parse::<usize>() {
                Ok(column) => {
                    if let Err(err) = session.apply_move(column) {
                        eprintln!("Illegal move: {err}");
                    }
                }
                Err(_) => eprintln!("Unrecognized input '{input}'"),
            },
        }
    }

    Ok(())
}

fn print_result(state: &GameState) {
    match (state.winner(), state.winning_line()) {
        (Some(player), Some(line)) => println!(
            "{} wins ({} from row {}, column {})",
            player.name(),
            line.orientation,
            line.anchor.row,
            line.anchor.col
        ),
        _ => println!("Draw."),
    }
}
