//! draughts-rust: an international draughts rules engine.
//!
//! ## Usage
//!
//! - `draughts-rust` - Play at the terminal
//! - `draughts-rust sample` - Replay a recorded game, one board per move
//! - `draughts-rust demo` - Random self-play

use std::cmp::max;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

use draughts_rust::constants::MAX_PLAYOUT_PLIES;
use draughts_rust::game::{CapturePolicy, Game, GameConfig};
use draughts_rust::playout::random_playout;
use draughts_rust::repl::Repl;
use draughts_rust::sample::replay_sample_with;

/// draughts-rust: international draughts on a 10x10 board
#[derive(Parser, Debug)]
#[command(name = "draughts-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Debug, Args, Copy)]
struct GlobalOpts {
    /// Enable debug mode. Raises the log level to at least `Debug`.
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Set the log level for the application.
    #[arg(global = true, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Accept captures shorter than the maximum (and steps while a capture is
    /// available) with a warning instead of rejecting them.
    #[arg(global = true, long, default_value_t = false)]
    permissive: bool,

    /// Let either side move at any time.
    #[arg(global = true, long, default_value_t = false)]
    free_turns: bool,
}

impl GlobalOpts {
    fn game_config(&self) -> GameConfig {
        let policy = if self.permissive {
            CapturePolicy::Warn
        } else {
            CapturePolicy::Enforce
        };
        GameConfig::default()
            .with_capture_policy(policy)
            .with_turn_order(!self.free_turns)
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Play a game at the terminal
    Play,
    /// Replay the Milsjin - Salomé game (needs --permissive to finish)
    Sample,
    /// Play random legal moves for both sides
    Demo {
        /// Seed for the random generator
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves
        #[arg(long, default_value_t = MAX_PLAYOUT_PLIES)]
        plies: usize,
    },
}

fn init_logging(opts: &GlobalOpts) -> Result<()> {
    let log_level = if opts.debug {
        max(LevelFilter::Debug, opts.log_level)
    } else {
        opts.log_level
    };

    let mut config_builder = simplelog::ConfigBuilder::new();
    if opts.debug {
        config_builder.set_time_level(LevelFilter::Error);
        config_builder.set_target_level(LevelFilter::Error);
        config_builder.set_location_level(LevelFilter::Error);
    } else {
        config_builder.set_time_level(LevelFilter::Off);
        config_builder.set_thread_level(LevelFilter::Off);
        config_builder.set_target_level(LevelFilter::Off);
        config_builder.set_location_level(LevelFilter::Off);
    }

    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global_opts)?;
    log::debug!("Parsed arguments: {cli:?}");

    let config = cli.global_opts.game_config();
    match cli.command {
        Some(Commands::Sample) => run_sample(config),
        Some(Commands::Demo { seed, plies }) => run_demo(config, seed, plies),
        Some(Commands::Play) | None => {
            Repl::new(config).run().context("prompt failed")?;
            Ok(())
        }
    }
}

fn run_sample(config: GameConfig) -> Result<()> {
    println!("Milsjin, W. - Salomé, G. (Confederation Cup 2000)\n");
    let game = replay_sample_with(config, |game, turn, command| {
        println!("{turn:02}. {command}");
        if !game.is_over() {
            println!("{}", game.board());
        }
    })
    .context("the sample game was rejected (try --permissive)")?;
    println!("Replayed {} moves.", game.ply());
    Ok(())
}

fn run_demo(config: GameConfig, seed: Option<u64>, plies: usize) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut game = Game::with_config(config.with_turn_order(true));
    let result = random_playout(&mut game, plies, &mut rng).context("random playout failed")?;

    println!("{}", game.board());
    match result.winner {
        Some(winner) => println!("Player {winner} wins after {} moves.", result.plies),
        None => println!("No winner after {} moves.", result.plies),
    }
    Ok(())
}
