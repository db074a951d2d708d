use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use tui_2048::engine::{Grid, Move, State};
use tui_2048::rng::Xorshift;
use tui_2048::tui;

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        (2..=Grid::MAX_SIZE).contains(&args.size),
        "grid size must be between 2 and {}",
        Grid::MAX_SIZE
    );
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut grid = Grid::new(args.size, seed);

    match args.cmd {
        Some(Cmd::Bench {
            seconds,
            dir_seed,
            out,
            quiet,
        }) => run_bench(&mut grid, seconds, dir_seed, out, quiet),
        None => {
            tui::run(&mut grid)?;
            Ok(())
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tui-2048", about = "Terminal 2048 on a deterministic grid engine")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Cmd>,

    /// Side length of the square grid
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Seed for the tile spawner (random if omitted)
    #[arg(long)]
    seed: Option<u32>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Drive the grid with random moves for a fixed wall-clock budget and report throughput
    Bench {
        /// Seconds to run
        #[arg(long, default_value_t = 1)]
        seconds: u64,

        /// Seed for the direction stream
        #[arg(long, default_value_t = 1)]
        dir_seed: u32,

        /// Write the raw move count to this path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Suppress the status line
        #[arg(long)]
        quiet: bool,
    },
}

fn run_bench(
    grid: &mut Grid,
    seconds: u64,
    dir_seed: u32,
    out: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let pb = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {elapsed_precise} | Moves: {msg}")?
                .tick_chars("⠁⠃⠇⠧⠷⠿⠻⠟⠯⠷⠧⠇⠃"),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    } else {
        None
    };

    let mut dirs = Xorshift::new(dir_seed);
    let budget = Duration::from_secs(seconds);
    let start = Instant::now();
    let mut moves: u64 = 0;
    let mut games: u64 = 0;
    while start.elapsed() < budget {
        let dir = match dirs.next() % 4 {
            0 => Move::Up,
            1 => Move::Down,
            2 => Move::Left,
            _ => Move::Right,
        };
        grid.make_move(dir);
        moves += 1;
        if grid.state() == State::Ended {
            grid.reset();
            games += 1;
        }
        if moves % 100_000 == 0 {
            if let Some(pb) = &pb {
                pb.set_message(format!("{moves}"));
            }
        }
    }
    let elapsed = start.elapsed().as_secs_f64().max(1e-6);
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    println!(
        "Moves: {} | moves/sec: {:.1} | games finished: {} | score: {}",
        moves,
        moves as f64 / elapsed,
        games,
        grid.score()
    );
    println!("{grid}");
    if let Some(path) = out {
        fs::write(path, format!("{moves}\n"))?;
    }
    Ok(())
}
