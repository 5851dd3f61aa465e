//! gridstar CLI: print the shortest path across an occupancy grid.

use clap::Parser;
use gridstar::{Board, Coordinate, PathError, PathFinder};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gridstar")]
#[command(about = "A* shortest path on a 4-connected occupancy grid")]
#[command(version)]
struct Cli {
    /// Grid file, one row per line (`0 1 0` or `.#.`). Reads stdin when omitted
    grid: Option<PathBuf>,

    /// Start cell as ROW,COL
    #[arg(short, long, value_parser = parse_coordinate)]
    start: Coordinate,

    /// Goal cell as ROW,COL
    #[arg(short, long, value_parser = parse_coordinate)]
    goal: Coordinate,

    /// Only print cost and expansion count
    #[arg(short, long)]
    quiet: bool,
}

fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (row, column) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("bad column {column:?}: {e}"))?;
    Ok((row, column))
}

fn load_board(grid: Option<&PathBuf>) -> Result<Board, PathError> {
    let text = match grid {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    text.parse()
}

fn run(cli: &Cli) -> Result<bool, PathError> {
    let board = load_board(cli.grid.as_ref())?;
    let (rows, columns) = board.get_dimensions();
    log::info!("loaded {}x{} grid", rows, columns);

    println!("Finding path from {:?} to {:?}...", cli.start, cli.goal);
    match PathFinder::new(&board).find_shortest_path(cli.start, cli.goal)? {
        Some(path) => {
            println!("Path found:");
            if !cli.quiet {
                println!("{}", board.render_path(path.cells()));
            }
            println!("cost: {}  expanded: {}", path.cost(), path.expanded());
            Ok(true)
        }
        None => {
            println!("No path found!");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
