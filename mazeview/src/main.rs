//! mazeview — loads a grid maze, reports whether it is passable, counts its
//! shortest paths exactly, and animates a walk of one (or all) of them in
//! the terminal.

mod mazegen;
mod report;

use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use maze_core::load_maze_file;
use maze_paths::{Solver, WalkConfig, WalkMode};
use maze_term::TermRenderer;

/// Lead-in pause between drawing the maze and starting the walk.
const LEAD_IN: Duration = Duration::from_secs(3);

struct Args {
    file: PathBuf,
    mode: WalkMode,
    budget: Duration,
    animate: bool,
}

fn usage() -> ! {
    eprintln!("usage: mazeview <file> [--all] [--budget-ms N] [--no-anim]");
    eprintln!("       mazeview gen <rows> <cols> <wall-pct> <file>");
    process::exit(2);
}

fn parse_args(args: &[String]) -> Args {
    let mut file = None;
    let mut mode = WalkMode::First;
    let mut budget = maze_paths::DEFAULT_BUDGET;
    let mut animate = true;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--all" => mode = WalkMode::All,
            "--no-anim" => animate = false,
            "--budget-ms" => match it.next().and_then(|v| v.parse().ok()) {
                Some(ms) => budget = Duration::from_millis(ms),
                None => usage(),
            },
            flag if flag.starts_with('-') => usage(),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            _ => usage(),
        }
    }

    match file {
        Some(file) => Args {
            file,
            mode,
            budget,
            animate,
        },
        None => usage(),
    }
}

fn run_gen(args: &[String]) -> Result<(), Box<dyn Error>> {
    let [rows, cols, pct, file] = args else {
        usage();
    };
    let (Ok(rows), Ok(cols), Ok(pct)) = (rows.parse(), cols.parse(), pct.parse::<f64>()) else {
        usage();
    };
    if !(0.0..=1.0).contains(&pct) {
        usage();
    }
    mazegen::generate(rows, cols, pct, file, &mut rand::rng())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("gen") {
        return run_gen(&args[1..]);
    }
    let args = parse_args(&args);

    let maze = load_maze_file(&args.file)?;
    let mut solver = Solver::new(maze.bounds());
    solver.distance_map(&maze, &[maze.end()]);

    let Some(path_len) = solver.dist_at(maze.start()) else {
        println!("{}", report::not_passable());
        return Ok(());
    };

    let count = solver.count_paths(&maze, maze.start(), maze.end());
    let name = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!(
        "{}",
        report::summary(&count, path_len, maze.start(), maze.end(), &name)
    );

    if args.animate {
        let config = WalkConfig {
            mode: args.mode,
            budget: args.budget,
        };
        let mut renderer = TermRenderer::new();
        renderer.init()?;
        renderer.draw_maze(&maze)?;
        renderer.pause(LEAD_IN);
        let walker = solver.walker(&maze, maze.start(), config);
        let len = walker.path_len();
        renderer.play(walker, len)?;
        renderer.wait_key()?;
        renderer.close();
    }

    Ok(())
}
