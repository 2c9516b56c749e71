use std::process;
use std::str::FromStr;
use std::time::Instant;

use clap::{App, Arg, ArgGroup, ArgMatches, ErrorKind};
use log::debug;
use prettytable::{Cell, Row, Table};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use separator::Separatable;

use sliding_puzzle_solver::config::{self, HeuristicKind};
use sliding_puzzle_solver::shuffle::random_walk;
use sliding_puzzle_solver::solver::search;
use sliding_puzzle_solver::{Arena, LoadPuzzle, PuzzleState};

fn main() {
    env_logger::init();

    let matches = App::new("sliding-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Solves N×N sliding tile puzzles using greedy best-first search")
        .arg(
            Arg::with_name("heuristic")
                .short("e")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["manhattan", "misplaced", "linear-conflict", "nilsson"])
                .help("estimate used to order the frontier (default manhattan)"),
        )
        .arg(
            Arg::with_name("max-nodes")
                .short("n")
                .long("max-nodes")
                .takes_value(true)
                .help("give up after expanding this many nodes (default 100,000)"),
        )
        .arg(
            Arg::with_name("compare")
                .short("c")
                .long("compare")
                .help("run every heuristic on the same board and print a table"),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .takes_value(true)
                .help("size of the shuffled board (default 3)"),
        )
        .arg(
            Arg::with_name("shuffle")
                .long("shuffle")
                .takes_value(true)
                .help("number of random moves (default size * size * 10)"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("seed for shuffling"),
        )
        .arg(Arg::with_name("file").help("board to solve, shuffles the goal if omitted"))
        .group(
            ArgGroup::with_name("shuffling")
                .args(&["size", "shuffle", "seed"])
                .multiple(true)
                .conflicts_with("file"),
        )
        .get_matches();

    let kind = parse_arg(&matches, "heuristic").unwrap_or(HeuristicKind::Manhattan);
    let max_nodes = parse_arg(&matches, "max-nodes").unwrap_or(config::DEFAULT_MAX_NODES);

    let (start, source) = match matches.value_of("file") {
        Some(path) => {
            let start = path.load_puzzle().unwrap_or_else(|err| {
                println!("Can't load puzzle {}: {}", path, err);
                process::exit(1);
            });
            (start, path.to_string())
        }
        None => {
            let size = parse_arg(&matches, "size").unwrap_or(3);
            let goal = PuzzleState::goal(size).unwrap_or_else(|err| {
                println!("{}", err);
                process::exit(1);
            });
            let moves =
                parse_arg(&matches, "shuffle").unwrap_or_else(|| config::default_shuffle_moves(size));
            let start = match parse_arg::<u64>(&matches, "seed") {
                Some(seed) => random_walk(&goal, moves, &mut StdRng::seed_from_u64(seed)),
                None => random_walk(&goal, moves, &mut thread_rng()),
            };
            let source = format!("shuffled {}x{} board ({} moves)", size, size, moves);
            (start, source)
        }
    };
    debug!("Loaded {}", source);

    if !start.is_solvable() {
        println!("Unsolvable puzzle:\n{}", start);
        process::exit(1);
    }

    if matches.is_present("compare") {
        compare(&start, &source, max_nodes);
    } else {
        solve(&start, &source, kind, max_nodes);
    }
}

fn parse_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str) -> Option<T> {
    let value = matches.value_of(name)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => clap::Error::with_description(
            &format!("Invalid value for {}: {}", name, value),
            ErrorKind::InvalidValue,
        )
        .exit(),
    }
}

fn solve(start: &PuzzleState<'_>, source: &str, kind: HeuristicKind, max_nodes: usize) {
    let heuristic = kind.heuristic();
    println!("Solving {} using {}...", source, heuristic.name());
    println!("{}", start);

    let arena = Arena::new();
    let (solution, stats) = search(&arena, start.clone(), heuristic, max_nodes);
    println!("{}", stats);

    match solution {
        Some(goal) => {
            println!("Found solution:");
            for state in goal.path() {
                println!("{}", state);
            }
            let moves = goal.moves();
            println!("{}", moves);
            println!("Moves: {}", moves.len());
        }
        None if stats.nodes_expanded >= max_nodes => println!(
            "No solution found within {} nodes",
            (max_nodes as u64).separated_string()
        ),
        None => println!("No solution"),
    }
}

fn compare(start: &PuzzleState<'_>, source: &str, max_nodes: usize) {
    println!("Comparing heuristics on {}...", source);
    println!("{}", start);

    let mut table = Table::new();
    table.set_titles(Row::new(
        ["Heuristic", "Result", "Depth", "Expanded", "Max queue", "Time (ms)"]
            .iter()
            .map(|title| Cell::new(title))
            .collect(),
    ));

    for &kind in &HeuristicKind::ALL {
        let heuristic = kind.heuristic();
        let arena = Arena::new();

        let started = Instant::now();
        let (solution, stats) = search(&arena, start.clone(), heuristic, max_nodes);
        let millis = started.elapsed().as_secs_f64() * 1000.0;
        debug!("{}: {:.6} ms", heuristic.name(), millis);

        let (result, depth) = match solution {
            Some(goal) => ("solved", goal.depth().to_string()),
            None => ("not found", "-".to_string()),
        };
        table.add_row(Row::new(vec![
            Cell::new(heuristic.name()),
            Cell::new(result),
            Cell::new(&depth),
            Cell::new(&(stats.nodes_expanded as u64).separated_string()),
            Cell::new(&(stats.max_queue_size as u64).separated_string()),
            Cell::new(&format!("{:.3}", millis)),
        ]));
    }

    print!("{}", table);
}
