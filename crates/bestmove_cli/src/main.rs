//! Best-move CLI
//!
//! Feed it a FEN (or `startpos`), get the engine's move back.

use std::env;
use std::fs;
use std::process::ExitCode;

use board_core::{Position, Side};
use minimax_engine::{analyze, LeafEval, SearchConfig};
use serde::Serialize;

fn print_usage() {
    println!("Best-move search driver");
    println!();
    println!("Usage:");
    println!("  bestmove <fen|startpos> [options]");
    println!();
    println!("Options:");
    println!("  --depth N        search depth in plies (default 3)");
    println!("  --side w|b       side to move for (default: the FEN's side to move)");
    println!("  --serial         disable the parallel root dispatcher");
    println!("  --quiescence     resolve capture sequences below the horizon");
    println!("  --config FILE    load a TOML search configuration");
    println!("  --json FILE      also write the result as JSON");
    println!();
    println!("Examples:");
    println!("  bestmove startpos --depth 4");
    println!("  bestmove \"k7/8/8/3q4/4P3/8/8/7K w - - 0 1\" --quiescence");
}

/// What `--json` writes to disk.
#[derive(Serialize)]
struct ReportFile {
    position: String,
    side: String,
    depth: u8,
    nodes: u64,
    score: i32,
    best_move: Option<String>,
}

fn parse_side(text: &str) -> Result<Side, String> {
    match text {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        other => Err(format!("unknown side: {}", other)),
    }
}

fn load_config(path: &str) -> Result<SearchConfig, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?;
    toml::from_str(&contents).map_err(|e| format!("failed to parse {}: {}", path, e))
}

fn run(args: &[String]) -> Result<(), String> {
    let position_arg = &args[0];
    let mut config = SearchConfig::default();
    let mut side_override = None;
    let mut json_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" | "-d" => {
                let value = args.get(i + 1).ok_or("--depth needs a value")?;
                config.depth = value
                    .parse()
                    .map_err(|_| format!("invalid depth: {}", value))?;
                i += 1;
            }
            "--side" | "-s" => {
                let value = args.get(i + 1).ok_or("--side needs a value")?;
                side_override = Some(parse_side(value)?);
                i += 1;
            }
            "--config" | "-c" => {
                let value = args.get(i + 1).ok_or("--config needs a value")?;
                config = load_config(value)?;
                i += 1;
            }
            "--json" => {
                let value = args.get(i + 1).ok_or("--json needs a value")?;
                json_path = Some(value.clone());
                i += 1;
            }
            "--serial" => config.parallel = false,
            "--quiescence" | "-q" => config.leaf = LeafEval::Quiescence,
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    let pos = if position_arg == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(position_arg)
    };
    let side = side_override.unwrap_or(pos.side_to_move);

    let report = analyze(&pos, side, &config);

    match report.best_move {
        Some(mv) => println!(
            "bestmove {} score {} depth {} nodes {}",
            mv, report.score, report.depth, report.nodes
        ),
        None => println!("bestmove (none) - no legal moves for this side"),
    }

    if let Some(path) = json_path {
        let file = ReportFile {
            position: position_arg.clone(),
            side: match side {
                Side::White => "white".to_string(),
                Side::Black => "black".to_string(),
            },
            depth: report.depth,
            nodes: report.nodes,
            score: report.score,
            best_move: report.best_move.map(|mv| mv.to_string()),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| format!("failed to serialize report: {}", e))?;
        fs::write(&path, json).map_err(|e| format!("failed to write {}: {}", path, e))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args[0] == "help" || args[0] == "--help" || args[0] == "-h" {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
