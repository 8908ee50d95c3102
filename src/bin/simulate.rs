//! Pig dice batch simulator CLI.
//!
//! Play a batch of games without the interactive screen and print the
//! aggregate report.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Default: 1000 games
//!   cargo run --bin simulate -- -n 100        # 100 games
//!   cargo run --bin simulate -- --seed 42     # Reproducible run

use pigdice::simulator::{run_simulation, summarize, Session, SimConfig};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════╗");
    println!("║          PIG DICE SIMULATOR           ║");
    println!("╚═══════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Games:  {}", config.num_games);
    if let Some(seed) = config.seed {
        println!("  Seed:   {}", seed);
    }
    println!();

    let session = match run_simulation(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    let summary = match summarize(&session) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Summary failed: {}", e);
            process::exit(1);
        }
    };

    println!("{}", summary.to_text());
    print_face_distribution(&session);

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = summary.to_json();
        let filename = format!(
            "pigdice_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

/// Per-face frequency bars from the session counters.
fn print_face_distribution(session: &Session) {
    println!("── FACE FREQUENCY ─────────────────────");
    for face in 1..=6u8 {
        let count = session.face_count(face);
        let pct = if session.total_rolls > 0 {
            (count as f64 / session.total_rolls as f64) * 100.0
        } else {
            0.0
        };
        let bar_len = (pct / 2.0) as usize;
        let bar: String = "█".repeat(bar_len);
        println!("  Face {}: {:>8}  {:>5.1}% {}", face, count, pct, bar);
    }
    println!();
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--games" => {
                if i + 1 < args.len() {
                    config.num_games = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Pig Dice Simulator {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --games <N>     Number of games to play (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --json              Save JSON report");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                   # Default run");
    println!("    cargo run --bin simulate -- -n 100        # 100 games");
    println!("    cargo run --bin simulate -- --seed 42     # Reproducible");
}
