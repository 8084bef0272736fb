//! AI Simulator CLI - fast in-memory Cirulla simulation.
//!
//! Runs whole sessions without any transport or persistence overhead,
//! for comparing AI strategies and difficulty tiers across many games.

mod simulator;

use std::time::Instant;

use cirulla_engine::{create_ai, AiPlayer};
use clap::{Parser, ValueEnum};
use rand::Rng;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Cirulla simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of players at the table (2-4)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// AI type for all seats (shortcut to set every seat the same)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Difficulty tier for heuristic seats
    #[arg(long, default_value = "normal")]
    difficulty: DifficultyArg,

    /// Game seed (for deterministic sessions); game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Normal,
    Hard,
}

impl DifficultyArg {
    fn name(self) -> &'static str {
        match self {
            DifficultyArg::Normal => "normal",
            DifficultyArg::Hard => "hard",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !(2..=4).contains(&args.players) {
        return Err(format!("players must be 2-4, got {}", args.players).into());
    }

    let seat_types: Vec<AiType> = match args.seats {
        Some(all) => vec![all; args.players],
        None => [args.seat0, args.seat1, args.seat2, args.seat3][..args.players].to_vec(),
    };
    info!(?seat_types, players = args.players, "starting simulation");

    let ais: Vec<Box<dyn AiPlayer>> = seat_types
        .iter()
        .map(|t| create_ai_player(t.name(), args.difficulty.name()))
        .collect::<Result<_, _>>()?;

    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 0..args.games {
        let sim = Simulator::new(args.players, base_seed.wrapping_add(u64::from(game_num)));
        match sim.simulate_game(&ais) {
            Ok(result) => {
                if args.verbose {
                    info!(
                        game = game_num,
                        scores = ?result.final_scores,
                        smazzate = result.smazzate_played,
                        "game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("game {game_num} failed: {e}");
            }
        }
    }

    print_summary(&results, errors, start.elapsed(), args.games, args.players);
    Ok(())
}

fn create_ai_player(
    ai_type: &str,
    difficulty: &str,
) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    // Each random seat gets its own seed for varied behavior.
    let config = serde_json::json!({
        "seed": rand::rng().random::<u64>(),
        "difficulty": difficulty,
    });
    create_ai(ai_type, Some(&config)).ok_or_else(|| format!("Unknown AI type: {ai_type}").into())
}

fn print_summary(
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
    players: usize,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );
    let avg_smazzate =
        results.iter().map(|r| r.smazzate_played as f64).sum::<f64>() / results.len() as f64;
    println!("Average smazzate per game: {avg_smazzate:.1}");

    let mut wins = vec![0u32; players];
    let mut total_scores = vec![0i64; players];
    let mut max_scores = vec![i32::MIN; players];
    let mut min_scores = vec![i32::MAX; players];

    for result in results {
        wins[result.winner as usize] += 1;
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..players {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {}: avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
