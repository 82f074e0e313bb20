//! abundance_sweep: exact stationary claim abundances over an (R, B) grid.
//!
//! Builds the full 9,801×9,801 transition matrix and solves the chain
//! exactly for every parameter pair, writing one `Results_<B>_<R>.txt`
//! artifact per pair. Pairs run in parallel and fail independently.

use std::path::Path;
use std::time::Instant;

use traveler::env_config::init_rayon_threads;
use traveler::storage::format_param;
use traveler::sweep::run_sweep;
use traveler::types::{ClaimSpace, Params};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut rewards_csv = "2".to_string();
    let mut selections_csv = "1.0".to_string();
    let mut output_dir = "Data".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rewards" => {
                i += 1;
                rewards_csv = args[i].clone();
            }
            "--selections" => {
                i += 1;
                selections_csv = args[i].clone();
            }
            "--output" => {
                i += 1;
                output_dir = args[i].clone();
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let rewards = parse_csv(&rewards_csv, "--rewards");
    let selections = parse_csv(&selections_csv, "--selections");

    let num_threads = init_rayon_threads();

    let space = ClaimSpace::standard();
    let mut pairs = Vec::with_capacity(rewards.len() * selections.len());
    for &selection in &selections {
        for &reward in &rewards {
            pairs.push(Params::new(reward, selection));
        }
    }

    println!("=== abundance_sweep ===");
    println!(
        "{} claims, {} states, {} parameter pairs, {} threads, output: {}",
        space.num_claims(),
        space.num_states(),
        pairs.len(),
        num_threads,
        output_dir
    );

    let t_total = Instant::now();
    let outcomes = run_sweep(&space, &pairs, Path::new(&output_dir));

    let mut failures = 0usize;
    for outcome in &outcomes {
        let label = format!(
            "B={} R={}",
            format_param(outcome.params.selection),
            format_param(outcome.params.reward)
        );
        match &outcome.result {
            Ok(path) => println!(
                "  {} → {} in {:.1}s",
                label,
                path.display(),
                outcome.seconds
            ),
            Err(e) => {
                failures += 1;
                eprintln!("  {} FAILED: {}", label, e);
            }
        }
    }

    println!(
        "\nDone. {}/{} pairs in {:.1}s.",
        outcomes.len() - failures,
        outcomes.len(),
        t_total.elapsed().as_secs_f64()
    );
    if failures > 0 {
        std::process::exit(1);
    }
}

fn parse_csv(csv: &str, flag: &str) -> Vec<f64> {
    csv.split(',')
        .map(|s| {
            s.trim().parse::<f64>().unwrap_or_else(|_| {
                eprintln!("Invalid value in {}: {:?}", flag, s.trim());
                std::process::exit(1);
            })
        })
        .collect()
}

fn print_usage() {
    println!(
        "abundance_sweep: exact stationary claim abundances for the Traveler's Dilemma.

USAGE:
    abundance_sweep [OPTIONS]

OPTIONS:
    --rewards <LIST>      Comma-separated reward values R [default: 2]
    --selections <LIST>   Comma-separated selection intensities B [default: 1.0]
    --output <DIR>        Output directory [default: Data]
    -h, --help            Print this help

Each (R, B) pair in the cartesian product gets one Results_<B>_<R>.txt
artifact with 99 newline-separated abundances, one per claim 2..=100.

EXAMPLES:
    abundance_sweep --rewards 2 --selections 1.0
    abundance_sweep --rewards 5,15,25,30,35 --selections 1.0 --output Data"
    );
}
