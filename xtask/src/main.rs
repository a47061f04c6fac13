use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the carpool grouping workspace",
    long_about = "A unified CLI for running the case study, weight sweeps, benchmarks,\n\
                  and CI checks in the carpool grouping workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the case study (static vs. greedy on every scenario)
    Run {
        /// Log level forwarded to the example through RUST_LOG
        #[arg(long, env = "RUST_LOG", default_value = "info")]
        log: String,
    },
    /// Run the multi-seed weight sweep and export CSV/JSON
    Sweep,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the examples
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str], envs: &[(&str, &str)]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .envs(envs.iter().copied())
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    run_cargo_with_env(args, &[]);
}

fn run_cargo_with_env(args: &[&str], envs: &[(&str, &str)]) {
    let status = cargo(args, envs);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

const CASE_STUDY: &[&str] = &[
    "run",
    "-p",
    "carpool_experiments",
    "--example",
    "case_study",
    "--release",
];

const ALPHA_SWEEP: &[&str] = &[
    "run",
    "-p",
    "carpool_experiments",
    "--example",
    "alpha_sweep",
    "--release",
];

const BENCH: &[&str] = &["bench", "--package", "carpool_core", "--bench", "performance"];

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test carpool_core");
    run_cargo(&["test", "-p", "carpool_core"]);

    step("Test carpool_experiments");
    run_cargo(&["test", "-p", "carpool_experiments"]);
}

fn ci_examples() {
    step("Run case_study");
    run_cargo(CASE_STUDY);

    step("Run alpha_sweep");
    run_cargo(ALPHA_SWEEP);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(BENCH);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { log } => {
            run_cargo_with_env(CASE_STUDY, &[("RUST_LOG", &log)]);
        }
        Commands::Sweep => {
            run_cargo(ALPHA_SWEEP);
        }
        Commands::Bench => {
            run_cargo(BENCH);
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_commands() {
        for args in [
            vec!["xtask", "run"],
            vec!["xtask", "run", "--log", "debug"],
            vec!["xtask", "sweep"],
            vec!["xtask", "bench"],
            vec!["xtask", "ci", "all"],
        ] {
            assert!(Cli::try_parse_from(&args).is_ok(), "{args:?}");
        }
    }

    #[test]
    fn bench_compare_is_not_a_command() {
        assert!(Cli::try_parse_from(["xtask", "bench-compare"]).is_err());
    }
}
