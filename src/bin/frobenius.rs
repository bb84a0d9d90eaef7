use clap::Parser;
use frobenius_core::analysis::MAX_LISTED_GAPS;
use frobenius_core::display::format_report;
use frobenius_core::{Engine, SolverConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Computes the Frobenius number of a set of coprime positive integers.", long_about = None)]
struct Cli {
    /// The generating set, in any order
    #[clap(required = true, allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Print the result as JSON instead of a text report
    #[clap(long)]
    json: bool,

    /// Also list every non-representable positive integer
    #[clap(long)]
    gaps: bool,

    /// JSON file with solver settings
    #[clap(long)]
    config: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<SolverConfig, String> {
    let Some(path) = path else { return Ok(SolverConfig::default()) };
    let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    SolverConfig::from_json(&text).map_err(|e| format!("{}: {}", path.display(), e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = match load_config(cli.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            return ExitCode::from(2);
        }
    };

    let solution = match Engine::run(&cli.values, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        let gaps = if cli.gaps {
            match solution.table.gaps(MAX_LISTED_GAPS) {
                Ok(gaps) => Some(gaps),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            None
        };
        let rendered = serde_json::to_value(&solution).and_then(|mut value| {
            if let Some(gaps) = gaps {
                value["gaps"] = serde_json::json!(gaps);
            }
            serde_json::to_string_pretty(&value)
        });
        match rendered {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", format_report(&solution, cli.gaps));
    }
    ExitCode::SUCCESS
}
