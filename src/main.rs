use anyhow::Result;
use clap::{Parser, Subcommand};
use nutri_match::{calculate, logging, CalculationRequest, CalculationResult, DatasetConfig};
use std::process::ExitCode;

/// Exit status for a rejected calculation request
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "nutri-match",
    version,
    about = "Daily energy requirement and closest-matching meals from a food dataset"
)]
struct Cli {
    #[command(flatten)]
    dataset: DatasetConfig,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute BMR, daily energy and the closest meals for one profile
    Calculate {
        /// Body weight in kilograms
        #[arg(long)]
        weight: String,
        /// Height in centimeters
        #[arg(long)]
        height: String,
        /// Age in years
        #[arg(long)]
        age: String,
        /// male or female
        #[arg(long)]
        gender: String,
        /// sedentary, lightly active, moderately active, very active, extra active
        #[arg(long)]
        activity_level: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load the dataset and report how many rows have a usable energy value
    Inspect,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    run(cli)
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Calculate {
            weight,
            height,
            age,
            gender,
            activity_level,
            json,
        } => {
            let request = CalculationRequest {
                weight: Some(weight),
                height: Some(height),
                age: Some(age),
                gender: Some(gender),
                activity_level: Some(activity_level),
            };
            run_calculate(&cli.dataset, request, json)
        }
        Command::Inspect => run_inspect(&cli.dataset),
    }
}

fn run_calculate(config: &DatasetConfig, request: CalculationRequest, json: bool) -> Result<ExitCode> {
    let table = config.load()?;

    let result = match calculate(request, &table) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ {}", e);
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result, table.energy_column());
    }

    Ok(ExitCode::SUCCESS)
}

fn print_summary(result: &CalculationResult, energy_column: &str) {
    println!("🔥 BMR:          {:.2}", result.bmr);
    println!("📈 Daily energy: {:.2}", result.calorie_needs);

    if result.meals.is_empty() {
        println!("\nNo meals at or below the daily energy requirement.");
        return;
    }

    println!("\n🍽️  Closest meals:");
    for (rank, meal) in result.meals.iter().enumerate() {
        let name = meal
            .fields
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("(unnamed)");
        println!(
            "  {}. {:<40} {}={:.1}  diff={:.1}",
            rank + 1,
            name,
            energy_column,
            meal.energy,
            meal.difference
        );
    }
}

fn run_inspect(config: &DatasetConfig) -> Result<ExitCode> {
    println!("📂 Loading {}...", config.dataset.display());
    let table = config.load()?;

    let parsed = table.parsed_count();
    println!("✓ Rows:                {}", table.len());
    println!("✓ With energy value:   {}", parsed);
    println!("✓ Without energy value: {}", table.len() - parsed);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_dataset() -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data/sample_foods.csv")
            .display()
            .to_string()
    }

    fn cli(args: &[&str]) -> Cli {
        let dataset = sample_dataset();
        let mut argv = vec!["nutri-match", "--dataset", dataset.as_str()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn calculate_args(gender: &str) -> Vec<&str> {
        vec![
            "calculate",
            "--weight",
            "70",
            "--height",
            "175",
            "--age",
            "30",
            "--gender",
            gender,
            "--activity-level",
            "sedentary",
        ]
    }

    #[test]
    fn test_calculate_succeeds() {
        let code = run(cli(&calculate_args("male"))).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_calculate_json_succeeds() {
        let mut args = calculate_args("female");
        args.push("--json");

        let code = run(cli(&args)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_invalid_input_exits_non_zero() {
        let code = run(cli(&calculate_args("other"))).unwrap();
        assert_eq!(code, ExitCode::from(EXIT_INVALID_INPUT));
    }

    #[test]
    fn test_inspect_succeeds() {
        let code = run(cli(&["inspect"])).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_missing_dataset_is_error() {
        let parsed = Cli::parse_from(["nutri-match", "--dataset", "/definitely/not/here.csv", "inspect"]);
        assert!(run(parsed).is_err());
    }
}
