use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use bizval::answers::{load_answers, AnswerMap};
use bizval::assessment::Assessor;
use bizval::catalog::Section;
use bizval::config::{self, Config};
use bizval::feedback::improvement_plan;
use bizval::form::{self, Progress, Wizard};
use bizval::output;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the questionnaire sections, questions and option scores
    Questions {
        /// Only show one section (1-based step number)
        #[arg(short, long)]
        section: Option<usize>,
    },
    /// Show the EBITDA tier table
    Tiers,
    /// List industry sectors, or one sector's sub-sectors and factors
    Industries {
        /// Sector name, exactly as listed
        sector: Option<String>,
    },
    /// Evaluate an answers file (JSON, or YAML by extension)
    Evaluate {
        /// Path to the answers file
        file: PathBuf,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fill in the questionnaire interactively (default if no subcommand)
    Assess,
    /// Discard saved questionnaire progress and start over
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "bizval")]
#[command(about = "Business valuation self-assessment CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/bizval/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Assess);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(e) = bizval::telemetry::init(config.log_level(), cli.verbose) {
        eprintln!("Logging setup failed: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let assessor = match config::load_assessor(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let use_colors = output::should_use_colors();

    let code = match command {
        Commands::Questions { section } => {
            let section = match section {
                Some(step) => match step.checked_sub(1).and_then(Section::from_step) {
                    Some(s) => Some(s),
                    None => {
                        eprintln!(
                            "Invalid section {}. Must be between 1 and {}.",
                            step,
                            Section::COUNT
                        );
                        std::process::exit(EXIT_INPUT);
                    }
                },
                None => None,
            };
            println!(
                "{}",
                output::format_questions(assessor.catalog(), section, use_colors)
            );
            EXIT_SUCCESS
        }
        Commands::Tiers => {
            println!("{}", output::format_tiers(assessor.tiers()));
            EXIT_SUCCESS
        }
        Commands::Industries { sector } => match sector {
            None => {
                println!("{}", output::format_sectors(assessor.industries()));
                EXIT_SUCCESS
            }
            Some(name) => match assessor.industries().sector(&name) {
                Some(sector) => {
                    println!("{}", output::format_sub_sectors(sector));
                    EXIT_SUCCESS
                }
                None => {
                    eprintln!("Unknown sector '{}'. Run `bizval industries` for the list.", name);
                    EXIT_INPUT
                }
            },
        },
        Commands::Evaluate { file, json } => {
            run_evaluate(&assessor, &config, &file, json, use_colors)
        }
        Commands::Assess => run_assess(&assessor, &config, use_colors),
        Commands::Reset => run_reset(&config),
    };

    std::process::exit(code);
}

/// Evaluate answers and print the report with feedback.
fn report(
    assessor: &Assessor,
    config: &Config,
    answers: &AnswerMap,
    json: bool,
    use_colors: bool,
) -> Result<(), bizval::InputError> {
    let result = assessor.evaluate(answers)?;
    let plan = improvement_plan(&result.score_vector, &result.stage, config.feedback_areas());

    if json {
        match output::format_json(&result, &plan) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize result: {}", e),
        }
    } else {
        println!(
            "{}",
            output::format_result(&result, assessor.catalog(), &plan, use_colors)
        );
    }
    Ok(())
}

fn run_evaluate(
    assessor: &Assessor,
    config: &Config,
    file: &Path,
    json: bool,
    use_colors: bool,
) -> i32 {
    let answers = match load_answers(file) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_IO;
        }
    };

    match report(assessor, config, &answers, json, use_colors) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_INPUT
        }
    }
}

fn run_assess(assessor: &Assessor, config: &Config, use_colors: bool) -> i32 {
    let path = match config::progress_path(config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_IO;
        }
    };

    let mut progress = match form::load_progress(&path) {
        Ok(Some(saved)) => {
            eprintln!(
                "Resuming saved progress from {} (run `bizval reset` to start over).",
                saved.saved_at.format("%Y-%m-%d %H:%M")
            );
            saved
        }
        Ok(None) => Progress::new(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return EXIT_IO;
        }
    };

    let mut wizard = Wizard::new(
        io::stdin().lock(),
        io::stdout(),
        assessor.catalog(),
        assessor.industries(),
    );
    if let Err(e) = wizard.run(&mut progress, |p| form::save_progress(&path, p)) {
        eprintln!("Error: {:#}", e);
        return EXIT_IO;
    }
    println!();

    match report(assessor, config, &progress.answers, false, use_colors) {
        Ok(()) => {
            if let Err(e) = form::clear_progress(&path) {
                eprintln!("Warning: {:#}", e);
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            // Resume at the earliest step holding a rejected field
            progress.step = e
                .fields()
                .iter()
                .filter_map(|key| assessor.catalog().question(key))
                .map(|q| q.section.step())
                .min()
                .unwrap_or(0);
            if let Err(e) = form::save_progress(&path, &progress) {
                eprintln!("Warning: {:#}", e);
            }
            eprintln!("Your answers were saved. Run `bizval assess` to fix them.");
            EXIT_INPUT
        }
    }
}

fn run_reset(config: &Config) -> i32 {
    let result = config::progress_path(config).and_then(|path| form::clear_progress(&path));
    match result {
        Ok(true) => {
            println!("Saved progress cleared.");
            EXIT_SUCCESS
        }
        Ok(false) => {
            println!("No saved progress.");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_IO
        }
    }
}
