//! Command-line interface for running the exercises.

mod task;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use exercises_math::Shape;
use std::path::PathBuf;
use task::{Task, TaskList};

#[derive(Debug, Parser)]
#[command(about = "Runs small exercises on numbers, text and files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the powers of a base that do not exceed a limit
    Powers {
        #[arg(short, long, allow_hyphen_values = true)]
        base: i64,
        #[arg(short, long, allow_hyphen_values = true)]
        limit: i64,
    },
    /// Show quaternion arithmetic, with coefficients given as `a,b,c,d`
    Quaternion {
        #[arg(long, value_parser = parse_coefficients, allow_hyphen_values = true)]
        lhs: [f64; 4],
        #[arg(long, value_parser = parse_coefficients, allow_hyphen_values = true)]
        rhs: Option<[f64; 4]>,
    },
    /// Count the lines in a file that are neither blank nor comments
    Lines { path: PathBuf },
    /// Join words into a phrase
    Say { words: Vec<String> },
    /// Upper-case the first word starting with a prefix
    First {
        #[arg(short, long)]
        prefix: String,
        words: Vec<String>,
    },
    /// Compute the volume and surface area of a sphere
    Sphere { radius: f64 },
    /// Compute the volume and surface area of a box
    Box {
        width: f64,
        length: f64,
        depth: f64,
    },
    /// Reverse words using a bounded stack
    Reverse { words: Vec<String> },
    /// Sort and deduplicate words using a binary search tree
    Sort { words: Vec<String> },
    /// Run all tasks listed in a RON file
    Run {
        /// Path to RON file with the tasks to run
        #[arg(short, long)]
        config_path: PathBuf,
    },
}

impl Command {
    fn into_tasks(self) -> Result<Vec<Task>> {
        let task = match self {
            Self::Powers { base, limit } => Task::Powers { base, limit },
            Self::Quaternion { lhs, rhs } => Task::Quaternion { lhs, rhs },
            Self::Lines { path } => Task::LineCount { path },
            Self::Say { words } => Task::Say { words },
            Self::First { prefix, words } => Task::FirstWithPrefix { prefix, words },
            Self::Sphere { radius } => Task::Measure {
                shape: Shape::Sphere { radius },
            },
            Self::Box {
                width,
                length,
                depth,
            } => Task::Measure {
                shape: Shape::Box {
                    width,
                    length,
                    depth,
                },
            },
            Self::Reverse { words } => Task::Reverse { words },
            Self::Sort { words } => Task::Sort { words },
            Self::Run { config_path } => {
                let list: TaskList = exercises_io::parse_ron_file(&config_path)?;
                exercises_log::info!(
                    "Loaded {} tasks from {}",
                    list.tasks.len(),
                    config_path.display()
                );
                return Ok(list.tasks);
            }
        };
        Ok(vec![task])
    }
}

fn parse_coefficients(text: &str) -> Result<[f64; 4]> {
    let coefficients = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;

    <[f64; 4]>::try_from(coefficients).map_err(|coefficients| {
        anyhow!(
            "Expected 4 comma-separated coefficients, got {}",
            coefficients.len()
        )
    })
}

fn run(tasks: &[Task]) -> Result<()> {
    for (index, task) in tasks.iter().enumerate() {
        exercises_log::debug!("Running task {}: {:?}", index, task);
        let report = exercises_log::with_timing_info_logging!(
            "Task {}", index; task.run()
        )?;
        println!("{report}");
    }
    Ok(())
}

pub fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let tasks = cli.command.into_tasks()?;
    run(&tasks)
}
