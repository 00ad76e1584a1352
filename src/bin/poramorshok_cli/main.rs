// ABOUTME: Poramorshok CLI - terminal front end for the health tracker, symptom chat and planners
// ABOUTME: Drives the same controllers as the HTTP server against the local key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health
//!
//! Usage:
//! ```bash
//! # Record a measurement (height in cm or feet/inches)
//! poramorshok-cli track add --age 25 --height-cm 175 --weight 70
//! poramorshok-cli track add --feet 5 --inches 9 --weight 70
//!
//! # Show history, summary and cached advice
//! poramorshok-cli track show
//!
//! # Describe symptoms
//! poramorshok-cli chat send "headache and mild fever since yesterday"
//!
//! # Generate a diet plan and export it as Markdown
//! poramorshok-cli diet --goal muscle-gain --preference vegetarian --export
//!
//! # Switch the persisted language
//! poramorshok-cli language set bn
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use poramorshok::{
    config::AppConfig,
    constants::{service_names, storage_keys},
    context::AppContext,
    controllers::{HeightInput, NewEntry},
    formatters::{ExportFormat, DIET_PLAN_FILE_STEM},
    language::Language,
    logging::LoggingConfig,
    models::{DietGoal, DietaryPreference, ExerciseLocation, FitnessLevel, TimePerDay},
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "poramorshok-cli",
    about = "Poramorshok personal health assistant",
    long_about = "Track BMI, describe symptoms and generate 7-day diet and exercise plans from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Language for this invocation (en or bn); defaults to the saved choice
    #[arg(long, short = 'l', global = true)]
    language: Option<Language>,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Health tracker commands
    Track {
        #[command(subcommand)]
        action: TrackCommand,
    },

    /// Symptom chat commands
    Chat {
        #[command(subcommand)]
        action: ChatCommand,
    },

    /// Generate a 7-day diet plan
    Diet {
        /// Health goal
        #[arg(long, default_value_t = DietGoal::default())]
        goal: DietGoal,

        /// Dietary preference
        #[arg(long, default_value_t = DietaryPreference::default())]
        preference: DietaryPreference,

        /// Write the plan to a file (defaults to 7-Day-Diet-Plan.md)
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        export: Option<PathBuf>,

        /// Export format (markdown or json)
        #[arg(long, default_value = "markdown")]
        format: String,
    },

    /// Generate a 7-day exercise plan from the latest tracker entry
    Exercise {
        /// Primary goal
        #[arg(long, default_value_t = DietGoal::default())]
        goal: DietGoal,

        /// Fitness level
        #[arg(long, default_value_t = FitnessLevel::default())]
        level: FitnessLevel,

        /// Location
        #[arg(long, default_value_t = ExerciseLocation::default())]
        location: ExerciseLocation,

        /// Minutes per day (30, 45 or 60)
        #[arg(long, default_value_t = TimePerDay::default())]
        minutes: TimePerDay,
    },

    /// Print a short health fun fact
    FunFact,

    /// Language commands
    Language {
        #[command(subcommand)]
        action: LanguageCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TrackCommand {
    /// Record a new measurement for today
    Add(AddEntryArgs),

    /// Show history, latest BMI, trends and cached advice
    Show {
        /// Fetch fresh advice even when a cached one exists
        #[arg(long)]
        refresh_advice: bool,
    },

    /// Delete the history and all cached advice
    Clear,

    /// Save the profile age
    Age {
        /// Age in years; an empty value clears it
        age: String,
    },
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("height")
        .required(true)
        .multiple(true)
        .args(["height_cm", "feet", "inches"])
))]
struct AddEntryArgs {
    /// Age in years (defaults to the saved profile age)
    #[arg(long)]
    age: Option<u32>,

    /// Height in centimeters
    #[arg(long, conflicts_with_all = ["feet", "inches"])]
    height_cm: Option<f64>,

    /// Height in feet (missing inches count as 0)
    #[arg(long)]
    feet: Option<f64>,

    /// Remaining inches (missing feet count as 0)
    #[arg(long)]
    inches: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,
}

impl AddEntryArgs {
    fn into_entry(self) -> NewEntry {
        let height = match self.height_cm {
            Some(cm) => HeightInput::Cm { cm },
            None => HeightInput::FeetInches {
                feet: self.feet.unwrap_or_default(),
                inches: self.inches.unwrap_or_default(),
            },
        };
        NewEntry {
            age: self.age,
            height,
            weight: self.weight,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ChatCommand {
    /// Describe symptoms and get a possible analysis
    Send {
        /// Symptom description
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Print the chat transcript
    History,

    /// Delete the chat transcript
    Clear,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LanguageCommand {
    /// Print the active language
    Show,

    /// Save a language (en or bn)
    Set {
        /// Language code
        language: Language,
    },

    /// Switch between English and Bengali
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().for_cli(service_names::PORAMORSHOK_CLI);
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging.with_level("warn")
    };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    debug!("{}", config.summary());

    let context = AppContext::from_config(config)?;
    let saved = context
        .storage()
        .get_json_or_discard::<Language>(storage_keys::LANGUAGE)?;
    if let Some(language) = cli.language.or(saved) {
        context.language().set(language);
    }

    match cli.command {
        Command::Track { action } => match action {
            TrackCommand::Add(args) => {
                commands::track::add(&context, args.into_entry()).await?;
            }
            TrackCommand::Show { refresh_advice } => {
                commands::track::show(&context, refresh_advice).await?;
            }
            TrackCommand::Clear => commands::track::clear(&context)?,
            TrackCommand::Age { age } => commands::track::set_age(&context, &age)?,
        },
        Command::Chat { action } => match action {
            ChatCommand::Send { message } => {
                commands::chat::send(&context, &message.join(" ")).await?;
            }
            ChatCommand::History => commands::chat::history(&context)?,
            ChatCommand::Clear => commands::chat::clear(&context)?,
        },
        Command::Diet {
            goal,
            preference,
            export,
            format,
        } => {
            let format = ExportFormat::from_str_param(&format);
            let export = export.map(|path| {
                if path.as_os_str().is_empty() {
                    PathBuf::from(format!("{DIET_PLAN_FILE_STEM}.{}", format.extension()))
                } else {
                    path
                }
            });
            commands::planner::diet(&context, goal, preference, export, format).await?;
        }
        Command::Exercise {
            goal,
            level,
            location,
            minutes,
        } => {
            commands::planner::exercise(&context, goal, level, location, minutes).await?;
        }
        Command::FunFact => commands::fun_fact::show(&context).await,
        Command::Language { action } => match action {
            LanguageCommand::Show => commands::language::show(&context),
            LanguageCommand::Set { language } => commands::language::set(&context, language)?,
            LanguageCommand::Toggle => commands::language::toggle(&context)?,
        },
    }

    Ok(())
}
