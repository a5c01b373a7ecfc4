use anyhow::Result;
/// Career Compass CLI - Salesforce readiness self-assessment
///
/// Provides the interactive assessment TUI and a non-interactive outline dump.
use clap::{Parser, Subcommand};
use compass_cli::ui;
use compass_core::question_bank::{TechnicalSection, WiscarDescriptor};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "compass")]
#[command(about = "Career Compass - Should You Learn Salesforce?", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive assessment TUI
    Tui {
        /// Start in high-contrast mode
        #[arg(long)]
        high_contrast: bool,
    },
    /// Print the assessment outline (non-interactive)
    Outline {
        /// Emit machine-readable JSON, including the answer key
        #[arg(short, long)]
        json: bool,
    },
}

/// Machine-readable form of the whole question bank.
#[derive(Serialize)]
struct OutlineDoc {
    title: &'static str,
    tagline: &'static str,
    duration_minutes: u8,
    stages: Vec<&'static str>,
    likert_statements: &'static [&'static str],
    rating_labels: &'static [&'static str],
    technical_sections: &'static [TechnicalSection],
    wiscar: &'static [WiscarDescriptor],
    slider: SliderSpec,
    scoring: ScoringSpec,
}

#[derive(Serialize)]
struct SliderSpec {
    min: u8,
    max: u8,
    step: u8,
    default: u8,
}

#[derive(Serialize)]
struct ScoringSpec {
    yes_at: u8,
    maybe_at: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { high_contrast } => {
            ui::run_tui(high_contrast)?;
        }
        Commands::Outline { json } => {
            run_outline(json)?;
        }
    }

    Ok(())
}

fn run_outline(json: bool) -> Result<()> {
    use compass_core::question_bank::{
        APP_TAGLINE, APP_TITLE, ASSESSMENT_MINUTES, LIKERT_STATEMENTS, RATING_LABELS,
        SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP, TECHNICAL_SECTIONS,
        WISCAR_DESCRIPTORS,
    };
    use compass_core::session::Stage;
    use compass_core::types::Recommendation;

    let stage_titles: Vec<&'static str> = Stage::ALL.iter().map(|s| s.title()).collect();

    if json {
        let doc = OutlineDoc {
            title: APP_TITLE,
            tagline: APP_TAGLINE,
            duration_minutes: ASSESSMENT_MINUTES,
            stages: stage_titles,
            likert_statements: &LIKERT_STATEMENTS,
            rating_labels: &RATING_LABELS,
            technical_sections: &TECHNICAL_SECTIONS,
            wiscar: &WISCAR_DESCRIPTORS,
            slider: SliderSpec {
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                default: SLIDER_DEFAULT,
            },
            scoring: ScoringSpec {
                yes_at: Recommendation::YES_AT,
                maybe_at: Recommendation::MAYBE_AT,
            },
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{} - {}", APP_TITLE, APP_TAGLINE);
    println!("Approximate duration: {} minutes", ASSESSMENT_MINUTES);

    println!("\nStages:");
    for (i, title) in stage_titles.iter().enumerate() {
        println!("  {}. {}", i + 1, title);
    }

    println!(
        "\nPsychometric: {} statements rated {} ({}) to {} ({})",
        LIKERT_STATEMENTS.len(),
        1,
        RATING_LABELS[0],
        RATING_LABELS.len(),
        RATING_LABELS[RATING_LABELS.len() - 1],
    );

    println!("\nTechnical sections:");
    for section in &TECHNICAL_SECTIONS {
        println!("  {}", section.title);
        for question in section.questions {
            // Answer key stays out of the human-readable dump
            println!("    - {}", question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("        {}. {}", i + 1, option);
            }
        }
    }

    println!(
        "\nWISCAR dimensions (sliders {}-{}, step {}):",
        SLIDER_MIN, SLIDER_MAX, SLIDER_STEP
    );
    for descriptor in &WISCAR_DESCRIPTORS {
        println!("  {:<16} {}", descriptor.title, descriptor.description);
    }

    println!(
        "\nRecommendation: YES at {}+, MAYBE at {}+, NO below",
        Recommendation::YES_AT,
        Recommendation::MAYBE_AT,
    );

    Ok(())
}
