//! NeuroGrow CLI
//!
//! Command-line interface for NeuroGrow:
//! - Play the memory pattern game in the terminal
//! - Show the dashboard data
//! - List difficulty settings
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use neurogrow::config::{generate_default_config, Config};
use neurogrow::dashboard::DashboardSnapshot;
use neurogrow::game::{Difficulty, GameMachine};
use neurogrow::logging::init_logging;
use neurogrow::session::{Command, GameSession, RunSummary};

mod terminal;

#[derive(Parser)]
#[command(name = "neurogrow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cognitive training in the terminal")]
#[command(long_about = "NeuroGrow memory pattern challenge.\nWatch the pattern, then repeat it back. Each level gets progressively harder!")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play the memory pattern game
    Play {
        /// Difficulty (easy, medium, hard); defaults to the configured one
        #[arg(short, long, value_parser = |s: &str| s.parse::<Difficulty>())]
        difficulty: Option<Difficulty>,
    },

    /// Show the cognitive profile dashboard data
    Dashboard {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List difficulty settings
    Difficulties {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = Config::resolve(cli.config.as_deref())?;
    init_logging(&loaded.config.logging).context("failed to initialize logging")?;

    tracing::debug!("NeuroGrow v{}", env!("CARGO_PKG_VERSION"));
    for skipped in &loaded.skipped {
        tracing::warn!("Skipped config file: {}", skipped);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }
    let config = loaded.config;

    match cli.command {
        Commands::Play { difficulty } => {
            let difficulty = difficulty.unwrap_or(config.game.difficulty);
            let summary = play(difficulty, &config).await?;
            println!();
            println!(
                "Session over: level {}, score {}, {} ({})",
                summary.level, summary.score, summary.status, summary.difficulty
            );
        }

        Commands::Dashboard { format } => {
            let snapshot = DashboardSnapshot::mock();
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                _ => print_dashboard(&snapshot),
            }
        }

        Commands::Difficulties { format } => match format.as_str() {
            "json" => {
                let rows: Vec<_> = Difficulty::ALL
                    .iter()
                    .map(|d| serde_json::json!({ "difficulty": d, "setting": d.setting() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            _ => print_difficulties(),
        },

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn play(difficulty: Difficulty, config: &Config) -> anyhow::Result<RunSummary> {
    let machine = GameMachine::from_entropy(difficulty, config.game.rules.clone());
    let (notes_tx, mut notes_rx) = mpsc::unbounded_channel();
    let (session, mut state_rx) = GameSession::new(machine, notes_tx);
    let (commands_tx, commands_rx) = mpsc::channel(32);

    println!("Memory Pattern Challenge ({})", difficulty);
    println!("{}", terminal::help_text());
    println!("Type 'start' to begin.");

    let session_task = tokio::spawn(session.run(commands_rx));
    let input_task = tokio::spawn(read_commands(commands_tx));

    let mut renderer = terminal::Renderer::new();

    loop {
        tokio::select! {
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = state_rx.borrow_and_update().clone();
                let tile_count = snapshot.difficulty.setting().tile_count;
                for line in renderer.render(&snapshot.state, tile_count) {
                    println!("{}", line);
                }
            }
            Some(note) = notes_rx.recv() => {
                println!("{}", terminal::format_notification(&note));
            }
        }
    }

    while let Ok(note) = notes_rx.try_recv() {
        println!("{}", terminal::format_notification(&note));
    }

    input_task.abort();
    let summary = session_task.await.context("session task failed")?;
    Ok(summary)
}

async fn read_commands(commands: mpsc::Sender<Command>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let parsed = terminal::parse_line(&line);
        for token in &parsed.rejected {
            println!("Unrecognized input: {}", token);
        }
        for command in parsed.commands {
            let quit = command == Command::Quit;
            if commands.send(command).await.is_err() || quit {
                return Ok(());
            }
        }
    }

    // End of input ends the session
    let _ = commands.send(Command::Quit).await;
    Ok(())
}

fn print_dashboard(snapshot: &DashboardSnapshot) {
    println!("Cognitive Profile Dashboard");
    println!();

    let today = &snapshot.today;
    println!("Exercises today: {}", today.exercises_completed);
    println!("Time spent:      {}m", today.time_spent_minutes);
    println!("Current streak:  {} days", today.streak_days);
    println!("Improvement:     +{}%", today.improvement_percent);
    println!();

    println!("Weekly Performance Trend");
    println!("{:<6} | {:<8} | {:<9} | {}", "Day", "Memory", "Attention", "Processing");
    println!("{}", "-".repeat(42));
    for point in snapshot.weekly_performance {
        println!(
            "{:<6} | {:<8.0} | {:<9.0} | {:.0}",
            point.day, point.memory, point.attention, point.processing
        );
    }
    println!();

    println!("Skill Breakdown");
    println!("{:<20} | {:<5} | {}", "Skill", "Score", "Tier");
    println!("{}", "-".repeat(42));
    for skill in snapshot.cognitive_profile {
        println!(
            "{:<20} | {:<5} | {}",
            skill.skill,
            format!("{}%", skill.score),
            skill.tier().label()
        );
    }
    println!();

    for insight in snapshot.insights {
        println!("{}: {}", insight.title, insight.body);
    }
}

fn print_difficulties() {
    println!(
        "{:<8} {:<6} {:<10} {}",
        "Level", "Tiles", "Reveal", "Start length"
    );
    println!("{}", "-".repeat(40));
    for difficulty in Difficulty::ALL {
        let setting = difficulty.setting();
        println!(
            "{:<8} {:<6} {:<10} {}",
            difficulty.label(),
            setting.tile_count,
            format!("{}ms", setting.reveal_interval_ms),
            setting.initial_sequence_length
        );
    }
}
