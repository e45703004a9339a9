use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{PaletteBoard, PaletteClient};
use shared::{
    blend::BlendMode,
    domain::{SelectedColorId, WheelEntryId},
};

mod config;

use config::{load_settings, validate_api_url};

#[derive(Parser, Debug)]
#[command(name = "palette", about = "Manage the color wheel and selected colors")]
struct Cli {
    /// Base URL of the remote color store. Overrides palette.toml and the
    /// environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Average in linear light instead of raw channel values.
    #[arg(long)]
    perceptual: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print both lists and the combined color.
    Show {
        /// Emit JSON instead of the plain listing.
        #[arg(long)]
        json: bool,
    },
    /// Add a custom color to the selected list.
    Add { hex: String },
    /// Copy a wheel entry into the selected list.
    Pick { id: i64 },
    /// Copy a selected color back onto the wheel.
    Stash { id: i64 },
    /// Remove one selected color.
    Remove { id: i64 },
    /// Remove every selected color.
    Clear,
    /// Remove one wheel entry.
    RemoveWheel { id: i64 },
    /// Push the current combined color onto the wheel.
    PushCombined,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }
    if cli.perceptual {
        settings.blend_mode = BlendMode::Linear;
    }
    let api_url = validate_api_url(&settings.api_url)?;

    let mut board = PaletteBoard::new(PaletteClient::new(api_url), settings.blend_mode);
    board.refresh().await;

    match cli.command {
        Command::Show { json: true } => {
            let snapshot = serde_json::json!({
                "wheel": board.wheel(),
                "selected": board.selected(),
                "combined": board.combined_hex(),
            });
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        Command::Show { json: false } => print_board(&board),
        Command::Add { hex } => {
            if let Some(id) = board.add_custom(&hex).await {
                println!("added selected color id={}", id.0);
            }
        }
        Command::Pick { id } => {
            if let Some(id) = board.pick_from_wheel(WheelEntryId(id)).await {
                println!("selected id={} combined={}", id.0, board.combined_hex());
            }
        }
        Command::Stash { id } => {
            if let Some(id) = board.stash_in_wheel(SelectedColorId(id)).await {
                println!("added wheel entry id={}", id.0);
            }
        }
        Command::Remove { id } => {
            if board.remove_selected(SelectedColorId(id)).await {
                println!("removed; combined={}", board.combined_hex());
            }
        }
        Command::Clear => {
            if board.clear_selected().await {
                println!("cleared; combined={}", board.combined_hex());
            }
        }
        Command::RemoveWheel { id } => {
            if board.remove_wheel_entry(WheelEntryId(id)).await {
                println!("removed wheel entry {id}");
            }
        }
        Command::PushCombined => {
            if let Some(id) = board.push_combined().await {
                println!(
                    "pushed combined color {} as wheel entry id={}",
                    board.combined_hex(),
                    id.0
                );
            }
        }
    }

    Ok(())
}

fn print_board(board: &PaletteBoard) {
    println!("color wheel:");
    for entry in board.wheel() {
        let fixed = if entry.removable { "" } else { " (fixed)" };
        println!("  [{}] {}{}", entry.id.0, entry.hex, fixed);
    }
    println!("selected colors:");
    for color in board.selected() {
        let custom = if color.custom { " (custom)" } else { "" };
        println!("  [{}] {}{}", color.id.0, color.hex, custom);
    }
    println!("combined: {}", board.combined_hex());
}
