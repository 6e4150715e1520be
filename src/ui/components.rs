//! Console prompts for the interactive menus.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::{App, AppMode};
use crate::sweep::BeatmapPolicy;

/// Render the prompt for the current mode, preceded by any pending message.
/// Nothing is written for `RunPass` and `Exit`.
pub fn render_menu<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    if let Some(ref message) = app.message {
        writeln!(out, "{}", message.red())?;
    }

    match app.mode {
        AppMode::SelectCategory => render_category_menu(out),
        AppMode::SelectBeatmapPolicy => render_policy_menu(out),
        AppMode::RunPass(_) | AppMode::Exit => Ok(()),
    }
}

fn render_category_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Please select a file type:")?;
    writeln!(
        out,
        "1. Beatmaps (If you pick this option you will be asked which beatmap modes you want to delete)"
    )?;
    writeln!(
        out,
        "2. Video files (mp4, avi, flv) {}",
        "(WARNING!! THIS WILL IMMEDIATELY DELETE THE FILES PERMANENTLY)".yellow().bold()
    )?;
    writeln!(out, "3. Exit - Exit the program.")?;
    write!(out, "Enter your choice (1-3): ")?;
    out.flush()
}

fn render_policy_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select an option(1-6):")?;
    writeln!(out, "{}", "WARNING!! THIS WILL PERMANENTLY DELETE THE FILES".yellow().bold())?;
    for (i, policy) in BeatmapPolicy::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, policy.description())?;
    }
    writeln!(out, "6. Exit - Exit the program.")?;
    write!(out, "Enter your choice (1-6): ")?;
    out.flush()
}

/// Ask for the Songs folder. `None` when input is exhausted.
pub fn prompt_root<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<PathBuf>> {
    loop {
        write!(out, "Enter the full path to the 'osu!/Songs' folder: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim().trim_matches('"');
        if !trimmed.is_empty() {
            return Ok(Some(PathBuf::from(trimmed)));
        }
    }
}
