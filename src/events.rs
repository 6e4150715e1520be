use std::io::{BufRead, Write};

use crate::app::{App, AppMode, Selection};
use crate::sweep::{BeatmapPolicy, SweepError};
use crate::ui::render_menu;

/// Apply one line of user input to the menu state machine.
pub fn handle_input(app: &mut App, input: &str) {
    let choice = input.trim();
    app.message = None;

    match app.mode {
        AppMode::SelectCategory => handle_category_select(app, choice),
        AppMode::SelectBeatmapPolicy => handle_policy_select(app, choice),
        // Not waiting for input
        AppMode::RunPass(_) | AppMode::Exit => {}
    }
}

fn handle_category_select(app: &mut App, choice: &str) {
    match choice {
        "1" => app.mode = AppMode::SelectBeatmapPolicy,
        "2" => app.mode = AppMode::RunPass(Selection::Videos),
        "3" => app.mode = AppMode::Exit,
        _ => app.message = Some("Invalid choice. Please try again.".to_string()),
    }
}

fn handle_policy_select(app: &mut App, choice: &str) {
    let policy = match choice {
        "1" => BeatmapPolicy::AllButStandard,
        "2" => BeatmapPolicy::StandardOnly,
        "3" => BeatmapPolicy::TaikoOnly,
        "4" => BeatmapPolicy::CatchOnly,
        "5" => BeatmapPolicy::ManiaOnly,
        "6" => {
            app.mode = AppMode::Exit;
            return;
        }
        _ => {
            app.message = Some("Invalid option. Please try again.".to_string());
            return;
        }
    };
    app.mode = AppMode::RunPass(Selection::Beatmaps(policy));
}

/// A finished pass sends the user back to the category menu.
pub fn pass_finished(app: &mut App) {
    app.passes_run += 1;
    if app.mode != AppMode::Exit {
        app.mode = AppMode::SelectCategory;
    }
}

/// Drive the menus until the user exits or input runs out.
///
/// `run_pass` is called for every `RunPass` state. Returns the number of
/// passes run.
pub fn run_session<R, W, P>(
    app: &mut App,
    input: &mut R,
    out: &mut W,
    mut run_pass: P,
) -> Result<usize, SweepError>
where
    R: BufRead,
    W: Write,
    P: FnMut(&App, Selection, &mut W) -> Result<(), SweepError>,
{
    while !app.should_quit() {
        if let AppMode::RunPass(selection) = app.mode {
            run_pass(app, selection, &mut *out)?;
            pass_finished(app);
            continue;
        }

        render_menu(out, app)
            .map_err(|e| SweepError::from_io_error(e, "writing menu", None))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| SweepError::from_io_error(e, "reading menu choice", None))?;
        if read == 0 {
            // End of input behaves like choosing exit
            app.mode = AppMode::Exit;
            break;
        }
        handle_input(app, &line);
    }

    Ok(app.passes_run)
}
