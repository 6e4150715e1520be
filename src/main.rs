use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use osu_sweep::app::{App, Selection};
use osu_sweep::cli::Cli;
use osu_sweep::events::run_session;
use osu_sweep::logging;
use osu_sweep::sweep::{Config, SweepError};
use osu_sweep::ui::prompt_root;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(workers) = cli.workers {
        config.workers = Some(workers);
    }
    if cli.no_progress {
        config.show_progress = false;
    }

    match cli.selection()? {
        Some(selection) => {
            // clap guarantees --root alongside --category
            let root = cli.root.ok_or_else(|| SweepError::InvalidArguments {
                message: "--category requires --root".to_string(),
            })?;
            let app = App::new(root, config).with_dry_run(cli.dry_run);
            run_pass(&app, selection, &mut io::stdout())?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();

            let root = match cli.root {
                Some(root) => root,
                None => match prompt_root(&mut input, &mut out).context("reading Songs folder path")? {
                    Some(root) => root,
                    None => return Ok(()),
                },
            };

            let mut app = App::new(root, config).with_dry_run(cli.dry_run);
            run_session(&mut app, &mut input, &mut out, run_pass::<io::Stdout>)?;
        }
    }

    Ok(())
}

fn run_pass<W: Write>(app: &App, selection: Selection, out: &mut W) -> Result<(), SweepError> {
    let criteria = app.criteria_for(selection)?;
    let summary = app
        .engine()
        .run_with_status(&app.root, &criteria, out)
        .map_err(|e| SweepError::from_io_error(e, "writing pass status", None))?;
    summary
        .write_report(out)
        .map_err(|e| SweepError::from_io_error(e, "writing summary", None))
}
