//! Clean command handler
//!
//! Plans the cleanup of `<root>/vendor`, asks before deleting when a human is
//! at the terminal, then applies the plan and reports.

use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use vendorclean::application::clean::PlannedCleanup;
use vendorclean::{CleanOptions, CleanReport, CleanUseCase, Config, GlideLockRepository, LocalFs};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{
    CleanCompleteEvent, CleanStartEvent, EntryFailedEvent, EntryRemovedEvent,
};
use crate::ui::views::clean::{render_clean_header, render_clean_preview, render_clean_result};

/// Merge CLI flags over the configured defaults. Flags only switch options on.
pub fn resolve_options(cli: &Cli, config: &Config) -> CleanOptions {
    let mut options = config.clean_options();
    options.only_go |= cli.only_go;
    options.no_tests |= cli.no_tests;
    options.keep_legal_files |= cli.keep_legal_files;
    options.use_lock_file |= cli.use_lock_file;
    options.keep.extend(cli.keep.iter().cloned());
    options.dry_run = cli.dry_run;
    options
}

/// Execute the clean command
pub fn cmd_clean(cli: &Cli) -> Result<ExitCode> {
    let (config, warnings) = Config::load_for_project(&cli.root)
        .with_context(|| format!("failed to load configuration for {}", cli.root.display()))?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, config.output.color);
    let options = resolve_options(cli, &config);

    let use_case = CleanUseCase::new(GlideLockRepository::new(), LocalFs::new());
    let planned = use_case.plan(&cli.root, &options)?;

    if ui.json {
        emit_event(&CleanStartEvent::new(
            planned.vendor_root.display().to_string(),
            options.dry_run,
            options.active_flags(),
            planned.plan().len(),
        ))?;
    } else {
        print!(
            "{}",
            render_clean_header(&planned.vendor_root, &options, ui.color, ui.unicode)
        );
    }

    let needs_confirmation = ui.interactive && !options.dry_run && !cli.yes && !planned.is_empty();

    if !ui.json && (ui.verbose > 0 || options.dry_run || needs_confirmation) {
        println!();
        print!(
            "{}",
            render_clean_preview(planned.plan(), ui.color, ui.unicode)
        );
    }

    if needs_confirmation && !confirm_removal(&planned)? {
        println!("Aborted.");
        return Ok(ExitCode::SUCCESS);
    }

    let report = use_case.apply(&planned, options.dry_run);
    render_report(&report, &ui)?;

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn confirm_removal(planned: &PlannedCleanup) -> Result<bool> {
    println!();
    let confirmed = Confirm::new()
        .with_prompt(format!("Remove {} entries?", planned.plan().len()))
        .default(false)
        .interact()
        .context("failed to read confirmation")?;
    Ok(confirmed)
}

fn render_report(report: &CleanReport, ui: &UiContext) -> Result<()> {
    if ui.json {
        for removed in &report.removed {
            emit_event(&EntryRemovedEvent::new(
                removed.path().display().to_string(),
                removed.kind,
            ))?;
        }
        for failure in &report.failures {
            emit_event(&EntryFailedEvent::new(
                failure.path.display().to_string(),
                failure.message.clone(),
            ))?;
        }
        emit_event(&CleanCompleteEvent::from_report(report))?;
        return Ok(());
    }

    println!();
    print!("{}", render_clean_result(report, ui.color, ui.unicode));
    Ok(())
}
