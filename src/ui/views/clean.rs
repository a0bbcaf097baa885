//! Clean command UI views

use std::path::Path;

use vendorclean::{CleanOptions, CleanReport, RemovalKind, RemovalPlan};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the clean command header
pub fn render_clean_header(
    vendor_root: &Path,
    options: &CleanOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if options.dry_run {
        "vendorclean (Dry Run)"
    } else {
        "vendorclean"
    };
    let mut header = CommandHeader::new(Icon::Clean, title);

    header.add("Vendor", vendor_root.display().to_string());

    let flags = options.active_flags();
    header.add(
        "Options",
        if flags.is_empty() {
            "none (nested vendor trees only)".to_string()
        } else {
            flags.join(", ")
        },
    );
    if !options.keep.is_empty() {
        header.add("Keep", options.keep.join(", "));
    }

    header.render(supports_color, supports_unicode)
}

fn kind_label(kind: RemovalKind) -> &'static str {
    match kind {
        RemovalKind::File => "",
        RemovalKind::EmptyDir => " (empty dir)",
        RemovalKind::NestedVendor => " (nested vendor)",
    }
}

/// Render the list of planned removals
pub fn render_clean_preview(
    plan: &RemovalPlan,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if plan.is_empty() {
        return String::new();
    }

    let mut out = ColoredText::warning("Entries to be removed:")
        .bold()
        .render(supports_color);
    out.push('\n');
    for planned in plan {
        out.push_str(&format!(
            "  {} {}{}\n",
            Icon::Remove.colored(supports_color, supports_unicode),
            planned.path().display(),
            ColoredText::dim(kind_label(planned.kind)).render(supports_color)
        ));
    }
    out
}

/// Render the clean result summary
pub fn render_clean_result(
    report: &CleanReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if report.is_noop() {
        "Nothing to Clean"
    } else if report.dry_run {
        "Dry Run Complete"
    } else if report.is_success() {
        "Clean Complete"
    } else {
        "Clean Incomplete"
    };

    let mut summary = if report.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };

    let verb = if report.dry_run { "would be removed" } else { "removed" };
    summary.add_stat(format!("files {}", verb), report.removed_count(RemovalKind::File));
    summary.add_stat(
        format!("empty directories {}", verb),
        report.removed_count(RemovalKind::EmptyDir),
    );
    summary.add_stat(
        format!("nested vendor trees {}", verb),
        report.removed_count(RemovalKind::NestedVendor),
    );
    summary.add_stat("files kept", report.files_kept);

    if !report.failures.is_empty() {
        summary.add_stat("failures", report.failures.len());
        for failure in &report.failures {
            summary.add_warning(failure.to_string());
        }
    }

    if report.dry_run && !report.is_noop() {
        summary.with_next_step("Run without --dry-run to remove");
    }

    summary.render(supports_color, supports_unicode)
}
