use vendorclean::VendorCleanError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::terminal::detect_capabilities;

/// Stable machine-readable code for an error
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<VendorCleanError>() {
        Some(VendorCleanError::VendorDirNotFound { .. }) => "vendor_dir_not_found",
        Some(VendorCleanError::NotADirectory { .. }) => "not_a_directory",
        Some(VendorCleanError::ManifestNotFound { .. }) => "manifest_not_found",
        Some(VendorCleanError::ManifestParse { .. }) => "manifest_parse",
        Some(VendorCleanError::Traversal { .. }) => "traversal",
        Some(VendorCleanError::PartialCleanup { .. }) => "partial_cleanup",
        Some(VendorCleanError::Config { .. }) => "config",
        Some(VendorCleanError::KeepPattern { .. }) => "keep_pattern",
        Some(VendorCleanError::Io(_)) => "io",
        None => "error",
    }
}

fn format_vendorclean_error(
    err: &VendorCleanError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = match err {
        VendorCleanError::VendorDirNotFound { path } => ErrorBlock::new("Vendor directory not found.")
            .with_subject(path)
            .with_fix("Run your package manager (e.g. `glide install`) first, or pass the project root."),
        VendorCleanError::NotADirectory { path } => {
            ErrorBlock::new("Expected a directory.").with_subject(path)
        }
        VendorCleanError::ManifestNotFound { path } => ErrorBlock::new("Lock manifest not found.")
            .with_subject(path)
            .with_fix("Run `glide install` to create glide.lock next to vendor/."),
        VendorCleanError::ManifestParse { path, message } => ErrorBlock::new(message.as_str())
            .with_subject(path)
            .with_fix("Regenerate the lock file with `glide update`."),
        VendorCleanError::Config { file, message } => ErrorBlock::new(message.as_str())
            .with_subject(file)
            .with_fix("Fix the configuration file and try again."),
        VendorCleanError::PartialCleanup { failures, .. } => {
            failures
                .iter()
                .fold(ErrorBlock::new(err.to_string()), |block, failure| {
                    block.with_detail(failure.to_string())
                })
        }
        other => ErrorBlock::new(other.to_string()),
    };
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(inner) = err.downcast_ref::<VendorCleanError>() {
        return format_vendorclean_error(inner, supports_color, supports_unicode);
    }

    let block = err
        .chain()
        .skip(1)
        .fold(ErrorBlock::new(err.to_string()), |block, cause| {
            block.with_detail(format!("caused by: {}", cause))
        });
    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let _ = emit_event(&ErrorEvent::new(error_code(err), format!("{:#}", err)));
        return;
    }

    let caps = detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}
