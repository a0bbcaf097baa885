#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use vendorclean::GlideLockRepository;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(manifest) = GlideLockRepository::parse(s, Path::new("glide.lock")) {
            // Accepted import roots must stay inside the vendor root.
            for root in manifest.import_roots() {
                assert!(root.is_relative());
                assert!(!root
                    .components()
                    .any(|c| matches!(c, std::path::Component::ParentDir)));
            }
        }
    }
});
