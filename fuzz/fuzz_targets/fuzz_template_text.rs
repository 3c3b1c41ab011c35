//! Fuzz target for template decoding and validation from raw text.
//!
//! Goal: decoding may fail, but neither decoding nor validation may **ever panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_template_text
//! ```

#![no_main]

use consoleguard_domain::{RegionContext, TemplateModel};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(model) = TemplateModel::from_json_str(text) {
        let result = consoleguard_domain::validate(&model, &RegionContext::default());
        assert!(result.checks.len() >= 14);
    }
});
