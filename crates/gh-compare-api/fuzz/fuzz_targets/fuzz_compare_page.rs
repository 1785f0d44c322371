#![no_main]

//! Fuzz target for compare page decoding
//!
//! Arbitrary bytes must never panic when decoded as a compare response,
//! and every decoded commit must render as a single line.

use gh_compare_api::{CompareResult, render_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(page) = serde_json::from_slice::<CompareResult>(data) {
        for commit in &page.commits {
            let line = render_line(commit, true);
            assert!(!line.contains('\n'));
            assert!(commit.short_sha().chars().count() <= 10);
        }
    }
});
