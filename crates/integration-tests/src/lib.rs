//! Cross-crate tests live in `tests/`; shared fakes are in
//! `tests/fixtures.rs` and pulled into each target with `mod fixtures;`.
