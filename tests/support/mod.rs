// tests/support/mod.rs
// Support code shared by the integration test binaries. Not every binary
// uses every symbol, which triggers dead_code warnings per test crate, so
// allow them at the module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;

#[allow(unused_imports)]
pub use mocks::*;
