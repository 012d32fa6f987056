// tests/support/mod.rs
// Shared by several integration test binaries; each binary only uses part
// of it, so unused warnings are silenced at the module level.
#[allow(dead_code, unused_imports)]
pub mod fixtures;

#[allow(dead_code, unused_imports)]
pub mod memory;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use memory::MemoryStore;
