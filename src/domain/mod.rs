// Domain models (navigation entries, header state, user identity)
// Pure Rust, no framework dependencies
pub mod models;
