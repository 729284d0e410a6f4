//! Workspace root. The engine lives in the `crates/` members; this package
//! exists to anchor workspace-wide tooling (git hooks via cargo-husky).
