//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (`tbridge-traits`, `tbridge-engine`, `tbridge-host`).
//! Host applications can depend on `tbridge-workspace` and enable the
//! documented features without needing to wire each crate individually.
