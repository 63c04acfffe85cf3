//! Shared utilities for the Aisle workspace.

pub mod version_info;
