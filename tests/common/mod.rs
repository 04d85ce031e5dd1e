//! Common test utilities for scope-manifest tests

use scope_manifest::manifest;

/// Names of every component, in declaration order
pub fn all_names() -> Vec<&'static str> {
    manifest::components().iter().map(|c| c.name).collect()
}
