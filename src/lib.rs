//! scope-manifest: a record of what this project builds and what it does not
//!
//! Every subsystem of the described system is either excluded or has no
//! content. The library exposes that list so it can be queried and reported.

pub mod error;
pub mod manifest;

use anyhow::Result;
use tracing::{debug, info};

pub use error::ScopeError;
pub use manifest::{Component, Status};

/// Options for rendering a report
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Only include components with this status
    pub status: Option<Status>,
}

/// Render the manifest as one line per component
pub fn render_report(options: &ReportOptions) -> String {
    let mut out = String::new();
    let mut count = 0usize;

    for component in manifest::components()
        .iter()
        .filter(|c| options.status.map_or(true, |s| c.status == s))
    {
        out.push_str(&format!(
            "{:<26}{:<16}{}\n",
            component.name, component.status, component.reason
        ));
        count += 1;
    }

    debug!(count, "rendered report");
    out
}

/// Describe a single component
pub fn describe(name: &str) -> Result<String> {
    let component = manifest::lookup(name)?;
    info!(name = component.name, status = %component.status, "component found");
    Ok(format!(
        "{}: {} ({})",
        component.name, component.status, component.reason
    ))
}
