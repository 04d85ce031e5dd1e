//! The fixed list of components and their scope status

use std::fmt;

use crate::error::ScopeError;

/// Whether a component is part of the built system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Deliberately not built
    Excluded,
    /// No content exists for this section
    NotApplicable,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Excluded => "excluded",
            Status::NotApplicable => "not applicable",
        };
        f.pad(text)
    }
}

/// A single named entry in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub name: &'static str,
    pub status: Status,
    pub reason: &'static str,
}

const ABUSIVE: &str = "automates unauthorized charge attempts against payment credentials";
const GLUE: &str = "peripheral glue bundled with an excluded system";

static COMPONENTS: &[Component] = &[
    Component {
        name: "checkout-walker",
        status: Status::Excluded,
        reason: ABUSIVE,
    },
    Component {
        name: "response-classification",
        status: Status::Excluded,
        reason: ABUSIVE,
    },
    Component {
        name: "proxy-rotation",
        status: Status::Excluded,
        reason: GLUE,
    },
    Component {
        name: "telegram-notifications",
        status: Status::Excluded,
        reason: GLUE,
    },
    Component {
        name: "invoice-bot",
        status: Status::Excluded,
        reason: "unrelated feature bundled into the same repository",
    },
    Component {
        name: "code-optimizer-bot",
        status: Status::Excluded,
        reason: "unrelated feature bundled into the same repository",
    },
    Component {
        name: "web-ui",
        status: Status::Excluded,
        reason: GLUE,
    },
    Component {
        name: "data-model",
        status: Status::NotApplicable,
        reason: "no component decomposition exists",
    },
    Component {
        name: "concurrency-model",
        status: Status::NotApplicable,
        reason: "no component decomposition exists",
    },
    Component {
        name: "external-interfaces",
        status: Status::NotApplicable,
        reason: "no component decomposition exists",
    },
];

/// All components, in declaration order
pub fn components() -> &'static [Component] {
    COMPONENTS
}

/// Look up a component by name (case-insensitive, surrounding whitespace ignored)
pub fn lookup(name: &str) -> Result<&'static Component, ScopeError> {
    let needle = name.trim();
    if needle.is_empty() {
        return Err(ScopeError::EmptyName);
    }

    COMPONENTS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(needle))
        .ok_or_else(|| ScopeError::UnknownComponent {
            name: needle.to_string(),
        })
}

/// Components with the given status
pub fn with_status(status: Status) -> impl Iterator<Item = &'static Component> {
    COMPONENTS.iter().filter(move |c| c.status == status)
}
