use std::fmt;

use crate::graph::NodeId;

/// Machine-readable error codes for scripts and agents consuming `dress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    MalformedEdgeList,
    ConfigParseError,
    SelfDependency,
    CircularDependency,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidInput => "E1001",
            Self::MalformedEdgeList => "E1002",
            Self::ConfigParseError => "E1003",
            Self::SelfDependency => "E2001",
            Self::CircularDependency => "E2002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidInput => "Empty clothing item name",
            Self::MalformedEdgeList => "Malformed edge list",
            Self::ConfigParseError => "Config file parse error",
            Self::SelfDependency => "Clothing item depends on itself",
            Self::CircularDependency => "Circular dependency between clothing items",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint surfaced next to the error.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidInput => Some("Every entry needs a non-empty item on both sides."),
            Self::MalformedEdgeList => {
                Some("Write one `dependency -> dependent` pair per line, or a JSON array of pairs.")
            }
            Self::ConfigParseError => Some("Fix syntax in dress.toml and retry."),
            Self::SelfDependency => Some("Remove the entry that pairs an item with itself."),
            Self::CircularDependency => {
                Some("Remove one dependency from each reported cycle so the items can be ordered.")
            }
            Self::InternalUnexpected => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while building or ordering a clothing dependency graph.
///
/// Every variant aborts the whole computation; no partial order is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DressingError {
    /// One side of an edge is empty.
    #[error("empty values found on entry {index}: {dependency:?}, {dependent:?}")]
    InvalidInput {
        index: usize,
        dependency: String,
        dependent: String,
    },

    /// An edge pairs an item with itself (compared case-insensitively).
    #[error("clothing item '{item}' cannot be dependent on itself")]
    SelfDependency { item: String },

    /// Items still wait on prerequisites after every resolvable layer has
    /// been emitted, or an item was dequeued twice.
    #[error("circular dependencies found with clothing item(s): {}", items.join(", "))]
    CircularDependency {
        /// Every unresolved item, sorted case-insensitively.
        items: Vec<String>,
        /// Strongly connected components among the unresolved items.
        cycles: Vec<Vec<String>>,
    },

    /// A node id handed to the graph does not belong to it. Never caused
    /// by input.
    #[error("node id {id} missing from dependency graph")]
    MissingNode { id: NodeId },
}

impl DressingError {
    /// `true` for both the self-dependency and circular-dependency kinds.
    #[must_use]
    pub const fn is_cyclic(&self) -> bool {
        matches!(
            self,
            Self::SelfDependency { .. } | Self::CircularDependency { .. }
        )
    }

    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::SelfDependency { .. } => ErrorCode::SelfDependency,
            Self::CircularDependency { .. } => ErrorCode::CircularDependency,
            Self::MissingNode { .. } => ErrorCode::InternalUnexpected,
        }
    }

    /// Remediation text for the CLI; falls back to the code's summary.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{DressingError, ErrorCode};
    use crate::graph::NodeId;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::InvalidInput,
            ErrorCode::MalformedEdgeList,
            ErrorCode::ConfigParseError,
            ErrorCode::SelfDependency,
            ErrorCode::CircularDependency,
            ErrorCode::InternalUnexpected,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::CircularDependency.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn self_dependency_is_a_cyclic_error() {
        let err = DressingError::SelfDependency {
            item: "tie".to_string(),
        };
        assert!(err.is_cyclic());
        assert_eq!(err.error_code(), ErrorCode::SelfDependency);

        let invalid = DressingError::InvalidInput {
            index: 0,
            dependency: String::new(),
            dependent: "tie".to_string(),
        };
        assert!(!invalid.is_cyclic());
    }

    #[test]
    fn circular_message_lists_items() {
        let err = DressingError::CircularDependency {
            items: vec!["belt".to_string(), "pants".to_string()],
            cycles: vec![vec!["belt".to_string(), "pants".to_string()]],
        };
        assert_eq!(
            err.to_string(),
            "circular dependencies found with clothing item(s): belt, pants"
        );
    }

    #[test]
    fn internal_errors_fall_back_to_summary() {
        let err = DressingError::MissingNode { id: NodeId(7) };
        assert_eq!(err.suggestion(), "Internal unexpected error");
        assert_eq!(err.to_string(), "node id node#7 missing from dependency graph");
    }
}
