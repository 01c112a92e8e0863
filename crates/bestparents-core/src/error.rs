use std::fmt;

/// Machine-readable error codes for scripted callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidCardinality,
    RaggedInstance,
    TableShape,
    UnknownAttribute,
    GraphMismatch,
    DuplicateEdge,
    SelfLoop,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidCardinality => "E1001",
            Self::RaggedInstance => "E1002",
            Self::TableShape => "E2001",
            Self::UnknownAttribute => "E3001",
            Self::GraphMismatch => "E3002",
            Self::DuplicateEdge => "E4001",
            Self::SelfLoop => "E4002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidCardinality => "Coded value outside attribute cardinality",
            Self::RaggedInstance => "Instance has the wrong number of values",
            Self::TableShape => "Malformed contingency table",
            Self::UnknownAttribute => "Attribute index out of range",
            Self::GraphMismatch => "Graph and dataset disagree on attribute count",
            Self::DuplicateEdge => "Edge already present",
            Self::SelfLoop => "Self-loop rejected",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::InvalidCardinality => {
                Some("Re-encode the data so every value lies in [0, cardinality).")
            }
            Self::RaggedInstance => Some("Make every record carry one value per attribute."),
            Self::TableShape => Some("Tables must be rectangular, non-empty and non-negative."),
            Self::UnknownAttribute => Some("Pick a root attribute below the attribute count."),
            Self::GraphMismatch => {
                Some("Build the network from the same dataset that is being searched.")
            }
            Self::DuplicateEdge | Self::SelfLoop => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised while building tables or mutating the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LearnError {
    /// A coded value was observed outside `[0, cardinality)`.
    #[error(
        "instance {instance}: attribute {attribute} has value {value}, expected [0, {cardinality})"
    )]
    InvalidCardinality {
        instance: usize,
        attribute: usize,
        value: i64,
        cardinality: usize,
    },

    /// An instance row does not carry one value per attribute.
    #[error("instance {instance} has {found} values, expected {expected}")]
    RaggedInstance {
        instance: usize,
        expected: usize,
        found: usize,
    },

    /// The entropy primitive was handed a table it cannot interpret.
    #[error("malformed contingency table: {0}")]
    TableShape(String),

    /// An attribute index outside `[0, count)`.
    #[error("attribute {attribute} out of range (dataset has {count})")]
    UnknownAttribute { attribute: usize, count: usize },

    /// The network was sized for a different number of attributes.
    #[error("network has {graph} nodes but dataset has {dataset} attributes")]
    GraphMismatch { graph: usize, dataset: usize },

    /// `add_parent` was asked to add an edge that already exists.
    #[error("edge {parent} -> {child} already present")]
    DuplicateEdge { parent: usize, child: usize },

    /// `add_parent` was asked to make a node its own parent.
    #[error("attribute {0} cannot be its own parent")]
    SelfLoop(usize),
}

impl LearnError {
    /// The stable [`ErrorCode`] for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidCardinality { .. } => ErrorCode::InvalidCardinality,
            Self::RaggedInstance { .. } => ErrorCode::RaggedInstance,
            Self::TableShape(_) => ErrorCode::TableShape,
            Self::UnknownAttribute { .. } => ErrorCode::UnknownAttribute,
            Self::GraphMismatch { .. } => ErrorCode::GraphMismatch,
            Self::DuplicateEdge { .. } => ErrorCode::DuplicateEdge,
            Self::SelfLoop(_) => ErrorCode::SelfLoop,
        }
    }

    /// Remediation text, falling back to the code's summary.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}
