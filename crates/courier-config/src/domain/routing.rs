//! Message routes.

use serde::{Deserialize, Serialize};

/// A rule selecting message types for a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteSpecification {
    /// Message type starts with the prefix (ASCII case-insensitive).
    StartsWith(String),
    /// Message type is one of the listed names (exact).
    TypeList(Vec<String>),
}

impl RouteSpecification {
    /// Whether `message_type` satisfies this specification.
    #[must_use]
    pub fn is_satisfied_by(&self, message_type: &str) -> bool {
        match self {
            Self::StartsWith(prefix) => message_type
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
            Self::TypeList(types) => types.iter().any(|t| t == message_type),
        }
    }
}

/// A destination queue and the message types routed to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRoute {
    /// Destination queue URI.
    pub uri: String,
    /// Any satisfied specification selects the route.
    pub specifications: Vec<RouteSpecification>,
}

impl MessageRoute {
    /// Route to `uri` with no specifications yet.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            specifications: Vec::new(),
        }
    }

    /// Add a specification.
    #[must_use]
    pub fn with_specification(mut self, specification: RouteSpecification) -> Self {
        self.specifications.push(specification);
        self
    }

    /// Whether any specification matches `message_type`.
    #[must_use]
    pub fn is_satisfied_by(&self, message_type: &str) -> bool {
        self.specifications
            .iter()
            .any(|s| s.is_satisfied_by(message_type))
    }
}
