//! Error types for the IAC runtime

use thiserror::Error;

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, IacError>;

/// Errors raised while building or driving an IAC network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IacError {
    /// A unit name appears in more than one pool
    #[error("Unit '{unit}' appears in pool {first_pool} and pool {second_pool}")]
    DuplicateUnit {
        /// Offending unit name
        unit: String,
        /// Pool index of the first occurrence
        first_pool: usize,
        /// Pool index of the repeated occurrence
        second_pool: usize,
    },

    /// Reference to a unit that is not part of the network
    #[error("Unit '{unit}' not found")]
    UnknownUnit {
        /// Unit name that was not found
        unit: String,
    },

    /// Excitatory link declared from a unit outside the anchor pool
    #[error("Link source '{unit}' is not a member of the anchor pool (pool {anchor_pool})")]
    InvalidLinkSource {
        /// Declared source unit
        unit: String,
        /// Index of the anchor pool
        anchor_pool: usize,
    },

    /// A connection would join a node to itself
    #[error("Self-connection requested for unit '{unit}'")]
    SelfConnection {
        /// Unit that would be connected to itself
        unit: String,
    },

    /// Invalid network configuration
    #[error("Invalid network configuration: {reason}")]
    InvalidConfiguration {
        /// Reason for invalid configuration
        reason: String,
    },

    /// Invalid parameter value
    #[error("Invalid parameter {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl IacError {
    /// Create a duplicate unit error
    pub fn duplicate_unit(unit: impl Into<String>, first_pool: usize, second_pool: usize) -> Self {
        Self::DuplicateUnit {
            unit: unit.into(),
            first_pool,
            second_pool,
        }
    }

    /// Create an unknown unit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }

    /// Create an invalid link source error
    pub fn invalid_link_source(unit: impl Into<String>, anchor_pool: usize) -> Self {
        Self::InvalidLinkSource {
            unit: unit.into(),
            anchor_pool,
        }
    }

    /// Create a self-connection error
    pub fn self_connection(unit: impl Into<String>) -> Self {
        Self::SelfConnection { unit: unit.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = IacError::invalid_config("no pools");
        assert!(matches!(err, IacError::InvalidConfiguration { .. }));

        let err = IacError::invalid_parameter("decay", "-0.5", ">= 0.0");
        assert!(matches!(err, IacError::InvalidParameter { .. }));

        let err = IacError::duplicate_unit("apple", 0, 2);
        assert_eq!(
            err,
            IacError::DuplicateUnit {
                unit: "apple".into(),
                first_pool: 0,
                second_pool: 2,
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = IacError::unknown_unit("kiwi");
        assert_eq!(err.to_string(), "Unit 'kiwi' not found");

        let err = IacError::invalid_link_source("healthy", 0);
        assert!(err.to_string().contains("anchor pool"));

        let err = IacError::self_connection("apple");
        assert!(err.to_string().contains("'apple'"));
    }
}
