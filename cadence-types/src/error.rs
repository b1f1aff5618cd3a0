use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the cadence workspace.
///
/// Covers capability mismatches, argument validation, connector-tagged
/// failures, period resolution outcomes, and an aggregate for
/// multi-connector attempts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CadenceError {
    /// No registered connector serves the requested capability.
    #[error("no connector serves {capability}")]
    Unsupported {
        /// Capability label, e.g. "series" or "catalog".
        capability: String,
    },

    /// Malformed provider payload, such as an unknown period code.
    #[error("malformed data: {0}")]
    Data(String),

    /// A caller-supplied value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A single connector reported a failure.
    #[error("connector {connector}: {msg}")]
    Connector {
        /// Name of the failing connector.
        connector: String,
        /// Failure description.
        msg: String,
    },

    /// Anything not covered by another variant.
    #[error("{0}")]
    Other(String),

    /// A series, or an explicitly selected period, could not be found.
    ///
    /// For a frozen period this means the caller should clear the selection
    /// and fall back to live mode rather than retry.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "period 2022-M07".
        what: String,
    },

    /// Live resolution found no row carrying a value for the requested series.
    #[error("no data: {what}")]
    NoData {
        /// Description of what was being resolved.
        what: String,
    },

    /// Every attempted connector failed; holds each failure in connector order.
    #[error("every connector failed: {0:?}")]
    AllProvidersFailed(Vec<CadenceError>),

    /// One connector did not answer within the provider timeout.
    #[error("{connector} did not answer {capability} in time")]
    ProviderTimeout {
        /// Name of the slow connector.
        connector: String,
        /// Capability label, e.g. "series".
        capability: String,
    },

    /// A whole multi-series request ran past its deadline.
    #[error("deadline exceeded for {capability}")]
    RequestTimeout {
        /// Capability label, e.g. "load:series".
        capability: String,
    },

    /// Every attempted connector hit the provider timeout.
    #[error("no connector answered {capability} in time")]
    AllProvidersTimedOut {
        /// Capability label, e.g. "series".
        capability: String,
    },
}

impl CadenceError {
    /// `Unsupported` for a capability label.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// `Connector` failure attributed to `connector`.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// `NotFound` for a description such as `"series CUUR0000SA0"`.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// `NoData` for a description of what was being resolved.
    pub fn no_data(what: impl Into<String>) -> Self {
        Self::NoData { what: what.into() }
    }

    /// `ProviderTimeout` for one connector and capability.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// `RequestTimeout` for a capability label.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Whether a UI should show this as an error rather than a placeholder.
    ///
    /// Missing capabilities, unknown series and periods without data render
    /// as empty states. An aggregate is actionable if any member is.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        match self {
            Self::Unsupported { .. } | Self::NotFound { .. } | Self::NoData { .. } => false,
            Self::AllProvidersFailed(errors) => errors.iter().any(Self::is_actionable),
            _ => true,
        }
    }

    /// Leaf errors of a possibly nested `AllProvidersFailed`, depth first.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(errors) => {
                errors.into_iter().flat_map(Self::flatten).collect()
            }
            leaf => vec![leaf],
        }
    }
}
