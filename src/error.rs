//! Error kinds for mock Graph operations.
//!
//! DESIGN
//! ======
//! The upstream service reports failures as bare HTTP-status strings. Here
//! each condition is a typed variant so callers match on kinds instead of
//! parsing messages. `Unauthorized` keeps the original display text because
//! demo consumers key off it.

/// Errors produced by mock Graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A data operation ran while the session was unauthenticated.
    #[error("401 Unauthorized")]
    Unauthorized,

    /// No message, file, or folder with the given identifier exists.
    #[error("item not found: {id}")]
    NotFound {
        /// Identifier or folder name that failed to resolve.
        id: String,
    },

    /// A structurally invalid request (empty recipient list, inverted event times).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A persisted session snapshot could not be deserialized.
    #[error("session snapshot decode failed: {0}")]
    SessionDecode(#[from] serde_json::Error),
}

impl GraphError {
    /// Grepable code for log lines and demo UI branches.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "E_UNAUTHORIZED",
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::InvalidRequest(_) => "E_INVALID_REQUEST",
            Self::SessionDecode(_) => "E_SESSION_DECODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_displays_original_status_line() {
        assert_eq!(GraphError::Unauthorized.to_string(), "401 Unauthorized");
    }

    #[test]
    fn not_found_includes_id() {
        let err = GraphError::NotFound { id: "XXMkADh...".into() };
        assert!(err.to_string().contains("XXMkADh..."));
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            GraphError::Unauthorized.code(),
            GraphError::NotFound { id: String::new() }.code(),
            GraphError::InvalidRequest(String::new()).code(),
        ];
        assert_eq!(codes.len(), codes.iter().collect::<std::collections::HashSet<_>>().len());
    }
}
