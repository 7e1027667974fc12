// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while validating caller supplied values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent or null.
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field is present but has the wrong type or is out of range.
    #[error("{field} must be {expected}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,

        /// Human readable description of the accepted values.
        expected: &'static str,
    },

    /// The year, month and day do not form a Gregorian calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidDate {
        /// Year as supplied.
        year: i64,

        /// Month as supplied.
        month: i64,

        /// Day as supplied.
        day: i64,
    },

    /// A time of day that is not `HH:MM`.
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
}

/// Errors raised by a [`Store`](crate::Store) implementation.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The stored record was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Errors raised while normalizing a [`Config`](crate::Config).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The Hijri day offset is outside the accepted range.
    #[error(
        "hijri_offset must be between -{max} and {max}, got {0}",
        max = crate::MAX_HIJRI_OFFSET
    )]
    HijriOffset(i8),

    /// A configured value is invalid.
    #[error("invalid {section}: {source}")]
    Invalid {
        /// The configuration section holding the value.
        section: &'static str,

        /// The underlying validation failure.
        source: ValidationError,
    },
}

/// Error returned by the request boundary, carrying its response status.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request fields, answered with 400.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist, answered with 404.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure, answered with 500. The message is generic.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// The HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// Maps a store failure to a boundary error, logging the detail that is
    /// withheld from the caller.
    pub(crate) fn from_store(err: StoreError, context: &'static str) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::Validation(e),
            err => {
                tracing::error!(%err, context, "store operation failed");
                ApiError::Internal(context)
            }
        }
    }
}
