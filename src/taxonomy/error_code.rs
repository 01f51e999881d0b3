//! Reported error conditions and their default descriptions.
//!
//! These values describe conditions being *reported* by the application.
//! Nothing in this crate raises them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Known business or infrastructure error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "CONFLICT")]
    Conflict,
    #[serde(rename = "DUPLICATE_ENTRY")]
    DbDuplicatedEntry,
    #[serde(rename = "DB_INVALID_PARAMS")]
    DbInvalidParams,
    #[serde(rename = "EXPIRED_TOKEN")]
    ExpiredToken,
    #[serde(rename = "INVALID_BODY")]
    InvalidBody,
    #[serde(rename = "INVALID_PASSWORD")]
    InvalidPassword,
    #[serde(rename = "INVALID_QUERY")]
    InvalidQuery,
    #[serde(rename = "NOT_ALLOWED")]
    NotAllowed,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(rename = "TOKEN_INVALID")]
    TokenInvalid,
    #[serde(rename = "UNAUTHORIZED")]
    Unauthorized,
    #[serde(rename = "UNCAUGHT_EXCEPTION")]
    UncaughtException,
    #[serde(rename = "UNPROCESSED_MESSAGE")]
    UnprocessedMessage,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::Conflict,
        ErrorCode::DbDuplicatedEntry,
        ErrorCode::DbInvalidParams,
        ErrorCode::ExpiredToken,
        ErrorCode::InvalidBody,
        ErrorCode::InvalidPassword,
        ErrorCode::InvalidQuery,
        ErrorCode::NotAllowed,
        ErrorCode::NotFound,
        ErrorCode::TokenInvalid,
        ErrorCode::Unauthorized,
        ErrorCode::UncaughtException,
        ErrorCode::UnprocessedMessage,
    ];

    /// Value rendered in the `[errorCode]` section.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbDuplicatedEntry => "DUPLICATE_ENTRY",
            ErrorCode::DbInvalidParams => "DB_INVALID_PARAMS",
            ErrorCode::ExpiredToken => "EXPIRED_TOKEN",
            ErrorCode::InvalidBody => "INVALID_BODY",
            ErrorCode::InvalidPassword => "INVALID_PASSWORD",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
            ErrorCode::NotAllowed => "NOT_ALLOWED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::TokenInvalid => "TOKEN_INVALID",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UncaughtException => "UNCAUGHT_EXCEPTION",
            ErrorCode::UnprocessedMessage => "UNPROCESSED_MESSAGE",
        }
    }

    /// Message used when an error entry carries none of its own.
    pub const fn default_description(self) -> &'static str {
        match self {
            ErrorCode::Conflict => "Conflict with server current state",
            ErrorCode::DbDuplicatedEntry => "Cannot save duplicated entry in database",
            ErrorCode::DbInvalidParams => {
                "It is not possible to connect to the database, invalid parameters"
            }
            ErrorCode::ExpiredToken => "Token provided is expired",
            ErrorCode::InvalidBody => "Invalid body for HTTP request",
            ErrorCode::InvalidPassword => "Invalid provided password",
            ErrorCode::InvalidQuery => "Invalid query",
            ErrorCode::NotAllowed => "User is not authorized",
            ErrorCode::NotFound => "Cannot find requested resource",
            ErrorCode::TokenInvalid => "Invalid provided token",
            ErrorCode::Unauthorized => "Client is not authorized to access resource",
            ErrorCode::UncaughtException => "Uncaught exception",
            ErrorCode::UnprocessedMessage => "Unprocessed message",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown error code: {0:?}")]
pub struct ParseErrorCodeError(pub String);

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}
