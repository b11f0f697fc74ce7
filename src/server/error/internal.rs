use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored role string is not one of `ADMIN`, `TEACHER` or `STUDENT`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse role from String '{value}'")]
    ParseRole {
        /// The string value that failed to parse
        value: String,
    },

    /// A transaction finished but the row it wrote could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite { entity: &'static str, id: i32 },
}
