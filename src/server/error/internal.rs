use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row that was just written could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Name of the entity that was written
        entity: &'static str,
        /// Primary key of the written row
        id: i32,
    },
}
