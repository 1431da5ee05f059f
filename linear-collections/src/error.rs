use thiserror::Error;

/// Error returned when an index argument falls outside the valid range of an operation.
///
/// Reads, writes and removals accept `0..len`; insertion additionally accepts `len`.
/// The container is never modified by a call that returns this error.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("Invalid index: {index} (len {len})")]
pub struct IndexError {
    /// The rejected index.
    pub index: usize,
    /// The length of the container at the time of the call.
    pub len: usize,
}

impl IndexError {
    /// Checks `index` against `0..len`, the range used by element access and removal.
    pub(crate) fn check_element(index: usize, len: usize) -> Result<(), IndexError> {
        if index < len {
            Ok(())
        } else {
            Err(IndexError { index, len })
        }
    }

    /// Checks `index` against `0..=len`, the range used by insertion.
    pub(crate) fn check_insert(index: usize, len: usize) -> Result<(), IndexError> {
        if index <= len {
            Ok(())
        } else {
            Err(IndexError { index, len })
        }
    }
}
