//! Input validation errors for the trace generators
//!
//! Every failure in this crate is an invalid-input failure: generators
//! validate their parameters up front and refuse to produce a trace, so
//! there is never a partially-built trace to clean up. The messages are
//! user-facing; the binary prints them verbatim.

use thiserror::Error;

/// Invalid input rejected before trace generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Array must not be empty")]
    EmptyArray,

    #[error("Array size must be at most {max} (got {got})")]
    ArrayTooLarge { got: usize, max: usize },

    #[error("Array must be sorted in ascending order for binary search")]
    UnsortedArray,

    #[error("Number of disks must be between 1 and {max} (got {got})")]
    DiskCountOutOfRange { got: usize, max: usize },

    #[error("Process list must not be empty")]
    NoProcesses,

    #[error("Too many processes: at most {max} (got {got})")]
    TooManyProcesses { got: usize, max: usize },

    #[error("Process '{name}' must have a positive burst time")]
    ZeroBurstTime { name: String },

    #[error("Time quantum must be a positive integer")]
    InvalidTimeQuantum,

    #[error("Request queue must not be empty")]
    NoRequests,

    #[error("Cylinder {cylinder} is outside the disk range 0..{cylinders}")]
    CylinderOutOfRange { cylinder: u32, cylinders: u32 },

    #[error("Disk must have between 1 and {max} cylinders (got {got})")]
    CylinderCountOutOfRange { got: u32, max: u32 },

    #[error("Frame count must be between 1 and {max} (got {got})")]
    FrameCountOutOfRange { got: usize, max: usize },

    #[error("Reference string must not be empty")]
    EmptyReferenceString,
}
