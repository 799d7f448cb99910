//! Exit code constants for the hottakes CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config)
//! - 2: Dataset failure (unreadable or malformed dataset, no takes)
//! - 3: Resolution failure (a bracket group had no valid placeholder)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// Dataset failure: the dataset could not be loaded or has nothing to generate from.
pub const DATASET_FAILURE: i32 = 2;

/// Resolution failure: a template contained a bracket group that resolved to nothing.
pub const RESOLUTION_FAILURE: i32 = 3;
