//! Exit code constants for the pracfile CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable inputs)
//! - 2: Configuration error
//! - 3: Section generation failure
//! - 4: Output document could not be written

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input files, or an invalid request.
pub const USER_ERROR: i32 = 1;

/// Configuration error: `pracfile.yaml` is unreadable or invalid.
pub const CONFIG_ERROR: i32 = 2;

/// A section's call to the text-generation service failed.
pub const GENERATION_FAILURE: i32 = 3;

/// The assembled document could not be written.
pub const OUTPUT_FAILURE: i32 = 4;
