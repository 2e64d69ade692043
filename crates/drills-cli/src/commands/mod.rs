//! One runner per exercise. Runners take their reader/writer as arguments
//! so they can be driven from stdin/stdout or from in-memory buffers.
use drills_core::DrillError;

pub mod matrix;
pub mod sequence;
pub mod sign;
pub mod smallest;
pub mod sort;

/// Exit status for input errors (parse failures, rejected values).
pub const EXIT_INPUT_ERROR: i32 = 2;
/// Exit status for everything else.
pub const EXIT_FAILURE: i32 = 1;

pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<DrillError>() {
        Some(e) if e.is_user_error() => EXIT_INPUT_ERROR,
        _ => EXIT_FAILURE,
    }
}
