//! Process exit codes.

use bt_error::{BtError, ErrorStage};

/// Exit code for a failed run.
///
/// | code | meaning |
/// |------|---------|
/// | 2 | invalid configuration |
/// | 3 | listing could not be fetched completely |
/// | 4 | output could not be produced or written |
/// | 1 | anything else |
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<BtError>().map(BtError::stage) {
        Some(ErrorStage::Setup) => 2,
        Some(ErrorStage::Fetch) => 3,
        Some(ErrorStage::Present) => 4,
        Some(ErrorStage::Unknown) | None => 1,
    }
}
