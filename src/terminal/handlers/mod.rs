//! Terminal escape sequence handlers.
//!
//! Only SGR sequences change state; every other recognized sequence is
//! dropped from the output and logged here.

pub mod style;

use tracing::trace;

/// Log a recognized sequence that has no effect on the rendering.
pub fn log_discarded_csi(action: char, params: &str) {
    trace!(
        action = %action,
        params = params,
        "Discarding non-SGR CSI sequence"
    );
}
