//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal before the original hook
/// prints the panic message.
///
/// Call after `color_eyre::install()` so its report hook is the one chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
