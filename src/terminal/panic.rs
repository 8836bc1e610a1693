//! Panic hook that restores the terminal before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call early in `main`, after `color_eyre::install()` so its report hook is
/// the one chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Put the default hook back so other tests print normally.
        let _ = panic::take_hook();
    }
}
