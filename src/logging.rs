/// Console logging that only fires when `debug_logs` is enabled in the
/// page configuration. Takes `format!` arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::config::config().debug_logs {
            gloo::console::debug!(format!($($arg)*));
        }
    };
}
