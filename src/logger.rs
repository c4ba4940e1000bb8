//! Console output for a conversion run.
//!
//! Success lines go through `info!` and vanish under `--quiet`. Per-file
//! failures go through `error!`, share stdout with the success lines and are
//! never suppressed. `warn!` is for trouble outside a single file, such as an
//! unreadable subdirectory, and writes to stderr. `verbose!` carries sizes and
//! the closing summary.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

/// Set once from the command line before the run starts.
pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

/// Read by the exported macros; public only so `$crate::logger` resolves.
#[doc(hidden)]
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Success line on stdout, hidden in quiet mode.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!($($arg)*);
        }
    };
}

/// Detail line on stdout, shown only in verbose mode.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() && !$crate::logger::is_quiet() {
            println!("🔍 {}", format!($($arg)*));
        }
    };
}

/// Per-file failure on stdout. Quiet mode does not hide it.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        println!("{} {}", $crate::constants::ERROR_PREFIX, format!($($arg)*));
    };
}

/// Walk-level warning on stderr, hidden in quiet mode.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            eprintln!("{}  {}", $crate::constants::WARNING_PREFIX, format!($($arg)*));
        }
    };
}
