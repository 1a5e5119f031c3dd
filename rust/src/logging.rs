//! Verbosity-gated logging to stderr for the solvers.
//!
//! A disabled macro evaluates nothing but the level comparison, so its
//! format arguments are never computed. Levels, from `SolverConfig::verbosity`:
//! - 0: SILENT
//! - 1: SUMMARY (one line with the answer per solver call)
//! - 2: PHASES (sort and predecessor sweep sizes)
//! - 3: DEBUG (predecessor and dp arrays)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_PHASES: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

/// Log at PHASES level (verbosity >= 2).
///
/// Used for: sort phase sizes, predecessor sweep statistics.
#[macro_export]
macro_rules! log_phases {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_PHASES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: full predecessor and dp arrays. Only sensible on small inputs.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    /// How many of the three macros format their arguments at `verbosity`.
    fn fired_at(verbosity: u8) -> usize {
        let mut fired = 0;
        log_summary!(verbosity, "summary {}", {
            fired += 1;
            fired
        });
        log_phases!(verbosity, "phases {}", {
            fired += 1;
            fired
        });
        log_debug!(verbosity, "debug {}", {
            fired += 1;
            fired
        });
        fired
    }

    #[test]
    fn test_each_level_enables_the_ones_below() {
        assert_eq!(fired_at(VERBOSITY_SILENT), 0);
        assert_eq!(fired_at(VERBOSITY_SUMMARY), 1);
        assert_eq!(fired_at(VERBOSITY_PHASES), 2);
        assert_eq!(fired_at(VERBOSITY_DEBUG), 3);
        assert_eq!(fired_at(u8::MAX), 3);
    }
}
