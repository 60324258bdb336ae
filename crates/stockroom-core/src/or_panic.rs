//! Opt-in "panic on error" convenience for callers that choose not to check
//! errors (bootstrap code, test fixtures). The error-returning API stays the
//! primary contract; nothing in the services calls this.

use std::fmt::Display;

pub trait OrPanic<T> {
    /// Unwrap the value or panic with the error's display text.
    fn or_panic(self) -> T;
}

impl<T, E: Display> OrPanic<T> for Result<T, E> {
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}
