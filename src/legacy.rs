//! Compatibility shim for the classic C-style error protocol.
//!
//! Legacy callers expect every failure signaled the same way: set a global
//! error flag and return `-1`, with no way to tell an overflow from a bad
//! character from empty input. This module preserves that surface for
//! compatibility testing only; [`crate::parse`] is the primary interface
//! and the only one with a distinguishable error taxonomy.
//!
//! The flag is an `AtomicBool`, so individual reads and writes are data-race
//! free, but the call-then-read-flag protocol is NOT safe for concurrent use:
//! two threads interleaving [`str2long`] calls cannot attribute the flag to
//! either call. Callers needing concurrency safety must use [`crate::parse`]
//! exclusively.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::parser::parse;

static ERROR_FLAG: AtomicBool = AtomicBool::new(false);

/// Resets the error flag to false. Call once at program start; nothing
/// else ever clears the flag.
pub fn init() {
    ERROR_FLAG.store(false, Ordering::SeqCst);
}

/// Reads the error flag: true iff some call has failed since [`init`].
pub fn error_flag() -> bool {
    ERROR_FLAG.load(Ordering::SeqCst)
}

/// Parses `input` with collapsed failure signaling: on any failure
/// the error flag is set and `-1` is returned; on success the value is
/// returned and the flag is left untouched (write-once-on-failure, so a
/// later success never clears an earlier failure).
pub fn str2long(input: &str) -> i64 {
    match parse(input) {
        Ok(value) => value,
        Err(_) => {
            ERROR_FLAG.store(true, Ordering::SeqCst);
            -1
        }
    }
}
