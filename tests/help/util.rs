#![allow(dead_code)]

use signal_raise::SignalNumber;


/// Pointer to a signal-catching function of the non-`SA_SIGINFO` type.
pub(crate) type Handler = extern "C" fn(signo: SignalNumber);


pub(crate) fn install_handler(signum: SignalNumber, handler: Handler) {
    #![allow(unsafe_code, clippy::fn_to_numeric_cast_any, clippy::as_conversions)]
    // SAFETY: The arguments are proper, and `handler` is async-signal-safe.
    let r = unsafe { libc::signal(signum, handler as libc::sighandler_t) };
    assert_ne!(r, libc::SIG_ERR, "will succeed, because the signal number is valid");
}

pub(crate) fn uninstall_handler(signum: SignalNumber) {
    #![allow(unsafe_code)]
    // SAFETY: `SIG_DFL` handling is async-signal-safe, because no user function is called.
    let r = unsafe { libc::signal(signum, libc::SIG_DFL) };
    assert_ne!(r, libc::SIG_ERR, "will succeed, because the signal number is valid");
}
