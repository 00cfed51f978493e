//! Operating system entropy access (Linux)
//!
//! Randomness is drawn with the `getrandom` system call, which reads the
//! kernel entropy pool directly and blocks only until the pool has been
//! initialized once after boot. This is the recommended interface for
//! cryptographic seeding on Linux; no device file needs to be opened.

use libc::{c_void, getrandom};

/// Fills a buffer with random bytes from the kernel.
///
/// `getrandom` may return fewer bytes than requested (signal interruption,
/// requests above the syscall's per-call limit), so the call is repeated
/// until the buffer is full.
///
/// # Panics
/// Panics if the system call reports an error. On Linux this indicates a
/// kernel too old to support it or a broken environment; neither can be
/// recovered from in code that needs the bytes for seeding.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            panic!("getrandom() failed");
        }

        filled += ret as usize;
    }
}
