//! Operating system entropy access (macOS)
//!
//! `arc4random_buf` cannot fail and never returns short, so no retry
//! loop is needed. Despite the legacy name it has been backed by a
//! kernel-seeded ChaCha20 generator since macOS 10.12.

use libc::arc4random_buf;

pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }
}
