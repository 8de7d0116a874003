//! # sigfmt-fd
//!
//! Binds the sigfmt-core raw-write seam to Unix file descriptors. This is
//! the only crate in the workspace that issues system calls, and `write`
//! is the only one it issues: no open, no close, no stat. The caller owns
//! the descriptor's lifecycle.
//!
//! The retry loop treats interrupted (`EINTR`) and would-block (`EAGAIN`)
//! failures as transient and everything else as final, reporting how many
//! bytes actually landed. Nothing here consults or clears global error
//! state outside that decision, and nothing allocates, so the whole path
//! stays safe to run inside a signal handler.

use std::os::fd::RawFd;

use sigfmt_core::writebuf::{RawWrite, WriteBuf};

/// Standard output descriptor.
pub const STDOUT_FD: RawFd = 1;

/// Standard error descriptor.
pub const STDERR_FD: RawFd = 2;

/// Raw writer bound to one file descriptor.
#[derive(Debug, Clone, Copy)]
pub struct FdWriter {
    fd: RawFd,
}

impl FdWriter {
    pub fn new(fd: RawFd) -> Self {
        Self { fd }
    }

    pub fn fd(&self) -> RawFd {
        self.fd
    }
}

impl RawWrite for FdWriter {
    fn write_all(&mut self, buf: &[u8]) -> usize {
        sys_write_all(self.fd, buf)
    }
}

/// Writes all of `buf` to `fd`, retrying transient failures.
///
/// Returns the number of bytes written, in `0..=buf.len()`. Short counts
/// from the kernel restart the loop; `EINTR` and `EAGAIN` restart it too;
/// any other failure stops early with whatever was already written. The
/// syscall's `-1` never escapes this function.
pub fn sys_write_all(fd: RawFd, buf: &[u8]) -> usize {
    let mut written = 0;
    while written < buf.len() {
        let remaining = &buf[written..];
        let rc = unsafe {
            libc::write(
                fd,
                remaining.as_ptr().cast::<libc::c_void>(),
                remaining.len(),
            )
        };
        if rc < 0 {
            match std::io::Error::last_os_error().raw_os_error() {
                Some(libc::EINTR) | Some(libc::EAGAIN) => continue,
                _ => break,
            }
        }
        written += rc as usize;
    }
    written
}

/// Write buffer draining to a file descriptor.
pub type FdWriteBuf<'a> = WriteBuf<'a, FdWriter>;

/// Binds caller-owned `storage` to `fd`.
pub fn fd_buf(fd: RawFd, storage: &mut [u8]) -> FdWriteBuf<'_> {
    WriteBuf::new(FdWriter::new(fd), storage)
}

/// Binds caller-owned `storage` to standard output.
pub fn stdout_buf(storage: &mut [u8]) -> FdWriteBuf<'_> {
    fd_buf(STDOUT_FD, storage)
}

/// Binds caller-owned `storage` to standard error.
pub fn stderr_buf(storage: &mut [u8]) -> FdWriteBuf<'_> {
    fd_buf(STDERR_FD, storage)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
