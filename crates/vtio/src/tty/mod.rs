//! OS-level terminal setup: raw/cbreak mode, settings snapshot/restore,
//! and window-size queries. This is the only module permitted to make
//! platform system calls.

use std::os::fd::{AsRawFd, BorrowedFd};

use nix::sys::termios::{self, Termios};

use crate::error::TtyError;

/// Opaque terminal settings captured by [`settings_snapshot`], restorable
/// with [`settings_restore`].
#[derive(Debug, Clone)]
pub struct Settings(Termios);

/// Read the terminal's current settings.
///
/// # Errors
///
/// Returns [`TtyError`] if `tcgetattr` fails.
pub fn settings_snapshot(fd: BorrowedFd<'_>) -> Result<Settings, TtyError> {
    termios::tcgetattr(fd)
        .map(Settings)
        .map_err(|source| TtyError::Os { call: "tcgetattr", source })
}

/// Apply previously captured `settings`.
///
/// # Errors
///
/// Returns [`TtyError`] if `tcsetattr` fails.
pub fn settings_restore(fd: BorrowedFd<'_>, settings: &Settings) -> Result<(), TtyError> {
    termios::tcsetattr(fd, termios::SetArg::TCSADRAIN, &settings.0)
        .map_err(|source| TtyError::Os { call: "tcsetattr", source })
}

/// Put `fd` into cbreak+raw mode: canonical processing and signal
/// generation disabled, then `ECHO` and `ICRNL` cleared explicitly on
/// top of `cfmakeraw`'s defaults, applied with `TCSADRAIN`.
///
/// # Errors
///
/// Returns [`TtyError`] if `tcgetattr`/`tcsetattr` fail.
pub fn set_raw(fd: BorrowedFd<'_>) -> Result<(), TtyError> {
    let mut attrs = termios::tcgetattr(fd)
        .map_err(|source| TtyError::Os { call: "tcgetattr", source })?;
    termios::cfmakeraw(&mut attrs);
    attrs.local_flags.remove(termios::LocalFlags::ECHO);
    attrs.input_flags.remove(termios::InputFlags::ICRNL);
    termios::tcsetattr(fd, termios::SetArg::TCSADRAIN, &attrs)
        .map_err(|source| TtyError::Os { call: "tcsetattr", source })
}

/// Query the physical terminal's `(columns, rows)` via `TIOCGWINSZ`.
///
/// # Errors
///
/// Returns [`TtyError`] if the ioctl fails.
pub fn dimensions(fd: BorrowedFd<'_>) -> Result<(u16, u16), TtyError> {
    nix::ioctl_read_bad!(window_size, nix::libc::TIOCGWINSZ, nix::libc::winsize);

    let mut size = nix::libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    unsafe { window_size(fd.as_raw_fd(), std::ptr::addr_of_mut!(size)) }
        .map_err(|source| TtyError::Os { call: "ioctl(TIOCGWINSZ)", source })?;
    Ok((size.ws_col, size.ws_row))
}

/// RAII guard over [`set_raw`]: acquiring it snapshots the current
/// settings and enters raw mode; dropping it restores the snapshot.
///
/// This is the only way most callers should enter raw mode, since it
/// guarantees restoration runs on every exit path out of its scope,
/// including an unwinding panic.
pub struct RawGuard<'fd> {
    fd: BorrowedFd<'fd>,
    settings: Settings,
}

impl<'fd> RawGuard<'fd> {
    /// Snapshot `fd`'s current settings, enter raw mode, and return a
    /// guard that restores the snapshot on drop.
    ///
    /// # Errors
    ///
    /// Returns [`TtyError`] if either the snapshot or the raw-mode
    /// transition fails; on failure no mode change is left applied.
    pub fn acquire(fd: BorrowedFd<'fd>) -> Result<Self, TtyError> {
        let settings = settings_snapshot(fd)?;
        set_raw(fd)?;
        Ok(Self { fd, settings })
    }
}

impl Drop for RawGuard<'_> {
    fn drop(&mut self) {
        if let Err(error) = settings_restore(self.fd, &self.settings) {
            tracing::warn!(%error, "failed to restore terminal settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::fd::AsFd;

    #[test]
    fn dimensions_on_a_non_tty_is_an_error_not_a_panic() {
        let file = File::open("/dev/null").expect("/dev/null opens");
        assert!(dimensions(file.as_fd()).is_err());
    }

    #[test]
    fn settings_snapshot_on_a_non_tty_is_an_error() {
        let file = File::open("/dev/null").expect("/dev/null opens");
        assert!(settings_snapshot(file.as_fd()).is_err());
    }
}
