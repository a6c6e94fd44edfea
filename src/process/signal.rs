//! Signal delivery

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::error::PokeError;

/// Signal conventionally read as "reload configuration"
pub const RELOAD_SIGNAL: Signal = Signal::SIGHUP;

/// Delivers a signal to a process by PID
pub trait SignalSender {
    fn send(&self, pid: u32, signal: Signal) -> Result<(), PokeError>;
}

/// Sends signals with kill(2)
#[derive(Debug, Default)]
pub struct KillSender;

impl SignalSender for KillSender {
    fn send(&self, pid: u32, signal: Signal) -> Result<(), PokeError> {
        // PIDs that don't fit (or would address a process group) can't be a single process
        let raw = i32::try_from(pid)
            .ok()
            .filter(|raw| *raw > 0)
            .ok_or(PokeError::InvalidPid(pid))?;

        kill(Pid::from_raw(raw), signal).map_err(|source| PokeError::Signal {
            pid,
            signal,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;

    #[test]
    fn rejects_pid_zero() {
        let err = KillSender.send(0, RELOAD_SIGNAL).unwrap_err();
        assert!(matches!(err, PokeError::InvalidPid(0)));
    }

    #[test]
    fn rejects_out_of_range_pid() {
        let err = KillSender.send(u32::MAX, RELOAD_SIGNAL).unwrap_err();
        assert!(matches!(err, PokeError::InvalidPid(u32::MAX)));
    }

    #[test]
    fn delivers_sighup_to_child() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();

        KillSender.send(child.id(), RELOAD_SIGNAL).unwrap();

        // sleep has no SIGHUP handler, so the default action terminates it
        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(Signal::SIGHUP as i32));
    }
}
