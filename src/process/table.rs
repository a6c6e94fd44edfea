//! Live process table

use std::ffi::OsString;
use std::path::Path;

use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, ThreadKind, UpdateKind};

/// Length at which the kernel truncates a task's `comm` name
const COMM_LEN: usize = 15;

/// One entry of the process table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Display name; `None` when it could not be resolved
    pub name: Option<String>,
    pub cmdline: String,
}

/// Source of running processes.
///
/// The order of the returned entries is implementation-defined and not
/// guaranteed to be stable across calls.
pub trait ProcessTable {
    fn processes(&self) -> Vec<ProcessInfo>;
}

/// Process table backed by the OS, via sysinfo
#[derive(Debug, Default)]
pub struct SystemProcessTable;

impl ProcessTable for SystemProcessTable {
    fn processes(&self) -> Vec<ProcessInfo> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::OnlyIfNotSet),
        );

        let own_pid = std::process::id();

        system
            .processes()
            .iter()
            .filter(|(_, process)| !is_userland_thread(process.thread_kind()))
            .filter(|(pid, _)| pid.as_u32() != own_pid)
            .map(|(pid, process)| {
                let comm = process.name().to_string_lossy();
                let cmdline = process
                    .cmd()
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ");
                ProcessInfo {
                    pid: pid.as_u32(),
                    name: display_name(&comm, process.cmd()),
                    cmdline,
                }
            })
            .collect()
    }
}

/// Linux lists every thread of a process as its own entry. Kernel threads
/// (kthreadd, kworker/...) are tasks in their own right and stay listed.
fn is_userland_thread(kind: Option<ThreadKind>) -> bool {
    matches!(kind, Some(ThreadKind::Userland))
}

/// Resolve the name a process is known by.
///
/// `comm` is cut to 15 bytes by the kernel. When it is that long, the
/// basename of `argv[0]` is used instead if it extends the truncated name.
fn display_name(comm: &str, cmd: &[OsString]) -> Option<String> {
    if comm.is_empty() {
        return None;
    }
    if comm.len() >= COMM_LEN {
        let full = cmd
            .first()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|base| base.to_string_lossy());
        if let Some(full) = full {
            if full.starts_with(comm) {
                return Some(full.into_owned());
            }
        }
    }
    Some(comm.to_string())
}
