//! Process poke: find processes by name and signal them to reload
//!
//! ```text
//! discover ──(no match)──> fail
//!    │
//! select (first | all)
//!    │
//! deliver each ──(warn on failure, continue)
//!    │
//! aggregate ──(0 delivered)──> fail
//!    └──(≥1 delivered)──> ok
//! ```
//!
//! Which process is "first" depends on the enumeration order of the
//! process table, which is implementation-defined.

mod signal;
mod table;

pub use signal::{KillSender, SignalSender, RELOAD_SIGNAL};
pub use table::{ProcessInfo, ProcessTable, SystemProcessTable};

use log::{info, warn};

use crate::error::PokeError;

/// How many matching processes to signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Stop at the first match
    #[default]
    First,
    /// Signal every match
    All,
}

impl MatchMode {
    pub fn from_all_flag(all: bool) -> Self {
        if all {
            MatchMode::All
        } else {
            MatchMode::First
        }
    }
}

/// Outcome of a process poke
#[derive(Debug, Default)]
pub struct DeliveryTally {
    /// PIDs selected for delivery, in enumeration order
    pub matched: Vec<u32>,
    pub delivered: usize,
    pub last_error: Option<PokeError>,
}

impl DeliveryTally {
    pub fn attempted(&self) -> usize {
        self.matched.len()
    }

    pub fn is_partial(&self) -> bool {
        self.delivered > 0 && self.delivered < self.attempted()
    }

    /// Warning logged when only part of a fan-out was delivered
    pub fn partial_warning(&self) -> Option<String> {
        self.is_partial().then(|| {
            format!(
                "Only sent signal to {} out of {} processes",
                self.delivered,
                self.attempted()
            )
        })
    }
}

/// A process matches if its name equals `target` or contains it
pub fn name_matches(name: &str, target: &str) -> bool {
    name == target || name.contains(target)
}

/// Select the PIDs to signal. Processes whose name could not be resolved
/// are skipped.
pub fn discover(table: &impl ProcessTable, target: &str, mode: MatchMode, verbose: bool) -> Vec<u32> {
    let mut found = Vec::new();

    for process in table.processes() {
        let Some(name) = process.name.as_deref() else {
            continue;
        };
        if !name_matches(name, target) {
            continue;
        }

        if verbose {
            info!(
                "Found process: PID={}, Name={}, Cmdline={}",
                process.pid, name, process.cmdline
            );
        }
        found.push(process.pid);

        if mode == MatchMode::First {
            break;
        }
    }

    found
}

/// Find processes named `target` and send each the reload signal.
///
/// A failed delivery is logged and does not stop the rest. The call fails
/// only when nothing matched or when no delivery succeeded; partial success
/// in [`MatchMode::All`] is logged as a warning and still returns `Ok`.
pub fn poke_process(
    table: &impl ProcessTable,
    sender: &impl SignalSender,
    target: &str,
    mode: MatchMode,
    verbose: bool,
) -> Result<DeliveryTally, PokeError> {
    let matched = discover(table, target, mode, verbose);
    if matched.is_empty() {
        return Err(PokeError::NoMatch(target.to_string()));
    }

    let mut tally = DeliveryTally {
        matched,
        ..Default::default()
    };

    for &pid in &tally.matched {
        match sender.send(pid, RELOAD_SIGNAL) {
            Ok(()) => {
                info!(
                    "Successfully poked process {} (PID: {}) with {}",
                    target, pid, RELOAD_SIGNAL
                );
                tally.delivered += 1;
            }
            Err(e) => {
                warn!("{}", e);
                tally.last_error = Some(e);
            }
        }
    }

    if tally.delivered == 0 {
        let last = tally
            .last_error
            .take()
            .unwrap_or(PokeError::NoMatch(target.to_string()));
        return Err(PokeError::NoneDelivered(Box::new(last)));
    }

    if let Some(msg) = tally.partial_warning() {
        warn!("{}", msg);
    }

    Ok(tally)
}

/// [`poke_process`] against the live process table with kill(2)
pub fn poke_process_by_name(target: &str, all: bool, verbose: bool) -> Result<DeliveryTally, PokeError> {
    poke_process(
        &SystemProcessTable,
        &KillSender,
        target,
        MatchMode::from_all_flag(all),
        verbose,
    )
}
