//! Send SIGHUP to processes by name

use pokego::poke_process_by_name;

pub fn sighup(name: &str, all: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    poke_process_by_name(name, all, verbose)
        .map_err(|e| format!("SIGHUP failed: {}", e))?;

    Ok(())
}
