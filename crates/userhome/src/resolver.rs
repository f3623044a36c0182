use userhome_platform::ProbeChain;

use crate::error::{Error, Result};

/// Runs `chain` in order and returns the first non-empty answer.
///
/// A probe error aborts the chain; later probes are not tried.
pub fn resolve(chain: &ProbeChain) -> Result<String> {
    let fact = chain.fact();

    for probe in chain.probes() {
        let answer = probe.probe().map_err(|e| {
            tracing::debug!(%fact, probe = probe.name(), error = %e, "probe failed");
            Error::from(e)
        })?;

        match answer {
            Some(value) if !value.is_empty() => {
                tracing::debug!(%fact, probe = probe.name(), "resolved");
                return Ok(value);
            }
            _ => tracing::trace!(%fact, probe = probe.name(), "no answer"),
        }
    }

    Err(Error::NotDetermined(fact))
}
