use anyhow::{Context, Result};
use snmp2::Oid;

/// Parses a dotted OID such as `1.3.6.1.2.1.1.2.0`. A leading dot is allowed.
pub fn parse_oid(s: &str) -> Result<Oid<'static>> {
    let parts = oid_components(s)?;
    Oid::from(&parts).map_err(|e| anyhow::anyhow!("cannot build OID from '{}': {:?}", s, e))
}

fn oid_components(s: &str) -> Result<Vec<u64>> {
    let trimmed = s.trim();
    let parts = trimmed
        .strip_prefix('.')
        .unwrap_or(trimmed)
        .split('.')
        .map(|p| p.parse::<u64>())
        .collect::<Result<Vec<u64>, _>>()
        .context(format!("invalid OID: '{}'", s))?;

    if parts.len() < 2 {
        anyhow::bail!("OID '{}' needs at least two components", s);
    }

    Ok(parts)
}
