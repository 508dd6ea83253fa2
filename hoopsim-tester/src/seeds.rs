use anyhow::{Context, Result, bail};
use std::collections::HashSet;

/// Fallback seed when no usable token is supplied.
pub const DEFAULT_SEED: u64 = 1337;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Resolve CLI seed tokens into concrete seeds.
///
/// Accepts decimal integers (negative values use their magnitude), `0x`
/// hexadecimal, and the keyword `random`, which draws a fresh seed from
/// system entropy. Duplicates are dropped, first occurrence wins.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    let mut seen = HashSet::new();

    for token in tokens {
        let seed = parse_seed_token(token)?;
        if seen.insert(seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }
    Ok(seeds)
}

fn parse_seed_token(token: &str) -> Result<u64> {
    if token.eq_ignore_ascii_case("random") {
        let seed = rand::random::<u64>();
        log::info!("drew random seed {seed}");
        return Ok(seed);
    }

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hexadecimal seed: {token}"));
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value.unsigned_abs());
    }

    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }

    bail!("Unrecognized seed token: {token}");
}
