use anyhow::{Context, Result, bail};

/// Split a comma-separated CLI value, dropping blanks.
#[must_use]
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve CLI seed tokens into numeric seeds.
///
/// Accepts decimal integers (negative values use their magnitude) and
/// `0x`-prefixed hex.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(hex) = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
        {
            let value = u64::from_str_radix(&hex.replace('_', ""), 16)
                .with_context(|| format!("invalid hex seed '{token}'"))?;
            seeds.push(value);
            continue;
        }

        if let Ok(value) = token.parse::<u64>() {
            seeds.push(value);
            continue;
        }

        if let Ok(value) = token.parse::<i64>() {
            seeds.push(value.unsigned_abs());
            continue;
        }

        bail!("unrecognized seed '{token}'");
    }
    if seeds.is_empty() {
        bail!("no seeds provided");
    }
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_negative_and_hex() {
        let tokens = split_csv("1337, -5,0x00C0_FFEE,,");
        assert_eq!(tokens.len(), 3);
        let seeds = resolve_seed_inputs(&tokens).unwrap();
        assert_eq!(seeds, vec![1337, 5, 0x00C0_FFEE]);
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(resolve_seed_inputs(&["mole".to_string()]).is_err());
        assert!(resolve_seed_inputs(&[]).is_err());
        assert!(resolve_seed_inputs(&["0xZZ".to_string()]).is_err());
    }
}
