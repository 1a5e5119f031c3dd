//! LSD radix sort over non-negative integer keys.

use super::{SortKey, SortingError};
use crate::models::JobRecord;

/// Largest key that survives the `f64 -> u64` conversion exactly.
const MAX_EXACT_KEY: f64 = 9_007_199_254_740_992.0;
/// Largest digit base; one counter per digit value is allocated per pass.
pub(crate) const MAX_BASE: u32 = 1 << 16;

/// Reject bases that cannot make progress (0, 1) or would over-allocate.
pub(crate) fn check_base(base: u32) -> Result<(), SortingError> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(SortingError::InvalidConfig(format!(
            "radix base must be in 2..={}, got {}",
            MAX_BASE, base
        )));
    }
    Ok(())
}

fn radix_key(value: f64) -> Result<u64, SortingError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT_KEY {
        return Err(SortingError::UnsupportedKeyDomain {
            strategy: "radix",
            value,
        });
    }
    Ok(value as u64)
}

/// Sort `records` in place, one stable counting pass per digit.
///
/// Passes stop once the current digit position exceeds the largest key.
/// Fails before touching `records` if the base is out of range or any key is
/// outside the integer domain.
pub(super) fn sort<T: JobRecord>(
    records: &mut [T],
    key: SortKey,
    base: u32,
) -> Result<(), SortingError> {
    check_base(base)?;
    let mut keyed: Vec<(u64, T)> = records
        .iter()
        .map(|r| Ok((radix_key(r.key(key))?, *r)))
        .collect::<Result<_, SortingError>>()?;

    let max_key = keyed.iter().map(|(k, _)| *k).max().unwrap_or(0);
    let base = u64::from(base);
    let mut scratch = keyed.clone();
    let mut counts = vec![0usize; base as usize];
    let mut exp: u64 = 1;

    while max_key / exp > 0 {
        counts.fill(0);
        for (k, _) in &keyed {
            counts[((k / exp) % base) as usize] += 1;
        }

        let mut total = 0;
        for count in counts.iter_mut() {
            let c = *count;
            *count = total;
            total += c;
        }

        for item in &keyed {
            let digit = ((item.0 / exp) % base) as usize;
            scratch[counts[digit]] = *item;
            counts[digit] += 1;
        }
        std::mem::swap(&mut keyed, &mut scratch);

        match exp.checked_mul(base) {
            Some(next) => exp = next,
            None => break,
        }
    }

    for (dst, (_, record)) in records.iter_mut().zip(keyed) {
        *dst = record;
    }
    Ok(())
}
