//! Distribution-adaptive spread sort for float keys.
//!
//! Each key is mapped to a `u64` whose unsigned order matches the float
//! order, then segments are split MSD-first on the bits that actually vary
//! inside the segment. The bin count adapts to the segment size, so uniform
//! data finishes in one or two passes and no key range has to be supplied.

use super::SortKey;
use crate::models::JobRecord;

/// Segments smaller than this are finished with a comparison sort.
const MIN_SEGMENT: usize = 32;
/// Upper bound on bins per pass, as `log2(bins)`.
const MAX_BITS_PER_PASS: u32 = 11;

/// Map a float to an unsigned integer with the same ordering.
///
/// Negative values have all bits flipped, positive values only the sign bit.
#[inline]
fn ordered_bits(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

pub(super) fn sort<T: JobRecord>(records: &mut [T], key: SortKey) {
    let n = records.len();
    if n < 2 {
        return;
    }

    let mut keyed: Vec<(u64, T)> = records
        .iter()
        .map(|r| (ordered_bits(r.key(key)), *r))
        .collect();
    let mut scratch = keyed.clone();
    let mut counts: Vec<usize> = Vec::new();
    let mut stack: Vec<(usize, usize)> = vec![(0, n)];

    while let Some((lo, hi)) = stack.pop() {
        let segment = &mut keyed[lo..hi];
        let len = segment.len();
        if len < MIN_SEGMENT {
            segment.sort_unstable_by_key(|(k, _)| *k);
            continue;
        }

        let (min, max) = segment
            .iter()
            .fold((u64::MAX, 0), |(a, b), (k, _)| (a.min(*k), b.max(*k)));
        if min == max {
            continue;
        }

        // Split on the top `bin_bits` of the live range `max - min`
        let span_bits = u64::BITS - (max - min).leading_zeros();
        let size_bits = usize::BITS - len.leading_zeros();
        let bin_bits = size_bits.min(MAX_BITS_PER_PASS).min(span_bits);
        let shift = span_bits - bin_bits;
        let bins = 1usize << bin_bits;

        counts.clear();
        counts.resize(bins, 0);
        for (k, _) in segment.iter() {
            counts[((k - min) >> shift) as usize] += 1;
        }
        let mut total = 0;
        for count in counts.iter_mut() {
            let c = *count;
            *count = total;
            total += c;
        }

        let out = &mut scratch[lo..hi];
        for item in segment.iter() {
            let bin = ((item.0 - min) >> shift) as usize;
            out[counts[bin]] = *item;
            counts[bin] += 1;
        }
        segment.copy_from_slice(out);

        // With no bits left below the bin, every bin holds a single key
        if shift == 0 {
            continue;
        }
        let mut start = 0;
        for &end in &counts {
            if end - start > 1 {
                stack.push((lo + start, lo + end));
            }
            start = end;
        }
    }

    for (dst, (_, record)) in records.iter_mut().zip(keyed) {
        *dst = record;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::sorting::tests::assert_sorted;

    #[test]
    fn test_ordered_bits_preserves_order() {
        let values = [
            f64::NEG_INFINITY,
            -1e300,
            -2.5,
            -1e-300,
            0.0,
            1e-300,
            1.0,
            2.5,
            1e300,
            f64::INFINITY,
        ];
        for pair in values.windows(2) {
            assert!(
                ordered_bits(pair[0]) < ordered_bits(pair[1]),
                "{} vs {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_sorts_mixed_sign_floats() {
        let mut jobs: Vec<Job> = (0..1000)
            .map(|i| {
                let x = ((i * 7919) % 1000) as f64 - 500.0;
                Job::new(x * 0.37, x * 0.37 + 1.0, 1.0)
            })
            .collect();
        sort(&mut jobs, SortKey::Start);
        assert_sorted(&jobs, SortKey::Start);
    }

    #[test]
    fn test_sorts_wide_dynamic_range() {
        let mut jobs: Vec<Job> = (0..400)
            .rev()
            .map(|i| {
                let x = 1.1f64.powi(i) - 1.0;
                Job::new(x, x + 1.0, 1.0)
            })
            .collect();
        sort(&mut jobs, SortKey::End);
        assert_sorted(&jobs, SortKey::End);
    }

    #[test]
    fn test_many_duplicates() {
        let mut jobs: Vec<Job> = (0..2000)
            .map(|i| Job::new((i % 3) as f64, 10.0, i as f64))
            .collect();
        sort(&mut jobs, SortKey::Start);
        assert_sorted(&jobs, SortKey::Start);
        assert_eq!(jobs.iter().filter(|j| j.start == 0.0).count(), 667);
    }
}
