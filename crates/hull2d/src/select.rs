//! Randomized order-statistic selection over caller-owned buffers.
//!
//! The Kirkpatrick–Seidel engine needs medians of slopes and of x
//! coordinates; both come through here. Partitioning happens in place on
//! the buffer passed in — callers that need the original order keep a copy.
//! Pivots are drawn uniformly from the live sub-range via the
//! caller-supplied `Rng`, which keeps the expected cost linear and lets
//! tests pin the pivot sequence with a seeded generator.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::SelectError;

/// Value at `rank` (0-indexed, ascending) if `buf` were sorted.
///
/// Expected O(n); worst case O(n²). The buffer is reordered in place.
pub fn quickselect<T, R>(buf: &mut [T], rank: usize, rng: &mut R) -> Result<T, SelectError>
where
    T: PartialOrd + Copy,
    R: Rng,
{
    quickselect_by(buf, rank, rng, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    })
}

/// [`quickselect`] with an explicit comparator.
pub fn quickselect_by<T, R, F>(
    buf: &mut [T],
    rank: usize,
    rng: &mut R,
    cmp: F,
) -> Result<T, SelectError>
where
    T: Copy,
    R: Rng,
    F: Fn(&T, &T) -> Ordering,
{
    if buf.is_empty() {
        return Err(SelectError::EmptyInput);
    }
    if rank >= buf.len() {
        return Err(SelectError::IndexOutOfRange {
            rank,
            len: buf.len(),
        });
    }
    let mut lo = 0usize;
    let mut hi = buf.len() - 1;
    loop {
        if lo == hi {
            return Ok(buf[lo]);
        }
        // Lomuto partition with the pivot parked at `lo`.
        let pivot = rng.gen_range(lo..=hi);
        buf.swap(lo, pivot);
        let mut cur = lo;
        for run in lo + 1..=hi {
            if cmp(&buf[run], &buf[lo]) == Ordering::Less {
                cur += 1;
                buf.swap(cur, run);
            }
        }
        buf.swap(cur, lo);
        match rank.cmp(&cur) {
            Ordering::Less => hi = cur - 1,
            Ordering::Greater => lo = cur + 1,
            Ordering::Equal => return Ok(buf[cur]),
        }
    }
}
