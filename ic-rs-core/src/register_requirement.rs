//! The Sethi-Ullman numbering rules used to compute how many registers a
//! subtree needs in order to be evaluated without spilling.

use itertools::Itertools;

use crate::RegisterSize;

/// Combine the requirements of two sibling subtrees that must both be
/// evaluated before their parent.
///
/// When the subtrees tie, one extra register is needed to hold the first
/// result while the second is computed. Otherwise the heavier side is
/// evaluated first, and its registers are reused by the lighter one.
///
/// # Examples
/// ```
/// use ic_rs_core::register_requirement::combine;
///
/// assert_eq!(combine(2, 2), 3);
/// assert_eq!(combine(1, 3), 3);
/// ```
#[inline]
pub fn combine(n1: RegisterSize, n2: RegisterSize) -> RegisterSize {
    if n1 == n2 {
        n1 + 1
    } else {
        n1.max(n2)
    }
}

/// Merge the requirements of any number of independent subtrees that all feed
/// one operation (call arguments, plus an explicit receiver).
///
/// The values are scheduled heaviest first. Each result that has been computed
/// stays live while the rest are evaluated, so every fold step raises the cost
/// of the values still waiting by one register.
///
/// An empty list needs no registers, and a single value is returned as-is.
///
/// # Examples
/// ```
/// use ic_rs_core::register_requirement::merge;
///
/// assert_eq!(merge(&[1, 3, 2]), 3);
/// assert_eq!(merge(&[2, 2]), 3);
/// assert_eq!(merge(&[]), 0);
/// ```
pub fn merge(requirements: &[RegisterSize]) -> RegisterSize {
    let mut pending = requirements
        .iter()
        .copied()
        .sorted_by(|a, b| b.cmp(a))
        .collect::<Vec<_>>();

    if pending.is_empty() {
        return 0;
    }

    for i in 0..pending.len() - 1 {
        pending[i + 1] = combine(pending[i], pending[i + 1]);

        for waiting in &mut pending[i + 2..] {
            *waiting += 1;
        }
    }

    pending[pending.len() - 1]
}
