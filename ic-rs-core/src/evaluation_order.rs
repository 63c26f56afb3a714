use std::{
    fmt,
    fmt::{Display, Formatter},
};

use itertools::Itertools;

use crate::RegisterSize;

/// Which operand of a two-operand node should be evaluated first, as decided
/// by the register requirements of both sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EvaluationOrder {
    LeftFirst,
    RightFirst,
}

impl EvaluationOrder {
    /// Pick the order for two operands. The heavier side goes first, so the
    /// lighter one can reuse its registers. Ties keep source order.
    ///
    /// # Examples
    /// ```
    /// use ic_rs_core::evaluation_order::EvaluationOrder;
    ///
    /// assert_eq!(EvaluationOrder::for_operands(1, 3), EvaluationOrder::RightFirst);
    /// assert_eq!(EvaluationOrder::for_operands(2, 2), EvaluationOrder::LeftFirst);
    /// ```
    #[inline]
    pub fn for_operands(left: RegisterSize, right: RegisterSize) -> Self {
        if right > left {
            EvaluationOrder::RightFirst
        } else {
            EvaluationOrder::LeftFirst
        }
    }

    #[inline]
    pub fn is_left_first(self) -> bool {
        self == EvaluationOrder::LeftFirst
    }
}

impl Display for EvaluationOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            EvaluationOrder::LeftFirst => "left-first",
            EvaluationOrder::RightFirst => "right-first",
        };

        write!(f, "{s}")
    }
}

/// Get the indices of a list of independent operands, in the order they should
/// be evaluated: heaviest first, with ties kept in source order.
///
/// # Examples
/// ```
/// use ic_rs_core::evaluation_order::argument_order;
///
/// assert_eq!(argument_order(&[1, 3, 2]), vec![1, 2, 0]);
/// ```
pub fn argument_order(requirements: &[RegisterSize]) -> Vec<usize> {
    requirements
        .iter()
        .enumerate()
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_operands() {
        assert_eq!(EvaluationOrder::for_operands(3, 1), EvaluationOrder::LeftFirst);
        assert_eq!(EvaluationOrder::for_operands(0, 1), EvaluationOrder::RightFirst);
        assert!(EvaluationOrder::for_operands(4, 4).is_left_first());
    }

    #[test]
    fn test_display() {
        assert_eq!(EvaluationOrder::LeftFirst.to_string(), "left-first");
        assert_eq!(EvaluationOrder::RightFirst.to_string(), "right-first");
    }

    #[test]
    fn test_argument_order() {
        assert_eq!(argument_order(&[]), Vec::<usize>::new());
        assert_eq!(argument_order(&[5]), vec![0]);
        assert_eq!(argument_order(&[0, 2, 2, 1]), vec![1, 2, 3, 0]);
    }
}
