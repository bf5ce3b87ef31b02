//! Bullet index adjustment.
//!
//! Creating bullets makes the backend delete the leading TABs that encoded
//! each paragraph's nesting level, which moves everything after them. Bullet
//! operations are generated in document coordinates from before any deletion,
//! so each one is shifted left by the TABs earlier bullet operations remove.

use crate::ops::{BulletPreset, Operation, TextRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOp {
    Create {
        range: TextRange,
        preset: BulletPreset,
    },
    Clear {
        range: TextRange,
    },
}

/// Shifts bullet operations, given in generation order, into the coordinates
/// each will see when applied. `leading_tabs` reports how many TABs a create
/// over a (pre-shift) range removes.
pub fn adjust_bullet_ops<F>(ops: Vec<BulletOp>, mut leading_tabs: F) -> Vec<Operation>
where
    F: FnMut(TextRange) -> usize,
{
    let mut shift = 0;
    ops.into_iter()
        .map(|op| match op {
            BulletOp::Create { range, preset } => {
                let removed = leading_tabs(range);
                let adjusted = Operation::CreateListBullets {
                    range: range.shifted_left(shift),
                    preset,
                };
                shift += removed;
                adjusted
            }
            BulletOp::Clear { range } => Operation::ClearListBullets {
                range: range.shifted_left(shift),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range(start: usize, end: usize) -> TextRange {
        TextRange::new(start, end).unwrap()
    }

    #[test]
    fn first_create_is_unshifted() {
        let ops = vec![BulletOp::Create {
            range: range(1, 10),
            preset: BulletPreset::BulletDiscCircleSquare,
        }];

        let adjusted = adjust_bullet_ops(ops, |_| 3);

        assert_eq!(
            adjusted,
            vec![Operation::CreateListBullets {
                range: range(1, 10),
                preset: BulletPreset::BulletDiscCircleSquare,
            }]
        );
    }

    #[test]
    fn later_ops_shift_by_earlier_tabs() {
        let ops = vec![
            BulletOp::Create {
                range: range(1, 6),
                preset: BulletPreset::BulletDiscCircleSquare,
            },
            BulletOp::Clear { range: range(6, 10) },
            BulletOp::Create {
                range: range(11, 16),
                preset: BulletPreset::NumberedDecimalAlphaRoman,
            },
            BulletOp::Clear {
                range: range(16, 20),
            },
        ];
        let tabs = |r: TextRange| if r.start == 1 { 1 } else { 2 };

        let adjusted = adjust_bullet_ops(ops, tabs);

        assert_eq!(
            adjusted,
            vec![
                Operation::CreateListBullets {
                    range: range(1, 6),
                    preset: BulletPreset::BulletDiscCircleSquare,
                },
                Operation::ClearListBullets { range: range(5, 9) },
                Operation::CreateListBullets {
                    range: range(10, 15),
                    preset: BulletPreset::NumberedDecimalAlphaRoman,
                },
                Operation::ClearListBullets {
                    range: range(13, 17),
                },
            ]
        );
    }

    #[test]
    fn clears_never_add_shift() {
        let ops = vec![
            BulletOp::Clear { range: range(3, 5) },
            BulletOp::Clear { range: range(7, 9) },
        ];
        let adjusted = adjust_bullet_ops(ops, |_| unreachable!("clears remove no tabs"));

        assert_eq!(
            adjusted,
            vec![
                Operation::ClearListBullets { range: range(3, 5) },
                Operation::ClearListBullets { range: range(7, 9) },
            ]
        );
    }
}
