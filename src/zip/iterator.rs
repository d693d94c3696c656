use crate::{BidirCursor, Cursor};

/// Cursor of a [`Zip`](struct.Zip.html) view: the tuple of the wrapped
/// sequences' own cursors, with no other state.
///
/// Advancing a zip cursor advances every sub-cursor by one position,
/// unconditionally, even the ones already at their own end. Offset
/// advance forwards to each sub-cursor's own
/// [`advance_by()`](trait.Cursor.html#method.advance_by). Backward
/// stepping exists only when every sub-cursor implements
/// [`BidirCursor`](trait.BidirCursor.html). Dereferencing yields the
/// tuple of the sub-cursors' elements.
///
/// ## Equality
///
/// Two zip cursors are equal as soon as **one** pair of corresponding
/// sub-cursors is equal, and different only when **all** pairs differ.
/// This is not tuple equality, and it is what makes zip loops safe:
/// compared against the [`end()`](trait.Sequence.html#tymethod.end)
/// sentinel, a zip cursor reports "equal" as soon as the first wrapped
/// sequence reaches its own end, so a driving loop stops after exactly
/// `min(len_1, ..., len_N)` steps and never dereferences past the
/// shortest sequence's last element.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZipCursor<C> {
    cursors: C,
}

impl<C> ZipCursor<C> {
    /// Build a zip cursor from a tuple of sub-cursors at corresponding
    /// positions.
    pub fn new(cursors: C) -> Self {
        ZipCursor { cursors }
    }
}

// The protocol implementations for every cursor tuple arity. Equality is
// an OR of per-index equality and must not be derived: see the type
// documentation.
macro_rules! zip_cursor_impls {
    ( $( ($C:ident, $idx:tt) ),+ ) => {
        impl<$($C: Cursor),+> Cursor for ZipCursor<($($C,)+)> {
            type Item = ( $( $C::Item, )+ );

            fn advance(&mut self) {
                $( self.cursors.$idx.advance(); )+
            }

            fn advance_by(&mut self, n: usize) {
                $( self.cursors.$idx.advance_by(n); )+
            }

            unsafe fn get(&self) -> Self::Item {
                ( $( self.cursors.$idx.get(), )+ )
            }
        }

        impl<$($C: BidirCursor),+> BidirCursor for ZipCursor<($($C,)+)> {
            fn retreat(&mut self) {
                $( self.cursors.$idx.retreat(); )+
            }
        }

        impl<$($C: Cursor),+> PartialEq for ZipCursor<($($C,)+)> {
            fn eq(&self, other: &Self) -> bool {
                $( self.cursors.$idx == other.cursors.$idx )||+
            }
        }
    };
}

zip_cursor_impls! { (C0, 0) }
zip_cursor_impls! { (C0, 0), (C1, 1) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5), (C6, 6) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5), (C6, 6), (C7, 7) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5), (C6, 6), (C7, 7), (C8, 8) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5), (C6, 6), (C7, 7), (C8, 8), (C9, 9) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5), (C6, 6), (C7, 7), (C8, 8), (C9, 9), (C10, 10) }
zip_cursor_impls! { (C0, 0), (C1, 1), (C2, 2), (C3, 3), (C4, 4), (C5, 5), (C6, 6), (C7, 7), (C8, 8), (C9, 9), (C10, 10), (C11, 11) }

#[cfg(test)]
mod tests {
    use super::ZipCursor;
    use crate::{BidirCursor, Cursor, RangeIterator, Sequence};

    #[test]
    fn any_pair_equal() {
        let a = RangeIterator::new(0i32, 1);
        let b = RangeIterator::new(10i32, 1);
        // Same second component: equal.
        assert_eq!(ZipCursor::new((a, b)), ZipCursor::new((a + 3, b)));
        // Same first component: equal.
        assert_eq!(ZipCursor::new((a, b)), ZipCursor::new((a, b + 3)));
        // All components equal: equal.
        assert_eq!(ZipCursor::new((a, b)), ZipCursor::new((a, b)));
    }

    #[test]
    fn unequal_only_when_all_pairs_differ() {
        let a = RangeIterator::new(0u8, 1);
        let b = RangeIterator::new(10u8, 1);
        let c = RangeIterator::new(20u8, 1);
        let lhs = ZipCursor::new((a, b, c));
        let rhs = ZipCursor::new((a + 1, b + 1, c + 1));
        assert_ne!(lhs, rhs);
        // One matching pair out of three is enough to flip the result.
        assert_eq!(lhs, ZipCursor::new((a + 1, b, c + 1)));
    }

    #[test]
    fn joint_stepping() {
        let v = [1u32, 2, 3, 4];
        let mut cur = ZipCursor::new(((&v[..]).begin(), RangeIterator::new(0usize, 2)));
        cur.advance();
        cur.advance_by(2);
        let (x, i) = unsafe { cur.get() };
        assert_eq!(*x, 4);
        assert_eq!(i, 6);
        cur.retreat();
        let (x, i) = unsafe { cur.get() };
        assert_eq!(*x, 3);
        assert_eq!(i, 4);
        cur.retreat_by(2);
        let (x, i) = unsafe { cur.get() };
        assert_eq!(*x, 1);
        assert_eq!(i, 0);
    }

    #[test]
    fn default_is_scratch() {
        let mut scratch =
            ZipCursor::<(RangeIterator<i32>, RangeIterator<i32>)>::default();
        let (a, b) = unsafe { scratch.get() };
        assert_eq!((a, b), (0, 0));
        scratch = ZipCursor::new((
            RangeIterator::new(1, 1),
            RangeIterator::new(2, 1),
        ));
        let (a, b) = unsafe { scratch.get() };
        assert_eq!((a, b), (1, 2));
    }
}
