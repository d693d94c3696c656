use super::ZipCursor;
use crate::{Cursor, Iter, Sequence};

/// View traversing several sequences in lockstep, as if they were one
/// sequence of tuples.
///
/// A `Zip` wraps a tuple of up to 12 borrowed
/// [sequences](trait.Sequence.html) and walks them jointly: its cursor is
/// the tuple of the wrapped sequences' own cursors and dereferences to the
/// tuple of their elements, each with the mutability of the borrow it came
/// from. The view owns nothing; the borrow checker makes the wrapped
/// storage outlive the view and every cursor derived from it.
///
/// Iteration stops with the shortest wrapped sequence: the driving loop
/// terminates as soon as any sub-cursor reaches its own sentinel, so the
/// longer sequences' extra elements are never dereferenced (see
/// [`ZipCursor`](struct.ZipCursor.html) for the equality rule behind
/// this).
///
/// Views are [sequences](trait.Sequence.html) themselves, so they nest
/// inside other views and compose with [ranges](struct.Range.html).
///
/// ## Examples
///
/// ```
/// use lockstep::zip;
///
/// let names = vec!["a", "b", "c"];
/// let mut scores = vec![1, 2, 3, 4, 5];
///
/// // Lockstep mutation, truncated to the shortest sequence.
/// for (name, score) in zip!(&names, &mut scores) {
///     if *name == "b" {
///         *score += 10;
///     }
/// }
/// assert_eq!(scores, vec![1, 12, 3, 4, 5]);
/// ```
///
/// Pairing elements with their index with a [range](fn.iter_range.html):
///
/// ```
/// use lockstep::{iter_range, zip};
///
/// let v = vec![10u32, 20, 30];
/// for (i, x) in zip!(iter_range(&v), &v) {
///     assert_eq!(*x, 10 * (i as u32 + 1));
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Zip<S> {
    sequences: S,
}

impl<S> Zip<S> {
    /// Build a view over a tuple of sequences, in order.
    /// The [`zip!`](macro.zip.html) macro is the usual entry point: it
    /// additionally converts mutable borrows through
    /// [`IntoSequence`](trait.IntoSequence.html), which a caller of this
    /// constructor does by hand (e.g with
    /// [`SliceMut`](struct.SliceMut.html)).
    pub fn new(sequences: S) -> Self {
        Zip { sequences }
    }
}

/// Build a [`Zip`](struct.Zip.html) view over the sequences in argument
/// order.
///
/// Accepts from one to twelve sequences of heterogeneous types; the view
/// dereferences to tuples of matching arity.
///
/// ## Examples
///
/// ```
/// use lockstep::{range, zip};
///
/// let a = [1u32, 2, 3];
/// let b = vec!["one", "two", "three", "four"];
/// let mut out = Vec::new();
/// for (x, s, i) in zip!(&a, &b, range(10usize)) {
///     out.push((*x, *s, i));
/// }
/// assert_eq!(out, vec![(1, "one", 0), (2, "two", 1), (3, "three", 2)]);
/// ```
#[macro_export]
macro_rules! zip {
    ( $( $sequence:expr ),+ $(,)? ) => {
        $crate::Zip::new((
            $( $crate::IntoSequence::into_sequence($sequence), )+
        ))
    };
}

// Sequence and for-loop conformance for every wrapped tuple arity.
// The view length is the length of its shortest member.
macro_rules! zip_view_impls {
    ( $( ($S:ident, $idx:tt) ),+ ) => {
        impl<$($S: Sequence),+> Sequence for Zip<($($S,)+)> {
            type Cursor = ZipCursor<($($S::Cursor,)+)>;

            fn begin(&self) -> Self::Cursor {
                ZipCursor::new(( $( self.sequences.$idx.begin(), )+ ))
            }

            fn end(&self) -> Self::Cursor {
                ZipCursor::new(( $( self.sequences.$idx.end(), )+ ))
            }

            fn len(&self) -> usize {
                let mut len = usize::MAX;
                $( len = len.min(self.sequences.$idx.len()); )+
                len
            }
        }

        impl<$($S: Sequence),+> IntoIterator for Zip<($($S,)+)> {
            type Item = ( $( <$S::Cursor as Cursor>::Item, )+ );
            type IntoIter = Iter<ZipCursor<($($S::Cursor,)+)>>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self.begin(), self.end())
            }
        }
    };
}

zip_view_impls! { (S0, 0) }
zip_view_impls! { (S0, 0), (S1, 1) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5), (S6, 6) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5), (S6, 6), (S7, 7) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5), (S6, 6), (S7, 7), (S8, 8) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5), (S6, 6), (S7, 7), (S8, 8), (S9, 9) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5), (S6, 6), (S7, 7), (S8, 8), (S9, 9), (S10, 10) }
zip_view_impls! { (S0, 0), (S1, 1), (S2, 2), (S3, 3), (S4, 4), (S5, 5), (S6, 6), (S7, 7), (S8, 8), (S9, 9), (S10, 10), (S11, 11) }

#[cfg(test)]
mod tests {
    use crate::tests::{collect, rand_vec, test_sequence};
    use crate::{iter_range, range, range_step, Sequence};

    #[test]
    fn shortest_sequence_truncation() {
        let short = vec![1u32, 2, 3];
        let long = vec![10u32, 20, 30, 40, 50];

        let pairs = collect(&zip!(&short, &long));
        assert_eq!(pairs.len(), 3);
        for (i, (a, b)) in pairs.into_iter().enumerate() {
            assert_eq!(a, &short[i]);
            assert_eq!(b, &long[i]);
        }

        // Same result with the arguments swapped.
        assert_eq!(zip!(&long, &short).len(), 3);
        assert_eq!(collect(&zip!(&long, &short)).len(), 3);
    }

    #[test]
    fn equal_length_members() {
        let a = rand_vec(10);
        let b = rand_vec(10);
        let pairs = collect(&zip!(&a, &b));
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs.last().unwrap(), &(&a[9], &b[9]));
    }

    #[test]
    fn sequence_contract() {
        let a = rand_vec(7);
        let b = rand_vec(4);
        let c = rand_vec(9);
        test_sequence(&zip!(&a, &b, &c));
        assert_eq!(zip!(&a, &b, &c).len(), 4);
        test_sequence(&zip!(&a,));
        let empty: Vec<u32> = Vec::new();
        test_sequence(&zip!(&a, &empty));
        assert!(zip!(&a, &empty).is_empty());
    }

    #[test]
    fn mutation_through_tuple() {
        let mut a = vec![1i64, 2, 3];
        let mut b = vec![10i64, 20, 30, 40];
        for (x, y) in zip!(&mut a, &mut b) {
            std::mem::swap(x, y);
        }
        assert_eq!(a, vec![10, 20, 30]);
        assert_eq!(b, vec![1, 2, 3, 40]);
    }

    #[test]
    fn zip_over_ranges() {
        let v = vec![5u32, 6, 7];
        let mut seen = Vec::new();
        for (i, x) in zip!(iter_range(&v), &v) {
            seen.push((i, *x));
        }
        assert_eq!(seen, vec![(0, 5), (1, 6), (2, 7)]);

        // A pure range zip: terminates with the shortest range.
        let pairs: Vec<(i32, i32)> =
            zip!(range(3i32), range_step(0i32, 20, 2)).into_iter().collect();
        assert_eq!(pairs, vec![(0, 0), (1, 2), (2, 4)]);

        // A range member whose pace truncates still terminates the view:
        // its cursor meets the clamped sentinel exactly.
        let v = rand_vec(100);
        let pairs = collect(&zip!(range_step(0usize, 5, 2), &v));
        assert_eq!(pairs.len(), 3);
        assert_eq!(zip!(range_step(0usize, 5, 2), &v).len(), 3);
    }

    #[test]
    fn nested_views() {
        let a = vec![1u8, 2, 3, 4];
        let b = vec![10u8, 20, 30];
        let c = vec![100u16, 200];

        let nested = zip!(zip!(&a, &b), &c);
        assert_eq!(nested.len(), 2);
        let mut seen = Vec::new();
        for ((x, y), z) in nested {
            seen.push((*x, *y, *z));
        }
        assert_eq!(seen, vec![(1, 10, 100), (2, 20, 200)]);
    }

    #[test]
    fn wide_arity() {
        let v = rand_vec(5);
        let w = rand_vec(6);
        let z = zip!(&v, &w, &v, &w, &v, &w, &v, &w, &v, &w, &v, &w);
        assert_eq!(z.len(), 5);
        let mut count = 0;
        for (a, _, _, _, _, _, _, _, _, _, _, l) in z {
            assert_eq!(a, &v[count]);
            assert_eq!(l, &w[count]);
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn longer_members_never_dereferenced() {
        // Poisoned tail elements are fine as long as they are not
        // dereferenced; the loop must stop at the shortest member.
        let short = vec![0usize, 1];
        let long = vec![7u32; 100];
        let mut steps = 0;
        for (i, _) in zip!(&short, &long) {
            assert!(*i < 2);
            steps += 1;
        }
        assert_eq!(steps, 2);
    }
}
