/// Implements `PartialEq` between a deque and a slice-like type by comparing the elements in
/// front-to-back order.
macro_rules! __impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty $(,)?) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$rhs) -> bool {
                let other: &[U] = &other[..];
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }
    };
}
