use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::Optional;

impl<T: Arbitrary> Arbitrary for Optional<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        Optional::of_nullable(Option::<T>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.clone().into_option().shrink().map(Optional::of_nullable))
    }
}

fn halve_even(n: i64) -> Optional<i64> {
    if n % 2 == 0 {
        Optional::present(n / 2)
    } else {
        Optional::empty()
    }
}

fn prop_map_identity(o: Optional<i64>) -> bool {
    o.map(|v| v) == o
}

fn prop_map_composes(o: Optional<i64>) -> bool {
    let f = |v: i64| v.wrapping_mul(3);
    let g = |v: i64| v.wrapping_sub(7);
    o.map(f).map(g) == o.map(|v| g(f(v)))
}

fn prop_map_nullable_matches_of_nullable(v: i64) -> bool {
    let f = |n: i64| (n % 3 != 0).then_some(n);
    Optional::present(v).map_nullable(f) == Optional::of_nullable(f(v))
}

fn prop_flat_map_left_identity(v: i64) -> bool {
    Optional::present(v).flat_map(halve_even) == halve_even(v)
}

fn prop_flat_map_right_identity(o: Optional<i64>) -> bool {
    o.flat_map(Optional::present) == o
}

fn prop_filter_result_satisfies_predicate(o: Optional<i64>) -> bool {
    let positive = |v: &i64| *v > 0;
    match o.filter(positive) {
        Optional::Present(v) => positive(&v),
        Optional::Empty => o.iter().all(|v| !positive(v)),
    }
}

fn prop_stream_length_matches_presence(o: Optional<String>) -> bool {
    o.stream().count() == usize::from(o.is_present())
}

fn prop_or_prefers_receiver(o: Optional<i64>, fallback: i64) -> bool {
    let chosen = o.or(|| Optional::present(fallback));
    if o.is_present() {
        chosen == o
    } else {
        chosen == Optional::present(fallback)
    }
}

mod tests {
    use super::{
        Optional, QuickCheck, prop_filter_result_satisfies_predicate,
        prop_flat_map_left_identity, prop_flat_map_right_identity, prop_map_composes,
        prop_map_identity, prop_map_nullable_matches_of_nullable, prop_or_prefers_receiver,
        prop_stream_length_matches_presence,
    };

    #[test]
    fn map_laws() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_map_identity as fn(Optional<i64>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_map_composes as fn(Optional<i64>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_map_nullable_matches_of_nullable as fn(i64) -> bool);
    }

    #[test]
    fn flat_map_laws() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_flat_map_left_identity as fn(i64) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_flat_map_right_identity as fn(Optional<i64>) -> bool);
    }

    #[test]
    fn filter_and_or() {
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_filter_result_satisfies_predicate as fn(Optional<i64>) -> bool);
        QuickCheck::new()
            .tests(200)
            .quickcheck(prop_or_prefers_receiver as fn(Optional<i64>, i64) -> bool);
    }

    #[test]
    fn stream_length() {
        QuickCheck::new()
            .tests(100)
            .quickcheck(prop_stream_length_matches_presence as fn(Optional<String>) -> bool);
    }
}
