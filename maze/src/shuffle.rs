use rand::Rng;

/// Incremental Fisher–Yates: position `i` swaps with a uniform draw from
/// `[0, i]`, which yields a uniform permutation.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in 0..items.len() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
