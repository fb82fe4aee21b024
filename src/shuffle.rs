//! Random ordering for the "featured examples" strips.

use rand::Rng;

/// Shuffle `items` in place (Fisher–Yates) with the thread-local RNG.
pub fn shuffle<T>(items: &mut [T]) {
    let mut rng = rand::thread_rng();
    shuffle_with(items, &mut rng);
}

/// Shuffle `items` in place with the given RNG.
pub fn shuffle_with<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// A random selection of at most `count` items.
pub fn featured<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    let mut picked = items.to_vec();
    shuffle(&mut picked);
    picked.truncate(count);
    picked
}
