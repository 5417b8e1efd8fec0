use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of random numbers for generating positions and random opponents.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;

    /// Returns a number in `from..to`. `to` must be greater than `from`.
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Picks a random element, or `None` if `items` is empty.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// A generator backed by the thread-local `rand` generator.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next(&mut self) -> i32 {
        rand::random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        rand::rng().random_range(from..to)
    }
}

/// A seeded linear congruential generator. Same seed, same sequence, which keeps tests and
/// benchmarks reproducible.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }
}
