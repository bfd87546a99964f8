//! Sieve of Eratosthenes over a `FixedBitSet`, striking composites while
//! walking the candidates with a `CursorMut`.
//!
//! Run with `RUST_LOG=debug cargo run --example sieve` to see every step.

use fixed_bit_set::{FixedBitSet, word_count};
use log::{debug, info};

const LIMIT: usize = 200;

type Numbers = FixedBitSet<LIMIT, { word_count(LIMIT) }>;

fn sieve() -> Numbers {
    let mut candidates = Numbers::with_all_set();
    candidates.reset(0).reset(1);

    let mut primes = Numbers::new();
    let mut cursor = candidates.cursor_mut();
    while let Some(n) = cursor.current() {
        let divisor = primes
            .iter_ones()
            .take_while(|p| p * p <= n)
            .find(|p| n % p == 0);
        match divisor {
            Some(p) => {
                debug!("{n} is a multiple of {p}");
                cursor.clear_current();
            }
            None => {
                debug!("{n} is prime");
                primes.set(n, true);
            }
        }
        cursor.move_next();
    }

    debug_assert_eq!(candidates, primes);
    candidates
}

fn main() {
    env_logger::init();

    let primes = sieve();
    info!("{} primes below {LIMIT}", primes.popcount());
    info!("largest: {}", LIMIT - 1 - primes.leading_zeros());

    let twins: Vec<_> = primes
        .iter_ones()
        .filter(|&p| p + 2 < LIMIT && primes.test(p + 2))
        .map(|p| (p, p + 2))
        .collect();
    info!("twin primes: {twins:?}");

    println!("{:?}", primes.iter_ones().collect::<Vec<_>>());
}
