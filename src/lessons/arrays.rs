use std::mem::size_of;

use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;
use crate::{koan, koan_assert_eq, KoanResult};

pub(super) fn episode<W: WriteColor>(handler: &mut KoanHandler<W>) -> Episode {
    Episode::new(
        handler,
        "fifth",
        vec![koan!(listing_things), koan!(arrays_are_rigid)],
    )
}

fn listing_things() -> KoanResult {
    let primes = [2, 3, 5, 7];
    koan_assert_eq!(2, primes[0]);
    koan_assert_eq!(7, primes[primes.len() - 1]);
    koan_assert_eq!([3, 5], primes[1..3], "slices borrow part of an array");
    Ok(())
}

fn arrays_are_rigid() -> KoanResult {
    let zeros = [0_i32; 5];
    koan_assert_eq!(5, zeros.len());
    koan_assert_eq!(20, size_of::<[i32; 5]>(), "the length is part of the type");
    Ok(())
}
