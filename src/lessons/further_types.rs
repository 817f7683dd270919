use std::mem::size_of;

use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;
use crate::{koan, koan_assert, koan_assert_eq, KoanResult};

pub(super) fn episode<W: WriteColor>(handler: &mut KoanHandler<W>) -> Episode {
    Episode::new(handler, "fourth", vec![koan!(the_truth_has_a_name)])
}

fn the_truth_has_a_name() -> KoanResult {
    let truth = 1 < 2;
    koan_assert_eq!(true, truth);
    koan_assert_eq!(1, size_of::<bool>());
    koan_assert!(!false);
    Ok(())
}
