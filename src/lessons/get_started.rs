use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;
use crate::{koan, koan_assert, KoanResult};

pub(super) fn episode<W: WriteColor>(handler: &mut KoanHandler<W>) -> Episode {
    Episode::new(handler, "first", vec![koan!(rust_is_not_too_hard)])
}

fn rust_is_not_too_hard() -> KoanResult {
    koan_assert!(true, "replace the blank so that this holds");
    Ok(())
}
