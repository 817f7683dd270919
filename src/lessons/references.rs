use std::mem::size_of;
use std::ptr;

use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;
use crate::{koan, koan_assert, koan_assert_eq, KoanResult};

pub(super) fn episode<W: WriteColor>(handler: &mut KoanHandler<W>) -> Episode {
    Episode::new(
        handler,
        "sixth",
        vec![
            koan!(they_are_just_variables),
            koan!(they_are_really_just_variables),
            koan!(they_have_power),
            koan!(they_are_not_almighty),
        ],
    )
}

fn they_are_just_variables() -> KoanResult {
    let value = 5;
    let reference = &value;
    koan_assert_eq!(5, *reference);
    koan_assert!(ptr::eq(reference, &value));
    Ok(())
}

fn they_are_really_just_variables() -> KoanResult {
    koan_assert_eq!(size_of::<usize>(), size_of::<&i32>());
    koan_assert_eq!(size_of::<&u8>(), size_of::<&u64>(), "every thin pointer is as wide");
    Ok(())
}

fn they_have_power() -> KoanResult {
    let mut value = 5;
    let reference = &mut value;
    *reference += 1;
    koan_assert_eq!(6, value);
    Ok(())
}

fn they_are_not_almighty() -> KoanResult {
    let nothing: *const i32 = ptr::null();
    koan_assert!(nothing.is_null());
    koan_assert_eq!(
        size_of::<&i32>(),
        size_of::<Option<&i32>>(),
        "a reference is never null, so None fits in the same space"
    );
    Ok(())
}
