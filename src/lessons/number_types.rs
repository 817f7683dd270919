use std::mem::size_of;

use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;
use crate::{koan, koan_assert, koan_assert_eq, KoanResult};

pub(super) fn episode<W: WriteColor>(handler: &mut KoanHandler<W>) -> Episode {
    Episode::new(
        handler,
        "second",
        vec![
            koan!(simple_integer_numbers),
            koan!(integers_have_a_size),
            koan!(integers_can_be_negative),
            koan!(simple_floats),
            koan!(floats_have_a_size),
            koan!(going_double_precision),
            koan!(doubles_have_a_size),
            koan!(size_of_biggest_number),
        ],
    )
}

fn simple_integer_numbers() -> KoanResult {
    let answer = 6 * 7;
    koan_assert_eq!(42, answer);
    koan_assert_eq!(3, 7 / 2, "integer division drops the remainder");
    Ok(())
}

fn integers_have_a_size() -> KoanResult {
    koan_assert_eq!(4, size_of::<i32>());
    koan_assert_eq!(1, size_of::<u8>());
    koan_assert_eq!(255, u8::MAX);
    Ok(())
}

fn integers_can_be_negative() -> KoanResult {
    let below_zero: i32 = -17;
    koan_assert!(below_zero < 0);
    koan_assert_eq!(-128, i8::MIN);
    koan_assert_eq!(0, u32::MIN, "unsigned integers stop at zero");
    Ok(())
}

fn simple_floats() -> KoanResult {
    let half: f32 = 1.0 / 2.0;
    koan_assert_eq!(0.5, half);
    Ok(())
}

fn floats_have_a_size() -> KoanResult {
    koan_assert_eq!(4, size_of::<f32>());
    Ok(())
}

fn going_double_precision() -> KoanResult {
    let sum = 0.1_f64 + 0.2;
    koan_assert!(sum != 0.3, "floating point sums are not exact");
    koan_assert!((sum - 0.3).abs() < f64::EPSILON);
    Ok(())
}

fn doubles_have_a_size() -> KoanResult {
    koan_assert_eq!(8, size_of::<f64>());
    Ok(())
}

fn size_of_biggest_number() -> KoanResult {
    koan_assert_eq!(16, size_of::<u128>());
    koan_assert_eq!(u128::MAX, 2_u128.pow(127) - 1 + 2_u128.pow(127));
    Ok(())
}
