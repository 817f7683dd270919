use std::mem::size_of;

use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;
use crate::{koan, koan_assert, koan_assert_eq, KoanResult};

pub(super) fn episode<W: WriteColor>(handler: &mut KoanHandler<W>) -> Episode {
    Episode::new(
        handler,
        "third",
        vec![
            koan!(lonely_characters),
            koan!(chars_have_a_size),
            koan!(chars_are_numbers),
            koan!(more_characters_are_strings),
        ],
    )
}

fn lonely_characters() -> KoanResult {
    let letter = 'k';
    koan_assert_eq!('k', letter);
    koan_assert!(letter.is_alphabetic());
    Ok(())
}

fn chars_have_a_size() -> KoanResult {
    koan_assert_eq!(4, size_of::<char>(), "a char holds any Unicode scalar value");
    koan_assert_eq!(3, '€'.len_utf8());
    Ok(())
}

fn chars_are_numbers() -> KoanResult {
    koan_assert_eq!(65, 'A' as u32);
    koan_assert_eq!(Some('B'), char::from_u32(66));
    koan_assert_eq!(b'a', 97);
    Ok(())
}

fn more_characters_are_strings() -> KoanResult {
    let word: String = ['k', 'o', 'a', 'n'].iter().collect();
    koan_assert_eq!("koan", word);
    koan_assert_eq!(4, word.len());
    Ok(())
}
