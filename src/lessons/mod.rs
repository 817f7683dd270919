//! The path to enlightenment: every shipped episode, in the order it is walked.
//!
//! To add a koan, write a function returning [`KoanResult`](crate::KoanResult)
//! in the matching lesson file and list it in that lesson's `episode()`.
//! The count registered with the handler follows the list automatically.

use termcolor::WriteColor;

use crate::episode::Episode;
use crate::harness::KoanHandler;

mod arrays;
mod character_types;
mod further_types;
mod get_started;
mod number_types;
mod references;

/// Constructs every episode, registering each with `handler`.
pub fn all_episodes<W: WriteColor>(handler: &mut KoanHandler<W>) -> Vec<Episode> {
    vec![
        get_started::episode(handler),
        number_types::episode(handler),
        character_types::episode(handler),
        further_types::episode(handler),
        arrays::episode(handler),
        references::episode(handler),
    ]
}
