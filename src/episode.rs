//! Episodes: ordered, labelled groups of koans run as one teaching unit.

use std::fmt;
use std::panic::Location;

use termcolor::WriteColor;

use crate::failure::KoanResult;
use crate::harness::{HarnessError, KoanHandler};

type Check = Box<dyn Fn() -> KoanResult>;

/// A single fill-in-the-blank exercise.
pub struct Koan {
    name: &'static str,
    location: &'static Location<'static>,
    check: Check,
}

impl Koan {
    /// Records the caller's location; panics inside `check` are reported there.
    #[track_caller]
    pub fn new(name: &'static str, check: impl Fn() -> KoanResult + 'static) -> Self {
        Self {
            name,
            location: Location::caller(),
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn call(&self) -> KoanResult {
        (self.check)()
    }
}

impl fmt::Debug for Koan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Koan")
            .field("name", &self.name)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Koan`] named after the function it wraps.
#[macro_export]
macro_rules! koan {
    ($check:path) => {
        $crate::episode::Koan::new(stringify!($check), $check)
    };
}

/// An ordinal-labelled sequence of koans, executed in declaration order.
#[derive(Debug)]
pub struct Episode {
    label: &'static str,
    koans: Vec<Koan>,
}

impl Episode {
    /// Registers the koan count with `handler` up front, so the welcome
    /// banner can name the grand total before anything runs.
    pub fn new<W: WriteColor>(
        handler: &mut KoanHandler<W>,
        label: &'static str,
        koans: Vec<Koan>,
    ) -> Self {
        handler.register_koans(koans.len());
        Self { label, koans }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn koans(&self) -> &[Koan] {
        &self.koans
    }

    pub fn len(&self) -> usize {
        self.koans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.koans.is_empty()
    }

    pub fn run<W: WriteColor>(&self, handler: &mut KoanHandler<W>) -> Result<(), HarnessError> {
        handler.episode_start(self.label)?;
        for koan in &self.koans {
            handler.evaluate(koan)?;
        }
        handler.episode_done(self.label)?;
        Ok(())
    }
}

/// Start banner, every episode in the given order, end banner.
///
/// Returns at the first failing koan; the end banner is only printed when
/// every koan passed.
pub fn walk_the_path<W: WriteColor>(
    handler: &mut KoanHandler<W>,
    episodes: &[Episode],
) -> Result<(), HarnessError> {
    handler.start()?;
    for episode in episodes {
        episode.run(handler)?;
    }
    handler.end()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::koan_assert;
    use std::cell::RefCell;
    use std::rc::Rc;
    use termcolor::Buffer;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str, pass: bool) -> Koan {
        let log = Rc::clone(log);
        Koan::new(name, move || {
            log.borrow_mut().push(name);
            koan_assert!(pass, "{} was meant to fail", name);
            Ok(())
        })
    }

    #[test]
    fn construction_registers_the_koan_count() {
        let mut handler = KoanHandler::new(Buffer::no_color());
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Episode::new(&mut handler, "first", vec![recording(&log, "a", true)]);
        let second = Episode::new(
            &mut handler,
            "second",
            vec![recording(&log, "b", true), recording(&log, "c", true)],
        );
        assert_eq!(handler.total_koans(), first.len() + second.len());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn koans_run_in_declared_order_and_stop_at_first_failure() {
        let mut handler = KoanHandler::new(Buffer::no_color());
        let log = Rc::new(RefCell::new(Vec::new()));
        let episode = Episode::new(
            &mut handler,
            "first",
            vec![
                recording(&log, "a", true),
                recording(&log, "b", false),
                recording(&log, "c", true),
            ],
        );

        let err = episode.run(&mut handler).unwrap_err();
        assert!(matches!(err, HarnessError::Halted { passed: 1, total: 3 }));
        assert_eq!(*log.borrow(), vec!["a", "b"]);

        let out = String::from_utf8_lossy(handler.writer().as_slice()).into_owned();
        assert!(out.contains("The first episode."));
        assert!(out.contains("Note:\tb was meant to fail"));
        assert!(!out.contains("You mastered the first episode."));
    }

    #[test]
    fn koan_macro_names_the_function() {
        fn the_truth_has_a_name() -> KoanResult {
            Ok(())
        }
        let koan = koan!(the_truth_has_a_name);
        assert_eq!(koan.name(), "the_truth_has_a_name");
        assert!(koan.location().file().ends_with("episode.rs"));
        assert!(koan.call().is_ok());
    }
}
