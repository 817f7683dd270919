//! The koan handler: owns the running score and evaluates koans one by one.
//!
//! Evaluation stops at the first failing koan. The handler prints the
//! failure report and hands back [`HarnessError::Halted`], which every caller
//! propagates untouched up to the entry point, where it becomes exit status 1.

use std::any::Any;
use std::cell::Cell;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use miette::Diagnostic;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::banner;
use crate::episode::Koan;
use crate::failure::KoanFailure;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// A koan failed; the report has already been printed.
    #[error("the path was interrupted after {passed} of {total} koans")]
    #[diagnostic(code(koans::halted))]
    Halted { passed: usize, total: usize },

    #[error("could not write to the console")]
    #[diagnostic(code(koans::io))]
    Io(#[from] io::Error),
}

// ============================================================================
// HANDLER
// ============================================================================

/// Running score plus the console the koans are reported on.
pub struct KoanHandler<W: WriteColor> {
    total_koans: usize,
    total_passed: usize,
    out: W,
}

impl KoanHandler<StandardStream> {
    pub fn stdout(color: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color))
    }
}

impl<W: WriteColor> KoanHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            total_koans: 0,
            total_passed: 0,
            out,
        }
    }

    pub fn total_koans(&self) -> usize {
        self.total_koans
    }

    pub fn total_passed(&self) -> usize {
        self.total_passed
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Adds `count` to the number of koans the master has in store.
    pub fn register_koans(&mut self, count: usize) {
        self.total_koans += count;
        debug!(count, total = self.total_koans, "registered koans");
    }

    /// Runs one koan. A panic inside the koan counts as a failure at the
    /// place the koan was declared.
    pub fn evaluate(&mut self, koan: &Koan) -> Result<(), HarnessError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = KoanScope::enter();
            koan.call()
        }))
        .unwrap_or_else(|payload| {
                let location = koan.location();
                Err(KoanFailure::new(
                    location.file(),
                    location.line(),
                    panic_message(payload.as_ref()),
                ))
            });

        match outcome {
            Ok(()) => {
                self.total_passed += 1;
                trace!(koan = koan.name(), passed = self.total_passed, "koan passed");
                if self.total_passed > self.total_koans {
                    warn!(
                        passed = self.total_passed,
                        total = self.total_koans,
                        "more koans passed than were registered"
                    );
                }
                Ok(())
            }
            Err(failure) => {
                info!(
                    koan = koan.name(),
                    file = %failure.file,
                    line = failure.line,
                    "koan failed"
                );
                self.print_failure(&failure)?;
                Err(HarnessError::Halted {
                    passed: self.total_passed,
                    total: self.total_koans,
                })
            }
        }
    }

    /// Welcome banner. Call after every episode has registered.
    pub fn start(&mut self) -> io::Result<()> {
        let [top, title, total] = banner::welcome_lines(self.total_koans);
        self.emit(Some(bold(None)), &top)?;
        self.emit(Some(bold(None)), &title)?;
        self.emit(Some(bold(None)), &total)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn end(&mut self) -> io::Result<()> {
        debug!(passed = self.total_passed, total = self.total_koans, "path completed");
        let [farewell, bottom] = banner::farewell_lines();
        self.emit(Some(bold(Some(Color::Green))), &farewell)?;
        self.emit(Some(bold(None)), &bottom)?;
        self.out.flush()
    }

    pub fn episode_start(&mut self, label: &str) -> io::Result<()> {
        debug!(episode = label, "episode started");
        self.emit(None, &banner::episode_start_line(label))
    }

    pub fn episode_done(&mut self, label: &str) -> io::Result<()> {
        debug!(episode = label, passed = self.total_passed, "episode done");
        let [mastered, keep_going] = banner::episode_done_lines(label);
        self.emit(Some(plain(Color::Green)), &mastered)?;
        self.emit(None, &keep_going)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn print_failure(&mut self, failure: &KoanFailure) -> io::Result<()> {
        if let Some(message) = &failure.message {
            self.emit(Some(plain(Color::Yellow)), &format!("Note:\t{message}"))?;
        }
        self.emit(
            Some(bold(Some(Color::Red))),
            &format!(
                "The master says, that you should meditate on '{}:{}'.",
                failure.file, failure.line
            ),
        )?;
        if let Some(expected) = &failure.expected {
            self.emit(None, &format!("The master expected {expected}."))?;
        }
        writeln!(self.out)?;
        let [score, keep_going] = banner::score_lines(self.total_passed, self.total_koans);
        self.emit(Some(bold(None)), &score)?;
        self.emit(Some(bold(None)), &keep_going)?;
        self.out.flush()
    }

    fn emit(&mut self, spec: Option<ColorSpec>, text: &str) -> io::Result<()> {
        match spec {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{text}")?;
                self.out.reset()?;
                writeln!(self.out)
            }
            None => writeln!(self.out, "{text}"),
        }
    }
}

// ============================================================================
// KOAN SCOPE
// ============================================================================

thread_local! {
    static INSIDE_KOAN: Cell<bool> = const { Cell::new(false) };
}

/// True while the current thread is running a koan body.
///
/// Panic hooks use this to tell a failing koan from a bug in the harness.
pub fn inside_koan() -> bool {
    INSIDE_KOAN.with(Cell::get)
}

/// Marks the thread as inside a koan until dropped, including on unwind.
struct KoanScope;

impl KoanScope {
    fn enter() -> Self {
        INSIDE_KOAN.with(|flag| flag.set(true));
        KoanScope
    }
}

impl Drop for KoanScope {
    fn drop(&mut self) {
        INSIDE_KOAN.with(|flag| flag.set(false));
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn bold(fg: Option<Color>) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(fg).set_bold(true);
    spec
}

fn plain(fg: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(fg));
    spec
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("the koan panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("the koan panicked: {s}")
    } else {
        "the koan panicked".to_string()
    }
}
