//! Failure records and the assertion forms koans are written with.
//!
//! A koan is a plain function returning [`KoanResult`]. The assertion macros
//! return early with a [`KoanFailure`] that remembers where it was raised,
//! so the harness can point the learner at the exact line to meditate on.

use thiserror::Error;

/// Outcome of a single koan.
pub type KoanResult = Result<(), KoanFailure>;

/// Captured at the moment a koan fails; consumed by the harness report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("koan failed at {file}:{line}")]
pub struct KoanFailure {
    /// Base name of the source file, no directory component.
    pub file: String,
    pub line: u32,
    pub message: Option<String>,
    /// Rendering of the left-hand side of an equality assertion.
    pub expected: Option<String>,
}

impl KoanFailure {
    /// Create a failure at `path:line`. Empty messages count as no message.
    pub fn new(path: &str, line: u32, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            file: base_name(path).to_string(),
            line,
            message: (!message.is_empty()).then_some(message),
            expected: None,
        }
    }

    /// Attach the rendering of the value the master expected.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

/// Strips everything up to the last path separator.
///
/// Both `/` and `\` are treated as separators so that `file!()` paths from
/// any host render the same way.
pub fn base_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

// ============================================================================
// ASSERTION MACROS
// ============================================================================

/// Fails the enclosing koan unless `expr` holds.
///
/// ```
/// use koans::{koan_assert, KoanResult};
///
/// fn the_truth() -> KoanResult {
///     koan_assert!(1 + 1 == 2);
///     koan_assert!(u8::MAX == 255, "bytes top out at {}", u8::MAX);
///     Ok(())
/// }
/// assert!(the_truth().is_ok());
/// ```
#[macro_export]
macro_rules! koan_assert {
    ($expr:expr $(,)?) => {
        $crate::koan_assert!($expr, "")
    };
    ($expr:expr, $($msg:tt)+) => {
        if !($expr) {
            return ::core::result::Result::Err($crate::failure::KoanFailure::new(
                file!(),
                line!(),
                format!($($msg)+),
            ));
        }
    };
}

/// Fails the enclosing koan unless `expected == actual`.
///
/// The failure carries the `Debug` rendering of the first argument, whichever
/// side the learner considers "actual".
#[macro_export]
macro_rules! koan_assert_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        $crate::koan_assert_eq!($expected, $actual, "")
    };
    ($expected:expr, $actual:expr, $($msg:tt)+) => {
        match (&$expected, &$actual) {
            (expected, actual) => {
                if !(*expected == *actual) {
                    return ::core::result::Result::Err(
                        $crate::failure::KoanFailure::new(file!(), line!(), format!($($msg)+))
                            .with_expected(format!("{:?}", expected)),
                    );
                }
            }
        }
    };
}
