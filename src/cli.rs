//! The Koans Command-Line Interface.
//!
//! Wires the shipped episodes to a console handler and maps the outcome of
//! the walk onto the process exit code.

use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::config::{ColorMode, KoanConfig, DEFAULT_LOG_FILTER, LOG_ENV};
use crate::episode::{walk_the_path, Episode};
use crate::harness::{self, HarnessError, KoanHandler};
use crate::lessons;

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "koans",
    version,
    about = "Walk the path to enlightenment, one koan at a time."
)]
pub struct KoansArgs {
    /// When to colour the console output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// List the episodes and their koans without running them.
    #[arg(long)]
    pub list: bool,
}

impl KoansArgs {
    pub fn config(&self) -> KoanConfig {
        KoanConfig {
            list_only: self.list,
            ..KoanConfig::default()
        }
        .with_color(self.color)
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

pub fn run() -> ExitCode {
    init_logging();
    // Panics inside koans are reported by the handler; anything else is a bug.
    panic::set_hook(Box::new(|info| {
        if harness::inside_koan() {
            debug!(%info, "panic inside koan");
        } else {
            error!(%info, "panic outside any koan");
        }
    }));

    let config = KoansArgs::parse().config();
    let mut handler = KoanHandler::stdout(config.color);
    let episodes = lessons::all_episodes(&mut handler);

    let result = if config.list_only {
        let mut out = StandardStream::stdout(config.color);
        print_listing(&mut out, &episodes).map_err(HarnessError::from)
    } else {
        walk_the_path(&mut handler, &episodes)
    };

    ExitCode::from(exit_status(result))
}

/// 0 when every koan passed, 1 for a halted walk or a console error.
pub fn exit_status(result: Result<(), HarnessError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(HarnessError::Halted { passed, total }) => {
            debug!(passed, total, "walk halted at first failing koan");
            1
        }
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            1
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Prints every episode label followed by its koans, in walking order.
pub fn print_listing(out: &mut impl WriteColor, episodes: &[Episode]) -> io::Result<()> {
    for episode in episodes {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "The {} episode", episode.label())?;
        out.reset()?;
        writeln!(out, " ({} koans)", episode.len())?;
        for koan in episode.koans() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "  - {}", koan.name())?;
            out.reset()?;
            writeln!(out)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn flags_map_onto_config() {
        let args = KoansArgs::parse_from(["koans", "--list", "--color", "never"]);
        let config = args.config();
        assert!(config.list_only);
        assert_eq!(config.color, termcolor::ColorChoice::Never);

        let args = KoansArgs::parse_from(["koans"]);
        assert_eq!(args.color, ColorMode::Auto);
        assert!(!args.config().list_only);
    }

    #[test]
    fn exit_status_is_zero_only_for_a_clean_walk() {
        assert_eq!(exit_status(Ok(())), 0);
        assert_eq!(exit_status(Err(HarnessError::Halted { passed: 15, total: 20 })), 1);
        let broken_pipe = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
        assert_eq!(exit_status(Err(HarnessError::Io(broken_pipe))), 1);
    }

    #[test]
    fn failing_walk_maps_to_exit_status_one() {
        let mut handler = KoanHandler::new(Buffer::no_color());
        let episode = Episode::new(
            &mut handler,
            "first",
            vec![crate::Koan::new("arrays_are_rigid", || {
                crate::koan_assert_eq!(6, [0_i32; 5].len());
                Ok(())
            })],
        );
        let result = walk_the_path(&mut handler, &[episode]);
        assert_eq!(exit_status(result), 1);

        let out = String::from_utf8_lossy(handler.writer().as_slice()).into_owned();
        assert!(out.contains("The master expected 6."));
        assert!(out.contains("You mastered 0 of 1 koans."));
    }

    #[test]
    fn listing_names_every_koan_without_running_any() {
        let mut handler = KoanHandler::new(Buffer::no_color());
        let episodes = lessons::all_episodes(&mut handler);
        let mut out = Buffer::no_color();
        print_listing(&mut out, &episodes).unwrap();

        let listing = String::from_utf8_lossy(out.as_slice()).into_owned();
        assert!(listing.starts_with("The first episode (1 koans)\n  - rust_is_not_too_hard\n"));
        assert!(listing.contains("The second episode (8 koans)"));
        assert!(listing.contains("  - they_are_not_almighty"));
        assert_eq!(listing.matches("  - ").count(), handler.total_koans());
        assert_eq!(handler.total_passed(), 0);
    }
}
