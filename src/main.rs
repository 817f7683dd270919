use std::process::ExitCode;

fn main() -> ExitCode {
    koans::cli::run()
}
