//! Plain-text building blocks for the harness console output.

/// Width of the welcome/farewell frame.
pub const WIDTH: usize = 79;

const EDGE: &str = "****";

/// A full row of stars.
pub fn rule() -> String {
    "*".repeat(WIDTH)
}

/// `text` centred between two star edges, padded to [`WIDTH`].
///
/// Text too long for the frame is kept whole with a single space on each side.
pub fn framed(text: &str) -> String {
    let inner = WIDTH - 2 * EDGE.len();
    let len = text.chars().count();
    if len + 2 > inner {
        return format!("{EDGE} {text} {EDGE}");
    }
    let left = (inner - len) / 2;
    let right = inner - len - left;
    format!("{EDGE}{}{text}{}{EDGE}", " ".repeat(left), " ".repeat(right))
}

pub fn welcome_lines(total: usize) -> [String; 3] {
    [
        rule(),
        framed("Welcome to the Koans"),
        framed(&format!("The master has {total} koans for you.")),
    ]
}

pub fn farewell_lines() -> [String; 2] {
    [
        framed("You've walked the path to enlightenment and satisfied your master."),
        rule(),
    ]
}

pub fn episode_start_line(label: &str) -> String {
    format!("{EDGE}\tThe {label} episode.")
}

pub fn episode_done_lines(label: &str) -> [String; 2] {
    [
        format!("{EDGE}\tCongratulations! You mastered the {label} episode."),
        format!("{EDGE}\tDon't loose concentration. Keep going!"),
    ]
}

pub fn score_lines(passed: usize, total: usize) -> [String; 2] {
    [
        framed(&format!("You mastered {passed} of {total} koans.")),
        framed("Keep going!"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_fixed_width() {
        assert_eq!(rule().len(), WIDTH);
        for line in welcome_lines(20).iter().chain(score_lines(3, 20).iter()) {
            assert_eq!(line.chars().count(), WIDTH, "{line:?}");
            assert!(line.starts_with("****") && line.ends_with("****"));
        }
    }

    #[test]
    fn welcome_names_the_total() {
        assert!(welcome_lines(42)[2].contains("The master has 42 koans for you."));
    }

    #[test]
    fn oversized_text_is_not_truncated() {
        let long = "x".repeat(100);
        let line = framed(&long);
        assert!(line.contains(&long));
        assert_eq!(line, format!("**** {long} ****"));
    }

    #[test]
    fn episode_done_keeps_its_encouragement() {
        let lines = episode_done_lines("third");
        assert!(lines[0].contains("You mastered the third episode."));
        assert!(lines[1].ends_with("Don't loose concentration. Keep going!"));
    }
}
