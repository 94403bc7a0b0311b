//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::CliOutput;

/// Assert the command exited successfully
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success,
        "Expected success. stdout: {} stderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert the command exited with a failure status
pub fn assert_failure(output: &CliOutput) {
    assert!(
        !output.success,
        "Expected failure. stdout: {}",
        output.stdout
    );
}

/// Assert the color column of `text` output
pub fn assert_colors(output: &CliOutput, expected: &[&str]) {
    assert_eq!(output.colors(), expected);
}

/// Assert `color` is `#rgb` or `#rrggbb` in lowercase
pub fn assert_hex(color: &str) {
    let digits = color
        .strip_prefix('#')
        .unwrap_or_else(|| panic!("Expected hex color, got {color:?}"));
    assert!(
        matches!(digits.len(), 3 | 6)
            && digits
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex color, got {color:?}"
    );
}
