//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::path::Path;

use spotless_staged::adapters::git::numstat_has_changes;
use spotless_staged::core::models::{PassMode, WhitespacePolicy, match_pattern};
use test_case::test_case;

// =============================================================================
// Pattern Transform Tests
// =============================================================================

#[test_case("Main.java", r".*[\\/]Main\.java" ; "root file")]
#[test_case("src/main/java/App.java", r".*[\\/]src[\\/]main[\\/]java[\\/]App\.java" ; "nested forward slashes")]
#[test_case(r"src\main\App.java", r".*[\\/]src[\\/]main[\\/]App\.java" ; "nested backslashes")]
#[test_case("src//App.java", r".*[\\/]src[\\/]App\.java" ; "doubled separator")]
#[test_case("./App.java", r".*[\\/]App\.java" ; "leading dot segment")]
#[test_case("a+b/C$D.java", r".*[\\/]a\+b[\\/]C\$D\.java" ; "regex metacharacters escaped")]
fn test_match_pattern(input: &str, expected: &str) {
    assert_eq!(match_pattern(input), expected);
}

#[test_case(PassMode::Paths, "/repo/src/A.java" ; "paths mode")]
#[test_case(PassMode::Patterns, r".*[\\/]src[\\/]A\.java" ; "patterns mode")]
fn test_render_mode(mode: PassMode, expected: &str) {
    assert_eq!(mode.render(Path::new("/repo"), "src/A.java"), expected);
}

#[test_case("paths", Some(PassMode::Paths) ; "paths")]
#[test_case("PATTERNS", Some(PassMode::Patterns) ; "uppercase patterns")]
#[test_case("pattern", Some(PassMode::Patterns) ; "singular alias")]
#[test_case("glob", None ; "unknown mode")]
fn test_parse_mode(input: &str, expected: Option<PassMode>) {
    assert_eq!(input.parse::<PassMode>().ok(), expected);
}

// =============================================================================
// Whitespace Policy Tests
// =============================================================================

#[test_case(WhitespacePolicy::Eol, "--ignore-space-at-eol" ; "eol")]
#[test_case(WhitespacePolicy::All, "--ignore-all-space" ; "all")]
fn test_git_flag(policy: WhitespacePolicy, flag: &str) {
    assert_eq!(policy.git_flag(), flag);
}

// =============================================================================
// Numstat Parsing Tests
// =============================================================================

#[test_case("", false ; "no output")]
#[test_case("0\t0\tA.java\n", false ; "whitespace only")]
#[test_case("1\t0\tA.java\n", true ; "added line")]
#[test_case("0\t1\tA.java\n", true ; "removed line")]
#[test_case("-\t-\tlogo.png\n", true ; "binary")]
#[test_case("0\t0\tA.java\n2\t2\tA.java\n", true ; "any line counts")]
#[test_case("garbage\n", false ; "unparseable line")]
fn test_numstat(output: &str, expected: bool) {
    assert_eq!(numstat_has_changes(output), expected);
}
