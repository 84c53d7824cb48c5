// End-to-end scripted sessions across prompting and menu selection.

use std::io::Cursor;

use askline::{DEFAULT_SENTINEL, Terminal, TerminalError};

fn scripted<'a>(
    input: &'static str,
    output: &'a mut Vec<u8>,
) -> Terminal<Cursor<&'static [u8]>, &'a mut Vec<u8>> {
    Terminal::new(Cursor::new(input.as_bytes()), output)
}

#[test]
fn menu_session_resolves_prefix_after_ambiguity() {
    let options = ["Add item", "Remove item", "Rename item", "Quit"];
    let mut output = Vec::new();

    // "r" matches two options; "rem" narrows it down.
    let picked = scripted("r\nrem\n", &mut output)
        .choice(&options, Some("Inventory actions."))
        .unwrap();
    assert_eq!(picked, 1);

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("Inventory actions.\n"));
    assert!(rendered.contains("Please choose one of the following options:\n"));
    assert!(rendered.contains("2 options begin with 'r', please be more specific:\n    2. Remove item\n    3. Rename item\n"));
    assert!(rendered.contains("Sorry, please enter a number between 1 and 4 or the start of a specific option.\n"));
}

#[test]
fn menu_renders_multiline_options_with_deeper_indent() {
    let options = ["short", "first line\nsecond line"];
    let mut output = Vec::new();

    scripted("1\n", &mut output).choice(&options, None).unwrap();

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.contains("    1. short\n    2. first line\n       second line\n\n"));
}

#[test]
fn menu_accepts_full_option_text_in_any_case() {
    let options = ["Apple", "Banana"];
    let mut output = Vec::new();

    let picked = scripted("BANANA\n", &mut output).choice(&options, None).unwrap();
    assert_eq!(picked, 1);
}

#[test]
fn menu_returns_index_within_bounds_for_varied_input() {
    let options = ["alpha", "beta", "gamma"];
    for input in ["1\n", "2\n", "3\n", "al\n", "be\n", "ga\n"] {
        let mut output = Vec::new();
        let picked = scripted(input, &mut output).choice(&options, None).unwrap();
        assert!(picked < options.len());
    }
}

#[test]
fn menu_with_owned_option_strings() {
    let options: Vec<String> = vec!["one".to_string(), "two".to_string()];
    let mut output = Vec::new();

    let picked = scripted("two\n", &mut output).choice(&options, None).unwrap();
    assert_eq!(picked, 1);
}

#[test]
fn single_option_menu_needs_no_input() {
    let mut output = Vec::new();
    let picked = scripted("", &mut output)
        .choice(&["only one"], Some("No real decision here."))
        .unwrap();
    assert_eq!(picked, 0);

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.ends_with("Choosing the only available option: only one\n"));
}

#[test]
fn empty_menu_is_a_configuration_error() {
    let mut output = Vec::new();
    let result = scripted("1\n", &mut output).choice(&[] as &[&str], Some("unreachable"));
    assert!(matches!(result, Err(TerminalError::EmptyOptions)));
    assert!(output.is_empty());
}

#[test]
fn menu_cancelled_mid_retry_propagates() {
    let mut output = Vec::new();
    let result = scripted("nope\n", &mut output).choice(&["Apple", "Banana"], None);
    assert!(matches!(result, Err(TerminalError::Cancelled)));
}

#[test]
fn multiline_session_with_named_sentinel() {
    let mut output = Vec::new();
    let body = scripted("hello\nworld\nEND\n", &mut output)
        .multiline_prompt_with("Say something", "END")
        .unwrap();
    assert_eq!(body, "hello\nworld");

    let rendered = String::from_utf8(output).unwrap();
    assert_eq!(
        rendered,
        "Say something\n(To finish, type 'END' on a line by itself and press enter.)\n"
    );
}

#[test]
fn multiline_session_default_sentinel_is_two_dots() {
    assert_eq!(DEFAULT_SENTINEL, "..");

    let mut output = Vec::new();
    let body = scripted("dots below\n..\n", &mut output)
        .multiline_prompt("Go on")
        .unwrap();
    assert_eq!(body, "dots below");
}

#[test]
fn prompt_then_validated_prompt_share_one_session() {
    let mut output = Vec::new();
    {
        let mut terminal = scripted("Seak\nnot a number\n7\n", &mut output);
        let name = terminal.prompt("Name:").unwrap();
        assert_eq!(name, "Seak");

        let level = terminal
            .valid_prompt("Level (number):", |answer| {
                answer.trim().parse::<u32>().map(|_| ())
            })
            .unwrap();
        assert_eq!(level, "7");
    }

    let rendered = String::from_utf8(output).unwrap();
    assert!(rendered.starts_with("Name: Level (number): "));
    assert!(rendered.contains("That was not a valid response.\n"));
}

#[test]
fn validated_prompt_cancelled_while_retrying() {
    let mut output = Vec::new();
    let result = scripted("bad\nworse\n", &mut output)
        .valid_prompt("Number:", |answer| answer.parse::<u8>().map(|_| ()));
    assert!(matches!(result, Err(TerminalError::Cancelled)));
}
