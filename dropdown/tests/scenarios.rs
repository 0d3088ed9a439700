/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


//! End to end runs of the public operations, driven by scripted key presses.

use pretty_assertions::assert_eq;
use qgo_dropdown::{multi_select_async_with,
                   multi_select_with,
                   select_with,
                   KeyPress,
                   SelectError,
                   SelectOption,
                   TestStringWriter,
                   TestVecKeyPressReader,
                   Theme,
                   MULTI_SELECT_HELP};
use test_case::test_case;

fn connections() -> Vec<SelectOption> {
    vec![
        SelectOption::new("1", "One"),
        SelectOption::new("2", "Two"),
        SelectOption::new("3", "Three"),
    ]
}

/// The rows of the last frame drawn.
fn last_frame(output: &str) -> Vec<String> {
    let frame = output
        .rsplit("\u{1b}[2J\u{1b}[1;1H")
        .next()
        .unwrap_or_default();
    frame.split("\u{1b}[1E").map(str::to_string).collect()
}

#[test]
fn single_select_down_down_enter() {
    let mut writer = TestStringWriter::new();
    let mut reader =
        TestVecKeyPressReader::new([KeyPress::Down, KeyPress::Down, KeyPress::Enter]);

    let value = select_with(
        "Pick",
        &connections(),
        (&mut writer, &mut reader),
        &Theme::default(),
    )
    .unwrap();

    assert_eq!(value, "3");
    assert_eq!(reader.open_count, 1);
    assert_eq!(reader.close_count, 1);

    let frame = last_frame(writer.get_buffer());
    assert!(frame.contains(&"> Three".to_string()));
    assert!(frame.contains(&"  One".to_string()));
}

#[test]
fn single_select_up_wraps_to_the_bottom() {
    let mut reader = TestVecKeyPressReader::new([KeyPress::Up, KeyPress::Enter]);
    let value = select_with(
        "Pick",
        &connections(),
        (&mut TestStringWriter::new(), &mut reader),
        &Theme::default(),
    )
    .unwrap();
    assert_eq!(value, "3");
}

#[test_case(KeyPress::Esc ; "escape")]
#[test_case(KeyPress::Character('q') ; "lower case q")]
#[test_case(KeyPress::Character('Q') ; "upper case q")]
fn cancel_restores_the_terminal(key_press: KeyPress) {
    let mut writer = TestStringWriter::new();
    let mut reader = TestVecKeyPressReader::new([KeyPress::Down, key_press]);

    let result = multi_select_with(
        "Pick",
        &connections(),
        (&mut writer, &mut reader),
        &Theme::default(),
    );

    assert!(matches!(result, Err(SelectError::Cancelled)));
    assert!(result.unwrap_err().is_cancelled());
    assert_eq!(reader.close_count, 1);
    assert!(!reader.is_open);
    assert!(writer.get_buffer().ends_with("\u{1b}[?25h"));
}

#[test]
fn multi_select_first_and_last() {
    let mut writer = TestStringWriter::new();
    let mut reader = TestVecKeyPressReader::new([
        KeyPress::Space,
        KeyPress::Down,
        KeyPress::Down,
        KeyPress::Space,
        KeyPress::Enter,
    ]);

    let values = multi_select_with(
        "Delete rows",
        &connections(),
        (&mut writer, &mut reader),
        &Theme::default(),
    )
    .unwrap();

    assert_eq!(values, vec!["1".to_string(), "3".to_string()]);

    let output = writer.get_buffer();
    assert!(output.contains(MULTI_SELECT_HELP));
    assert!(output.contains("  [x] One"));
    assert!(output.contains("> [X] Three"));
}

#[test]
fn multi_select_returns_list_order_not_toggle_order() {
    let options = ["A", "B", "C"].map(SelectOption::from);
    let mut reader = TestVecKeyPressReader::new([
        KeyPress::Down,
        KeyPress::Down,
        KeyPress::Space,
        KeyPress::Down,
        KeyPress::Space,
        KeyPress::Enter,
    ]);

    let values = multi_select_with(
        "Pick",
        &options,
        (&mut TestStringWriter::new(), &mut reader),
        &Theme::default(),
    )
    .unwrap();

    assert_eq!(values, vec!["A".to_string(), "C".to_string()]);
}

#[test]
fn multi_select_nothing_is_a_valid_answer() {
    let mut reader = TestVecKeyPressReader::new([KeyPress::Enter]);
    let values = multi_select_with(
        "Pick",
        &connections(),
        (&mut TestStringWriter::new(), &mut reader),
        &Theme::default(),
    )
    .unwrap();
    assert!(values.is_empty());
}

#[test]
fn empty_options_fail_before_touching_the_terminal() {
    let mut writer = TestStringWriter::new();
    let mut reader = TestVecKeyPressReader::new([KeyPress::Enter]);

    let result = select_with("Pick", &[], (&mut writer, &mut reader), &Theme::default());

    assert!(matches!(result, Err(SelectError::EmptyOptions)));
    assert_eq!(reader.open_count, 0);
    assert_eq!(writer.get_buffer(), "");
}

#[test]
fn labels_are_shown_and_values_are_returned() {
    let options = [SelectOption::new("pg-01", "postgres @ localhost")];
    let mut writer = TestStringWriter::new();
    let mut reader = TestVecKeyPressReader::new([KeyPress::Enter]);

    let value =
        select_with("Pick", &options, (&mut writer, &mut reader), &Theme::default())
            .unwrap();

    assert_eq!(value, "pg-01");
    assert!(writer.get_buffer().contains("> postgres @ localhost"));
    assert!(!writer.get_buffer().contains("pg-01"));
}

#[test]
fn custom_theme_is_used_for_every_row() {
    let theme = Theme {
        focused_prefix: "→".to_string(),
        unfocused_prefix: String::new(),
        checked: "(*)".to_string(),
        unchecked: "( )".to_string(),
        show_help: false,
    };
    let mut writer = TestStringWriter::new();
    let mut reader = TestVecKeyPressReader::new([KeyPress::Space, KeyPress::Enter]);

    multi_select_with("Pick", &connections(), (&mut writer, &mut reader), &theme).unwrap();

    let output = writer.get_buffer();
    assert!(output.contains("→( ) One"));
    assert!(output.contains("→(*) One"));
    assert!(output.contains(" ( ) Two"));
    assert!(!output.contains(MULTI_SELECT_HELP));
}

#[tokio::test]
async fn async_multi_select() {
    let mut reader = TestVecKeyPressReader::new([
        KeyPress::Up,
        KeyPress::Space,
        KeyPress::Enter,
    ]);
    let values = multi_select_async_with(
        "Pick",
        &connections(),
        (&mut TestStringWriter::new(), &mut reader),
        &Theme::default(),
    )
    .await
    .unwrap();
    assert_eq!(values, vec!["3".to_string()]);
    assert_eq!(reader.close_count, 1);
}
