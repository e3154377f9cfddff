//! Line interpreter tests: spans, style transitions and malformed input.

use ansi2svg::terminal::{Color, ColorDepth, LineInterpreter, Slant, Style, Weight};

use crate::helpers::spans_of;

#[test]
fn line_without_escapes_is_one_span() {
    let spans = spans_of("  plain text\twith tab ");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "  plain text\twith tab ");
    assert_eq!(spans[0].style, Style::default());
}

#[test]
fn line_without_escapes_keeps_carried_style() {
    let mut interp = LineInterpreter::new(ColorDepth::TrueColor);
    interp.interpret_line("\x1b[3;91m");
    let line = interp.interpret_line("text");
    assert_eq!(line.spans.len(), 1);
    assert_eq!(line.spans[0].style.fg, Color::BrightRed);
    assert_eq!(line.spans[0].style.slant, Slant::Italic);
}

#[test]
fn red_hello_then_reset_world() {
    let spans = spans_of("\x1b[31mHello\x1b[0m World");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].text, "Hello");
    assert_eq!(spans[0].style.fg.to_hex(), "#CD3131");
    assert_eq!(spans[0].style.weight, Weight::Normal);
    assert_eq!(spans[0].style.slant, Slant::Normal);
    assert_eq!(spans[1].text, " World");
    assert_eq!(spans[1].style, Style::default());
    assert_eq!(spans[1].style.fg.to_hex(), "#FFFFFF");
}

#[test]
fn reset_always_returns_to_default() {
    let mut interp = LineInterpreter::new(ColorDepth::TrueColor);
    interp.interpret_line("\x1b[1;3;38;2;1;2;3m");
    interp.interpret_line("\x1b[0m");
    assert_eq!(interp.current_style(), Style::default());
}

#[test]
fn bold_then_normal_across_sequences() {
    let spans = spans_of("\x1b[1mA\x1b[22mB");
    assert_eq!(spans[0].style.weight, Weight::Bold);
    assert_eq!(spans[1].style.weight, Weight::Normal);
}

#[test]
fn bold_then_normal_across_lines() {
    let mut interp = LineInterpreter::new(ColorDepth::TrueColor);
    interp.interpret_line("\x1b[1mbold");
    let line = interp.interpret_line("\x1b[22mnormal");
    assert_eq!(line.spans[0].style.weight, Weight::Normal);
}

#[test]
fn truecolor_red_and_green() {
    let red = spans_of("\x1b[38;2;255;0;0mR");
    assert_eq!(red[0].style.fg.to_hex(), "#FF0000");
    let green = spans_of("\x1b[38;2;0;255;0mG");
    assert_eq!(green[0].style.fg.to_hex(), "#00FF00");
}

#[test]
fn oversized_truecolor_component_keeps_color_and_attributes() {
    let mut interp = LineInterpreter::new(ColorDepth::TrueColor);
    interp.interpret_line("\x1b[1;3m");
    let line = interp.interpret_line("\x1b[38;2;70000;0;0mbig");
    let style = line.spans[0].style;
    assert_eq!(style.fg, Color::Rgb(70000, 0, 0));
    assert_eq!(style.fg.to_hex(), "#111700000");
    assert_eq!(style.weight, Weight::Bold);
    assert_eq!(style.slant, Slant::Italic);
}

#[test]
fn non_sgr_sequence_is_invisible_and_inert() {
    let spans = spans_of("\x1b[32ma\x1b[5;10Hb\x1b[2Jc");
    assert_eq!(spans.len(), 3);
    let text: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(text, "abc");
    assert!(spans.iter().all(|s| s.style.fg == Color::Green));
}

#[test]
fn empty_leading_slot_is_reset_then_bold() {
    let mut interp = LineInterpreter::new(ColorDepth::TrueColor);
    interp.interpret_line("\x1b[3;31m");
    let line = interp.interpret_line("\x1b[;1mx");
    assert_eq!(
        line.spans[0].style,
        Style {
            fg: Color::Default,
            weight: Weight::Bold,
            slant: Slant::Normal,
        }
    );
}

#[test]
fn bare_sgr_resets() {
    let spans = spans_of("\x1b[1;31ma\x1b[mb");
    assert_eq!(spans[1].style, Style::default());
}

#[test]
fn concatenated_spans_equal_stripped_line() {
    let line = "x\x1b[1m<y>\x1b[?25l \x1b[38;5;33mz\x1b[0m\x1b[K end";
    let text: String = spans_of(line).iter().map(|s| s.text.as_str()).collect();
    assert_eq!(text, "x<y> z end");
}

#[test]
fn unterminated_escape_is_literal_text() {
    let spans = spans_of("ok\x1b[31");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "ok\x1b[31");
}

#[test]
fn question_mark_params_in_sgr_are_ignored() {
    let spans = spans_of("\x1b[1m\x1b[?7mx");
    assert_eq!(spans[0].style.weight, Weight::Bold);
}

#[test]
fn spans_are_never_empty() {
    let spans = spans_of("\x1b[1m\x1b[31m\x1b[0m");
    assert!(spans.is_empty());
}

#[test]
fn indexed_color_resolves_through_palette() {
    let spans = spans_of("\x1b[38;5;196mx");
    assert_eq!(spans[0].style.fg, Color::Indexed(196));
    assert_eq!(spans[0].style.fg.to_hex(), "#FF0000");
}

#[test]
fn ansi16_depth_leaves_truecolor_unapplied() {
    let mut interp = LineInterpreter::new(ColorDepth::Ansi16);
    let line = interp.interpret_line("\x1b[31m\x1b[38;2;200;100;255mx");
    assert_eq!(line.spans[0].style.fg, Color::Red);
}
