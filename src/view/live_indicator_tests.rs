//! Tests for the LIVE indicator.

use super::*;

#[test]
fn static_mode_renders_gray_text() {
    let span = LiveIndicator::new(InputMode::Static, false, true).render();
    assert_eq!(span.content, "[LIVE]");
    assert_eq!(span.style, Style::default().fg(Color::Gray));
}

#[test]
fn static_mode_ignores_blink_state() {
    let span = LiveIndicator::new(InputMode::Static, true, true).render();
    assert_eq!(
        span.style,
        Style::default().fg(Color::Gray),
        "Static mode should ignore blink_on and stay gray"
    );
}

#[test]
fn eof_mode_renders_gray_text() {
    let span = LiveIndicator::new(InputMode::Eof, true, true).render();
    assert_eq!(span.content, "[LIVE]");
    assert_eq!(span.style, Style::default().fg(Color::Gray));
}

#[test]
fn streaming_with_blink_on_is_green() {
    let span = LiveIndicator::new(InputMode::Streaming, true, true).render();
    assert_eq!(span.content, "[LIVE]");
    assert_eq!(span.style, Style::default().fg(Color::Green));
}

#[test]
fn streaming_with_blink_off_is_hidden() {
    let span = LiveIndicator::new(InputMode::Streaming, false, true).render();
    assert_eq!(span.content, "");
}

#[test]
fn no_color_renders_plain_text() {
    let span = LiveIndicator::new(InputMode::Streaming, true, false).render();
    assert_eq!(span.content, "[LIVE]");
    assert_eq!(span.style, Style::default());
}
