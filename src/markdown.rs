//! Discord markdown helpers.
//!
//! Every helper formats its input with the default separator before wrapping it.

use crate::clock::{Clock, SystemClock};
use crate::message::{format, MessageInput, DEFAULT_SEPARATOR};
use chrono::{DateTime, Utc};
use std::fmt;

fn text(input: impl Into<MessageInput>) -> String {
    format(&input.into(), DEFAULT_SEPARATOR)
}

pub fn bold(input: impl Into<MessageInput>) -> String {
    format!("**{}**", text(input))
}

pub fn italic(input: impl Into<MessageInput>) -> String {
    format!("*{}*", text(input))
}

pub fn underline(input: impl Into<MessageInput>) -> String {
    format!("__{}__", text(input))
}

pub fn strikethrough(input: impl Into<MessageInput>) -> String {
    format!("~~{}~~", text(input))
}

pub fn spoiler(input: impl Into<MessageInput>) -> String {
    format!("||{}||", text(input))
}

pub fn inline_code(input: impl Into<MessageInput>) -> String {
    format!("`{}`", text(input))
}

/// The language tag, if any, goes directly after the opening fence.
pub fn code_block(input: impl Into<MessageInput>, language: Option<&str>) -> String {
    format!("```{}\n{}```", language.unwrap_or_default(), text(input))
}

pub fn quote(input: impl Into<MessageInput>) -> String {
    format!("> {}", text(input))
}

pub fn block_quote(input: impl Into<MessageInput>) -> String {
    format!(">>> {}", text(input))
}

pub fn link(input: impl Into<MessageInput>, url: &str) -> String {
    format!("[{}]({})", text(input), url)
}

pub fn header(input: impl Into<MessageInput>, level: usize) -> String {
    format!("{} {}", "#".repeat(level), text(input))
}

pub fn mention(user_id: impl Into<MessageInput>) -> String {
    format!("<@{}>", text(user_id))
}

pub fn channel_mention(channel_id: impl Into<MessageInput>) -> String {
    format!("<#{}>", text(channel_id))
}

pub fn role_mention(role_id: impl Into<MessageInput>) -> String {
    format!("<@&{}>", text(role_id))
}

pub fn emoji(name: impl Into<MessageInput>) -> String {
    format!(":{}:", text(name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    ShortTime,
    LongTime,
    ShortDate,
    LongDate,
    ShortDateTime,
    LongDateTime,
    Relative,
}

impl fmt::Display for TimestampStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            Self::ShortTime => "t",
            Self::LongTime => "T",
            Self::ShortDate => "d",
            Self::LongDate => "D",
            Self::ShortDateTime => "f",
            Self::LongDateTime => "F",
            Self::Relative => "R",
        };
        f.write_str(flag)
    }
}

fn unix_timestamp(unix: i64, style: TimestampStyle) -> String {
    format!("<t:{}:{}>", unix, style)
}

/// Discord renders this in each reader's own timezone.
pub fn timestamp(at: DateTime<Utc>, style: TimestampStyle) -> String {
    unix_timestamp(at.timestamp(), style)
}

/// A countdown to `seconds_from_now` after the clock's current time, e.g. "in 5 minutes".
///
/// Offsets past the `i64` range saturate.
pub fn timer(clock: &impl Clock, seconds_from_now: i64) -> String {
    unix_timestamp(
        clock.now().timestamp().saturating_add(seconds_from_now),
        TimestampStyle::Relative,
    )
}

pub fn create_timer(seconds_from_now: i64) -> String {
    timer(&SystemClock, seconds_from_now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_inline_styles() {
        assert_eq!(bold("x"), "**x**");
        assert_eq!(italic("x"), "*x*");
        assert_eq!(underline("x"), "__x__");
        assert_eq!(strikethrough("x"), "~~x~~");
        assert_eq!(spoiler("x"), "||x||");
        assert_eq!(inline_code("x"), "`x`");
    }

    #[test]
    fn test_code_block_places_language_after_fence() {
        assert_eq!(code_block("x", Some("py")), "```py\nx```");
        assert_eq!(code_block("x", None), "```\nx```");
    }

    #[test]
    fn test_block_level_styles() {
        assert_eq!(quote("x"), "> x");
        assert_eq!(block_quote("x"), ">>> x");
        assert_eq!(header("Title", 2), "## Title");
        assert_eq!(link("docs", "https://example.com"), "[docs](https://example.com)");
    }

    #[test]
    fn test_mentions_and_emoji() {
        assert_eq!(mention("106120945231466496"), "<@106120945231466496>");
        assert_eq!(channel_mention(42u64), "<#42>");
        assert_eq!(role_mention("7"), "<@&7>");
        assert_eq!(emoji("tada"), ":tada:");
    }

    #[test]
    fn test_helpers_coerce_non_text_input() {
        assert_eq!(bold(vec!["a", "b"]), "**a b **");
        assert_eq!(inline_code(MessageInput::lazy(|| 7)), "`7`");
        assert_eq!(italic(1.5), "*1.5*");
    }

    #[test]
    fn test_timer_is_relative_to_clock() {
        let clock = FixedClock::at_unix(1_700_000_000).unwrap();

        assert_eq!(timer(&clock, 42), "<t:1700000042:R>");
        assert_eq!(timer(&clock, -60), "<t:1699999940:R>");
    }

    #[test]
    fn test_timer_saturates_on_huge_offset() {
        let clock = FixedClock::at_unix(1_700_000_000).unwrap();

        assert_eq!(timer(&clock, 10_000_000_000_000), "<t:10001700000000:R>");
        assert_eq!(timer(&clock, i64::MAX), format!("<t:{}:R>", i64::MAX));
        assert_eq!(timer(&clock, i64::MIN), format!("<t:{}:R>", i64::MIN + 1_700_000_000));
    }

    #[test]
    fn test_timestamp_styles() {
        let at = FixedClock::at_unix(1_700_000_000).unwrap().now();

        assert_eq!(timestamp(at, TimestampStyle::ShortTime), "<t:1700000000:t>");
        assert_eq!(timestamp(at, TimestampStyle::LongDateTime), "<t:1700000000:F>");
    }

    #[test]
    fn test_create_timer_uses_wall_clock() {
        let before = Utc::now().timestamp() + 10;
        let rendered = create_timer(10);
        let after = Utc::now().timestamp() + 10;

        let unix: i64 = rendered
            .strip_prefix("<t:")
            .and_then(|r| r.strip_suffix(":R>"))
            .unwrap()
            .parse()
            .unwrap();

        assert!(before <= unix && unix <= after);
    }
}
