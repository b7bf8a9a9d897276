//! Typed line prompts with validation and re-prompting.
//!
//! A prompt writes its text, an optional default-value hint and a `": "`
//! separator, then reads one line and parses it into the requested type.
//! Empty or unparsable input prints an error in the palette's error color and
//! asks again until a value parses, the input closes, the caller cancels, or
//! the optional attempt limit runs out.

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{EzConsoleError, Result};
use crate::output::Console;
use crate::signal::SignalHandler;

/// Message shown when an empty line is submitted and empty input is not allowed.
pub const EMPTY_INPUT_MESSAGE: &str = "Value must not be empty";

/// A line of input that could not be converted to the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFailure {
    /// Human label of the expected type, e.g. "Integer Number".
    pub expected: &'static str,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value must be of type {}!", self.expected)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A type a prompt can produce.
///
/// Implemented for `String`, `bool`, `char`, the primitive integers and the
/// floating-point types. The set is closed.
pub trait PromptValue: sealed::Sealed + Default + Sized {
    /// Label used in the type error message.
    const FRIENDLY_NAME: &'static str;

    /// Parse a non-empty line of input.
    fn parse_input(input: &str) -> std::result::Result<Self, ParseFailure>;

    fn failure() -> ParseFailure {
        ParseFailure {
            expected: Self::FRIENDLY_NAME,
        }
    }
}

impl sealed::Sealed for String {}

impl PromptValue for String {
    const FRIENDLY_NAME: &'static str = "Text";

    fn parse_input(input: &str) -> std::result::Result<Self, ParseFailure> {
        Ok(input.to_string())
    }
}

impl sealed::Sealed for bool {}

impl PromptValue for bool {
    const FRIENDLY_NAME: &'static str = "Boolean";

    fn parse_input(input: &str) -> std::result::Result<Self, ParseFailure> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Self::failure())
        }
    }
}

impl sealed::Sealed for char {}

impl PromptValue for char {
    const FRIENDLY_NAME: &'static str = "Char";

    fn parse_input(input: &str) -> std::result::Result<Self, ParseFailure> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Self::failure()),
        }
    }
}

macro_rules! trimmed_from_str {
    ($name:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl PromptValue for $ty {
                const FRIENDLY_NAME: &'static str = $name;

                fn parse_input(input: &str) -> std::result::Result<Self, ParseFailure> {
                    input.trim().parse().map_err(|_| Self::failure())
                }
            }
        )+
    };
}

trimmed_from_str!("Integer Number" => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
trimmed_from_str!("Decimal Number" => f32, f64);

/// What to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub text: String,
    /// Shown parenthesized after the prompt text. Display only: an empty line
    /// never selects it.
    pub default_hint: Option<String>,
    /// Return the type's zero value on an empty line instead of re-prompting.
    pub allow_empty: bool,
}

impl PromptRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default_hint: None,
            allow_empty: false,
        }
    }

    pub fn default_hint(mut self, value: impl fmt::Display) -> Self {
        self.default_hint = Some(value.to_string());
        self
    }

    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }
}

/// Reads typed values from a line reader, writing prompts to a [`Console`].
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    console: Console<W>,
    max_attempts: Option<u32>,
    cancel: Option<SignalHandler>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, console: Console<W>) -> Self {
        Self {
            input,
            console,
            max_attempts: None,
            cancel: None,
        }
    }

    /// Stop after `max` attempts. `None` retries forever.
    pub fn with_max_attempts(mut self, max: Option<u32>) -> Self {
        self.max_attempts = max;
        self
    }

    /// Abort prompts once `handler` reports a shutdown request.
    pub fn with_cancellation(mut self, handler: SignalHandler) -> Self {
        self.cancel = Some(handler);
        self
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_parts(self) -> (R, Console<W>) {
        (self.input, self.console)
    }

    /// Prompt for a line of text.
    pub fn read_text(&mut self, text: &str, default_hint: Option<&str>) -> Result<String> {
        let mut request = PromptRequest::new(text);
        request.default_hint = default_hint.map(str::to_string);
        self.read(&request)
    }

    /// Prompt until a line parses as `T`.
    ///
    /// # Errors
    ///
    /// - [`EzConsoleError::InputClosed`] if the input reaches end of file
    /// - [`EzConsoleError::Cancelled`] if the cancellation handler fired
    /// - [`EzConsoleError::TooManyAttempts`] if the attempt limit ran out
    /// - [`EzConsoleError::Io`] if reading or writing fails
    pub fn read<T: PromptValue>(&mut self, request: &PromptRequest) -> Result<T> {
        let error_color = self.console.palette().error;
        let mut attempts: u32 = 0;

        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    tracing::debug!(max, "prompt attempt limit reached");
                    return Err(EzConsoleError::TooManyAttempts(max));
                }
            }
            self.check_cancelled()?;
            attempts += 1;

            self.write_prompt(request)?;
            let line = self.read_line()?;
            self.check_cancelled()?;
            let line = line.ok_or(EzConsoleError::InputClosed)?;

            if line.is_empty() {
                if request.allow_empty {
                    return Ok(T::default());
                }
                tracing::debug!(attempt = attempts, "empty input rejected");
                self.console
                    .write_line_colored(EMPTY_INPUT_MESSAGE, Some(error_color), None)?;
                continue;
            }

            match T::parse_input(&line) {
                Ok(value) => return Ok(value),
                Err(failure) => {
                    tracing::debug!(
                        attempt = attempts,
                        expected = failure.expected,
                        "input rejected"
                    );
                    self.console
                        .write_line_colored(&failure.to_string(), Some(error_color), None)?;
                }
            }
        }
    }

    fn write_prompt(&mut self, request: &PromptRequest) -> Result<()> {
        let palette = *self.console.palette();
        self.console
            .write_colored(&request.text, Some(palette.prompt), None)?;
        if let Some(hint) = &request.default_hint {
            self.console
                .write_colored(&format!(" ({})", hint), Some(palette.hint), None)?;
        }
        self.console.write(": ")?;
        self.console.flush()
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(handler) if handler.is_shutdown_requested() => {
                tracing::debug!("prompt cancelled");
                Err(EzConsoleError::Cancelled)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::console::LINE_ENDING;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Console::new(Vec::new(), false),
        )
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, console) = prompter.into_parts();
        String::from_utf8(console.into_inner()).unwrap()
    }

    fn type_error(name: &str) -> String {
        format!("Value must be of type {}!", name)
    }

    // ========================================================================
    // Parsing strategies
    // ========================================================================

    #[test]
    fn test_parse_integer_ignores_surrounding_whitespace() {
        assert_eq!(i32::parse_input(" 42 "), Ok(42));
        assert_eq!(i64::parse_input("-7"), Ok(-7));
        assert_eq!(u8::parse_input("+5"), Ok(5));
    }

    #[test]
    fn test_parse_integer_rejects_garbage_and_overflow() {
        let failure = ParseFailure {
            expected: "Integer Number",
        };
        assert_eq!(i32::parse_input("abc"), Err(failure));
        assert_eq!(i32::parse_input("1.5"), Err(failure));
        assert_eq!(u8::parse_input("256"), Err(failure));
        assert_eq!(u32::parse_input("-1"), Err(failure));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(f64::parse_input("3.25"), Ok(3.25));
        assert_eq!(f32::parse_input(" 2 "), Ok(2.0));
        assert_eq!(
            f64::parse_input("three"),
            Err(ParseFailure {
                expected: "Decimal Number"
            })
        );
    }

    #[test]
    fn test_parse_boolean_canonical_spellings() {
        assert_eq!(bool::parse_input("True"), Ok(true));
        assert_eq!(bool::parse_input("true"), Ok(true));
        assert_eq!(bool::parse_input(" FALSE "), Ok(false));
        assert_eq!(
            bool::parse_input("maybe"),
            Err(ParseFailure {
                expected: "Boolean"
            })
        );
        assert!(bool::parse_input("yes").is_err());
        assert!(bool::parse_input("1").is_err());
    }

    #[test]
    fn test_parse_text_passes_through_untrimmed() {
        assert_eq!(String::parse_input("  spaced  "), Ok("  spaced  ".to_string()));
    }

    #[test]
    fn test_parse_char_requires_exactly_one() {
        assert_eq!(char::parse_input("x"), Ok('x'));
        assert_eq!(char::parse_input("é"), Ok('é'));
        assert!(char::parse_input("xy").is_err());
    }

    #[test]
    fn test_friendly_names() {
        assert_eq!(<i32 as PromptValue>::FRIENDLY_NAME, "Integer Number");
        assert_eq!(<u64 as PromptValue>::FRIENDLY_NAME, "Integer Number");
        assert_eq!(<f64 as PromptValue>::FRIENDLY_NAME, "Decimal Number");
        assert_eq!(<f32 as PromptValue>::FRIENDLY_NAME, "Decimal Number");
        assert_eq!(<String as PromptValue>::FRIENDLY_NAME, "Text");
        assert_eq!(<bool as PromptValue>::FRIENDLY_NAME, "Boolean");
    }

    // ========================================================================
    // Prompt rendering
    // ========================================================================

    #[test]
    fn test_prompt_without_default() {
        let mut p = prompter("Ada\n");
        let name = p.read_text("Name", None).unwrap();
        assert_eq!(name, "Ada");
        assert_eq!(output(p), "Name: ");
    }

    #[test]
    fn test_prompt_with_default_hint() {
        let mut p = prompter("9\n");
        let request = PromptRequest::new("Level").default_hint(3);
        let level: i32 = p.read(&request).unwrap();
        assert_eq!(level, 9);
        assert_eq!(output(p), "Level (3): ");
    }

    #[test]
    fn test_crlf_line_ending_is_stripped() {
        let mut p = prompter("hello\r\n");
        assert_eq!(p.read_text("Say", None).unwrap(), "hello");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("12");
        let value: u32 = p.read(&PromptRequest::new("N")).unwrap();
        assert_eq!(value, 12);
    }

    #[test]
    fn test_prompt_colors_restored_after_read() {
        let mut p = Prompter::new(Cursor::new(b"1\n".to_vec()), Console::new(Vec::new(), true));
        let _: i32 = p.read(&PromptRequest::new("N").default_hint("0")).unwrap();
        assert_eq!(p.console().colors(), crate::output::ColorPair::default());
    }

    // ========================================================================
    // Empty input
    // ========================================================================

    #[test]
    fn test_empty_input_allowed_returns_zero_value() {
        let mut p = prompter("\n");
        let value: i32 = p.read(&PromptRequest::new("Count").allow_empty(true)).unwrap();
        assert_eq!(value, 0);
        assert_eq!(output(p), "Count: ");
    }

    #[test]
    fn test_empty_input_allowed_ignores_default_hint() {
        let mut p = prompter("\n");
        let request = PromptRequest::new("Name").default_hint("Bob").allow_empty(true);
        let value: String = p.read(&request).unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn test_empty_input_then_valid_integer() {
        let mut p = prompter("\n42\n");
        let value: i32 = p.read(&PromptRequest::new("Age")).unwrap();
        assert_eq!(value, 42);

        let out = output(p);
        assert_eq!(out.matches(EMPTY_INPUT_MESSAGE).count(), 1);
        assert_eq!(
            out,
            format!("Age: {EMPTY_INPUT_MESSAGE}{LINE_ENDING}Age: ")
        );
    }

    #[test]
    fn test_retry_keeps_default_hint_and_allow_empty() {
        // "x" fails to parse, then the empty line is accepted because
        // allow_empty still holds on the second attempt.
        let mut p = prompter("x\n\n");
        let request = PromptRequest::new("Port").default_hint(8080).allow_empty(true);
        let value: u16 = p.read(&request).unwrap();
        assert_eq!(value, 0);
        assert_eq!(output(p).matches("Port (8080): ").count(), 2);
    }

    // ========================================================================
    // Conversion failures
    // ========================================================================

    #[test]
    fn test_conversion_failure_then_success() {
        let mut p = prompter("abc\n7\n");
        let value: i32 = p.read(&PromptRequest::new("Number")).unwrap();
        assert_eq!(value, 7);

        let out = output(p);
        assert_eq!(out.matches(&type_error("Integer Number")).count(), 1);
        assert_eq!(out.matches("Number: ").count(), 2);
    }

    #[test]
    fn test_boolean_prompt_true_literal() {
        let mut p = prompter("True\n");
        assert!(p.read::<bool>(&PromptRequest::new("Ok?")).unwrap());
    }

    #[test]
    fn test_boolean_prompt_rejects_maybe() {
        let mut p = prompter("maybe\nfalse\n");
        assert!(!p.read::<bool>(&PromptRequest::new("Ok?")).unwrap());
        assert_eq!(output(p).matches(&type_error("Boolean")).count(), 1);
    }

    #[test]
    fn test_decimal_prompt_names_decimal_number() {
        let mut p = prompter("half\n2.5\n");
        let value: f64 = p.read(&PromptRequest::new("Value")).unwrap();
        assert_eq!(value, 2.5);
        assert!(output(p).contains(&type_error("Decimal Number")));
    }

    #[test]
    fn test_many_failures_before_success() {
        let input = "bad\n".repeat(500) + "1\n";
        let mut p = prompter(&input);
        let value: i32 = p.read(&PromptRequest::new("N")).unwrap();
        assert_eq!(value, 1);
        assert_eq!(output(p).matches(&type_error("Integer Number")).count(), 500);
    }

    // ========================================================================
    // Exit conditions
    // ========================================================================

    #[test]
    fn test_input_closed_returns_error() {
        let mut p = prompter("");
        let err = p.read::<i32>(&PromptRequest::new("N")).unwrap_err();
        assert!(matches!(err, EzConsoleError::InputClosed));
    }

    #[test]
    fn test_input_closed_after_failures() {
        let mut p = prompter("a\nb\n");
        let err = p.read::<i32>(&PromptRequest::new("N")).unwrap_err();
        assert!(matches!(err, EzConsoleError::InputClosed));
    }

    #[test]
    fn test_max_attempts_stops_loop() {
        let mut p = prompter("a\nb\nc\n4\n").with_max_attempts(Some(2));
        let err = p.read::<i32>(&PromptRequest::new("N")).unwrap_err();
        assert!(matches!(err, EzConsoleError::TooManyAttempts(2)));
        assert_eq!(output(p).matches("N: ").count(), 2);
    }

    #[test]
    fn test_max_attempts_allows_success_on_last_attempt() {
        let mut p = prompter("a\n4\n").with_max_attempts(Some(2));
        assert_eq!(p.read::<i32>(&PromptRequest::new("N")).unwrap(), 4);
    }

    #[test]
    fn test_cancelled_before_attempt_writes_nothing() {
        let handler = SignalHandler::unregistered();
        handler.request_shutdown();
        let mut p = prompter("1\n").with_cancellation(handler);
        let err = p.read::<i32>(&PromptRequest::new("N")).unwrap_err();
        assert!(matches!(err, EzConsoleError::Cancelled));
        assert_eq!(output(p), "");
    }

    #[test]
    fn test_not_cancelled_reads_normally() {
        let handler = SignalHandler::unregistered();
        let mut p = prompter("1\n").with_cancellation(handler);
        assert_eq!(p.read::<i32>(&PromptRequest::new("N")).unwrap(), 1);
    }

    /// Reader that raises the shutdown flag and then reports end of input,
    /// the way an interrupted blocking read on a terminal returns.
    struct InterruptedReader {
        handler: SignalHandler,
    }

    impl std::io::Read for InterruptedReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            self.handler.request_shutdown();
            Ok(0)
        }
    }

    #[test]
    fn test_cancelled_during_read_at_end_of_input() {
        let handler = SignalHandler::unregistered();
        let input = std::io::BufReader::new(InterruptedReader {
            handler: handler.clone(),
        });
        let mut p = Prompter::new(input, Console::new(Vec::new(), false))
            .with_cancellation(handler);

        let err = p.read::<String>(&PromptRequest::new("Name")).unwrap_err();
        assert!(matches!(err, EzConsoleError::Cancelled));

        let (_, console) = p.into_parts();
        assert_eq!(String::from_utf8(console.into_inner()).unwrap(), "Name: ");
    }
}
