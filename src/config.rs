/// How to react to content the reader does not understand
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParsingMode {
    /// Abort the whole parse on an unrecognized frame or undecodable text
    Strict,
    /// Skip the offending frame, log a warning and keep going
    Relaxed,
}

/// Options to control how a tag is read
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    pub(crate) parsing_mode: ParsingMode,
}

impl Default for ParseOptions {
    /// The defaults are as follows:
    ///
    /// ```rust,ignore
    /// ParseOptions {
    ///     parsing_mode: ParsingMode::Strict,
    /// }
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptions {
    pub const DEFAULT_PARSING_MODE: ParsingMode = ParsingMode::Strict;

    pub const fn new() -> Self {
        Self {
            parsing_mode: Self::DEFAULT_PARSING_MODE,
        }
    }

    /// Set the parsing mode
    ///
    /// ```rust
    /// use id3_tagreader::{ParseOptions, ParsingMode};
    ///
    /// let options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
    /// ```
    pub fn parsing_mode(mut self, parsing_mode: ParsingMode) -> Self {
        self.parsing_mode = parsing_mode;
        self
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.parsing_mode == ParsingMode::Strict
    }
}
