//! Platform-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the state machine from terminal and browser key types so the
/// same key handling can be exercised in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete last digit).
    Backspace,
    /// Escape key (clear in Input Mode, close in Display Mode).
    Esc,
    /// Interrupt (Ctrl-C).
    Interrupt,
}
