//! Constrained input buffer.
//!
//! The buffer only ever holds ASCII digits and never more than
//! [`DIGIT_COUNT`] of them. Every edit is validated as a whole: an edit that
//! would break either rule is rejected and leaves the buffer untouched.

/// Number of digits that make up a displayable number.
pub const DIGIT_COUNT: usize = 3;

/// Text buffer behind the numeric input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    digits: String,
}

impl InputBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` is an acceptable buffer value.
    pub fn accepts(candidate: &str) -> bool {
        candidate.len() <= DIGIT_COUNT && candidate.bytes().all(|b| b.is_ascii_digit())
    }

    /// Replace the whole buffer. Returns `false` and keeps the old value if
    /// `candidate` is rejected.
    pub fn replace(&mut self, candidate: &str) -> bool {
        if !Self::accepts(candidate) {
            return false;
        }
        self.digits.clear();
        self.digits.push_str(candidate);
        true
    }

    /// Append a single character. Returns `false` if the edit is rejected.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.is_full() {
            return false;
        }
        self.digits.push(c);
        true
    }

    /// Remove the last digit, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.digits.pop()
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Current contents.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of digits entered so far.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether no digit has been entered.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether the buffer holds [`DIGIT_COUNT`] digits.
    pub fn is_full(&self) -> bool {
        self.digits.len() == DIGIT_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accepts_digits_up_to_capacity() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.push('1'));
        assert!(buffer.push('2'));
        assert!(buffer.push('9'));
        assert!(buffer.is_full());

        assert!(!buffer.push('4'));
        assert_eq!(buffer.as_str(), "129");
    }

    #[test]
    fn push_rejects_non_digits() {
        let mut buffer = InputBuffer::new();
        assert!(!buffer.push('a'));
        assert!(!buffer.push('-'));
        assert!(!buffer.push('٣')); // Arabic-Indic three is not ASCII
        assert!(buffer.is_empty());
    }

    #[test]
    fn replace_is_all_or_nothing() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.replace("12"));

        assert!(!buffer.replace("12a"));
        assert!(!buffer.replace("1234"));
        assert_eq!(buffer.as_str(), "12");

        assert!(buffer.replace(""));
        assert!(buffer.is_empty());
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.pop(), None);
        buffer.push('7');
        assert_eq!(buffer.pop(), Some('7'));
        assert!(buffer.is_empty());
    }
}
