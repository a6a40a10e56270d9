//! Incremental UTF-8 validation, one byte at a time.
//!
//! The validator follows the well-formed byte sequence table from the Unicode standard, so
//! overlong encodings, encoded surrogates and code points above U+10FFFF are all rejected at the
//! first byte which makes the sequence ill-formed.

/// Lowest valid continuation byte
const CONT_LOW: u8 = 0x80;
/// Highest valid continuation byte
const CONT_HIGH: u8 = 0xBF;

/// Byte-at-a-time UTF-8 validator
#[derive(Debug, Copy, Clone)]
pub struct Utf8Validator {
    /// Continuation bytes still required by the current sequence
    needed: u8,
    /// Lowest acceptable value for the next continuation byte
    lower: u8,
    /// Highest acceptable value for the next continuation byte
    upper: u8,
}

impl Default for Utf8Validator {
    fn default() -> Self {
        Utf8Validator {
            needed: 0,
            lower: CONT_LOW,
            upper: CONT_HIGH,
        }
    }
}

impl Utf8Validator {
    /// Feed the next byte of input. Returns false if the byte can't continue a well-formed
    /// sequence, at which point the validator should be considered spent
    pub fn validate(&mut self, byte: u8) -> bool {
        if self.needed == 0 {
            let (needed, lower, upper) = match byte {
                0x00..=0x7F => return true,
                0xC2..=0xDF => (1, CONT_LOW, CONT_HIGH),
                0xE0 => (2, 0xA0, CONT_HIGH),
                0xE1..=0xEC | 0xEE..=0xEF => (2, CONT_LOW, CONT_HIGH),
                0xED => (2, CONT_LOW, 0x9F),
                0xF0 => (3, 0x90, CONT_HIGH),
                0xF1..=0xF3 => (3, CONT_LOW, CONT_HIGH),
                0xF4 => (3, CONT_LOW, 0x8F),
                _ => return false,
            };
            self.needed = needed;
            self.lower = lower;
            self.upper = upper;
            return true;
        }

        if byte < self.lower || byte > self.upper {
            return false;
        }
        self.needed -= 1;
        self.lower = CONT_LOW;
        self.upper = CONT_HIGH;
        true
    }

    /// True if the validator isn't part way through a multi-byte sequence
    pub fn is_complete(&self) -> bool {
        self.needed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::Utf8Validator;

    fn first_invalid(bytes: &[u8]) -> Option<usize> {
        let mut validator = Utf8Validator::default();
        bytes.iter().position(|b| !validator.validate(*b))
    }

    #[test]
    fn should_accept_well_formed_sequences() {
        for s in ["plain ascii", "ümlaut", "€uro", "𝄞 clef", "日本語"] {
            assert_eq!(first_invalid(s.as_bytes()), None, "{}", s);
        }
    }

    #[test]
    fn should_reject_bad_continuations() {
        assert_eq!(first_invalid(b"a\xC3\x28"), Some(2));
        assert_eq!(first_invalid(b"\xE2\x82"), None);
        assert_eq!(first_invalid(b"\xE2\x82\x41"), Some(2));
    }

    #[test]
    fn should_reject_stray_continuation_and_invalid_leads() {
        assert_eq!(first_invalid(b"\x80"), Some(0));
        assert_eq!(first_invalid(b"\xFF"), Some(0));
        assert_eq!(first_invalid(b"\xC0\xAF"), Some(0));
        assert_eq!(first_invalid(b"\xF5\x80\x80\x80"), Some(0));
    }

    #[test]
    fn should_reject_overlongs_surrogates_and_out_of_range() {
        // overlong three byte encoding of '/'
        assert_eq!(first_invalid(b"\xE0\x80\xAF"), Some(1));
        // U+D800 encoded directly
        assert_eq!(first_invalid(b"\xED\xA0\x80"), Some(1));
        // U+110000
        assert_eq!(first_invalid(b"\xF4\x90\x80\x80"), Some(1));
    }

    #[test]
    fn should_report_incomplete_sequences() {
        let mut validator = Utf8Validator::default();
        assert!(validator.validate(0xF0));
        assert!(validator.validate(0x9F));
        assert!(!validator.is_complete());
        assert!(validator.validate(0x98));
        assert!(validator.validate(0x80));
        assert!(validator.is_complete());
    }
}
