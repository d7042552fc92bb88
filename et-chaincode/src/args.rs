//! Positional argument parsing
//!
//! Chaincode functions receive every argument as a string. Parsing is
//! strict: integers are `-?[0-9]+` with no sign prefix or padding, floats
//! must be finite, and labels must match a domain table exactly.

use et_core::DomainTable;

use crate::error::{ChaincodeError, ChaincodeResult};

/// Default upper bound for a sanitized argument, in bytes
pub const DEFAULT_MAX_ARGUMENT_LEN: usize = 256;

/// Arity-checked view over the positional arguments of one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [String],
}

impl<'a> Args<'a> {
    /// Check that exactly `expected` arguments were supplied.
    pub fn expect(
        function: &'static str,
        values: &'a [String],
        expected: usize,
    ) -> ChaincodeResult<Self> {
        if values.len() != expected {
            return Err(ChaincodeError::Arity {
                function,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Require every argument to be non-empty and at most `max_len` bytes.
    pub fn sanitize(&self, max_len: usize) -> ChaincodeResult<()> {
        for (index, value) in self.values.iter().enumerate() {
            if value.is_empty() {
                return Err(ChaincodeError::InvalidArgument {
                    index,
                    reason: "must be a non-empty string".to_string(),
                });
            }
            if value.len() > max_len {
                return Err(ChaincodeError::InvalidArgument {
                    index,
                    reason: format!("must be <= {max_len} characters, got {}", value.len()),
                });
            }
        }
        Ok(())
    }

    /// Raw argument text
    pub fn text(&self, index: usize) -> &'a str {
        self.values[index].as_str()
    }

    /// Argument that must not be empty
    pub fn identifier(&self, index: usize) -> ChaincodeResult<&'a str> {
        let value = self.text(index);
        if value.is_empty() {
            return Err(ChaincodeError::InvalidArgument {
                index,
                reason: "must be a non-empty string".to_string(),
            });
        }
        Ok(value)
    }

    pub fn int(&self, index: usize, field: &'static str) -> ChaincodeResult<i64> {
        parse_int(self.text(index)).map_err(|reason| ChaincodeError::parse(field, reason))
    }

    pub fn float(&self, index: usize, field: &'static str) -> ChaincodeResult<f64> {
        parse_float(self.text(index)).map_err(|reason| ChaincodeError::parse(field, reason))
    }

    /// Domain value given by its label, e.g. `"Prosumer"`
    pub fn label<T: DomainTable>(&self, index: usize, field: &'static str) -> ChaincodeResult<T> {
        T::from_label(self.text(index))
            .map_err(|source| ChaincodeError::UnknownDomainValue { field, source })
    }

    /// Domain value given by its integer code, e.g. `"1"`
    pub fn code<T: DomainTable>(&self, index: usize, field: &'static str) -> ChaincodeResult<T> {
        let code = self.int(index, field)?;
        T::from_code(code).map_err(|source| ChaincodeError::UnknownDomainValue { field, source })
    }
}

/// Parse a base-10 signed 64-bit integer.
pub fn parse_int(raw: &str) -> Result<i64, String> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{raw}' is not an integer"));
    }
    raw.parse::<i64>()
        .map_err(|e| format!("'{raw}' is out of range: {e}"))
}

/// Parse a finite 64-bit float.
pub fn parse_float(raw: &str) -> Result<f64, String> {
    if raw.starts_with('+') {
        return Err(format!("'{raw}' is not a number"));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{raw}' is not a finite number"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use et_core::{Action, DomainError, UserCategory};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
        assert_eq!(parse_int("007"), Ok(7));
        assert_eq!(parse_int("9223372036854775807"), Ok(i64::MAX));

        for bad in ["", "-", "+1", " 1", "1 ", "1.0", "abc", "0x10", "9223372036854775808"] {
            assert!(parse_int(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("3.5"), Ok(3.5));
        assert_eq!(parse_float("200"), Ok(200.0));
        assert_eq!(parse_float("-0.25"), Ok(-0.25));
        assert_eq!(parse_float("1e3"), Ok(1000.0));

        for bad in ["", "+1", "abc", "NaN", "inf", "-infinity", "1e400", " 2"] {
            assert!(parse_float(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_arity() {
        let values = strings(&["1", "2"]);
        let err = Args::expect("Write", &values, 3).unwrap_err();
        assert!(matches!(
            err,
            ChaincodeError::Arity {
                function: "Write",
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(Args::expect("Write", &values, 2).unwrap().text(1), "2");
    }

    #[test]
    fn test_sanitize() {
        let values = strings(&["key", ""]);
        let args = Args::expect("Write", &values, 2).unwrap();
        match args.sanitize(DEFAULT_MAX_ARGUMENT_LEN).unwrap_err() {
            ChaincodeError::InvalidArgument { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }

        let values = strings(&["key", &"x".repeat(257)]);
        let args = Args::expect("Write", &values, 2).unwrap();
        let err = args.sanitize(DEFAULT_MAX_ARGUMENT_LEN).unwrap_err();
        assert_eq!(err.to_string(), "Argument 1 must be <= 256 characters, got 257");

        let values = strings(&["key", &"x".repeat(256)]);
        let args = Args::expect("Write", &values, 2).unwrap();
        assert!(args.sanitize(DEFAULT_MAX_ARGUMENT_LEN).is_ok());
    }

    #[test]
    fn test_domain_values() {
        let values = strings(&["Consumer", "1", "Seller", "9"]);
        let args = Args::expect("Test", &values, 4).unwrap();

        assert_eq!(
            args.label::<UserCategory>(0, "user category").unwrap(),
            UserCategory::Consumer
        );
        assert_eq!(args.code::<Action>(1, "action").unwrap(), Action::Sell);

        match args.label::<Action>(2, "action").unwrap_err() {
            ChaincodeError::UnknownDomainValue { field, source } => {
                assert_eq!(field, "action");
                assert!(matches!(source, DomainError::UnknownValue { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            args.code::<Action>(3, "action"),
            Err(ChaincodeError::UnknownDomainValue {
                source: DomainError::UnknownCode { code: 9, .. },
                ..
            })
        ));
        assert!(matches!(
            args.code::<Action>(2, "action"),
            Err(ChaincodeError::Parse { field: "action", .. })
        ));
    }

    #[test]
    fn test_identifier() {
        let values = strings(&["", "pay-1"]);
        let args = Args::expect("Test", &values, 2).unwrap();
        assert!(matches!(
            args.identifier(0),
            Err(ChaincodeError::InvalidArgument { index: 0, .. })
        ));
        assert_eq!(args.identifier(1).unwrap(), "pay-1");
    }
}
