use crate::controllers::command::errors::ArgumentError;

// Longest accepted integer: "-9223372036854775808".
const MAX_INTEGER_LEN: usize = 20;

/// Parses a request argument as a strict signed 64-bit integer.
///
/// Accepts `0` or an optional `-` followed by a non-zero digit and more
/// digits. Rejects empty input, a leading `+`, leading zeros, whitespace and
/// anything that does not fit in an `i64`.
#[must_use]
pub fn parse_long(bytes: &[u8]) -> Option<i64> {
    if bytes.is_empty() || bytes.len() > MAX_INTEGER_LEN {
        return None;
    }

    if bytes == b"0" {
        return Some(0);
    }

    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    match digits.first() {
        Some(b'1'..=b'9') => {}
        _ => return None,
    }

    // Accumulate towards the negative side so i64::MIN fits.
    let mut value: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }

        value = value
            .checked_mul(10)?
            .checked_sub(i64::from(byte - b'0'))?;
    }

    if negative { Some(value) } else { value.checked_neg() }
}

/// Optional `[columns] [rows]` arguments of the command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JuliaArgs {
    pub columns: Option<i64>,
    pub rows: Option<i64>,
}

impl JuliaArgs {
    /// Parses `argv`, where `argv[0]` is the command name. Arguments past
    /// the rows are ignored.
    pub fn parse<A: AsRef<[u8]>>(argv: &[A]) -> Result<Self, ArgumentError> {
        Ok(Self {
            columns: parse_position(argv, 1)?,
            rows: parse_position(argv, 2)?,
        })
    }
}

fn parse_position<A: AsRef<[u8]>>(
    argv: &[A],
    position: usize,
) -> Result<Option<i64>, ArgumentError> {
    argv.get(position)
        .map(|arg| {
            let bytes = arg.as_ref();

            parse_long(bytes).ok_or_else(|| ArgumentError::NotAnInteger {
                position,
                value: String::from_utf8_lossy(bytes).into_owned(),
            })
        })
        .transpose()
}
