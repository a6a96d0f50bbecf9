use {
    crate::error::ValidationError,
    std::{num::IntErrorKind, ops::RangeInclusive},
};

/// Inclusive integer interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u64,
    pub max: u64,
}

pub const DIVISOR_BOUNDS: Bounds = Bounds {
    min: 1,
    max: 1_000_000_000_000_000_000,
};
pub const COUNT_BOUNDS: Bounds = Bounds {
    min: 1,
    max: 50_000_000,
};
/// Range of every ability and difficulty value.
pub const VALUE_BOUNDS: Bounds = Bounds { min: 1, max: 1000 };

impl Bounds {
    pub fn checked(min: u64, max: u64) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::Order { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, v: u64) -> bool {
        self.min <= v && v <= self.max
    }

    pub fn range(&self) -> RangeInclusive<u64> {
        self.min..=self.max
    }
}

/// Drops `_` digit separators. An underscore only counts as a separator
/// when it sits between two digits; anywhere else the text is rejected.
fn strip_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let prev = i.checked_sub(1).map(|j| bytes[j]);
            let next = bytes.get(i + 1).copied();
            let digit = |c: Option<u8>| c.is_some_and(|c| c.is_ascii_digit());
            if !digit(prev) || !digit(next) {
                return None;
            }
        } else {
            out.push(b as char);
        }
    }
    Some(out)
}

/// Parses `raw` as a decimal integer, allowing `1_000` style separators.
/// Values too wide for `i128` saturate, so they still fail any later bounds
/// check as range errors.
fn parse_int(name: &str, raw: &str) -> Result<i128, ValidationError> {
    let s = raw.trim();
    let parse_err = || ValidationError::Parse {
        name: Box::from(name),
        value: Box::from(s),
    };
    let digits = strip_separators(s).ok_or_else(parse_err)?;
    digits.parse::<i128>().or_else(|e| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i128::MAX),
        IntErrorKind::NegOverflow => Ok(i128::MIN),
        _ => Err(parse_err()),
    })
}

fn check_bounds(name: &str, raw: &str, v: i128, bounds: Bounds) -> Result<u64, ValidationError> {
    if v < bounds.min as i128 || v > bounds.max as i128 {
        return Err(ValidationError::Range {
            name: Box::from(name),
            value: Box::from(raw.trim()),
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(v as u64)
}

/// Parses `raw` as a decimal integer lying inside `bounds`.
///
/// Text that isn't an integer is a parse error. Integers that are out of
/// bounds, negative, or too wide for a machine word are range errors.
pub fn parse_bounded(name: &str, raw: &str, bounds: Bounds) -> Result<u64, ValidationError> {
    let v = parse_int(name, raw)?;
    check_bounds(name, raw, v, bounds)
}

/// Validates a divisor-sum request. Both ends must parse before either is
/// range-checked; ordering is checked last.
pub fn parse_divisor_range(min: &str, max: &str) -> Result<Bounds, ValidationError> {
    let (min_v, max_v) = (parse_int("min", min)?, parse_int("max", max)?);
    let min = check_bounds("min", min, min_v, DIVISOR_BOUNDS)?;
    let max = check_bounds("max", max, max_v, DIVISOR_BOUNDS)?;
    Bounds::checked(min, max)
}

/// Validates matching counts, `n` first.
pub fn parse_counts(n: &str, m: &str) -> Result<(usize, usize), ValidationError> {
    let n = parse_bounded("n", n, COUNT_BOUNDS)?;
    let m = parse_bounded("m", m, COUNT_BOUNDS)?;
    Ok((n as usize, m as usize))
}
