use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Argument is not an integer at all.
    Parse { name: Box<str>, value: Box<str> },
    /// Argument is an integer, but outside `[min, max]`.
    Range {
        name: Box<str>,
        value: Box<str>,
        min: u64,
        max: u64,
    },
    /// Lower bound exceeds upper bound.
    Order { min: u64, max: u64 },
}

/// Renders a bound the way the usage text writes it: `10^18`, `5 * 10^7`.
fn pretty_bound(v: u64) -> String {
    if v < 1000 {
        return v.to_string();
    }
    let mut mantissa = v;
    let mut exp = 0;
    while mantissa % 10 == 0 {
        mantissa /= 10;
        exp += 1;
    }
    match mantissa {
        1 => format!("10^{exp}"),
        m if m < 10 => format!("{m} * 10^{exp}"),
        _ => v.to_string(),
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Parse { name, value } => {
                write!(f, "{name} must be a valid integer (got \"{value}\")")
            }
            ValidationError::Range { name, min, max, .. } => write!(
                f,
                "{name} must be between {} and {}",
                pretty_bound(*min),
                pretty_bound(*max)
            ),
            ValidationError::Order { .. } => {
                write!(f, "min must be less than or equal to max")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_power_notation() {
        let e = ValidationError::Range {
            name: "min".into(),
            value: "0".into(),
            min: 1,
            max: 1_000_000_000_000_000_000,
        };
        assert_eq!(e.to_string(), "min must be between 1 and 10^18");

        let e = ValidationError::Range {
            name: "n".into(),
            value: "0".into(),
            min: 1,
            max: 50_000_000,
        };
        assert_eq!(e.to_string(), "n must be between 1 and 5 * 10^7");
    }

    #[test]
    fn order_message() {
        let e = ValidationError::Order { min: 100, max: 1 };
        assert_eq!(e.to_string(), "min must be less than or equal to max");
    }
}
