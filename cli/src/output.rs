use clap::ValueEnum;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Radix {
    #[default]
    Dec,
    Bin,
    Hex,
}

/// Format a result in `radix`. Binary and hexadecimal output carry a prefix
/// and a leading `-` for negative values.
pub fn format_value(value: i64, radix: Radix) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    match radix {
        Radix::Dec => value.to_string(),
        Radix::Bin => format!("{sign}0b{magnitude:b}"),
        Radix::Hex => format!("{sign}0x{magnitude:x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(format_value(42, Radix::Dec), "42");
        assert_eq!(format_value(-42, Radix::Dec), "-42");
    }

    #[test]
    fn test_binary() {
        assert_eq!(format_value(5, Radix::Bin), "0b101");
        assert_eq!(format_value(-5, Radix::Bin), "-0b101");
        assert_eq!(format_value(0, Radix::Bin), "0b0");
    }

    #[test]
    fn test_hex() {
        assert_eq!(format_value(31, Radix::Hex), "0x1f");
        assert_eq!(format_value(-31, Radix::Hex), "-0x1f");
        assert_eq!(format_value(i64::MIN, Radix::Hex), "-0x8000000000000000");
    }
}
