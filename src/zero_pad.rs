pub fn zero_str(num_zeros: usize) -> String {
    use std::iter::repeat;
    repeat("0").take(num_zeros).collect::<String>()
}

/// Left-pads `s` with zeros to `width` characters. Longer strings are returned as-is.
pub fn pad_left(s: &str, width: usize) -> String {
    zero_str(width.saturating_sub(s.len())) + s
}

/// Right-pads `s` with zeros to `width` characters. Longer strings are returned as-is.
pub fn pad_right(s: &str, width: usize) -> String {
    s.to_string() + &zero_str(width.saturating_sub(s.len()))
}

/// Left-pads a hex string with a single zero when it has an odd number of digits.
pub fn pad_even(s: &str) -> String {
    if s.len() % 2 == 0 {
        s.to_string()
    } else {
        pad_left(s, s.len() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!("00FF", pad_left("FF", 4));
        assert_eq!("FF", pad_left("FF", 2));
        assert_eq!("ABCDEF", pad_left("ABCDEF", 4));
    }

    #[test]
    fn test_pad_right() {
        assert_eq!("425A4F0000", pad_right("425A4F", 10));
        assert_eq!("425A4F", pad_right("425A4F", 2));
    }

    #[test]
    fn test_pad_even() {
        assert_eq!("0F", pad_even("F"));
        assert_eq!("0F", pad_even("0F"));
        assert_eq!("", pad_even(""));
    }
}
