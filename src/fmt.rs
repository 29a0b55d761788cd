use std::fmt::{Display, Formatter};

/// Fixed-point number with the integer part grouped by thousands, like `1,234.56`.
pub struct FormattedThousands {
    pub value: f64,
    pub precision: usize,
}

impl Display for FormattedThousands {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = format!("{:.*}", self.precision, self.value);
        let (sign, unsigned) = formatted
            .strip_prefix('-')
            .map_or(("", formatted.as_str()), |unsigned| ("-", unsigned));
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        f.write_str(sign)?;
        for (index, digit) in integer.char_indices() {
            if index != 0 && (integer.len() - index) % 3 == 0 {
                f.write_str(",")?;
            }
            write!(f, "{digit}")?;
        }
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
