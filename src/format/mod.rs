// Units-based suffixes for abbreviated magnitudes.
const UNITS: &[&str] = &["", "k", "m", "b"];

/// Formats numbers scaled down to a thousands-based unit (`850`, `234k`,
/// `1.2m`), the way the report charts label populations and dollar amounts.
#[derive(Debug)]
pub struct Magnitude {
    /// Decimal digits printed after scaling
    decimals: usize,
    /// Number of times the value will be divided by 1000
    divisor: u8,
    /// Suffix (units) printed after the number
    suffix: &'static str,
}

impl Magnitude {
    /// Picks a unit for a value: millions and billions get one decimal,
    /// thousands get none. Axis formatters build one from the largest
    /// absolute tick so every label shares a unit.
    pub fn for_value(value: f64) -> Magnitude {
        let abs = value.abs();
        let (divisor, decimals) = if abs >= 1_000_000_000.0 {
            (3, 1)
        } else if abs >= 1_000_000.0 {
            (2, 1)
        } else if abs >= 1_000.0 {
            (1, 0)
        } else {
            (0, 0)
        };
        Magnitude {
            decimals,
            divisor,
            suffix: UNITS[divisor as usize],
        }
    }

    pub fn format(&self, value: f64) -> String {
        format!(
            "{:.*}{}",
            self.decimals,
            value / 1000_f64.powi(self.divisor.into()),
            self.suffix
        )
    }
}

/// One-shot abbreviation of a single value.
pub fn abbreviate(value: f64) -> String {
    Magnitude::for_value(value).format(value)
}

/// Truncates a label to at most `limit` characters, on a char boundary.
/// A limit of zero is bumped to one so no label ever disappears.
pub fn truncate_label(label: &str, limit: usize) -> String {
    let limit = limit.max(1);
    label.chars().take(limit).collect()
}
