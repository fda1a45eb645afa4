//! Small formatting helpers shared by log lines and the advisor.

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with base-1024 units and at most two decimals,
/// dropping trailing zeros: `0 Bytes`, `512 Bytes`, `1 KB`, `1.5 KB`.
///
/// Sizes beyond the gigabyte range stay expressed in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(50 * 1024 * 1024), "50 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.33333), 33.33);
        assert_eq!(round2(66.666), 66.67);
        assert_eq!(round2(0.0), 0.0);
    }
}
