//! Compact counter formatting

/// Render a counter the way `Intl.NumberFormat("en-US", { notation:
/// "compact" })` would, with the suffix lower-cased: 1234 becomes "1.2k",
/// 56 stays "56".
///
/// Mantissas below 10 keep one fraction digit (half away from zero, a
/// trailing ".0" is dropped); larger mantissas round to whole numbers.
/// Rounding can carry into the next tier, so 999_999 is "1m" and 9_999 is
/// "10k". Beyond the last tier the whole mantissa stands ("1000t").
pub fn compact_number(n: u64) -> String {
    const TIERS: [(u64, &str); 4] = [
        (1_000, "k"),
        (1_000_000, "m"),
        (1_000_000_000, "b"),
        (1_000_000_000_000, "t"),
    ];

    if n < 1_000 {
        return n.to_string();
    }

    // Integer arithmetic throughout: float division rounds midpoints like
    // 1150/1000 the wrong way.
    let mut idx = TIERS.iter().rposition(|(scale, _)| n >= *scale).unwrap_or(0);
    loop {
        let (scale, suffix) = TIERS[idx];

        if n < 10 * scale {
            let tenths = ((n as u128 * 10 + scale as u128 / 2) / scale as u128) as u64;
            if tenths >= 100 {
                return format!("10{}", suffix);
            }
            return if tenths % 10 == 0 {
                format!("{}{}", tenths / 10, suffix)
            } else {
                format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
            };
        }

        let whole = ((n as u128 + scale as u128 / 2) / scale as u128) as u64;
        if whole >= 1_000 && idx + 1 < TIERS.len() {
            idx += 1;
            continue;
        }
        return format!("{}{}", whole, suffix);
    }
}
