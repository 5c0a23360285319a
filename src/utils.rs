//! Utility functions

use iced::Color;
use reqwest::Url;

// ============================================================================
// View Counts
// ============================================================================

/// Abbreviate a view count for display.
///
/// Millions and thousands get one decimal place and an `M`/`K` suffix,
/// with exact ties rounded up. Smaller counts are shown as-is.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{}M", one_decimal(views, 1_000_000))
    } else if views >= 1_000 {
        format!("{}K", one_decimal(views, 1_000))
    } else {
        views.to_string()
    }
}

/// `value / unit` to one decimal place, rounded like JavaScript `toFixed(1)`
fn one_decimal(value: u64, unit: u64) -> String {
    let quotient = value as f64 / unit as f64;
    // `{:.1}` rounds the exact binary value but breaks exact ties to even
    match exact_tie_tenths(quotient) {
        Some(tenths) => format!("{}.{}", tenths / 10, tenths % 10),
        None => format!("{:.1}", quotient),
    }
}

/// Tenths rounded up, if `x * 10` lies exactly halfway between two integers
fn exact_tie_tenths(x: f64) -> Option<u128> {
    if !x.is_normal() || x < 0.0 {
        return None;
    }
    let bits = x.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let mantissa = u128::from((bits & ((1u64 << 52) - 1)) | (1u64 << 52));

    // x = mantissa * 2^-shift
    let shift = 1075 - exponent;
    if shift <= 0 {
        return None;
    }
    // Halfway iff 20x is an odd integer
    let twenty = mantissa * 20;
    if twenty.trailing_zeros() as i32 != shift {
        return None;
    }
    Some(((twenty >> shift) + 1) / 2)
}

// ============================================================================
// URL Validation
// ============================================================================

/// Whether the input may be submitted: an absolute http(s) URL with a host
pub fn is_submittable_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    match Url::parse(trimmed) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

// ============================================================================
// Color
// ============================================================================

/// Linear blend between two colors, `t` in 0.0..=1.0
pub fn interpolate_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color::from_rgba(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
        from.a + (to.a - from.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_views_examples() {
        assert_eq!(format_views(500), "500");
        assert_eq!(format_views(1500), "1.5K");
        assert_eq!(format_views(2_500_000), "2.5M");
    }

    #[test]
    fn test_format_views_boundaries() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_000), "1.0K");
        assert_eq!(format_views(1_000_000), "1.0M");
        // Rounding up is not rescaled to the next unit
        assert_eq!(format_views(999_999), "1000.0K");
    }

    #[test]
    fn test_format_views_rounds_ties_up() {
        assert_eq!(format_views(1_250), "1.3K");
        assert_eq!(format_views(2_250), "2.3K");
        assert_eq!(format_views(1_249), "1.2K");
        assert_eq!(format_views(1_250_000), "1.3M");
        assert_eq!(format_views(1_049_999), "1.0M");
        // 1.45 has no exact binary form and sits just below the tie
        assert_eq!(format_views(1_450), "1.4K");
        assert_eq!(format_views(999_950), "1000.0K");
    }

    #[test]
    fn test_exact_tie_detection() {
        assert_eq!(exact_tie_tenths(1.25), Some(13));
        assert_eq!(exact_tie_tenths(0.05), None);
        assert_eq!(exact_tie_tenths(2.5), None);
        assert_eq!(exact_tie_tenths(1.2), None);
        assert_eq!(exact_tie_tenths(1024.0), None);
    }

    #[test]
    fn test_format_views_suffix_ranges() {
        for v in [0, 7, 999, 1_000, 45_678, 999_999, 1_000_000, 3_210_987_654] {
            let s = format_views(v);
            assert_eq!(s.ends_with('M'), v >= 1_000_000, "{} -> {}", v, s);
            assert_eq!(s.ends_with('K'), (1_000..1_000_000).contains(&v), "{} -> {}", v, s);
            if v < 1_000 {
                assert_eq!(s, v.to_string());
            }
        }
    }

    #[test]
    fn test_submittable_url() {
        assert!(is_submittable_url(
            "https://www.youtube.com/playlist?list=PL123"
        ));
        assert!(is_submittable_url("  http://example.com/x  "));
        assert!(!is_submittable_url(""));
        assert!(!is_submittable_url("   "));
        assert!(!is_submittable_url("youtube.com/playlist?list=PL123"));
        assert!(!is_submittable_url("ftp://example.com/list"));
        assert!(!is_submittable_url("mailto:someone@example.com"));
    }

    #[test]
    fn test_interpolate_color_endpoints() {
        let a = Color::from_rgb(0.0, 0.0, 0.0);
        let b = Color::from_rgb(1.0, 0.5, 0.25);
        assert_eq!(interpolate_color(a, b, 0.0), a);
        assert_eq!(interpolate_color(a, b, 1.0), b);
        assert_eq!(interpolate_color(a, b, 2.0), b);
    }
}
