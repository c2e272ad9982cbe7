//! Display formatting
//!
//! Figures on every page are shown the way an `en-IN` locale prints them:
//! lakh/crore digit grouping and a rupee prefix.

/// Placeholder shown instead of a hidden balance
pub const MASK: &str = "••••••";

/// Group digits Indian-style: last three, then pairs (`234567` → `2,34,567`)
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee amount (`₹2,34,567`)
pub fn inr(value: u64) -> String {
    format!("₹{}", group_indian(value))
}

/// Rupee amount with paise (`₹18.45`)
pub fn inr_precise(value: f64) -> String {
    format!("₹{:.2}", value)
}

/// Rupee amount in millions (`₹45.6M`)
pub fn inr_millions(value: f64) -> String {
    format!("₹{}", millions(value))
}

/// Plain figure in millions (`2.5M`)
pub fn millions(value: f64) -> String {
    format!("{:.1}M", value / 1_000_000.0)
}

/// Signed percentage (`+12.5%`, `-2.1%`)
pub fn percent_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

/// File size in megabytes with two decimals
pub fn file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Show `text` or the mask depending on the visibility toggle
pub fn masked(visible: bool, text: impl Into<String>) -> String {
    if visible {
        text.into()
    } else {
        MASK.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(12847), "12,847");
        assert_eq!(group_indian(234567), "2,34,567");
        assert_eq!(group_indian(14290000), "1,42,90,000");
    }

    #[test]
    fn test_currency_helpers() {
        assert_eq!(inr(156780), "₹1,56,780");
        assert_eq!(inr_precise(18.4), "₹18.40");
        assert_eq!(inr_millions(45_600_000.0), "₹45.6M");
        assert_eq!(millions(2_500_000.0), "2.5M");
    }

    #[test]
    fn test_percent_change_sign() {
        assert_eq!(percent_change(12.5), "+12.5%");
        assert_eq!(percent_change(-2.1), "-2.1%");
    }

    #[test]
    fn test_file_size_and_mask() {
        assert_eq!(file_size(1024 * 1024), "1.00 MB");
        assert_eq!(file_size(524_288), "0.50 MB");
        assert_eq!(masked(false, "12,847"), MASK);
        assert_eq!(masked(true, "12,847"), "12,847");
    }
}
