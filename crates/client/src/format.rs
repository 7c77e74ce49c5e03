//! Display formatting for prices and preview aggregates.
//!
//! Calculations never round; this is the only place amounts are rounded (to
//! cents).

use pricepreview_pricing::PreviewTotals;

/// `$1,234.50`, or `-$1,234.50` for negative amounts.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${dollars}.{:02}", cents % 100)
}

/// `$0.00` when unchanged, else `+$x.xx` / `-$x.xx`.
pub fn format_signed_diff(diff: f64) -> String {
    if diff == 0.0 {
        return format_currency(0.0);
    }
    let sign = if diff > 0.0 { '+' } else { '-' };
    format!("{sign}{}", format_currency(diff.abs()))
}

/// Signed total change plus its percentage, e.g. `-$20.00 (-6.67%)`.
pub fn format_totals_diff(totals: &PreviewTotals) -> String {
    if totals.diff == 0.0 {
        return format_currency(0.0);
    }
    format!("{} ({:.2}%)", format_signed_diff(totals.diff), totals.diff_percent)
}

/// `1 product selected.` / `3 products selected.`
pub fn selection_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} product{plural} selected.")
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let rest = n / 1000;
        if rest == 0 {
            groups.push(format!("{}", n % 1000));
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n = rest;
    }
    groups.reverse();
    groups.join(",")
}
