//! Display formatting for amounts and booking labels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits the way the `id` locale does: `5000000` -> `5.000.000`.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// `Rp 5.000.000`
pub fn rupiah(amount: i64) -> String {
    format!("Rp {}", group_thousands(amount))
}

/// The unique-code deduction line. The code is printed as generated.
pub fn unique_code_deduction(code: u16) -> String {
    format!("-Rp {code}")
}

pub fn duration_label(days: i64) -> String {
    format!("{days} Days Working")
}

pub fn payment_status_label(is_paid: bool) -> &'static str {
    if is_paid { "SUCCESS" } else { "PENDING" }
}
