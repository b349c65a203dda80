//! INR display formatting.

/// Format an amount as Indian rupees with zero fractional digits and Indian
/// digit grouping: the last three digits form one group, the rest group in
/// twos (`₹1,00,000`). Negative amounts get a leading minus.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;

    let digits = rounded.to_string();
    let grouped = group_indian(&digits);

    if negative && rounded > 0 {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Group the head in twos, right to left.
    let head_bytes = head.as_bytes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
