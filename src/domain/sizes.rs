// src/domain/sizes.rs

/// Standard clothing letter sizes mapped to comparable ranks.
/// "XXL" and "2XL" intentionally share rank 8: storefronts use them
/// interchangeably for the same garment size.
const CLOTHING_SIZES: [(&str, f64); 11] = [
    ("XXXS", 1.0),
    ("XXS", 2.0),
    ("XS", 3.0),
    ("S", 4.0),
    ("M", 5.0),
    ("L", 6.0),
    ("XL", 7.0),
    ("XXL", 8.0),
    ("2XL", 8.0),
    ("3XL", 9.0),
    ("4XL", 10.0),
];

fn clothing_rank(label: &str) -> Option<f64> {
    CLOTHING_SIZES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rank)| *rank)
}

/// Extract a comparable number from a single raw size label.
///
/// Resolution order: exact clothing-table match, slash-combined formats
/// (`S/M`, `S/46`, `36/37`), age-range codes with a trailing `A`
/// (`910A` means 9-10 years), then the first embedded integer anywhere.
/// Returns `None` for anything it cannot place on a scale; callers treat
/// that conservatively rather than guessing.
pub fn extract_size_number(label: &str) -> Option<f64> {
    if let Some(rank) = clothing_rank(label) {
        return Some(rank);
    }

    if label.contains('/') {
        return resolve_slash_format(label);
    }

    if label.ends_with('A') && label.len() > 2 {
        return resolve_age_format(label);
    }

    first_integer(label)
}

/// Slash formats: both halves clothing sizes -> mean rank (so `S/M`
/// sorts between S and M); clothing + number -> the number; two plain
/// parts -> the last number anywhere in the label.
fn resolve_slash_format(label: &str) -> Option<f64> {
    let mut parts = label.splitn(3, '/');
    let (left, right) = match (parts.next(), parts.next(), parts.next()) {
        (Some(l), Some(r), None) => (l, r),
        _ => return None,
    };

    if let (Some(a), Some(b)) = (clothing_rank(left), clothing_rank(right)) {
        return Some((a + b) / 2.0);
    }

    if clothing_rank(left).is_some() {
        return first_integer(right);
    }

    last_integer(label)
}

/// Age ranges come compacted: `910A` is 9-10 years, `1314A` is 13-14.
/// The lower bound is the comparable value.
fn resolve_age_format(label: &str) -> Option<f64> {
    let digits = &label[..label.len() - 1];

    if digits.len() == 3 && digits.chars().all(|c| c.is_ascii_digit()) {
        return digits[..1].parse::<u32>().ok().map(f64::from);
    }

    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        return digits[..2].parse::<u32>().ok().map(f64::from);
    }

    first_integer(label)
}

/// First run of ASCII digits in the label, as a number.
fn first_integer(label: &str) -> Option<f64> {
    integer_runs(label).next()
}

/// Last run of ASCII digits in the label, as a number.
fn last_integer(label: &str) -> Option<f64> {
    integer_runs(label).last()
}

fn integer_runs(label: &str) -> impl Iterator<Item = f64> + '_ {
    label
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<u64>().ok())
        .map(|n| n as f64)
}
