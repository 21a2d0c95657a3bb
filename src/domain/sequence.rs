// src/domain/sequence.rs

use crate::domain::sizes::extract_size_number;

/// Labels that show up in variant titles but are not sizes at all.
/// Any entry containing one of these disqualifies the whole list.
const NON_SIZE_MARKERS: [&str; 2] = ["Default", "Add Your Name/Number"];

/// Classification of a product's size list. Serialized to the snapshot
/// as `Yes` / `No` / `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeSequential {
    Yes,
    No,
    /// The product has no real size dimension (single default variant,
    /// or a name/number/patch customization product).
    NotApplicable,
}

impl SizeSequential {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeSequential::Yes => "Yes",
            SizeSequential::No => "No",
            SizeSequential::NotApplicable => "-",
        }
    }
}

/// Decides whether the raw size labels, in storefront presentation order,
/// already form an ascending sequence.
///
/// A single size (or none) carries no sequence to validate and is `No`,
/// not trivially `Yes`. Any label the normalizer refuses also forces `No`:
/// an unknown format never gets to claim sequentiality. The `-` override
/// for sizeless/customization products is applied by the snapshot builder
/// before this is called.
pub fn classify_sequence(sizes: &[String]) -> SizeSequential {
    if sizes.len() <= 1 {
        return SizeSequential::No;
    }

    for size in sizes {
        if NON_SIZE_MARKERS.iter().any(|marker| size.contains(marker)) {
            return SizeSequential::No;
        }
    }

    let mut numbers = Vec::with_capacity(sizes.len());
    for size in sizes {
        match extract_size_number(size.trim()) {
            Some(n) => numbers.push(n),
            None => return SizeSequential::No,
        }
    }

    if numbers.windows(2).all(|pair| pair[0] <= pair[1]) {
        SizeSequential::Yes
    } else {
        SizeSequential::No
    }
}
