use deepmorph_core::NormalizationMode;

/// Convert raw abundance weights into integer percentages.
///
/// `Independent` rounds each `raw / total * 100` half-up on its own, so the
/// sum may land anywhere within one point per cluster of 100.
/// `LargestRemainder` floors every share and hands the missing points to the
/// largest fractional parts (earlier index wins ties), summing to exactly 100.
///
/// An all-zero or empty input yields all zeros.
pub fn normalize_abundances(raw: &[u32], mode: NormalizationMode) -> Vec<u32> {
    let total: u64 = raw.iter().map(|&r| r as u64).sum();
    if total == 0 {
        return vec![0; raw.len()];
    }

    match mode {
        NormalizationMode::Independent => raw
            .iter()
            .map(|&r| ((r as u64 * 200 + total) / (2 * total)) as u32)
            .collect(),
        NormalizationMode::LargestRemainder => largest_remainder(raw, total),
    }
}

fn largest_remainder(raw: &[u32], total: u64) -> Vec<u32> {
    let mut shares: Vec<u32> = raw
        .iter()
        .map(|&r| (r as u64 * 100 / total) as u32)
        .collect();

    let mut order: Vec<(usize, u64)> = raw
        .iter()
        .enumerate()
        .map(|(i, &r)| (i, r as u64 * 100 % total))
        .collect();
    // Stable: equal remainders keep index order
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let assigned: u32 = shares.iter().sum();
    let missing = 100u32.saturating_sub(assigned) as usize;
    for &(i, _) in order.iter().take(missing) {
        shares[i] += 1;
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_independent_rounding_can_overshoot() {
        // 100/3 = 33.33 each -> 33 * 3 = 99
        assert_eq!(
            normalize_abundances(&[10, 10, 10], NormalizationMode::Independent),
            vec![33, 33, 33]
        );
        // 1/8 = 12.5 -> 13 each, total 104
        let eight = normalize_abundances(&[10; 8], NormalizationMode::Independent);
        assert_eq!(eight, vec![13; 8]);
        assert_eq!(eight.iter().sum::<u32>(), 104);
    }

    #[test]
    fn test_independent_exact_split() {
        assert_eq!(
            normalize_abundances(&[10, 30, 40, 20], NormalizationMode::Independent),
            vec![10, 30, 40, 20]
        );
    }

    #[test]
    fn test_largest_remainder_sums_to_100() {
        let shares = normalize_abundances(&[10, 10, 10], NormalizationMode::LargestRemainder);
        assert_eq!(shares, vec![34, 33, 33]);

        let eight = normalize_abundances(&[10; 8], NormalizationMode::LargestRemainder);
        assert_eq!(eight.iter().sum::<u32>(), 100);
        assert_eq!(eight, vec![13, 13, 13, 13, 12, 12, 12, 12]);
    }

    #[test]
    fn test_largest_remainder_prefers_biggest_fraction() {
        // 100 * [11, 17, 22] / 50 = 22, 34, 44 exactly
        assert_eq!(
            normalize_abundances(&[11, 17, 22], NormalizationMode::LargestRemainder),
            vec![22, 34, 44]
        );
        // 100 * [10, 13, 17] / 40 = 25, 32.5, 42.5 -> floors 25, 32, 42, one point to index 1
        assert_eq!(
            normalize_abundances(&[10, 13, 17], NormalizationMode::LargestRemainder),
            vec![25, 33, 42]
        );
    }

    #[test]
    fn test_zero_total() {
        assert_eq!(
            normalize_abundances(&[0, 0], NormalizationMode::Independent),
            vec![0, 0]
        );
        assert!(normalize_abundances(&[], NormalizationMode::LargestRemainder).is_empty());
    }
}
