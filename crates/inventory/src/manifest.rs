//! Dispatch manifest numbers.
//!
//! `MAN-<year>-<MMDD>-<NNN>` where `NNN` is a zero-padded random number in
//! `000..=999`. This is a suggested default for the form; collisions are not
//! checked.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

/// Format a manifest number for `date`. `sequence` is reduced modulo 1000.
pub fn manifest_number_for(date: NaiveDate, sequence: u16) -> String {
    format!(
        "MAN-{:04}-{:02}{:02}-{:03}",
        date.year(),
        date.month(),
        date.day(),
        sequence % 1000
    )
}

/// Manifest number for `date` with a random suffix drawn from `rng`.
pub fn generate_manifest_number_with<R: Rng>(date: NaiveDate, rng: &mut R) -> String {
    manifest_number_for(date, rng.gen_range(0..1000))
}

/// Manifest number for the current local date.
pub fn generate_manifest_number() -> String {
    generate_manifest_number_with(Local::now().date_naive(), &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Checks the `MAN-YYYY-MMDD-NNN` shape without pulling in a regex engine.
    fn assert_manifest_shape(number: &str) -> (u32, u32) {
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 4, "{number}");
        assert_eq!(parts[0], "MAN");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 4);
        assert_eq!(parts[3].len(), 3);
        for part in &parts[1..] {
            assert!(part.chars().all(|c| c.is_ascii_digit()), "{number}");
        }
        let mmdd: u32 = parts[2].parse().unwrap();
        let suffix: u32 = parts[3].parse().unwrap();
        (mmdd, suffix)
    }

    #[test]
    fn formats_date_and_pads_suffix() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(manifest_number_for(date, 7), "MAN-2024-0105-007");
        assert_eq!(manifest_number_for(date, 999), "MAN-2024-0105-999");
        assert_eq!(manifest_number_for(date, 1000), "MAN-2024-0105-000");
    }

    #[test]
    fn generated_number_uses_today() {
        let today = Local::now().date_naive();
        let number = generate_manifest_number();
        let (mmdd, suffix) = assert_manifest_shape(&number);
        // The date may roll over between the two clock reads; allow either side.
        let expected = today.month() * 100 + today.day();
        let next = today.succ_opt().map(|d| d.month() * 100 + d.day());
        assert!(mmdd == expected || Some(mmdd) == next, "{number}");
        assert!(suffix <= 999);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every generated number has the manifest shape.
        #[test]
        fn generated_numbers_match_pattern(days in 0i64..3_000_000, seed in any::<u64>()) {
            let date = NaiveDate::from_ymd_opt(1000, 1, 1).unwrap() + chrono::Duration::days(days);
            prop_assume!(date.year() <= 9999);
            let mut rng = StdRng::seed_from_u64(seed);

            let number = generate_manifest_number_with(date, &mut rng);
            let (mmdd, suffix) = assert_manifest_shape(&number);
            prop_assert_eq!(mmdd, date.month() * 100 + date.day());
            prop_assert!(suffix <= 999);
            let prefix = format!("MAN-{:04}-", date.year());
            prop_assert!(number.starts_with(&prefix));
        }
    }
}
