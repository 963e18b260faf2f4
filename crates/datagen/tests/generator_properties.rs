// Property-based tests for the dataset generators.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use tablefill_datagen::fixed::fixed_schema;
use tablefill_datagen::{
    classify_header, generate_fixed, generate_from_headers, ColumnType, FixedOptions, Pools,
    RngSource,
};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(config())]

    /// Exactly `rows` records, each carrying exactly the schema's fields in order.
    #[test]
    fn fixed_shape(rows in 0usize..80, hint in 0usize..16, seed in any::<u64>()) {
        let mut rng = RngSource::seeded(seed);
        let ds = generate_fixed(rows, hint, &Pools::builtin(), &FixedOptions::default(), &mut rng);

        let expected: Vec<&str> = fixed_schema(hint).iter().map(|f| f.label()).collect();
        prop_assert_eq!(ds.len(), rows);
        for record in ds.records() {
            let keys: Vec<&str> = record.keys().map(String::as_str).collect();
            prop_assert_eq!(&keys, &expected);
        }
    }

    /// Emails follow the record's own name.
    #[test]
    fn fixed_email_matches_name(rows in 1usize..40, seed in any::<u64>()) {
        let mut rng = RngSource::seeded(seed);
        let ds = generate_fixed(rows, 6, &Pools::builtin(), &FixedOptions::default(), &mut rng);
        for record in ds.records() {
            let name = record["Name"].as_str().unwrap().to_lowercase();
            let email = record["Email"].as_str().unwrap();
            let local = email.split('@').next().unwrap();
            let first = name.split(' ').next().unwrap();
            prop_assert!(local.starts_with(&first.chars().filter(char::is_ascii_alphanumeric).collect::<String>()));
        }
    }

    /// Unclassified headers always number their rows from one.
    #[test]
    fn generic_headers_number_rows(label in "Q[bcdfghjklmnpqvwxz]{3,8}", rows in 1usize..20) {
        prop_assume!(matches!(classify_header(&label), ColumnType::Generic(_)));
        let mut rng = RngSource::seeded(0);
        let ds = generate_from_headers(&[label.as_str()], rows, &Pools::builtin(), &mut rng);
        for (i, record) in ds.records().iter().enumerate() {
            let expected = format!("{} {}", label, i + 1);
            prop_assert_eq!(record[label.as_str()].as_str().unwrap(), expected.as_str());
        }
    }
}
