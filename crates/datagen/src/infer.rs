//! Schema-inferred dataset generator.
//!
//! Headers are classified once, then every cell is produced by a per-kind
//! generator. Pool-backed kinds cycle by row index (with small per-kind
//! offsets so neighbouring columns don't line up); zip codes, budgets and the
//! generic numeric patterns draw fresh randomness.

use chrono::Datelike;
use serde_json::Value;

use crate::classify::{classify_header, has_word, ColumnType, FieldKind};
use crate::dataset::{Dataset, Record};
use crate::pools::{cycle, Pools};
use crate::random::RandomSource;
use crate::values;

/// Generate `row_count` records keyed by `headers`.
///
/// A header that appears twice keeps its first position and the value of its
/// last occurrence.
pub fn generate_from_headers<H, R>(
    headers: &[H],
    row_count: usize,
    pools: &Pools<'_>,
    rng: &mut R,
) -> Dataset
where
    H: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let columns: Vec<(&str, ColumnType)> = headers
        .iter()
        .map(|h| (h.as_ref(), classify_header(h.as_ref())))
        .collect();

    let mut dataset = Dataset::default();
    for row in 0..row_count {
        let mut record = Record::new();
        for (header, column) in &columns {
            let value = generate_value(column, row, pools, rng);
            record.insert(header.to_string(), Value::String(value));
        }
        dataset.push(record);
    }

    tracing::debug!(rows = row_count, columns = columns.len(), "generated inferred dataset");
    dataset
}

/// Value for one cell of a classified column.
pub fn generate_value<R>(column: &ColumnType, row: usize, pools: &Pools<'_>, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    match column {
        ColumnType::Known(kind) => known_value(*kind, row, pools, rng),
        ColumnType::Generic(header) => generic_value(header, row, rng),
    }
}

fn known_value<R>(kind: FieldKind, row: usize, p: &Pools<'_>, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let first = cycle(p.first_names, row);
    let last = cycle(p.last_names, row + 1);

    match kind {
        // Names
        FieldKind::FullName => format!("{first} {last}"),
        FieldKind::FirstName => first.to_string(),
        FieldKind::LastName => last.to_string(),
        FieldKind::Username => format!("@{}{}", values::slug(first), values::slug(last).chars().take(1).collect::<String>()),
        // Contact
        FieldKind::Email => values::email(first, last, cycle(p.email_domains, row)),
        FieldKind::Phone => format!("+1 (555) {:03}-{:04}", 100 + (row * 37) % 900, (1000 + row * 7919) % 10_000),
        FieldKind::Website => format!("https://{}.com", values::slug(cycle(p.companies, row + 2))),
        // Location
        FieldKind::Address => format!("{} {}", 100 + (row * 47) % 9900, cycle(p.streets, row + 1)),
        FieldKind::City => cycle(p.cities, row + 1).to_string(),
        FieldKind::State => cycle(p.states, row + 2).to_string(),
        FieldKind::Country => cycle(p.countries, row + 3).to_string(),
        FieldKind::ZipCode => values::random_zip(rng),
        FieldKind::Location => cycle(p.locations, row + 2).to_string(),
        // Organizational
        FieldKind::Company => cycle(p.companies, row).to_string(),
        FieldKind::Department => cycle(p.departments, row + 1).to_string(),
        FieldKind::JobTitle => cycle(p.job_titles, row + 2).to_string(),
        FieldKind::Team => cycle(p.teams, row + 3).to_string(),
        FieldKind::Manager => format!("{} {}", cycle(p.first_names, row + 7), cycle(p.last_names, row + 11)),
        FieldKind::AccessLevel => cycle(p.access_levels, row).to_string(),
        // Skills
        FieldKind::Skill => cycle(p.skills, row + 1).to_string(),
        FieldKind::Language => cycle(p.languages, row + 2).to_string(),
        // Status / metrics
        FieldKind::Status => cycle(p.statuses, row).to_string(),
        FieldKind::Priority => cycle(p.priorities, row + 1).to_string(),
        FieldKind::Rating => format!("{:.1}", 3.0 + ((row * 7) % 21) as f64 / 10.0),
        FieldKind::Progress => format!("{}%", (row * 17) % 101),
        FieldKind::Score => (60 + (row * 13) % 41).to_string(),
        // Identifiers
        FieldKind::Id => format!("ID-{:04}", 1001 + row),
        FieldKind::OrderNumber => format!("ORD-{:05}", 10_001 + row * 7),
        FieldKind::Sku => format!("SKU-{:04}", 2000 + row * 13),
        // Descriptive
        FieldKind::Description => cycle(p.descriptions, row).to_string(),
        FieldKind::Notes => cycle(p.notes, row + 1).to_string(),
        FieldKind::Category => cycle(p.categories, row + 2).to_string(),
        FieldKind::Product => cycle(p.products, row).to_string(),
        FieldKind::Project => cycle(p.projects, row + 1).to_string(),
        FieldKind::Tag => cycle(p.tags, row + 3).to_string(),
        // Time
        FieldKind::StartDate => values::date_after((2018, 1, 1), ((row * 97) % 2000) as u64),
        FieldKind::DueDate => values::date_after((2025, 1, 1), ((row * 9) % 365) as u64),
        FieldKind::Date => values::date_after((2024, 1, 1), ((row * 11) % 366) as u64),
        FieldKind::Time => format!(
            "{}:{:02} {}",
            1 + (row * 5) % 12,
            (row * 15) % 60,
            if row % 2 == 0 { "AM" } else { "PM" }
        ),
        FieldKind::Duration => format!("{}h {:02}m", 1 + row % 8, (row * 25) % 60),
        FieldKind::Age => (22 + (row * 7) % 41).to_string(),
        // Financial
        FieldKind::Salary => values::dollars((55_000 + (row * 4_750) % 95_000) as u64),
        FieldKind::Budget => values::dollars(rng.between(10, 500) as u64 * 1_000),
        FieldKind::Revenue => values::dollars((120_000 + (row * 37_500) % 900_000) as u64),
        FieldKind::Price => values::money((999 + (row * 1_250) % 49_000) as u64),
        FieldKind::Quantity => (1 + (row * 7) % 99).to_string(),
    }
}

fn is_percentage_like(lower: &str) -> bool {
    lower.contains('%') || lower.contains("percent") || has_word(lower, "ratio")
}

fn is_year_like(lower: &str) -> bool {
    lower.contains("year") || lower == "yr"
}

fn is_currency_like(lower: &str) -> bool {
    ["$", "usd", "eur", "dollar", "total", "balance", "spend"]
        .iter()
        .any(|p| lower.contains(p))
}

fn generic_value<R>(header: &str, row: usize, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let lower = header.trim().to_lowercase();

    if is_percentage_like(&lower) {
        format!("{}%", rng.below(100))
    } else if is_year_like(&lower) {
        let this_year = chrono::Utc::now().year() as i64;
        rng.between(this_year - 9, this_year).to_string()
    } else if is_currency_like(&lower) {
        values::money(rng.between(1_000, 9_999_999) as u64)
    } else {
        format!("{header} {}", row + 1)
    }
}
