//! Fixed-schema dataset generator.
//!
//! Produces people-directory style records: six base fields, plus extra
//! fields appended as the requested column count grows.

use rand::seq::SliceRandom;
use serde_json::Value;

use crate::dataset::{Dataset, Record};
use crate::pools::{cycle, Pools};
use crate::random::RandomSource;
use crate::values;

/// Tuning for [`generate_fixed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOptions {
    /// Records synthesized before the final shuffle-and-truncate.
    pub minimum_pool: usize,
    /// Probability that a record's status is the leading ("active") status.
    pub active_bias: f64,
}

impl Default for FixedOptions {
    fn default() -> Self {
        Self {
            minimum_pool: 30,
            active_bias: 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedField {
    Name,
    Email,
    Department,
    Location,
    AccessLevel,
    Status,
    Team,
    Project,
    Skill,
    Language,
    StartDate,
    Phone,
}

impl FixedField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Location => "Location",
            Self::AccessLevel => "Access Level",
            Self::Status => "Status",
            Self::Team => "Team",
            Self::Project => "Project",
            Self::Skill => "Skill",
            Self::Language => "Language",
            Self::StartDate => "Start Date",
            Self::Phone => "Phone",
        }
    }
}

/// Always present, in this order.
pub const BASE_FIELDS: &[FixedField] = &[
    FixedField::Name,
    FixedField::Email,
    FixedField::Department,
    FixedField::Location,
    FixedField::AccessLevel,
    FixedField::Status,
];

/// Appended in order when the column hint exceeds the threshold.
pub const EXTENDED_FIELDS: &[(FixedField, usize)] = &[
    (FixedField::Team, 6),
    (FixedField::Project, 7),
    (FixedField::Skill, 8),
    (FixedField::Language, 9),
    (FixedField::StartDate, 10),
    (FixedField::Phone, 11),
];

/// Fields generated for a given column hint.
pub fn fixed_schema(column_hint: usize) -> Vec<FixedField> {
    let mut fields = BASE_FIELDS.to_vec();
    fields.extend(
        EXTENDED_FIELDS
            .iter()
            .filter(|(_, threshold)| column_hint > *threshold)
            .map(|(field, _)| *field),
    );
    fields
}

/// Per-invocation shuffled copies of the cycled pools.
struct Shuffled<'a> {
    first_names: Vec<&'a str>,
    last_names: Vec<&'a str>,
    departments: Vec<&'a str>,
    locations: Vec<&'a str>,
    teams: Vec<&'a str>,
    projects: Vec<&'a str>,
    skills: Vec<&'a str>,
    languages: Vec<&'a str>,
}

impl<'a> Shuffled<'a> {
    fn new<R: RandomSource + ?Sized>(pools: &Pools<'a>, rng: &mut R) -> Self {
        let mut shuffled = |pool: &[&'a str]| {
            let mut v = pool.to_vec();
            v.shuffle(rng.rng());
            v
        };
        Self {
            first_names: shuffled(pools.first_names),
            last_names: shuffled(pools.last_names),
            departments: shuffled(pools.departments),
            locations: shuffled(pools.locations),
            teams: shuffled(pools.teams),
            projects: shuffled(pools.projects),
            skills: shuffled(pools.skills),
            languages: shuffled(pools.languages),
        }
    }
}

/// Generate exactly `row_count` records.
///
/// Synthesizes `max(row_count, minimum_pool)` records from shuffled pools
/// cycled with per-field offsets, then shuffles again and keeps the first
/// `row_count`.
pub fn generate_fixed<R>(
    row_count: usize,
    column_hint: usize,
    pools: &Pools<'_>,
    options: &FixedOptions,
    rng: &mut R,
) -> Dataset
where
    R: RandomSource + ?Sized,
{
    let schema = fixed_schema(column_hint);
    let pool_size = row_count.max(options.minimum_pool);
    let shuffled = Shuffled::new(pools, rng);

    let mut records: Vec<Record> = (0..pool_size)
        .map(|i| fixed_record(i, &schema, pools, &shuffled, options, rng))
        .collect();

    records.shuffle(rng.rng());
    records.truncate(row_count);

    tracing::debug!(rows = records.len(), columns = schema.len(), "generated fixed dataset");
    Dataset::new(records)
}

fn fixed_record<R: RandomSource + ?Sized>(
    i: usize,
    schema: &[FixedField],
    pools: &Pools<'_>,
    shuffled: &Shuffled<'_>,
    options: &FixedOptions,
    rng: &mut R,
) -> Record {
    let first = cycle(&shuffled.first_names, i);
    let last = cycle(&shuffled.last_names, i + 1);

    let mut record = Record::new();
    for &field in schema {
        let value = match field {
            FixedField::Name => format!("{first} {last}"),
            FixedField::Email => values::email(first, last, cycle(pools.email_domains, i)),
            FixedField::Department => cycle(&shuffled.departments, i + 2).to_string(),
            FixedField::Location => cycle(&shuffled.locations, i + 3).to_string(),
            FixedField::AccessLevel => pools.access_levels.choose(rng.rng()).copied().unwrap_or_default().to_string(),
            FixedField::Status => status(pools.statuses, options.active_bias, rng),
            FixedField::Team => cycle(&shuffled.teams, i + 4).to_string(),
            FixedField::Project => cycle(&shuffled.projects, i + 5).to_string(),
            FixedField::Skill => cycle(&shuffled.skills, i + 6).to_string(),
            FixedField::Language => cycle(&shuffled.languages, i + 7).to_string(),
            FixedField::StartDate => values::date_after((2016, 1, 1), rng.below(3285) as u64),
            FixedField::Phone => values::random_phone(rng),
        };
        record.insert(field.label().to_string(), Value::String(value));
    }
    record
}

/// Leading status with probability `bias`, otherwise one of the others.
fn status<R: RandomSource + ?Sized>(statuses: &[&str], bias: f64, rng: &mut R) -> String {
    match statuses.split_first() {
        None => String::new(),
        Some((active, [])) => active.to_string(),
        Some((active, rest)) => {
            if rng.chance(bias) {
                active.to_string()
            } else {
                rest.choose(rng.rng()).copied().unwrap_or(*active).to_string()
            }
        }
    }
}
