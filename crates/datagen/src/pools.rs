//! Candidate word pools.
//!
//! Generators only ever see a [`Pools`] value, so tests can swap any pool for
//! a smaller one with struct update syntax:
//!
//! ```
//! use tablefill_datagen::Pools;
//! let pools = Pools { departments: &["Ops"], ..Pools::builtin() };
//! assert_eq!(pools.departments.len(), 1);
//! ```

/// A set of candidate pools consumed by the generators.
#[derive(Debug, Clone, Copy)]
pub struct Pools<'a> {
    pub first_names: &'a [&'a str],
    pub last_names: &'a [&'a str],
    pub email_domains: &'a [&'a str],
    pub companies: &'a [&'a str],
    pub departments: &'a [&'a str],
    pub job_titles: &'a [&'a str],
    pub teams: &'a [&'a str],
    pub access_levels: &'a [&'a str],
    pub statuses: &'a [&'a str],
    pub priorities: &'a [&'a str],
    pub streets: &'a [&'a str],
    pub cities: &'a [&'a str],
    pub states: &'a [&'a str],
    pub countries: &'a [&'a str],
    pub locations: &'a [&'a str],
    pub skills: &'a [&'a str],
    pub languages: &'a [&'a str],
    pub projects: &'a [&'a str],
    pub products: &'a [&'a str],
    pub categories: &'a [&'a str],
    pub tags: &'a [&'a str],
    pub descriptions: &'a [&'a str],
    pub notes: &'a [&'a str],
}

impl Pools<'static> {
    pub const fn builtin() -> Self {
        Self {
            first_names: FIRST_NAMES,
            last_names: LAST_NAMES,
            email_domains: EMAIL_DOMAINS,
            companies: COMPANIES,
            departments: DEPARTMENTS,
            job_titles: JOB_TITLES,
            teams: TEAMS,
            access_levels: ACCESS_LEVELS,
            statuses: STATUSES,
            priorities: PRIORITIES,
            streets: STREETS,
            cities: CITIES,
            states: STATES,
            countries: COUNTRIES,
            locations: LOCATIONS,
            skills: SKILLS,
            languages: LANGUAGES,
            projects: PROJECTS,
            products: PRODUCTS,
            categories: CATEGORIES,
            tags: TAGS,
            descriptions: DESCRIPTIONS,
            notes: NOTES,
        }
    }
}

impl Default for Pools<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Entry `index` of `pool`, wrapping around. Empty pools yield `""`.
pub fn cycle<'a>(pool: &[&'a str], index: usize) -> &'a str {
    if pool.is_empty() {
        ""
    } else {
        pool[index % pool.len()]
    }
}

pub const FIRST_NAMES: &[&str] = &[
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "Mateo", "Isabella", "Lucas",
    "Mia", "Levi", "Amelia", "Ethan", "Harper", "James", "Evelyn", "Kai", "Aria", "Leo",
    "Chloe", "Omar", "Priya", "Hiro", "Fatima", "Diego", "Ingrid", "Kwame", "Mei", "Rafael",
];

pub const LAST_NAMES: &[&str] = &[
    "Chen", "Patel", "Garcia", "Johnson", "Nguyen", "Kim", "Mueller", "Rossi", "Okafor", "Silva",
    "Anderson", "Kowalski", "Haddad", "Tanaka", "Larsen", "Dubois", "Martins", "Cohen", "Singh", "Walker",
    "Ivanova", "Moreau", "Novak", "Reyes", "Bianchi", "O'Brien", "Yamamoto", "Fischer", "Costa", "Hughes",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "acme.io", "northwind.com", "globex.co", "initech.com", "umbrella.dev", "hooli.com",
];

pub const COMPANIES: &[&str] = &[
    "Acme Corp", "Northwind Traders", "Globex", "Initech", "Umbrella Labs", "Hooli",
    "Stark Industries", "Wayne Enterprises", "Soylent", "Vandelay Industries", "Cyberdyne", "Wonka Foods",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering", "Design", "Marketing", "Sales", "Finance", "Operations",
    "Human Resources", "Legal", "Customer Success", "Product", "Research", "IT",
];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Product Designer", "Product Manager", "Data Analyst", "Account Executive",
    "Marketing Manager", "Financial Analyst", "Recruiter", "Support Specialist", "Engineering Manager",
    "UX Researcher", "DevOps Engineer", "Content Strategist", "Legal Counsel", "Operations Lead",
];

pub const TEAMS: &[&str] = &[
    "Platform", "Growth", "Payments", "Mobile", "Infrastructure", "Design Systems",
    "Onboarding", "Analytics", "Security", "Core Experience",
];

pub const ACCESS_LEVELS: &[&str] = &["Admin", "Editor", "Viewer", "Owner", "Guest"];

/// The first entry is the biased "active" status of the fixed generator.
pub const STATUSES: &[&str] = &["Active", "Inactive", "Pending", "Suspended", "On Leave"];

pub const PRIORITIES: &[&str] = &["Low", "Medium", "High", "Critical"];

pub const STREETS: &[&str] = &[
    "Market St", "Oak Ave", "Maple Dr", "Pine St", "Cedar Ln", "Elm St",
    "Sunset Blvd", "Broadway", "Park Ave", "Lake Shore Dr",
];

pub const CITIES: &[&str] = &[
    "San Francisco", "New York", "London", "Berlin", "Tokyo", "Toronto",
    "Sydney", "Paris", "Singapore", "Austin", "Amsterdam", "Seoul",
];

pub const STATES: &[&str] = &[
    "California", "New York", "Texas", "Washington", "Illinois", "Massachusetts",
    "Colorado", "Oregon", "Florida", "Georgia",
];

pub const COUNTRIES: &[&str] = &[
    "United States", "United Kingdom", "Germany", "Japan", "Canada", "Australia",
    "France", "Singapore", "Netherlands", "South Korea", "Brazil", "India",
];

pub const LOCATIONS: &[&str] = &[
    "San Francisco, CA", "New York, NY", "London, UK", "Berlin, DE", "Tokyo, JP", "Toronto, CA",
    "Sydney, AU", "Paris, FR", "Singapore, SG", "Austin, TX", "Remote",
];

pub const SKILLS: &[&str] = &[
    "Rust", "TypeScript", "Figma", "SQL", "Python", "Data Visualization", "Kubernetes",
    "User Research", "Copywriting", "Go", "Prototyping", "Machine Learning",
];

pub const LANGUAGES: &[&str] = &[
    "English", "Spanish", "French", "German", "Japanese", "Mandarin", "Portuguese",
    "Hindi", "Korean", "Italian",
];

pub const PROJECTS: &[&str] = &[
    "Apollo", "Hermes", "Atlas", "Phoenix", "Orion", "Nova", "Mercury", "Titan",
    "Aurora", "Zephyr",
];

pub const PRODUCTS: &[&str] = &[
    "Wireless Headphones", "Standing Desk", "Mechanical Keyboard", "4K Monitor", "Ergonomic Chair",
    "USB-C Hub", "Webcam", "Smart Speaker", "Laptop Stand", "Desk Lamp",
];

pub const CATEGORIES: &[&str] = &[
    "Electronics", "Furniture", "Accessories", "Software", "Services", "Office Supplies",
];

pub const TAGS: &[&str] = &["New", "Featured", "Sale", "Limited", "Popular", "Beta"];

pub const DESCRIPTIONS: &[&str] = &[
    "Quarterly planning review",
    "Migrate billing to the new provider",
    "Refresh onboarding illustrations",
    "Audit accessibility across web app",
    "Prepare launch announcement",
    "Consolidate analytics dashboards",
    "Update vendor contracts",
    "Improve search relevance",
];

pub const NOTES: &[&str] = &[
    "Follow up next week",
    "Waiting on legal review",
    "Blocked by design sign-off",
    "Ready for QA",
    "Needs budget approval",
    "Shared with stakeholders",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_and_handles_empty() {
        assert_eq!(cycle(&["a", "b"], 3), "b");
        assert_eq!(cycle(&[], 3), "");
    }

    #[test]
    fn builtin_pools_are_non_empty() {
        let p = Pools::builtin();
        for pool in [
            p.first_names, p.last_names, p.email_domains, p.companies, p.departments,
            p.job_titles, p.teams, p.access_levels, p.statuses, p.priorities, p.streets,
            p.cities, p.states, p.countries, p.locations, p.skills, p.languages,
            p.projects, p.products, p.categories, p.tags, p.descriptions, p.notes,
        ] {
            assert!(!pool.is_empty());
        }
    }

    #[test]
    fn active_status_leads() {
        assert_eq!(STATUSES[0], "Active");
    }
}
