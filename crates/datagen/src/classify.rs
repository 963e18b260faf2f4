//! Header classification.
//!
//! Column headers are mapped to semantic field kinds by an ordered rule
//! table. Rules are tried top to bottom against the trimmed, lower-cased
//! header; the first rule with a matching pattern wins. Order is significant:
//! "Email Address" must hit the contact rules before the location rules see
//! "address".

/// Semantic type recognized by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    // Names
    FullName,
    FirstName,
    LastName,
    Username,
    // Contact
    Email,
    Phone,
    Website,
    // Location
    Address,
    City,
    State,
    Country,
    ZipCode,
    Location,
    // Organizational
    Company,
    Department,
    JobTitle,
    Team,
    Manager,
    AccessLevel,
    // Skills
    Skill,
    Language,
    // Status / metrics
    Status,
    Priority,
    Rating,
    Progress,
    Score,
    // Identifiers
    Id,
    OrderNumber,
    Sku,
    // Descriptive
    Description,
    Notes,
    Category,
    Product,
    Project,
    Tag,
    // Time
    StartDate,
    DueDate,
    Date,
    Time,
    Duration,
    Age,
    // Financial
    Salary,
    Budget,
    Revenue,
    Price,
    Quantity,
}

/// Result of classifying one header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Known(FieldKind),
    /// No rule matched; carries the original header text.
    Generic(String),
}

impl ColumnType {
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Generic(_) => None,
        }
    }
}

/// How a rule pattern is compared against the lower-cased header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Exact(&'static str),
    Contains(&'static str),
    /// Whole word: one of the header's alphanumeric tokens equals the pattern.
    Word(&'static str),
}

impl Pattern {
    fn matches(self, header: &str) -> bool {
        match self {
            Self::Exact(p) => header == p,
            Self::Contains(p) => header.contains(p),
            Self::Word(p) => has_word(header, p),
        }
    }
}

/// True when `word` is one of `text`'s alphanumeric tokens.
pub fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}

/// One classification rule: any matching pattern selects `kind`.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    pub kind: FieldKind,
    pub patterns: &'static [Pattern],
}

use Pattern::{Contains, Exact, Word};

macro_rules! rule {
    ($kind:ident, [$($pat:expr),+ $(,)?]) => {
        HeaderRule { kind: FieldKind::$kind, patterns: &[$($pat),+] }
    };
}

/// Built-in rules, in evaluation order.
pub const HEADER_RULES: &[HeaderRule] = &[
    // Names
    rule!(FirstName, [Contains("first name"), Contains("firstname"), Contains("given name"), Exact("first")]),
    rule!(LastName, [Contains("last name"), Contains("lastname"), Contains("surname"), Contains("family name"), Exact("last")]),
    rule!(Username, [Contains("username"), Contains("user name"), Contains("handle"), Contains("login")]),
    rule!(FullName, [
        Exact("name"), Contains("full name"), Contains("employee name"), Contains("customer name"),
        Contains("contact name"), Exact("employee"), Exact("customer"), Exact("person"), Exact("user"),
        Exact("member"), Contains("assignee"), Contains("owner"),
    ]),
    // Contact
    rule!(Email, [Contains("email"), Contains("e-mail"), Contains("mail")]),
    rule!(Phone, [Contains("phone"), Contains("mobile"), Exact("tel"), Contains("telephone"), Contains("fax")]),
    rule!(Website, [Contains("website"), Contains("url"), Exact("web"), Exact("site"), Contains("homepage")]),
    // Location
    rule!(ZipCode, [Contains("zip"), Contains("postal"), Contains("postcode")]),
    rule!(Address, [Contains("address"), Contains("street")]),
    rule!(City, [Contains("city"), Word("town")]),
    rule!(State, [Exact("state"), Contains("province"), Contains("region")]),
    rule!(Country, [Contains("country"), Contains("nation")]),
    rule!(Location, [Contains("location"), Contains("office"), Contains("place"), Exact("based in")]),
    // Organizational
    rule!(Company, [Contains("company"), Contains("organization"), Contains("organisation"), Contains("employer"), Contains("client"), Contains("vendor")]),
    rule!(Department, [Contains("department"), Contains("dept"), Contains("division")]),
    rule!(Manager, [Contains("manager"), Contains("supervisor"), Contains("reports to")]),
    rule!(JobTitle, [Contains("job"), Contains("position"), Contains("occupation"), Contains("designation"), Exact("title"), Exact("role title")]),
    rule!(Team, [Word("team"), Word("teams"), Contains("squad")]),
    rule!(AccessLevel, [Contains("access"), Contains("permission"), Exact("role")]),
    // Skills
    rule!(Skill, [Contains("skill"), Contains("expertise"), Contains("competenc")]),
    rule!(Language, [Contains("language"), Exact("lang")]),
    // Status / metrics
    rule!(Status, [Contains("status"), Contains("stage"), Exact("active")]),
    rule!(Priority, [Contains("priority"), Contains("severity"), Contains("urgency")]),
    rule!(Rating, [Word("rating"), Word("ratings"), Contains("stars")]),
    rule!(Progress, [Contains("progress"), Contains("completion"), Exact("complete")]),
    rule!(Score, [Contains("score"), Contains("points"), Contains("grade")]),
    // Identifiers
    rule!(OrderNumber, [Word("order"), Word("orders"), Contains("invoice"), Contains("ticket"), Contains("reference")]),
    rule!(Sku, [Contains("sku"), Contains("serial"), Contains("code")]),
    rule!(Id, [Exact("id"), Exact("#"), Contains(" id"), Contains("identifier"), Exact("no."), Exact("number")]),
    // Descriptive
    rule!(Description, [Contains("description"), Contains("summary"), Contains("details"), Exact("about"), Exact("bio")]),
    rule!(Notes, [Contains("note"), Contains("comment"), Contains("remark")]),
    rule!(Category, [Contains("category"), Exact("type"), Exact("kind"), Exact("class")]),
    rule!(Product, [Contains("product"), Exact("item"), Contains("service")]),
    rule!(Project, [Contains("project"), Contains("initiative")]),
    rule!(Tag, [Exact("tag"), Contains("tags"), Contains("label")]),
    // Time
    rule!(StartDate, [Contains("start"), Contains("joined"), Contains("hire date"), Contains("member since")]),
    rule!(DueDate, [Contains("due"), Contains("deadline"), Contains("end date"), Contains("expir")]),
    rule!(Date, [Word("date"), Word("dates"), Contains("created"), Contains("updated"), Contains("modified"), Exact("day")]),
    rule!(Time, [Exact("time"), Contains("timestamp"), Exact("hour")]),
    rule!(Duration, [Contains("duration"), Contains("elapsed")]),
    rule!(Age, [Exact("age")]),
    // Financial
    rule!(Salary, [Contains("salary"), Contains("wage"), Contains("compensation")]),
    rule!(Budget, [Contains("budget")]),
    rule!(Revenue, [Contains("revenue"), Contains("sales"), Contains("income"), Contains("profit")]),
    rule!(Price, [Contains("price"), Contains("cost"), Word("fee"), Word("fees"), Contains("amount")]),
    rule!(Quantity, [Contains("quantity"), Exact("qty"), Contains("stock"), Contains("units"), Exact("count")]),
];

/// Classify `header` with the built-in rules.
pub fn classify_header(header: &str) -> ColumnType {
    classify_with(header, HEADER_RULES)
}

/// Classify `header` with an explicit rule table.
pub fn classify_with(header: &str, rules: &[HeaderRule]) -> ColumnType {
    let normalized = header.trim().to_lowercase();
    rules
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| p.matches(&normalized)))
        .map(|rule| ColumnType::Known(rule.kind))
        .unwrap_or_else(|| ColumnType::Generic(header.to_string()))
}
