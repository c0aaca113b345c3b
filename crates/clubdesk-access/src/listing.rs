//! List helpers shared by the listing screens.
//!
//! Filters are plain values built from the screen's filter controls; an
//! unset field does not filter. Text search is case-insensitive, every other
//! field compares exactly.

use clubdesk_config::ListingConfig;
use clubdesk_core::parse_start_year;
use clubdesk_models::{AdminAccount, AdminRole, ClubRole, Course, Event, EventStatus, Member, Record};
use std::collections::HashSet;

/// A predicate over one record kind.
pub trait ListFilter<R> {
    fn matches(&self, record: &R) -> bool;

    fn apply<'r>(&self, records: &'r [R]) -> Vec<&'r R> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn opt_eq(filter: &Option<String>, value: Option<&str>) -> bool {
    match filter.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        Some(wanted) => value == Some(wanted),
        None => true,
    }
}

fn search_matches(search: &Option<String>, fields: &[&str]) -> bool {
    match search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(needle) => fields.iter().any(|field| contains_ci(field, needle)),
        None => true,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFilter {
    /// Matches name or email.
    pub search: Option<String>,
    pub batch: Option<String>,
    pub year: Option<String>,
    pub role: Option<AdminRole>,
    pub gender: Option<String>,
}

impl ListFilter<AdminAccount> for AdminFilter {
    fn matches(&self, admin: &AdminAccount) -> bool {
        search_matches(&self.search, &[admin.name.as_str(), admin.email.as_str()])
            && opt_eq(&self.batch, Some(admin.batch.as_str()))
            && opt_eq(&self.year, admin.year.as_deref())
            && self.role.is_none_or(|role| role == admin.role)
            && opt_eq(&self.gender, admin.gender.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    /// Matches name.
    pub search: Option<String>,
    pub batch: Option<String>,
    pub year: Option<String>,
    /// Position category.
    pub category: Option<String>,
    pub gender: Option<String>,
}

impl ListFilter<Member> for MemberFilter {
    fn matches(&self, member: &Member) -> bool {
        let category = member.position.as_ref().and_then(|p| p.category.as_deref());
        search_matches(&self.search, &[member.name.as_str()])
            && opt_eq(&self.batch, Some(member.batch.as_str()))
            && opt_eq(&self.year, member.year.as_deref())
            && opt_eq(&self.category, category)
            && opt_eq(&self.gender, member.gender.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Matches name.
    pub search: Option<String>,
    pub batch: Option<String>,
    pub status: Option<EventStatus>,
}

impl ListFilter<Event> for EventFilter {
    fn matches(&self, event: &Event) -> bool {
        search_matches(&self.search, &[event.name.as_str()])
            && opt_eq(&self.batch, Some(event.batch.as_str()))
            && self.status.is_none_or(|status| status == event.status)
    }
}

/// Distinct non-blank batches in first-seen order.
pub fn distinct_batches<R: Record>(records: &[R]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(R::batch)
        .filter(|batch| !batch.trim().is_empty())
        .filter(|batch| seen.insert(*batch))
        .collect()
}

/// The batch with the greatest start year, used as the default filter.
/// Unreadable labels are skipped.
pub fn latest_batch<R: Record>(records: &[R]) -> Option<&str> {
    distinct_batches(records)
        .into_iter()
        .filter_map(|batch| parse_start_year(batch).ok().map(|year| (year, batch)))
        .max_by_key(|(year, _)| *year)
        .map(|(_, batch)| batch)
}

/// Display order for superadmins: listed founder emails first, in list
/// order, then everyone else in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FounderOrdering {
    emails: Vec<String>,
}

impl FounderOrdering {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|e| normalize_email(e.as_ref()))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &ListingConfig) -> Self {
        Self::new(&config.founder_emails)
    }

    /// Position of `email` in the founder list.
    pub fn rank(&self, email: &str) -> Option<usize> {
        let email = normalize_email(email);
        self.emails.iter().position(|e| *e == email)
    }

    /// Stable sort: ranked accounts by rank, then unranked in input order.
    pub fn sort(&self, admins: &mut [&AdminAccount]) {
        admins.sort_by_key(|admin| match self.rank(&admin.email) {
            Some(rank) => (0, rank),
            None => (1, 0),
        });
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Split a listing into (superadmins in founder order, admins). Accounts
/// with an unrecognised role appear in neither.
pub fn split_admins<'r>(
    admins: &[&'r AdminAccount],
    ordering: &FounderOrdering,
) -> (Vec<&'r AdminAccount>, Vec<&'r AdminAccount>) {
    let mut supers: Vec<&AdminAccount> = admins
        .iter()
        .copied()
        .filter(|a| a.role == AdminRole::Superadmin)
        .collect();
    ordering.sort(&mut supers);

    let regular = admins
        .iter()
        .copied()
        .filter(|a| a.role == AdminRole::Admin)
        .collect();

    (supers, regular)
}

/// Entries the club never shows in listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenEntries {
    role_names: Vec<String>,
    course_keywords: Vec<String>,
}

impl HiddenEntries {
    pub fn new(role_names: Vec<String>, course_keywords: Vec<String>) -> Self {
        Self {
            role_names,
            course_keywords: course_keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn from_config(config: &ListingConfig) -> Self {
        Self::new(
            config.hidden_role_names.clone(),
            config.hidden_course_keywords.clone(),
        )
    }

    pub fn hides_role(&self, role: &ClubRole) -> bool {
        self.role_names.iter().any(|name| *name == role.name)
    }

    pub fn hides_course(&self, course: &Course) -> bool {
        let name = course.name.to_lowercase();
        self.course_keywords.iter().any(|k| name.contains(k.as_str()))
    }

    pub fn visible_roles<'r>(&self, roles: &'r [ClubRole]) -> Vec<&'r ClubRole> {
        roles.iter().filter(|r| !self.hides_role(r)).collect()
    }

    pub fn visible_courses<'r>(&self, courses: &'r [Course]) -> Vec<&'r Course> {
        courses.iter().filter(|c| !self.hides_course(c)).collect()
    }
}
