use crate::core::term::DateTerm;
use crate::domain::model::IgnoreSpec;
use crate::utils::error::{Result, SprintError};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Weekday names accepted in the manifest's `ignore.weekdays` list.
const DAYS_OF_WEEK: [(&str, Weekday); 7] = [
    ("Sunday", Weekday::Sun),
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Saturday", Weekday::Sat),
];

pub fn lookup_weekday(field: &str, name: &str) -> Result<Weekday> {
    DAYS_OF_WEEK
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, weekday)| *weekday)
        .ok_or_else(|| SprintError::ConfigError {
            field: field.to_string(),
            message: format!("unknown weekday {:?}", name),
        })
}

/// Blackout date-ranges plus blackout weekdays. Exclusion terms are kept in
/// manifest order; `adjust` short-circuits on the first matching term.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    terms: Vec<DateTerm>,
    weekdays: HashSet<Weekday>,
}

impl ExclusionSet {
    pub fn new(terms: Vec<DateTerm>, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            terms,
            weekdays: weekdays.into_iter().collect(),
        }
    }

    pub fn from_spec(spec: &IgnoreSpec) -> Result<Self> {
        let mut terms = Vec::with_capacity(spec.terms.len());
        for term in &spec.terms {
            terms.push(DateTerm::parse(
                "sprint.ignore.terms",
                &term.start_on,
                &term.due_on,
            )?);
        }
        let mut weekdays = HashSet::new();
        for name in &spec.weekdays {
            weekdays.insert(lookup_weekday("sprint.ignore.weekdays", name)?);
        }
        Ok(Self { terms, weekdays })
    }

    /// Moves a proposed `[start, end]` interval off excluded dates.
    ///
    /// Exclusion terms are evaluated in order and the first matching rule wins:
    /// a start inside a term (or a term swallowing the whole interval) shifts
    /// the interval to begin the day after the term, keeping its full duration;
    /// an end inside a term (or the interval swallowing the term) truncates the
    /// end to the day before the term. Weekday blackouts apply only when no
    /// term matched, and each boundary moves at most one day. A shifted
    /// interval is not re-checked against the remaining rules.
    pub fn adjust(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        duration_days: i64,
    ) -> (NaiveDate, NaiveDate) {
        for term in &self.terms {
            if term.contains(start) {
                let shifted = term.end + Duration::days(1);
                return (shifted, shifted + Duration::days(duration_days - 1));
            }
            if term.contains(end) {
                return (start, term.start - Duration::days(1));
            }
            if start < term.start && end > term.end {
                return (start, term.start - Duration::days(1));
            }
            if start > term.start && end < term.end {
                let shifted = term.end + Duration::days(1);
                return (shifted, shifted + Duration::days(duration_days - 1));
            }
        }

        let mut start = start;
        let mut end = end;
        if self.weekdays.contains(&start.weekday()) {
            start = start + Duration::days(1);
        }
        if self.weekdays.contains(&end.weekday()) {
            end = end + Duration::days(1);
        }
        (start, end)
    }
}
