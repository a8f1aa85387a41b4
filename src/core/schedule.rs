use crate::core::exclusion::ExclusionSet;
use crate::core::term::{parse_duration_days, DateTerm};
use crate::core::title::render_title;
use crate::domain::model::{Milestone, MilestoneState, SprintPlan};
use crate::utils::error::Result;
use chrono::{Duration, NaiveDate};

/// Slices every active term of the plan into sprint-sized milestones.
///
/// Each term is walked independently with a cursor of `duration` days: the
/// candidate interval is adjusted by the exclusion rules, emitted, and the
/// cursor moves to the day after the adjusted end. The last milestone of a
/// term is clamped to end exactly on the term's due date. Sequence ids
/// restart at 1 for every term.
///
/// Pure and deterministic: the same plan always yields the same milestones.
pub fn generate_milestones(plan: &SprintPlan) -> Result<Vec<Milestone>> {
    let duration_days = parse_duration_days(&plan.duration)?;
    let exclusions = ExclusionSet::from_spec(&plan.ignore)?;

    let mut milestones = Vec::new();
    for term_spec in &plan.terms {
        let term = DateTerm::parse("sprint.terms", &term_spec.start_on, &term_spec.due_on)?;

        let mut start = term.start;
        let mut end = term.start + Duration::days(duration_days - 1);
        let mut sid = 1;
        loop {
            let (adj_start, adj_end) = exclusions.adjust(start, end, duration_days);

            if adj_end > term.end {
                milestones.push(new_milestone(&plan.title_format, sid, adj_start, term.end)?);
                break;
            }

            milestones.push(new_milestone(&plan.title_format, sid, adj_start, adj_end)?);
            start = adj_end + Duration::days(1);
            // a milestone ending exactly on the due date exhausts the term
            if start > term.end {
                break;
            }
            end = start + Duration::days(duration_days - 1);
            sid += 1;
        }
    }

    Ok(milestones)
}

fn new_milestone(
    title_format: &str,
    sid: u32,
    start_on: NaiveDate,
    due_on: NaiveDate,
) -> Result<Milestone> {
    let state = MilestoneState::Open;
    let description = String::new();
    let title = render_title(title_format, sid, start_on, due_on, state, &description)?;
    Ok(Milestone {
        sid,
        title,
        state,
        description,
        start_on,
        due_on,
    })
}
