use crate::core::term::format_date;
use crate::domain::model::MilestoneState;
use crate::utils::error::{Result, SprintError};
use chrono::NaiveDate;
use regex::Regex;

const TITLE_FIELDS: [&str; 5] = ["sid", "start_on", "due_on", "state", "description"];

/// Renders a milestone title from a `{field}` template, e.g.
/// `"Sprint {sid} ({start_on} - {due_on})"`. Dates are rendered as
/// `YYYY/MM/DD`. Unknown fields and unbalanced braces are template errors.
pub fn render_title(
    title_format: &str,
    sid: u32,
    start_on: NaiveDate,
    due_on: NaiveDate,
    state: MilestoneState,
    description: &str,
) -> Result<String> {
    let placeholder = Regex::new(r"\{([A-Za-z_]+)\}").unwrap();

    let stripped = placeholder.replace_all(title_format, "");
    if stripped.contains('{') || stripped.contains('}') {
        return Err(template_error(title_format, "unbalanced braces"));
    }

    for caps in placeholder.captures_iter(title_format) {
        let field = &caps[1];
        if !TITLE_FIELDS.contains(&field) {
            return Err(template_error(
                title_format,
                &format!("unknown field {{{}}}", field),
            ));
        }
    }

    let rendered = placeholder.replace_all(title_format, |caps: &regex::Captures| {
        match &caps[1] {
            "sid" => sid.to_string(),
            "start_on" => format_date(start_on),
            "due_on" => format_date(due_on),
            "state" => state.to_string(),
            _ => description.to_string(),
        }
    });

    Ok(rendered.into_owned())
}

fn template_error(title_format: &str, reason: &str) -> SprintError {
    SprintError::TemplateError {
        format: title_format.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_title() {
        let title = render_title(
            "Sprint {sid} ({start_on} - {due_on})",
            3,
            date(2021, 1, 15),
            date(2021, 1, 21),
            MilestoneState::Open,
            "",
        )
        .unwrap();
        assert_eq!(title, "Sprint 3 (2021/01/15 - 2021/01/21)");
    }

    #[test]
    fn test_render_title_state_and_description() {
        let title = render_title(
            "{state}: {description}",
            1,
            date(2021, 1, 1),
            date(2021, 1, 7),
            MilestoneState::Open,
            "first sprint",
        )
        .unwrap();
        assert_eq!(title, "open: first sprint");
    }

    #[test]
    fn test_render_title_without_placeholders() {
        let title = render_title(
            "Fixed title",
            1,
            date(2021, 1, 1),
            date(2021, 1, 7),
            MilestoneState::Open,
            "",
        )
        .unwrap();
        assert_eq!(title, "Fixed title");
    }

    #[test]
    fn test_render_title_rejects_unknown_field() {
        let err = render_title(
            "Sprint {number}",
            1,
            date(2021, 1, 1),
            date(2021, 1, 7),
            MilestoneState::Open,
            "",
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field {number}"));
    }

    #[test]
    fn test_render_title_rejects_unbalanced_braces() {
        assert!(render_title(
            "Sprint {sid",
            1,
            date(2021, 1, 1),
            date(2021, 1, 7),
            MilestoneState::Open,
            "",
        )
        .is_err());
        assert!(render_title(
            "Sprint sid}",
            1,
            date(2021, 1, 1),
            date(2021, 1, 7),
            MilestoneState::Open,
            "",
        )
        .is_err());
    }
}
