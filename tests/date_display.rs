//! Date display formatting tests

mod common;

use common::{saves_of, send, test_page, type_and_enter, with_date_format};
use fieldedit::date_format::DateFormatPreference;
use fieldedit::field::FieldKind;
use fieldedit::messages::{FieldMsg, Msg, PageMsg};
use fieldedit::update::update;

fn commit_date(date_format: DateFormatPreference) -> String {
    let (page, id) = test_page("field-start_date", FieldKind::Date, "2025-01-01");
    let mut page = with_date_format(page, date_format);
    let cmd = type_and_enter(&mut page, id, "2025-11-12");

    // The wire value is always ISO
    assert_eq!(saves_of(&cmd)[0].value, "2025-11-12");
    page.field(id).unwrap().display_text().unwrap().to_string()
}

#[test]
fn test_month_first_display() {
    assert_eq!(commit_date(DateFormatPreference::MonthFirst), "11/12/2025");
}

#[test]
fn test_year_first_display() {
    assert_eq!(commit_date(DateFormatPreference::YearFirst), "2025/11/12");
}

#[test]
fn test_day_first_display() {
    assert_eq!(commit_date(DateFormatPreference::DayFirst), "12/11/2025");
}

#[test]
fn test_reedit_after_reformat_seeds_iso() {
    let (page, id) = test_page("field-start_date", FieldKind::Date, "2025-01-01");
    let mut page = with_date_format(page, DateFormatPreference::MonthFirst);
    type_and_enter(&mut page, id, "2025-11-12");
    send(&mut page, id, FieldMsg::SaveCompleted(Ok(())));

    send(&mut page, id, FieldMsg::Activate);
    let session = page.field(id).unwrap().session().unwrap();
    assert_eq!(session.widget.pending_value(), "2025-11-12");

    // Escape brings back the formatted text
    send(&mut page, id, FieldMsg::Escape);
    assert_eq!(page.field(id).unwrap().display_text(), Some("11/12/2025"));
}

#[test]
fn test_rollback_restores_text_as_it_was() {
    let (page, id) = test_page("field-start_date", FieldKind::Date, "2025-01-01");
    let mut page = with_date_format(page, DateFormatPreference::DayFirst);
    type_and_enter(&mut page, id, "2025-11-12");
    send(
        &mut page,
        id,
        FieldMsg::SaveCompleted(Err(fieldedit::persistence::PersistError::Network(
            "timed out".into(),
        ))),
    );
    assert_eq!(page.field(id).unwrap().display_text(), Some("2025-01-01"));
}

#[test]
fn test_preference_change_applies_to_next_commit() {
    let (mut page, id) = test_page("field-start_date", FieldKind::Date, "2025-01-01");
    update(
        &mut page,
        Msg::Page(PageMsg::SetDateFormat(DateFormatPreference::DayFirst)),
    );
    type_and_enter(&mut page, id, "2025-11-12");
    assert_eq!(page.field(id).unwrap().display_text(), Some("12/11/2025"));
}

#[test]
fn test_locale_detection() {
    assert_eq!(
        DateFormatPreference::from_locale("en_US.UTF-8"),
        Some(DateFormatPreference::MonthFirst)
    );
    assert_eq!(
        DateFormatPreference::from_locale("fr_FR"),
        Some(DateFormatPreference::DayFirst)
    );
    assert_eq!(DateFormatPreference::from_locale("POSIX"), None);
}
