//! Payroll lifecycle scenarios exercised through the public domain API

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use helpdesk_domain::{
    EmployeeId, HelpdeskError, PayPeriod, PayrollSheet, PayrollSheetId, PayrollStatus, WorkType,
    WorkTypeId,
};
use rust_decimal_macros::dec;

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
}

fn work_type(id: &str, name: &str, price: rust_decimal::Decimal) -> WorkType {
    WorkType {
        id: WorkTypeId::new(id),
        name: name.into(),
        unit: "ticket".into(),
        price_per_unit: price,
        updated_at: at(1),
    }
}

fn may_sheet() -> PayrollSheet {
    let period = PayPeriod::new(
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    )
    .unwrap();
    PayrollSheet::new(PayrollSheetId::new("ps-may"), EmployeeId::new("e-7"), period, at(1))
}

#[test]
fn monthly_sheet_totals_every_line() {
    let replies = work_type("wt-reply", "Ticket reply", dec!(250));
    let escalations = work_type("wt-esc", "Escalation", dec!(500));

    let mut sheet = may_sheet();
    sheet.add_item(&replies, dec!(10), at(10)).unwrap();
    sheet.add_item(&escalations, dec!(8), at(20)).unwrap();

    assert_eq!(sheet.items().len(), 2);
    assert_eq!(sheet.total_amount(), dec!(6500));
    let sum: rust_decimal::Decimal = sheet.items().iter().map(|i| i.total()).sum();
    assert_eq!(sum, sheet.total_amount());
}

#[test]
fn repricing_a_work_type_leaves_existing_lines_alone() {
    let mut replies = work_type("wt-reply", "Ticket reply", dec!(250));
    let mut sheet = may_sheet();
    sheet.add_item(&replies, dec!(10), at(10)).unwrap();

    replies.reprice(dec!(300), at(15)).unwrap();
    assert_eq!(sheet.items()[0].price_per_unit(), dec!(250));
    assert_eq!(sheet.total_amount(), dec!(2500));

    sheet.add_item(&replies, dec!(1), at(16)).unwrap();
    assert_eq!(sheet.items()[1].price_per_unit(), dec!(300));
    assert_eq!(sheet.total_amount(), dec!(2800));
}

#[test]
fn full_lifecycle_then_frozen() {
    let mut sheet = may_sheet();
    sheet.add_item(&work_type("wt-reply", "Ticket reply", dec!(100)), dec!(3), at(2)).unwrap();

    sheet.transition_status(PayrollStatus::Approved, at(31)).unwrap();
    sheet.transition_status(PayrollStatus::Paid, at(31) + Duration::hours(2)).unwrap();

    let err = sheet.transition_status(PayrollStatus::Draft, at(31)).unwrap_err();
    assert!(matches!(err, HelpdeskError::InvalidTransition { ref from, ref to } if from == "paid" && to == "draft"));

    let item_id = sheet.items()[0].id().clone();
    assert!(matches!(sheet.remove_item(&item_id, at(31)), Err(HelpdeskError::Validation(_))));
    assert_eq!(sheet.total_amount(), dec!(300));
}

#[test]
fn draft_cannot_skip_approval() {
    let mut sheet = may_sheet();
    let err = sheet.transition_status(PayrollStatus::Paid, at(3)).unwrap_err();
    assert_eq!(err, HelpdeskError::invalid_transition("draft", "paid"));
    assert_eq!(sheet.status(), PayrollStatus::Draft);
}

#[test]
fn sheet_survives_json_round_trip() {
    let mut sheet = may_sheet().with_comment("May support shifts");
    sheet.add_item(&work_type("wt-reply", "Ticket reply", dec!(12.50)), dec!(4), at(4)).unwrap();

    let json = serde_json::to_string(&sheet).unwrap();
    let parsed: PayrollSheet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, sheet);
    assert_eq!(parsed.total_amount(), dec!(50));
}
