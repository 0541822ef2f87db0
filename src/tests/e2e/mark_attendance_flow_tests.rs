use crate::modules::labour_entries::adapters::outbound::entry_store::EntryStore;
use crate::modules::labour_entries::core::entry::{EntryRef, Overtime};
use crate::modules::labour_entries::core::status::AttendanceStatus;
use crate::modules::labour_entries::use_cases::mark_attendance::command::{
    MarkAttendance, OvertimeInput,
};
use crate::modules::labour_entries::use_cases::mark_attendance::handler::MarkAttendanceHandler;
use crate::modules::labour_entries::use_cases::register_labour::handler::RegisterLabourHandler;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use crate::tests::fixtures::commands::register_labour::RegisterLabourBuilder;
use crate::tests::fixtures::entries::labour_entry::USER_ID;
use chrono::NaiveDate;
use std::sync::Arc;

#[tokio::test]
async fn toggles_ravi_through_present_overtime_and_absent() {
    let identity = Arc::new(InMemoryIdentityProvider::signed_in(USER_ID));
    let entries = Arc::new(EntryStore::new(
        Arc::new(InMemoryDocumentStore::new()),
        identity,
    ));
    let register = RegisterLabourHandler::new(entries.clone());
    let mark = MarkAttendanceHandler::new(entries.clone());
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let ravi = register
        .handle(RegisterLabourBuilder::new().labour_name("Ravi").build())
        .await
        .unwrap();
    assert_eq!(ravi.status, None);

    let press = |action, overtime| MarkAttendance {
        entry: EntryRef::Name("Ravi".into()),
        date: today,
        action,
        overtime,
    };

    let after = mark
        .handle(press(AttendanceStatus::Present, OvertimeInput::default()), today)
        .await
        .unwrap();
    assert_eq!(after.status, Some(AttendanceStatus::Present));

    let after = mark
        .handle(press(AttendanceStatus::Present, OvertimeInput::default()), today)
        .await
        .unwrap();
    assert_eq!(after.status, None);
    assert!(after.attendance.is_empty());

    let after = mark
        .handle(
            press(AttendanceStatus::Overtime, OvertimeInput::new(3.0, 100.0)),
            today,
        )
        .await
        .unwrap();
    assert_eq!(after.status, Some(AttendanceStatus::Overtime));
    assert_eq!(after.attendance.len(), 1);
    assert_eq!(
        after.attendance[0].overtime,
        Some(Overtime {
            hours: 3.0,
            rate: 100.0
        })
    );

    let after = mark
        .handle(press(AttendanceStatus::Absent, OvertimeInput::default()), today)
        .await
        .unwrap();
    assert_eq!(after.status, Some(AttendanceStatus::Absent));
    assert_eq!(after.attendance.len(), 1);
    assert_eq!(after.attendance[0].date, today);
    assert_eq!(after.attendance[0].overtime, None);

    let stored = entries.fetch(&ravi.id).await.unwrap();
    assert_eq!(stored, after);
    assert_eq!(entries.list().await, vec![after]);
}

#[tokio::test]
async fn keeps_the_store_untouched_when_overtime_is_rejected() {
    let identity = Arc::new(InMemoryIdentityProvider::signed_in(USER_ID));
    let entries = Arc::new(EntryStore::new(
        Arc::new(InMemoryDocumentStore::new()),
        identity,
    ));
    let register = RegisterLabourHandler::new(entries.clone());
    let mark = MarkAttendanceHandler::new(entries.clone());
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let ravi = register
        .handle(RegisterLabourBuilder::new().build())
        .await
        .unwrap();

    let result = mark
        .handle(
            MarkAttendance {
                entry: EntryRef::Id(ravi.id.clone()),
                date: today,
                action: AttendanceStatus::Overtime,
                overtime: OvertimeInput::parse(Some("3"), Some("0")),
            },
            today,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entries.fetch(&ravi.id).await, Some(ravi));
}
