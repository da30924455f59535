//! In-memory integration tests for reporting, listing and lookup.

use super::helpers::{ADMIN_EMAIL, TestContext, context, context_with, leak_report};
use campus_issues::issue::{
    adapters::memory::InMemoryNotifier,
    domain::{IssueId, IssuePriority, IssueStatus},
    services::ReportIssueRequest,
};
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reported_issues_have_unique_ids_and_one_open_entry(context: TestContext) {
    let mut ids = HashSet::new();
    for _ in 0..10 {
        let created = context
            .service
            .report(leak_report())
            .await
            .expect("report should succeed");
        assert_eq!(created.status_history().len(), 1);
        assert_eq!(created.status().as_str(), IssueStatus::OPEN);
        ids.insert(created.issue_id().clone());
    }
    assert_eq!(ids.len(), 10);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_orders_reports_newest_first(context: TestContext) {
    let mut created = Vec::new();
    for location in ["B1", "B2", "B3"] {
        let record = context
            .service
            .report(ReportIssueRequest::new("Leak", "Pipe", location))
            .await
            .expect("report should succeed");
        created.push(record);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let listed = context.service.list().await.expect("list should succeed");

    let locations: Vec<&str> = listed.iter().map(|record| record.location()).collect();
    assert_eq!(locations, vec!["B3", "B2", "B1"]);
    assert!(
        listed
            .windows(2)
            .all(|pair| matches!(pair, [newer, older] if newer.created_at() >= older.created_at()))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_returns_verbatim_record(context: TestContext) {
    let created = context
        .service
        .report(leak_report())
        .await
        .expect("report should succeed");

    let found = context
        .service
        .find(created.issue_id())
        .await
        .expect("lookup should succeed");

    assert_eq!(found.as_ref(), Some(&created));
    assert_eq!(
        found.map(|record| record.priority()),
        Some(IssuePriority::High)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_of_unknown_id_returns_none(context: TestContext) {
    let found = context
        .service
        .find(&IssueId::from_raw("00000000-0000-0000-0000-000000000000"))
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn report_succeeds_when_email_provider_is_down() {
    let context = context_with(InMemoryNotifier::failing("provider unreachable"));

    let created = context
        .service
        .report(leak_report())
        .await
        .expect("report should succeed");

    assert_eq!(created.priority(), IssuePriority::High);
    assert_eq!(context.notifier.attempts(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn administrator_receives_copy_of_every_report(context: TestContext) {
    context
        .service
        .report(leak_report())
        .await
        .expect("report should succeed");
    context
        .service
        .report(ReportIssueRequest::new("Lift", "Stuck on floor 3", "Admin block"))
        .await
        .expect("report should succeed");

    let admin_copies = context
        .notifier
        .delivered()
        .into_iter()
        .filter(|message| message.to == ADMIN_EMAIL)
        .count();
    assert_eq!(admin_copies, 2);
}
