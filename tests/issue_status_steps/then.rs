//! Then steps for issue status update BDD scenarios.

use super::world::IssueStatusWorld;
use rstest_bdd_macros::then;

#[then(r#"the issue status is "{status}""#)]
fn issue_status_is(world: &IssueStatusWorld, status: String) -> Result<(), eyre::Report> {
    let record = world.updated_record()?;
    if record.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            record.status()
        ));
    }
    Ok(())
}

#[then("the issue history has {count:usize} entries")]
fn history_has_entries(world: &IssueStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.updated_record()?.status_history().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} history entries, found {actual}"));
    }
    Ok(())
}

#[then("the issue has {count:usize} comments")]
fn issue_has_comments(world: &IssueStatusWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.updated_record()?.comments().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} comments, found {actual}"));
    }
    Ok(())
}

#[then(r#"the issue is assigned to "{assignee}""#)]
fn issue_assigned_to(world: &IssueStatusWorld, assignee: String) -> Result<(), eyre::Report> {
    let record = world.updated_record()?;
    if record.assigned_to() != Some(assignee.as_str()) {
        return Err(eyre::eyre!(
            "expected assignee {assignee}, found {:?}",
            record.assigned_to()
        ));
    }
    Ok(())
}

#[then(r#"the reporter was told the issue is now "{phrase}""#)]
fn reporter_was_told(world: &IssueStatusWorld, phrase: String) -> Result<(), eyre::Report> {
    let record = world.updated_record()?;
    let reporter = record
        .email()
        .ok_or_else(|| eyre::eyre!("reported issue has no contact email"))?;
    let expected = format!("is now {phrase}");
    let told = world
        .notifier
        .delivered()
        .iter()
        .any(|message| message.to == reporter && message.subject.ends_with(&expected));
    if !told {
        return Err(eyre::eyre!(
            "no update email to {reporter} ending with {expected:?}"
        ));
    }
    Ok(())
}

#[then("the update fails because the issue was not found")]
fn update_fails_not_found(world: &IssueStatusWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Err(err)) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected a not-found failure, got {other:?}")),
    }
}

#[then("no email was delivered")]
fn no_email_delivered(world: &IssueStatusWorld) -> Result<(), eyre::Report> {
    let delivered = world.notifier.delivered().len();
    if delivered != 0 {
        return Err(eyre::eyre!("expected no delivered email, found {delivered}"));
    }
    if world.notifier.attempts() == 0 {
        return Err(eyre::eyre!("expected delivery attempts against the provider"));
    }
    Ok(())
}
