//! In-memory integration tests for paged task listings.

use super::helpers::{ALICE, BOB, TestService, create_task, requester, service};
use eyre::ensure;
use rstest::rstest;
use tasktrack::task::{
    domain::TaskStatus,
    services::{ListTasksRequest, TaskErrorKind, UpdateTaskRequest},
};

#[rstest]
#[case(1, 20, true)]
#[case(2, 20, true)]
#[case(3, 5, false)]
#[tokio::test(flavor = "multi_thread")]
async fn pages_cover_every_task_once(
    service: TestService,
    #[case] page: u32,
    #[case] expected_len: usize,
    #[case] expected_next: bool,
) -> eyre::Result<()> {
    let alice = requester(ALICE);
    for index in 1..=45 {
        create_task(&service, &alice, &format!("Task {index}")).await?;
    }

    let listing = service
        .list(&alice, ListTasksRequest::new(page).with_limit(20))
        .await?;

    ensure!(listing.items.len() == expected_len);
    ensure!(listing.has_next == expected_next);
    ensure!(listing.total == 45);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_enriches_every_owner(service: TestService) -> eyre::Result<()> {
    let alice = requester(ALICE);
    let bob = requester(BOB);
    create_task(&service, &alice, "From Alice").await?;
    create_task(&service, &bob, "From Bob").await?;

    let listing = service.list(&alice, ListTasksRequest::new(1)).await?;

    let names: Vec<_> = listing
        .items
        .iter()
        .filter_map(|item| item.user.as_ref().map(|user| user.first_name.as_str()))
        .collect();
    ensure!(names == ["Bob", "Alice"], "unexpected owners {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_and_status_filters_combine(service: TestService) -> eyre::Result<()> {
    let alice = requester(ALICE);
    let bob = requester(BOB);
    let done = create_task(&service, &alice, "Done by Alice").await?;
    create_task(&service, &alice, "Doing by Alice").await?;
    let bob_done = create_task(&service, &bob, "Done by Bob").await?;
    for (who, id) in [(&alice, done), (&bob, bob_done)] {
        service
            .update(who, UpdateTaskRequest::new(id).with_status("done"))
            .await?;
    }

    let request = ListTasksRequest::new(1)
        .with_user_id(alice.user_id().to_string())
        .with_status("done");
    let listing = service.list(&bob, request).await?;

    ensure!(listing.total == 1);
    ensure!(listing.items[0].title == "Done by Alice");
    ensure!(listing.items[0].status == TaskStatus::Done);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_identifier_is_not_an_owner_filter(service: TestService) -> eyre::Result<()> {
    let alice = requester(ALICE);
    let task_id = create_task(&service, &alice, "Mistaken filter").await?;

    let result = service
        .list(&alice, ListTasksRequest::new(1).with_user_id(task_id))
        .await;

    ensure!(
        matches!(&result, Err(err) if err.kind() == TaskErrorKind::InvalidIdentifier),
        "expected invalid identifier, got {result:?}"
    );
    Ok(())
}
