//! Branches screen.

mod common;

use common::{gated_provider, status_failure, wait_idle, wait_until, TIMEOUT};
use hubview::model::{Branch, Repository};
use hubview::presentation::{event_channel, Transform};
use hubview::screens::branches::{BranchCellViewModel, BranchesInput, BranchesViewModel};

#[tokio::test]
async fn test_branches_page_and_select() {
    let (provider, mut calls) = gated_provider();
    let view_model = BranchesViewModel::new(Repository::new("octocat/hello-world"), provider);

    let (header, header_refresh) = event_channel();
    let (footer, footer_refresh) = event_channel();
    let (selection, selection_stream) = event_channel::<BranchCellViewModel>();
    let mut output = view_model.transform(BranchesInput {
        header_refresh,
        footer_refresh,
        selection: selection_stream,
    });
    assert_eq!(*output.navigation_title.borrow(), "Branches");

    header.send(()).unwrap();
    let call = calls.next().await;
    assert_eq!(
        (call.query, call.key.as_str(), call.page),
        ("branches", "octocat/hello-world", 1)
    );
    call.respond_branches(&["main", "develop"]);
    wait_until(&mut output.items, |cells| cells.len() == 2).await;

    footer.send(()).unwrap();
    let call = calls.next().await;
    assert_eq!(call.page, 2);
    call.respond_branches(&["gh-pages"]);
    wait_until(&mut output.items, |cells| cells.len() == 3).await;

    let cells = output.items.borrow().clone();
    assert_eq!(cells[0].title, "main");
    assert_eq!(cells[0].detail.as_deref(), Some("main000"));
    assert_eq!(cells[2].title, "gh-pages");

    selection.send(cells[1].clone()).unwrap();
    let branch: Branch = tokio::time::timeout(TIMEOUT, output.branch_selected.recv())
        .await
        .expect("branch selected")
        .expect("stream open");
    assert_eq!(branch.name, "develop");
}

#[tokio::test]
async fn test_branches_failure_keeps_list() {
    let (provider, mut calls) = gated_provider();
    let view_model = BranchesViewModel::new(Repository::new("octocat/hello-world"), provider);
    let mut parsed = view_model.core().parsed_errors();

    let (header, header_refresh) = event_channel();
    let (_footer, footer_refresh) = event_channel();
    let (_selection, selection) = event_channel();
    let output = view_model.transform(BranchesInput {
        header_refresh,
        footer_refresh,
        selection,
    });

    header.send(()).unwrap();
    calls.next().await.fail(status_failure(404, "Not Found"));

    let error = tokio::time::timeout(TIMEOUT, parsed.recv())
        .await
        .expect("parsed error")
        .expect("channel open");
    assert_eq!(error.status, 404);
    assert_eq!(error.message, "Not Found");

    wait_idle(view_model.core().loading()).await;
    assert!(output.items.borrow().is_empty());
}
