use pretty_assertions::assert_eq;
use session::{StatAggregator, StatQueryState};
use shared_types::StatFetchError;

use crate::common::{immediate, ScriptedTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Widget {
    Households,
    PendingPayments,
    Residents,
}

#[tokio::test]
async fn every_widget_starts_loading() {
    let transport = ScriptedTransport::new();
    let stats = StatAggregator::builder()
        .track(Widget::Households, transport.fetcher())
        .track(Widget::PendingPayments, transport.fetcher())
        .track(Widget::Residents, transport.fetcher())
        .build();

    assert_eq!(
        stats.states(),
        vec![
            (Widget::Households, StatQueryState::loading()),
            (Widget::PendingPayments, StatQueryState::loading()),
            (Widget::Residents, StatQueryState::loading()),
        ]
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn one_failing_widget_leaves_the_others_intact() {
    let households = ScriptedTransport::new();
    let payments = ScriptedTransport::new();
    let residents = ScriptedTransport::new();
    let stats = StatAggregator::builder()
        .track(Widget::Households, households.fetcher())
        .track(Widget::PendingPayments, payments.fetcher())
        .track(Widget::Residents, residents.fetcher())
        .build();

    let h = households.expect_call();
    let p = payments.expect_call();
    let r = residents.expect_call();
    let settled = stats.refetch_all();

    // Resolve out of order; the failure lands between two successes.
    r.send(Ok(311)).unwrap();
    p.send(Err("permission denied for table payments".to_string())).unwrap();
    h.send(Ok(120)).unwrap();
    settled.await;

    assert_eq!(
        stats.states(),
        vec![
            (Widget::Households, StatQueryState::succeeded(120)),
            (
                Widget::PendingPayments,
                StatQueryState::failed(StatFetchError::new(
                    "permission denied for table payments"
                ))
            ),
            (Widget::Residents, StatQueryState::succeeded(311)),
        ]
    );
}

#[tokio::test]
async fn refetch_does_not_wait_for_stragglers() {
    let slow = ScriptedTransport::new();
    let stats = StatAggregator::builder()
        .track(Widget::Households, slow.fetcher())
        .track(Widget::Residents, immediate(Ok(9)))
        .build();

    let straggler = slow.expect_call();
    let first = stats.refetch_all();

    let fresh = slow.expect_call();
    let second = stats.refetch_all();
    fresh.send(Ok(2)).unwrap();
    second.await;

    assert_eq!(stats.state(Widget::Households), Some(StatQueryState::succeeded(2)));
    assert_eq!(stats.state(Widget::Residents), Some(StatQueryState::succeeded(9)));

    // The first round's late answer is ignored.
    straggler.send(Ok(1)).unwrap();
    first.await;
    assert_eq!(stats.state(Widget::Households), Some(StatQueryState::succeeded(2)));
    assert_eq!(slow.calls(), 2);
}

#[tokio::test]
async fn retry_reissues_only_the_failed_widget() {
    let payments = ScriptedTransport::new();
    let households = ScriptedTransport::new();
    let stats = StatAggregator::builder()
        .track(Widget::Households, households.fetcher())
        .track(Widget::PendingPayments, payments.fetcher())
        .build();

    households.expect_call().send(Ok(40)).unwrap();
    payments.expect_call().send(Err("timeout".to_string())).unwrap();
    stats.refetch_all().await;
    assert!(stats.state(Widget::PendingPayments).unwrap().error.is_some());

    let reply = payments.expect_call();
    let retry = stats.retry(Widget::PendingPayments).unwrap();
    assert_eq!(
        stats.state(Widget::PendingPayments),
        Some(StatQueryState::loading())
    );
    assert_eq!(stats.state(Widget::Households), Some(StatQueryState::succeeded(40)));

    reply.send(Ok(6)).unwrap();
    retry.await;

    assert_eq!(
        stats.state(Widget::PendingPayments),
        Some(StatQueryState::succeeded(6))
    );
    assert_eq!(stats.state(Widget::Households), Some(StatQueryState::succeeded(40)));
    assert_eq!(households.calls(), 1);
    assert_eq!(payments.calls(), 2);
}
