//! End-to-end tests against a real listener.

use std::time::{Duration, Instant};

use overload_mock::health::ServiceState;
use reqwest::StatusCode;

mod common;

async fn wait_until_ready(mock: &common::RunningMock) {
    for _ in 0..50 {
        if mock.service.is_ready() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("mock never became ready");
}

#[tokio::test]
async fn readiness_scenario() {
    let mock = common::start_mock(1).await;
    wait_until_ready(&mock).await;
    let client = common::client();

    let res = client.get(mock.url("/ready")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().starts_with("OK FROM"));

    let res = client.post(mock.url("/fakeerrormodeon")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "OK FROM 127.0.0.1");

    let res = client.get(mock.url("/ready")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(res.text().await.unwrap().starts_with("BUSY FROM"));

    let res = client.post(mock.url("/fakeerrormodeoff")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(mock.url("/ready")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn alive_stays_up_while_overloaded() {
    let mock = common::start_mock(1).await;
    let client = common::client();

    client.post(mock.url("/fakeerrormodeon")).send().await.unwrap();

    let res = client.get(mock.url("/alive")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn work_is_fast_when_normal() {
    let mock = common::start_mock(1).await;
    let client = common::client();

    client.post(mock.url("/fakeerrormodeoff")).send().await.unwrap();

    let started = Instant::now();
    let res = client.get(mock.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().starts_with("SOMERESPONSE FROM"));
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn overloaded_work_is_delayed_without_blocking_others() {
    let mock = common::start_mock(2).await;
    let client = common::client();

    client.post(mock.url("/fakeerrormodeon")).send().await.unwrap();

    let started = Instant::now();
    let slow = tokio::spawn({
        let client = client.clone();
        let url = mock.url("/");
        async move {
            let res = client.get(url).send().await.unwrap();
            (res.status(), res.text().await.unwrap())
        }
    });

    tokio::time::sleep(Duration::from_millis(200)).await;

    let probe_started = Instant::now();
    let res = client.get(mock.url("/alive")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(probe_started.elapsed() < Duration::from_secs(1));
    assert!(!slow.is_finished());

    // Recovery does not rescue a request already held.
    client.post(mock.url("/fakeerrormodeoff")).send().await.unwrap();

    let (status, body) = slow.await.unwrap();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.starts_with("ERROR FROM"));
    assert!(started.elapsed() >= Duration::from_secs(2));
}

#[tokio::test]
async fn instances_are_isolated() {
    let a = common::start_mock(1).await;
    let b = common::start_mock(1).await;
    wait_until_ready(&a).await;
    wait_until_ready(&b).await;
    let client = common::client();

    client.post(a.url("/fakeerrormodeon")).send().await.unwrap();

    assert!(a.service.is_overloaded());
    assert!(!b.service.is_overloaded());
    let res = client.get(b.url("/ready")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn fresh_state_is_not_ready() {
    let service = ServiceState::new();
    assert!(!service.is_ready());
}

#[tokio::test]
async fn unknown_route_is_rejected() {
    let mock = common::start_mock(1).await;
    let res = common::client().get(mock.url("/missing")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
