mod common;

use axum::http::StatusCode;
use common::{closed_port_url, Collector};
use linklet::telemetry::{Level, ReportOutcome, TelemetryReporter};

fn reporter(url: &str) -> TelemetryReporter {
    TelemetryReporter::new(url, "linklet-tests/0.1", "http://localhost:3000/").unwrap()
}

#[tokio::test]
async fn test_report_posts_json_event() {
    let collector = Collector::start(StatusCode::OK).await;

    let outcome = reporter(&collector.url)
        .report("frontend", Level::Info, "handler", "URL shortened")
        .expect("inside a runtime")
        .await
        .unwrap();
    assert_eq!(outcome, ReportOutcome::Delivered { status: 200 });

    let got = collector.received();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].content_type.as_deref(), Some("application/json"));

    let body = &got[0].body;
    assert_eq!(body["stack"], "frontend");
    assert_eq!(body["level"], "info");
    assert_eq!(body["package"], "handler");
    assert_eq!(body["message"], "URL shortened");
    assert_eq!(body["userAgent"], "linklet-tests/0.1");
    assert_eq!(body["url"], "http://localhost:3000/");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_non_2xx_is_rejected_not_raised() {
    let collector = Collector::start(StatusCode::INTERNAL_SERVER_ERROR).await;

    let outcome = reporter(&collector.url)
        .report("backend", Level::Error, "db", "boom")
        .expect("inside a runtime")
        .await
        .unwrap();

    assert_eq!(outcome, ReportOutcome::Rejected { status: 500 });
    assert_eq!(collector.received().len(), 1);
}

#[tokio::test]
async fn test_unreachable_collector_is_a_failed_outcome() {
    let url = closed_port_url().await;
    let rep = reporter(&url);

    let outcome = rep
        .send(rep.event("frontend", Level::Warn, "handler", "nobody home"))
        .await;

    assert!(matches!(outcome, ReportOutcome::Failed { .. }));
    assert!(!outcome.is_delivered());
}

#[tokio::test]
async fn test_reports_are_independent() {
    let collector = Collector::start(StatusCode::CREATED).await;
    let rep = reporter(&collector.url);

    let handles: Vec<_> = (0..5)
        .map(|i| rep.report("frontend", Level::Debug, "handler", &format!("event {i}")))
        .collect::<Option<_>>()
        .expect("inside a runtime");
    for handle in handles {
        assert!(handle.await.unwrap().is_delivered());
    }

    let mut messages: Vec<String> = collector
        .received()
        .into_iter()
        .map(|r| r.body["message"].as_str().unwrap().to_owned())
        .collect();
    messages.sort();
    assert_eq!(messages, ["event 0", "event 1", "event 2", "event 3", "event 4"]);
}
