//! Resume cursor on reconnect
//!
//! After a dropped connection the stream is re-requested with the same
//! query parameters. `resume = latest` re-supplies the id of the last
//! decoded event; `resume = initial` keeps the configured `after` value.

use sessionfeed_runtime::{
    ConnectionState, ResumePolicy, StreamConnection, StreamRequest, StreamUpdate, TransportError,
};
use sessionfeed_testing::fixtures::{output, session_frame, status};
use sessionfeed_testing::{ChannelSource, Connection, ScriptedSource};
use sessionfeed_types::Cursor;
use std::sync::Arc;
use std::time::Duration;

fn request(resume: ResumePolicy, initial: Option<&str>) -> StreamRequest {
    let mut request = StreamRequest::new(
        "http://localhost:4000/sessions/7/events?token=t1"
            .parse()
            .unwrap(),
    );
    request.capacity = 50;
    request.initial_cursor = initial.map(Cursor::from);
    request.resume = resume;
    request.retry = Duration::from_millis(10);
    request
}

fn dropping_source() -> Arc<ScriptedSource> {
    Arc::new(ScriptedSource::new([
        Connection::Frames(vec![
            Ok(session_frame(&status("ev-1", "running", ""))),
            Ok(session_frame(&output("ev-2", "line", "stdout"))),
        ]),
        Connection::Hold(Vec::new()),
    ]))
}

async fn collect(connection: &mut StreamConnection, count: usize) -> Vec<StreamUpdate> {
    let mut updates = Vec::new();
    for _ in 0..count {
        let update = tokio::time::timeout(Duration::from_secs(5), connection.next())
            .await
            .expect("update within timeout")
            .expect("connection open");
        updates.push(update);
    }
    updates
}

fn states(updates: &[StreamUpdate]) -> Vec<ConnectionState> {
    updates
        .iter()
        .filter_map(|update| match update {
            StreamUpdate::State(state) => Some(*state),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_latest_policy_resumes_after_last_decoded_event() {
    let source = dropping_source();
    let mut connection = StreamConnection::open(
        source.clone(),
        request(ResumePolicy::Latest, Some("ev-0")),
    );
    assert_eq!(connection.state(), ConnectionState::Connecting);

    let updates = collect(&mut connection, 5).await;
    assert_eq!(
        states(&updates),
        vec![
            ConnectionState::Live,
            ConnectionState::Reconnecting,
            ConnectionState::Live
        ]
    );
    assert_eq!(connection.cursor(), Some(&Cursor::from("ev-2")));

    assert_eq!(
        source.after_params(),
        vec![Some("ev-0".to_string()), Some("ev-2".to_string())]
    );

    let requests = source.requests();
    assert_eq!(requests[0].last_event_id, None);
    assert_eq!(requests[1].last_event_id.as_deref(), Some("ev-2"));

    // Unrelated query parameters survive every reconnect
    for request in &requests {
        let query = request.url.query().unwrap_or_default();
        assert!(query.starts_with("token=t1&follow=true&limit=50"), "{query}");
    }

    connection.close();
    assert!(connection.next().await.is_none());
}

#[tokio::test]
async fn test_initial_policy_repeats_initial_cursor() {
    let source = dropping_source();
    let mut connection = StreamConnection::open(
        source.clone(),
        request(ResumePolicy::Initial, Some("ev-0")),
    );

    collect(&mut connection, 5).await;

    assert_eq!(
        source.after_params(),
        vec![Some("ev-0".to_string()), Some("ev-0".to_string())]
    );
}

#[tokio::test]
async fn test_without_initial_cursor_first_request_has_no_after() {
    let source = dropping_source();
    let mut connection = StreamConnection::open(source.clone(), request(ResumePolicy::Latest, None));

    collect(&mut connection, 5).await;

    assert_eq!(
        source.after_params(),
        vec![None, Some("ev-2".to_string())]
    );
}

#[tokio::test]
async fn test_close_is_terminal() {
    let source = dropping_source();
    let mut connection = StreamConnection::open(source, request(ResumePolicy::Latest, None));

    connection.close();
    connection.close();

    assert!(connection.is_closed());
    assert_eq!(connection.state(), ConnectionState::Closed);
    assert!(connection.next().await.is_none());
}

#[tokio::test]
async fn test_close_releases_transport_before_returning() {
    let source = Arc::new(ChannelSource::new());
    let mut connection = StreamConnection::open(source.clone(), request(ResumePolicy::Latest, None));

    let updates = collect(&mut connection, 1).await;
    assert_eq!(states(&updates), vec![ConnectionState::Live]);
    assert!(source.is_listening());

    connection.close();
    assert!(!source.is_listening());
}

#[tokio::test]
async fn test_close_while_waiting_to_reconnect() {
    let source = Arc::new(ChannelSource::new());
    let mut request = request(ResumePolicy::Latest, None);
    request.retry = Duration::from_secs(60);
    let mut connection = StreamConnection::open(source.clone(), request);

    collect(&mut connection, 1).await;
    assert!(source.fail(TransportError::Read("reset".to_string())));
    let updates = collect(&mut connection, 1).await;
    assert_eq!(states(&updates), vec![ConnectionState::Reconnecting]);

    connection.close();
    assert!(connection.next().await.is_none());
    assert_eq!(source.connection_count(), 1);
}
