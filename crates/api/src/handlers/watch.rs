use crate::{dto::WatchQuery, errors::ApiError, state::AppState};
use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use futures::Stream;
use soawatch_domain::WatchEvent;
use soawatch_jobs::SoaWatchJob;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::DropGuard;
use tracing::{debug, info, instrument};

const EVENT_BUFFER: usize = 16;

/// `GET /watch?domain=<name>`
///
/// Fetches the baseline SOA before committing to a response, so input and
/// initial resolver failures still get a proper status code. After that the
/// response is a never-ending text stream with one line per change; a later
/// fetch failure can only be reported as a final line.
#[instrument(skip_all, name = "api_watch_soa")]
pub async fn watch_soa(
    State(state): State<AppState>,
    Query(params): Query<WatchQuery>,
) -> Result<Response, ApiError> {
    let domain = params.domain()?;
    let permit = state.sessions.try_acquire()?;

    let baseline = state.fetch_soa.execute(&domain).await?;

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let session_token = state.shutdown.child_token();
    let job = SoaWatchJob::new(Arc::clone(&state.check_soa), domain.clone(), baseline, tx)
        .with_interval(state.watch_interval_secs)
        .with_cancellation(session_token.clone());

    tokio::spawn(async move {
        let exit = job.run().await;
        debug!(?exit, "Watch session ended");
        drop(permit);
    });

    info!(
        domain = %domain,
        active_sessions = state.sessions.active_sessions(),
        "Watch session started"
    );

    let body = Body::from_stream(notification_stream(rx, session_token.drop_guard()));

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

/// Renders session events as text lines, ending after a terminal event.
/// Dropping the stream (client disconnect) drops `guard`, which cancels the
/// session.
fn notification_stream(
    rx: mpsc::Receiver<WatchEvent>,
    guard: DropGuard,
) -> impl Stream<Item = Result<Bytes, Infallible>> + Send + 'static {
    futures::stream::unfold(Some((rx, guard)), |state| async move {
        let (mut rx, guard) = state?;
        let event = rx.recv().await?;
        let line = Bytes::from(format!("{}\n", event));
        let next = (!event.is_terminal()).then_some((rx, guard));
        Some((Ok(line), next))
    })
}
