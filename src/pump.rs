//! The buffered pump: serves names one at a time, refilling in batches.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{NameError, Result};
use crate::http::NameSource;
use crate::types::BATCH_SIZE;

/// Split a raw batch body into its values.
///
/// At most one trailing newline is stripped before splitting, so a body that
/// ends with a final `\n` does not grow a phantom empty value. Interior blank
/// lines survive as legitimate empty values.
fn parse_batch(body: &str) -> Vec<String> {
    let body = body.strip_suffix('\n').unwrap_or(body);
    if body.is_empty() {
        return Vec::new();
    }
    body.split('\n').map(str::to_owned).collect()
}

/// Pumps out random names one by one, pulling them from the name service in
/// batches to amortize the network round trip.
///
/// All calls on one pump are serialized through a single async mutex, held
/// across the refill fetch. A refill therefore blocks other callers of the
/// same pump, but refills happen once per [`BATCH_SIZE`] pops, so the added
/// latency is rare. Pumps for different kinds share nothing and never block
/// each other.
pub struct Pump<S> {
    source: Arc<S>,
    url: String,
    pending: Mutex<VecDeque<String>>,
}

impl<S: NameSource> Pump<S> {
    /// Create a pump that retrieves names from the name service at `url`.
    pub fn new(source: Arc<S>, url: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
            pending: Mutex::new(VecDeque::with_capacity(BATCH_SIZE)),
        }
    }

    /// Return the next name.
    ///
    /// Serves from the local buffer, fetching a fresh batch from the name
    /// service when the buffer is empty. Concurrent callers each receive a
    /// distinct value. An empty string is a valid result, not an error.
    ///
    /// # Errors
    /// Propagates fetch failures and the empty-batch condition unchanged.
    /// After a failure the buffer stays empty, so the next call retries a
    /// fresh fetch.
    pub async fn next(&self) -> Result<String> {
        let mut pending = self.pending.lock().await;

        if let Some(name) = pending.pop_front() {
            return Ok(name);
        }

        self.refill(&mut pending).await?;

        // refill errors rather than returning with an empty queue
        pending
            .pop_front()
            .ok_or_else(|| NameError::EmptyBatch {
                url: self.url.clone(),
            })
    }

    /// Fetch a batch and move it into `pending`. The pump mutex must already
    /// be held; the queue is empty on entry.
    async fn refill(&self, pending: &mut VecDeque<String>) -> Result<()> {
        let body = self.source.fetch(&self.url).await?;
        let batch = parse_batch(&body);

        if batch.is_empty() {
            tracing::warn!(url = %self.url, "name service returned an empty batch");
            return Err(NameError::EmptyBatch {
                url: self.url.clone(),
            });
        }

        tracing::debug!(url = %self.url, count = batch.len(), "buffered new name batch");
        pending.extend(batch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockNameSource;

    const URL: &str = "http://names.test/name";

    fn pump_with(responses: Vec<Result<String>>) -> (Arc<MockNameSource>, Pump<MockNameSource>) {
        let source = Arc::new(MockNameSource::new());
        for response in responses {
            source.add_response(URL, response);
        }
        let pump = Pump::new(source.clone(), URL);
        (source, pump)
    }

    #[test]
    fn parse_strips_one_trailing_newline() {
        assert_eq!(parse_batch("alice\nbob\ncarol\n"), ["alice", "bob", "carol"]);
        assert_eq!(parse_batch("alice\nbob"), ["alice", "bob"]);
    }

    #[test]
    fn parse_keeps_interior_blank_lines() {
        assert_eq!(parse_batch("alice\n\nbob\n"), ["alice", "", "bob"]);
        // Two blank lines: one trailing newline is stripped, the rest split.
        assert_eq!(parse_batch("\n\n"), ["", ""]);
    }

    #[test]
    fn parse_empty_body_yields_nothing() {
        assert!(parse_batch("").is_empty());
        assert!(parse_batch("\n").is_empty());
    }

    #[tokio::test]
    async fn serves_batch_in_order_then_refetches() {
        let (source, pump) = pump_with(vec![
            Ok("alice\nbob\ncarol\n".to_string()),
            Ok("dave\n".to_string()),
        ]);

        assert_eq!(pump.next().await.unwrap(), "alice");
        assert_eq!(pump.next().await.unwrap(), "bob");
        assert_eq!(pump.next().await.unwrap(), "carol");
        assert_eq!(source.call_count(), 1);

        // Fourth call exhausts the batch and triggers a second fetch.
        assert_eq!(pump.next().await.unwrap(), "dave");
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn empty_strings_are_valid_names() {
        let (_, pump) = pump_with(vec![Ok("alice\n\nbob\n".to_string())]);

        assert_eq!(pump.next().await.unwrap(), "alice");
        assert_eq!(pump.next().await.unwrap(), "");
        assert_eq!(pump.next().await.unwrap(), "bob");
    }

    #[tokio::test]
    async fn empty_body_fails_and_next_call_retries() {
        let (source, pump) = pump_with(vec![
            Ok(String::new()),
            Ok("alice\n".to_string()),
        ]);

        let err = pump.next().await.unwrap_err();
        assert!(matches!(err, NameError::EmptyBatch { ref url } if url == URL));

        // The failed refill left nothing cached; the next call refetches.
        assert_eq!(pump.next().await.unwrap(), "alice");
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn fetch_failure_propagates_and_next_call_retries() {
        let (source, pump) = pump_with(vec![
            Err(NameError::Internal("connection reset".to_string())),
            Ok("alice\n".to_string()),
        ]);

        assert!(pump.next().await.is_err());
        assert_eq!(pump.next().await.unwrap(), "alice");
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_see_every_name_exactly_once() {
        let batch_a: Vec<String> = (0..10).map(|i| format!("a{i}")).collect();
        let batch_b: Vec<String> = (0..10).map(|i| format!("b{i}")).collect();
        let (source, pump) = pump_with(vec![
            Ok(batch_a.join("\n")),
            Ok(batch_b.join("\n")),
        ]);
        let pump = Arc::new(pump);

        // 4 tasks x 5 calls drain both batches exactly.
        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let pump = pump.clone();
                tokio::spawn(async move {
                    let mut got = Vec::new();
                    for _ in 0..5 {
                        got.push(pump.next().await.unwrap());
                    }
                    got
                })
            })
            .collect();

        let mut served: Vec<String> = Vec::new();
        for task in futures::future::join_all(tasks).await {
            served.extend(task.unwrap());
        }

        let mut expected: Vec<String> = batch_a.into_iter().chain(batch_b).collect();
        expected.sort();
        served.sort();
        assert_eq!(served, expected);
        assert_eq!(source.call_count(), 2);
    }
}
