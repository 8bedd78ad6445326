//! Batch executor: bounded concurrent fan-out with order-preserving merge.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use super::types::{RawRecord, RecordOutcome};
use crate::recognizer::Recognizer;
use crate::{MentioError, Result};

/// Configuration for batch execution
#[derive(Debug, Clone)]
pub struct BatchExecutorConfig {
    /// Maximum number of records allowed in a single batch
    pub max_batch_size: usize,
    /// Maximum number of documents processed concurrently within one batch
    pub max_concurrency: usize,
}

impl Default for BatchExecutorConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 1000,
            max_concurrency: 8,
        }
    }
}

/// Executor for batch extraction requests.
///
/// Holds the shared recognizer; documents within a batch are independent, so
/// they are fanned out across a bounded number of concurrent tasks and the
/// outcomes re-sorted by original index before returning.
#[derive(Debug)]
pub struct BatchExecutor {
    recognizer: Arc<dyn Recognizer>,
    config: BatchExecutorConfig,
}

impl BatchExecutor {
    /// Create a new batch executor.
    pub fn new(recognizer: Arc<dyn Recognizer>, config: BatchExecutorConfig) -> Self {
        Self { recognizer, config }
    }

    /// The recognizer backing this executor.
    pub fn recognizer(&self) -> &Arc<dyn Recognizer> {
        &self.recognizer
    }

    /// Process a batch of records.
    ///
    /// Returns one outcome per input record, in input order. Per-record
    /// failures are captured in their slot; the only batch-level error is a
    /// batch exceeding the configured maximum size, rejected before any
    /// document is processed.
    pub async fn execute(&self, records: Vec<RawRecord>) -> Result<Vec<RecordOutcome>> {
        if records.len() > self.config.max_batch_size {
            return Err(MentioError::BatchTooLarge {
                submitted: records.len(),
                max_size: self.config.max_batch_size,
            });
        }

        debug!(
            records = records.len(),
            concurrency = self.config.max_concurrency,
            "executing extraction batch"
        );

        let tasks = records.into_iter().enumerate().map(|(index, record)| {
            let recognizer = Arc::clone(&self.recognizer);
            async move { Self::process_record(recognizer, index, record).await }
        });

        let mut outcomes: Vec<RecordOutcome> = stream::iter(tasks)
            .buffer_unordered(self.config.max_concurrency.max(1))
            .collect()
            .await;

        // Completion order is arbitrary; callers rely on input order
        outcomes.sort_by_key(|outcome| outcome.index());

        let failed = outcomes.iter().filter(|o| o.is_error()).count();
        debug!(completed = outcomes.len() - failed, failed, "batch finished");

        Ok(outcomes)
    }

    async fn process_record(
        recognizer: Arc<dyn Recognizer>,
        index: usize,
        record: RawRecord,
    ) -> RecordOutcome {
        let fallback_id = record.id.clone().unwrap_or_default();

        let document = match record.normalize() {
            Ok(document) => document,
            Err(e) => {
                warn!(index, error = %e, "record failed validation");
                return RecordOutcome::Error {
                    index,
                    id: fallback_id,
                    message: e.to_string(),
                };
            }
        };

        match recognizer.recognize(&document.text).await {
            Ok(mentions) => RecordOutcome::Success {
                index,
                id: document.id,
                mentions,
            },
            Err(e) => {
                warn!(index, id = %document.id, error = %e, "record failed extraction");
                RecordOutcome::Error {
                    index,
                    id: document.id,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::EntityLabel;
    use crate::recognizer::EntityMention;
    use async_trait::async_trait;

    /// Splits whitespace-separated tokens into PERSON mentions; fails on the
    /// marker text "explode". Deterministic stand-in for a real recognizer.
    #[derive(Debug)]
    struct StubRecognizer;

    #[async_trait]
    impl Recognizer for StubRecognizer {
        async fn recognize(&self, text: &str) -> Result<Vec<EntityMention>> {
            if text == "explode" {
                return Err(MentioError::Extraction("marker text".to_string()));
            }
            let mut mentions = Vec::new();
            let mut offset = 0;
            for token in text.split_whitespace() {
                let start = text[offset..].find(token).unwrap() + offset;
                let end = start + token.len();
                mentions.push(EntityMention::new(token, EntityLabel::Person, start, end));
                offset = end;
            }
            Ok(mentions)
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn supported_labels(&self) -> Vec<EntityLabel> {
            vec![EntityLabel::Person]
        }
    }

    fn executor() -> BatchExecutor {
        BatchExecutor::new(Arc::new(StubRecognizer), BatchExecutorConfig::default())
    }

    fn record(id: &str, text: &str) -> RawRecord {
        RawRecord::new(Some(id.to_string()), Some(text.to_string()))
    }

    #[tokio::test]
    async fn outcomes_come_back_in_input_order() {
        let records: Vec<RawRecord> = (0..50)
            .map(|i| record(&format!("r{i}"), &format!("token{i}")))
            .collect();

        let outcomes = executor().execute(records).await.unwrap();

        assert_eq!(outcomes.len(), 50);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.index(), i);
            assert_eq!(outcome.id(), format!("r{i}"));
        }
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_outcomes() {
        let outcomes = executor().execute(Vec::new()).await.unwrap();
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn invalid_record_fails_alone() {
        let records = vec![
            record("1", "alpha"),
            RawRecord::new(Some("2".to_string()), None),
            record("3", "gamma"),
        ];

        let outcomes = executor().execute(records).await.unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_error());
        assert!(outcomes[1].is_error());
        assert_eq!(outcomes[1].id(), "2");
        assert!(!outcomes[2].is_error());
    }

    #[tokio::test]
    async fn extraction_failure_fails_alone() {
        let records = vec![record("1", "alpha"), record("2", "explode"), record("3", "gamma")];

        let outcomes = executor().execute(records).await.unwrap();

        assert!(!outcomes[0].is_error());
        assert!(outcomes[1].is_error());
        match &outcomes[1] {
            RecordOutcome::Error { message, .. } => assert!(message.contains("marker text")),
            _ => panic!("expected error outcome"),
        }
        assert!(!outcomes[2].is_error());
    }

    #[tokio::test]
    async fn record_without_id_keeps_its_slot() {
        let records = vec![record("1", "alpha"), RawRecord::default()];

        let outcomes = executor().execute(records).await.unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[1].is_error());
        assert_eq!(outcomes[1].id(), "");
    }

    #[tokio::test]
    async fn oversized_batch_is_rejected_up_front() {
        let executor = BatchExecutor::new(
            Arc::new(StubRecognizer),
            BatchExecutorConfig {
                max_batch_size: 2,
                max_concurrency: 2,
            },
        );

        let records = vec![record("1", "a"), record("2", "b"), record("3", "c")];
        let err = executor.execute(records).await.unwrap_err();

        assert!(matches!(
            err,
            MentioError::BatchTooLarge {
                submitted: 3,
                max_size: 2
            }
        ));
    }

    #[tokio::test]
    async fn same_batch_twice_yields_identical_outcomes() {
        let records = vec![record("1", "alpha beta"), record("2", "gamma")];
        let executor = executor();

        let first = executor.execute(records.clone()).await.unwrap();
        let second = executor.execute(records).await.unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
