//! In-memory storage for tests and submissions.
//!
//! Persistence design is owned by a separate storage service; this store
//! keeps the HTTP layer honest about its contract with it: tests are
//! immutable once created, submissions are written exactly once per
//! submit call and never mutated afterwards.

use chrono::{DateTime, Utc};
use scoring::ScoreReport;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One dictation test: metadata plus the authoritative reference
/// transcript. Audio lives with the (out-of-scope) file storage service
/// and is addressed by test id.
#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// Seconds the user gets before auto-submit.
    pub time_limit: u32,
    pub expected_text: String,
}

/// One scoring attempt, with its derived metrics.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub test_id: Uuid,
    pub typed_text: String,
    pub time_taken: i64,
    /// Legacy character-edit-distance error count.
    pub errors: usize,
    /// Word-multiset accuracy percentage (marks).
    pub accuracy: u32,
    pub wpm: u32,
    pub total_words: usize,
    pub correct_words: usize,
    pub wrong_words: usize,
    pub created_at: DateTime<Utc>,
}

/// Thread-safe in-memory store shared across request handlers.
#[derive(Default)]
pub struct Store {
    tests: RwLock<HashMap<Uuid, TestRecord>>,
    submissions: RwLock<Vec<SubmissionRecord>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_test(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
        time_limit: u32,
        expected_text: impl Into<String>,
    ) -> TestRecord {
        let record = TestRecord {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            time_limit,
            expected_text: expected_text.into(),
        };
        self.tests.write().await.insert(record.id, record.clone());
        record
    }

    pub async fn get_test(&self, id: Uuid) -> Option<TestRecord> {
        self.tests.read().await.get(&id).cloned()
    }

    /// All tests, ordered by name for stable listings.
    pub async fn list_tests(&self) -> Vec<TestRecord> {
        let mut tests: Vec<TestRecord> = self.tests.read().await.values().cloned().collect();
        tests.sort_by(|a, b| a.name.cmp(&b.name));
        tests
    }

    /// Persists the metrics of one scored attempt. Exactly one write
    /// per submit call.
    pub async fn insert_submission(
        &self,
        test_id: Uuid,
        typed_text: String,
        time_taken: i64,
        report: &ScoreReport,
    ) -> SubmissionRecord {
        let record = SubmissionRecord {
            id: Uuid::new_v4(),
            test_id,
            typed_text,
            time_taken,
            errors: report.errors,
            accuracy: report.marks,
            wpm: report.wpm,
            total_words: report.total_words,
            correct_words: report.correct_words,
            wrong_words: report.wrong_words,
            created_at: Utc::now(),
        };
        self.submissions.write().await.push(record.clone());
        record
    }

    /// Submission history for one test, oldest first.
    pub async fn submissions_for(&self, test_id: Uuid) -> Vec<SubmissionRecord> {
        let mut records: Vec<SubmissionRecord> = self
            .submissions
            .read()
            .await
            .iter()
            .filter(|submission| submission.test_id == test_id)
            .cloned()
            .collect();
        records.sort_by_key(|submission| submission.created_at);
        records
    }

    pub async fn get_submission(
        &self,
        test_id: Uuid,
        submission_id: Uuid,
    ) -> Option<SubmissionRecord> {
        self.submissions
            .read()
            .await
            .iter()
            .find(|submission| submission.id == submission_id && submission.test_id == test_id)
            .cloned()
    }
}
