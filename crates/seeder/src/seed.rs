// Batched upsert of the colleges fixture
//
// Batches run strictly one after another. A failed batch is logged and
// skipped: it is never retried and never aborts the run. The fold over
// batches produces a SeedReport, which is the only state carried between
// batches.
//
// A killed run can be restarted from the beginning: upserts keyed on
// `name` make re-sending committed batches harmless.

use crate::config::SeederConfig;
use crate::fixture::{load_colleges, FixtureError};
use crate::record::CollegeRecord;
use crate::table::CollegeTable;
use futures::{stream, StreamExt};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}

/// Outcome of pushing every batch once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Records in the fixture.
    pub total: usize,
    /// Batches attempted.
    pub batches: usize,
    /// Records in batches that were upserted successfully.
    pub processed: usize,
    /// 1-based indices of batches whose upsert failed.
    pub failed_batches: Vec<usize>,
}

impl SeedReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed_batches.is_empty()
    }
}

/// Result of a full run, including the post-run reconciliation count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report: SeedReport,
    /// Rows in the table after seeding; `None` when the count query failed.
    pub table_count: Option<u64>,
}

/// Number of batches `total` records split into.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size.max(1))
}

/// Upsert `records` in batches of `batch_size`, one batch at a time.
pub async fn seed_batches<T>(table: &T, records: Vec<CollegeRecord>, batch_size: usize) -> SeedReport
where
    T: CollegeTable + ?Sized,
{
    let total = records.len();
    let batch_size = batch_size.max(1);

    stream::iter(records.chunks(batch_size).enumerate())
        .fold(SeedReport::new(total), move |mut report, (i, batch)| async move {
            let index = i + 1;
            let rows: Vec<CollegeRecord> = batch
                .iter()
                .cloned()
                .map(CollegeRecord::with_default_country)
                .collect();

            report.batches += 1;
            match table.upsert(&rows).await {
                Ok(()) => {
                    report.processed += rows.len();
                    tracing::info!(
                        batch = index,
                        processed = report.processed,
                        total,
                        "Inserted batch {} ({}/{})",
                        index,
                        report.processed,
                        total
                    );
                }
                Err(e) => {
                    tracing::error!(batch = index, error = %e, "Error inserting batch {}", index);
                    report.failed_batches.push(index);
                }
            }
            report
        })
        .await
}

/// Load the fixture, seed it, then report the table's row count.
pub async fn run<T>(config: &SeederConfig, table: &T) -> Result<RunSummary, SeedError>
where
    T: CollegeTable + ?Sized,
{
    let records = load_colleges(&config.fixture_path)?;
    tracing::info!(
        fixture = %config.fixture_path.display(),
        count = records.len(),
        batches = batch_count(records.len(), config.batch_size),
        "Found {} colleges to seed",
        records.len()
    );

    let report = seed_batches(table, records, config.batch_size).await;

    if report.is_complete() {
        tracing::info!("Successfully seeded {} colleges", report.processed);
    } else {
        tracing::warn!(
            failed_batches = ?report.failed_batches,
            "Seeded {} of {} colleges; {} batch(es) failed",
            report.processed,
            report.total,
            report.failed_batches.len()
        );
    }

    let table_count = match table.count().await {
        Ok(count) => {
            tracing::info!("Total colleges in database: {}", count);
            Some(count)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not count colleges after seeding");
            None
        }
    };

    Ok(RunSummary {
        report,
        table_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    /// Records every upsert call; fails the listed 1-based calls.
    #[derive(Default)]
    struct RecordingTable {
        calls: Mutex<Vec<Vec<CollegeRecord>>>,
        fail_calls: Vec<usize>,
        count: Option<u64>,
    }

    impl RecordingTable {
        fn failing(fail_calls: Vec<usize>) -> Self {
            Self {
                fail_calls,
                ..Self::default()
            }
        }

        fn batch_sizes(&self) -> Vec<usize> {
            self.calls.lock().iter().map(Vec::len).collect()
        }
    }

    #[async_trait]
    impl CollegeTable for RecordingTable {
        async fn upsert(&self, rows: &[CollegeRecord]) -> Result<(), TableError> {
            let mut calls = self.calls.lock();
            calls.push(rows.to_vec());
            if self.fail_calls.contains(&calls.len()) {
                return Err(TableError::Api {
                    status: 500,
                    message: "simulated failure".to_string(),
                });
            }
            Ok(())
        }

        async fn count(&self) -> Result<u64, TableError> {
            self.count
                .ok_or_else(|| TableError::InvalidCount("no count".to_string()))
        }
    }

    fn colleges(n: usize) -> Vec<CollegeRecord> {
        (0..n)
            .map(|i| serde_json::from_value(json!({"name": format!("College {i}")})).unwrap())
            .collect()
    }

    #[test]
    fn test_batch_count() {
        assert_eq!(batch_count(0, 100), 0);
        assert_eq!(batch_count(1, 100), 1);
        assert_eq!(batch_count(100, 100), 1);
        assert_eq!(batch_count(101, 100), 2);
        assert_eq!(batch_count(250, 100), 3);
    }

    #[tokio::test]
    async fn test_batches_are_sized_by_batch_size() {
        for (size, expected) in [
            (250, vec![100, 100, 50]),
            (200, vec![100, 100]),
            (99, vec![99]),
            (0, vec![]),
        ] {
            let table = RecordingTable::default();
            let report = seed_batches(&table, colleges(size), 100).await;

            assert_eq!(table.batch_sizes(), expected, "fixture of {size}");
            assert_eq!(report.batches, batch_count(size, 100));
            assert_eq!(report.processed, size);
            assert!(report.is_complete());
        }
    }

    #[tokio::test]
    async fn test_batches_preserve_fixture_order() {
        let table = RecordingTable::default();
        seed_batches(&table, colleges(5), 2).await;

        let names: Vec<String> = table
            .calls
            .lock()
            .iter()
            .flatten()
            .map(|r| r.name().unwrap().to_string())
            .collect();
        let expected: Vec<String> = (0..5).map(|i| format!("College {i}")).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_country_is_defaulted_per_record() {
        let records = vec![
            serde_json::from_value(json!({"name": "IIT Delhi"})).unwrap(),
            serde_json::from_value(json!({"name": "Kathmandu University", "country": "Nepal"}))
                .unwrap(),
        ];
        let table = RecordingTable::default();
        seed_batches(&table, records, 100).await;

        let calls = table.calls.lock();
        assert_eq!(calls[0][0].country(), Some(&json!("India")));
        assert_eq!(calls[0][1].country(), Some(&json!("Nepal")));
    }

    #[tokio::test]
    async fn test_failed_batch_is_skipped_and_run_continues() {
        let table = RecordingTable::failing(vec![2]);
        let report = seed_batches(&table, colleges(250), 100).await;

        assert_eq!(table.batch_sizes(), vec![100, 100, 50]);
        assert_eq!(report.batches, 3);
        assert_eq!(report.processed, 150);
        assert_eq!(report.failed_batches, vec![2]);
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn test_every_batch_failing_processes_nothing() {
        let table = RecordingTable::failing(vec![1, 2, 3]);
        let report = seed_batches(&table, colleges(250), 100).await;

        assert_eq!(report.processed, 0);
        assert_eq!(report.failed_batches, vec![1, 2, 3]);
    }

    fn config_for(path: &std::path::Path) -> SeederConfig {
        let mut config = SeederConfig::from_lookup(|key| match key {
            "SUPABASE_URL" => Some("http://localhost".to_string()),
            "SUPABASE_SERVICE_ROLE_KEY" => Some("key".to_string()),
            _ => None,
        })
        .unwrap();
        config.fixture_path = path.to_path_buf();
        config
    }

    #[tokio::test]
    async fn test_run_reaches_count_after_batch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colleges.json");
        std::fs::write(&path, serde_json::to_string(&colleges(250)).unwrap()).unwrap();

        let table = RecordingTable {
            fail_calls: vec![2],
            count: Some(180),
            ..RecordingTable::default()
        };
        let summary = run(&config_for(&path), &table).await.unwrap();

        assert_eq!(summary.report.processed, 150);
        assert_eq!(summary.report.failed_batches, vec![2]);
        assert_eq!(summary.table_count, Some(180));
    }

    #[tokio::test]
    async fn test_run_tolerates_count_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colleges.json");
        std::fs::write(&path, serde_json::to_string(&colleges(3)).unwrap()).unwrap();

        let table = RecordingTable::default();
        let summary = run(&config_for(&path), &table).await.unwrap();

        assert_eq!(summary.report.processed, 3);
        assert_eq!(summary.table_count, None);
    }

    #[tokio::test]
    async fn test_run_fails_on_missing_fixture_without_upserting() {
        let dir = tempfile::tempdir().unwrap();
        let table = RecordingTable::default();

        let err = run(&config_for(&dir.path().join("missing.json")), &table)
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Fixture(FixtureError::Read { .. })));
        assert!(table.calls.lock().is_empty());
    }
}
