//! Simulated booking-data upload and analysis.
//!
//! The flow is a small state machine driven by explicit transition functions:
//!
//! ```text
//! Idle --select_file--> Uploading --finish_upload--> Analyzing --finish_analysis--> Complete
//!   ^                                                                                  |
//!   +------------------------------------- reset --------------------------------------+
//! ```
//!
//! [`UploadSimulator::process`] chains the transitions with the two fixed delays. Every
//! transition publishes a whole [`UploadSnapshot`], so observers never see uploaded data
//! from one run next to trends from another.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub const ACCEPTED_CONTENT_TYPES: [&str; 4] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/json",
];

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["csv", "xlsx", "xls", "json"];

pub const DEFAULT_UPLOAD_DELAY: Duration = Duration::from_millis(1500);
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(2500);

const RECORDS_RANGE: Range<u32> = 2000..10000;
const MONTHS_RANGE: Range<u32> = 6..24;
const TRENDS_RANGE: Range<u32> = 2..8;

const QUARTER_LABELS: [&str; 4] = ["Q1 2024", "Q2 2024", "Q3 2024", "Q4 2024"];
const OCCUPANCY_BASES: [u32; 4] = [68, 72, 76, 80];
const OCCUPANCY_JITTER: u32 = 15;
const REVENUE_BASES: [u64; 4] = [320_000, 350_000, 380_000, 410_000];
const REVENUE_JITTER: u64 = 100_000;
const BASELINE: [(u32, u64); 4] = [(72, 365_000), (78, 395_000), (82, 420_000), (85, 445_000)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UploadState {
    Idle,
    Uploading,
    Analyzing,
    Complete,
}

impl UploadState {
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadState::Uploading | UploadState::Analyzing)
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UploadState::Idle => "idle",
            UploadState::Uploading => "uploading",
            UploadState::Analyzing => "analyzing",
            UploadState::Complete => "complete",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unsupported file type for '{file_name}': expected a CSV, XLS, XLSX or JSON file")]
    UnsupportedFileType {
        file_name: String,
        content_type: String,
    },

    #[error("Upload flow is {state}, the request was ignored")]
    Busy { state: UploadState },
}

/// The parts of a selected file the simulator looks at. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub content_type: String,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
        }
    }

    /// Builds a handle from a path, guessing the content type from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let content_type = match path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => ACCEPTED_CONTENT_TYPES[0],
            Some("xls") => ACCEPTED_CONTENT_TYPES[1],
            Some("xlsx") => ACCEPTED_CONTENT_TYPES[2],
            Some("json") => ACCEPTED_CONTENT_TYPES[3],
            _ => "",
        };
        Self::new(name, content_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedData {
    pub records: u32,
    pub months: u32,
    pub trends: u32,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalTrend {
    pub period: String,
    pub avg_occupancy: u32,
    pub avg_revenue: u64,
}

/// The fixed quarterly figures shown before any upload and after a reset.
pub fn baseline_trends() -> Vec<HistoricalTrend> {
    QUARTER_LABELS
        .iter()
        .zip(BASELINE)
        .map(|(period, (avg_occupancy, avg_revenue))| HistoricalTrend {
            period: period.to_string(),
            avg_occupancy,
            avg_revenue,
        })
        .collect()
}

/// Draws the summary numbers and quarterly trends for a finished analysis.
pub fn generate_analysis<R: Rng>(
    rng: &mut R,
    file_name: &str,
) -> (UploadedData, Vec<HistoricalTrend>) {
    let data = UploadedData {
        records: rng.gen_range(RECORDS_RANGE),
        months: rng.gen_range(MONTHS_RANGE),
        trends: rng.gen_range(TRENDS_RANGE),
        file_name: file_name.to_string(),
    };

    let trends = (0..QUARTER_LABELS.len())
        .map(|q| HistoricalTrend {
            period: QUARTER_LABELS[q].to_string(),
            avg_occupancy: OCCUPANCY_BASES[q] + rng.gen_range(0..OCCUPANCY_JITTER),
            avg_revenue: REVENUE_BASES[q] + rng.gen_range(0..REVENUE_JITTER),
        })
        .collect();

    (data, trends)
}

/// Accepts a file by declared content type, falling back to its extension.
pub fn validate_file(file: &FileHandle) -> Result<(), UploadError> {
    if ACCEPTED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Ok(());
    }

    let extension = file
        .name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(UploadError::UnsupportedFileType {
            file_name: file.name.clone(),
            content_type: file.content_type.clone(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ValidationFailed { reason: String },
    ProcessingStarted,
    AnalysisComplete { records: u32, file_name: String },
}

/// Receives the user-facing events of the upload flow.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub upload: Duration,
    pub analysis: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            upload: DEFAULT_UPLOAD_DELAY,
            analysis: DEFAULT_ANALYSIS_DELAY,
        }
    }
}

/// Everything observers need to render the flow, published as one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSnapshot {
    pub state: UploadState,
    pub uploaded: Option<UploadedData>,
    pub trends: Vec<HistoricalTrend>,
}

impl UploadSnapshot {
    fn baseline() -> Self {
        Self {
            state: UploadState::Idle,
            uploaded: None,
            trends: baseline_trends(),
        }
    }
}

pub struct UploadSimulator {
    delays: Delays,
    rng: StdRng,
    notifier: Arc<dyn Notifier>,
    pending_file: Option<String>,
    snapshot: watch::Sender<UploadSnapshot>,
}

impl UploadSimulator {
    pub fn new(delays: Delays, rng: StdRng, notifier: Arc<dyn Notifier>) -> Self {
        let (snapshot, _) = watch::channel(UploadSnapshot::baseline());
        Self {
            delays,
            rng,
            notifier,
            pending_file: None,
            snapshot,
        }
    }

    /// Creates a simulator seeded from `seed`, or from entropy when absent.
    pub fn with_seed(delays: Delays, seed: Option<u64>, notifier: Arc<dyn Notifier>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(delays, rng, notifier)
    }

    pub fn delays(&self) -> Delays {
        self.delays
    }

    pub fn state(&self) -> UploadState {
        self.snapshot.borrow().state
    }

    pub fn snapshot(&self) -> UploadSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadSnapshot> {
        self.snapshot.subscribe()
    }

    /// Starts an upload. Only accepted while idle; invalid files leave the state untouched.
    pub fn select_file(&mut self, file: &FileHandle) -> Result<(), UploadError> {
        let state = self.state();
        if state != UploadState::Idle {
            warn!(%state, file = %file.name, "Rejecting file selection");
            return Err(UploadError::Busy { state });
        }

        if let Err(e) = validate_file(file) {
            warn!(file = %file.name, content_type = %file.content_type, "Unsupported file");
            self.notifier.notify(&Notification::ValidationFailed {
                reason: e.to_string(),
            });
            return Err(e);
        }

        debug!(file = %file.name, "Upload started");
        self.pending_file = Some(file.name.clone());
        self.snapshot.send_modify(|s| s.state = UploadState::Uploading);
        Ok(())
    }

    pub fn finish_upload(&mut self) -> Result<(), UploadError> {
        self.expect_state(UploadState::Uploading)?;

        debug!("Upload finished, analyzing");
        self.snapshot.send_modify(|s| s.state = UploadState::Analyzing);
        self.notifier.notify(&Notification::ProcessingStarted);
        Ok(())
    }

    pub fn finish_analysis(&mut self) -> Result<UploadedData, UploadError> {
        self.expect_state(UploadState::Analyzing)?;

        let file_name = self.pending_file.take().unwrap_or_default();
        let (data, trends) = generate_analysis(&mut self.rng, &file_name);
        info!(
            records = data.records,
            months = data.months,
            trends = data.trends,
            file = %data.file_name,
            "Analysis complete"
        );

        self.snapshot.send_replace(UploadSnapshot {
            state: UploadState::Complete,
            uploaded: Some(data.clone()),
            trends,
        });
        self.notifier.notify(&Notification::AnalysisComplete {
            records: data.records,
            file_name: data.file_name.clone(),
        });
        Ok(data)
    }

    /// Runs the whole flow for `file`, waiting out both delays before publishing results.
    pub async fn process(&mut self, file: &FileHandle) -> Result<UploadedData, UploadError> {
        self.select_file(file)?;
        sleep(self.delays.upload).await;
        self.finish_upload()?;
        sleep(self.delays.analysis).await;
        self.finish_analysis()
    }

    /// Discards uploaded data and restores the baseline trends.
    pub fn reset(&mut self) -> Result<(), UploadError> {
        let state = self.state();
        if state.is_busy() {
            warn!(%state, "Rejecting reset");
            return Err(UploadError::Busy { state });
        }

        debug!("Upload flow reset");
        self.pending_file = None;
        self.snapshot.send_replace(UploadSnapshot::baseline());
        Ok(())
    }

    fn expect_state(&self, expected: UploadState) -> Result<(), UploadError> {
        let state = self.state();
        if state != expected {
            warn!(%state, %expected, "Out of order transition");
            return Err(UploadError::Busy { state });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::time::Instant;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn seen(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: &Notification) {
            self.seen.lock().unwrap().push(notification.clone());
        }
    }

    fn simulator() -> (UploadSimulator, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let sim = UploadSimulator::with_seed(Delays::default(), Some(7), notifier.clone());
        (sim, notifier)
    }

    #[test]
    fn test_validate_file_by_content_type_or_extension() {
        assert!(validate_file(&FileHandle::new("export", "text/csv")).is_ok());
        assert!(validate_file(&FileHandle::new("export", "application/json")).is_ok());
        assert!(validate_file(&FileHandle::new("bookings.csv", "")).is_ok());
        assert!(validate_file(&FileHandle::new("Q3.XLSX", "application/octet-stream")).is_ok());
        assert!(validate_file(&FileHandle::new("legacy.Xls", "")).is_ok());

        let err = validate_file(&FileHandle::new("data.txt", "text/plain")).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFileType { .. }));
        assert!(validate_file(&FileHandle::new("csv", "")).is_err());
        assert!(validate_file(&FileHandle::new("report.csv.bak", "")).is_err());
    }

    #[test]
    fn test_file_handle_from_path() {
        let handle = FileHandle::from_path("/tmp/exports/bookings.CSV");
        assert_eq!(handle.name, "bookings.CSV");
        assert_eq!(handle.content_type, "text/csv");

        let handle = FileHandle::from_path("notes.txt");
        assert_eq!(handle.content_type, "");
    }

    #[test]
    fn test_invalid_file_keeps_idle_and_notifies() {
        let (mut sim, notifier) = simulator();
        let result = sim.select_file(&FileHandle::new("data.txt", "text/plain"));

        assert!(matches!(
            result,
            Err(UploadError::UnsupportedFileType { .. })
        ));
        assert_eq!(sim.state(), UploadState::Idle);
        assert_eq!(sim.snapshot().trends, baseline_trends());
        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], Notification::ValidationFailed { .. }));
    }

    #[test]
    fn test_selection_rejected_while_busy() {
        let (mut sim, notifier) = simulator();
        sim.select_file(&FileHandle::new("bookings.csv", "text/csv"))
            .unwrap();

        let err = sim
            .select_file(&FileHandle::new("other.csv", "text/csv"))
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::Busy {
                state: UploadState::Uploading
            }
        );

        sim.finish_upload().unwrap();
        assert!(
            sim.select_file(&FileHandle::new("other.csv", "text/csv"))
                .is_err()
        );
        assert_eq!(sim.reset().unwrap_err(), UploadError::Busy {
            state: UploadState::Analyzing
        });

        let data = sim.finish_analysis().unwrap();
        assert_eq!(data.file_name, "bookings.csv");
        assert!(
            sim.select_file(&FileHandle::new("other.csv", "text/csv"))
                .is_err()
        );
        assert_eq!(notifier.seen().len(), 2);
    }

    #[test]
    fn test_out_of_order_transitions_are_rejected() {
        let (mut sim, _) = simulator();
        assert!(sim.finish_upload().is_err());
        assert!(sim.finish_analysis().is_err());
        assert_eq!(sim.state(), UploadState::Idle);
        assert!(sim.snapshot().uploaded.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_walks_every_state() {
        let (mut sim, notifier) = simulator();
        let mut rx = sim.subscribe();
        let delays = sim.delays();

        let observer = tokio::spawn(async move {
            let mut states = Vec::new();
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                states.push(snapshot.state);
                if snapshot.state == UploadState::Complete {
                    assert!(snapshot.uploaded.is_some());
                    break;
                }
                assert!(snapshot.uploaded.is_none());
                assert_eq!(snapshot.trends, baseline_trends());
            }
            states
        });

        let start = Instant::now();
        let data = sim
            .process(&FileHandle::new("bookings.csv", ""))
            .await
            .unwrap();
        assert!(start.elapsed() >= delays.upload + delays.analysis);

        assert_eq!(
            observer.await.unwrap(),
            vec![
                UploadState::Uploading,
                UploadState::Analyzing,
                UploadState::Complete
            ]
        );
        assert_eq!(data.file_name, "bookings.csv");
        assert!(RECORDS_RANGE.contains(&data.records));
        assert!(MONTHS_RANGE.contains(&data.months));
        assert!(TRENDS_RANGE.contains(&data.trends));

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.uploaded, Some(data.clone()));
        assert_eq!(snapshot.trends.len(), 4);

        assert_eq!(
            notifier.seen(),
            vec![
                Notification::ProcessingStarted,
                Notification::AnalysisComplete {
                    records: data.records,
                    file_name: "bookings.csv".to_string(),
                }
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_baseline() {
        let (mut sim, _) = simulator();
        sim.process(&FileHandle::new("bookings.csv", "text/csv"))
            .await
            .unwrap();

        sim.reset().unwrap();
        let first = sim.snapshot();
        assert_eq!(first.state, UploadState::Idle);
        assert!(first.uploaded.is_none());
        assert_eq!(first.trends, baseline_trends());

        sim.reset().unwrap();
        assert_eq!(sim.snapshot(), first);
    }

    #[test]
    fn test_baseline_values() {
        let expected = [(72, 365_000), (78, 395_000), (82, 420_000), (85, 445_000)];
        let baseline = baseline_trends();
        assert_eq!(baseline.len(), 4);
        for (trend, (occupancy, revenue)) in baseline.iter().zip(expected) {
            assert_eq!(trend.avg_occupancy, occupancy);
            assert_eq!(trend.avg_revenue, revenue);
        }
        assert_eq!(baseline[0].period, "Q1 2024");
        assert_eq!(baseline[3].period, "Q4 2024");
    }

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (data, trends) = generate_analysis(&mut rng, "bookings.csv");
            assert!(RECORDS_RANGE.contains(&data.records));
            assert!(MONTHS_RANGE.contains(&data.months));
            assert!(TRENDS_RANGE.contains(&data.trends));
            for (q, trend) in trends.iter().enumerate() {
                assert_eq!(trend.period, QUARTER_LABELS[q]);
                assert!(trend.avg_occupancy >= OCCUPANCY_BASES[q]);
                assert!(trend.avg_occupancy < OCCUPANCY_BASES[q] + OCCUPANCY_JITTER);
                assert!(trend.avg_occupancy <= 100);
                assert!(trend.avg_revenue >= REVENUE_BASES[q]);
                assert!(trend.avg_revenue < REVENUE_BASES[q] + REVENUE_JITTER);
            }
        }
    }

    #[test]
    fn test_quarter_means_rise() {
        let mut rng = StdRng::seed_from_u64(2024);
        let runs = 1000;
        let mut occupancy = [0u64; 4];
        let mut revenue = [0u64; 4];
        for _ in 0..runs {
            let (_, trends) = generate_analysis(&mut rng, "bookings.csv");
            for (q, trend) in trends.iter().enumerate() {
                occupancy[q] += u64::from(trend.avg_occupancy);
                revenue[q] += trend.avg_revenue;
            }
        }

        let mean = |total: u64| total as f64 / runs as f64;
        for q in 1..4 {
            assert!(mean(occupancy[q]) > mean(occupancy[q - 1]));
            assert!(mean(revenue[q]) > mean(revenue[q - 1]));
        }
    }
}
