use std::path::Path;

use crate::analytics::frame_record::FrameRecord;
use crate::analytics::summary::TrackingSummary;
use crate::detection::domain::object_detector::ObjectDetector;
use crate::pipeline::video_report::VideoReport;
use crate::shared::constants::{BATCH_FRAME_CAP, DETECTION_STRIDE, HISTORY_LIMIT};
use crate::tracking::tracking_session::TrackingSession;
use crate::video::domain::video_reader::VideoReader;

/// Resource bounds for one batch run.
#[derive(Clone, Debug)]
pub struct AnalyzeOptions {
    /// Stop reading after this many frames even if the source has more.
    pub max_frames: usize,
    /// Run detection and tracking on every Nth frame; the rest are read
    /// and discarded without touching tracking state.
    pub detection_stride: usize,
    /// Keep at most this many leading history entries in the report.
    pub history_limit: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            max_frames: BATCH_FRAME_CAP,
            detection_stride: DETECTION_STRIDE,
            history_limit: HISTORY_LIMIT,
        }
    }
}

/// Progress callback: `(frames_read, expected_total)`.
/// Return `false` to cancel the run.
pub type ProgressFn = Box<dyn Fn(usize, usize) -> bool + Send>;

/// Orchestrates one batch analysis: decode, sample, detect, track,
/// aggregate.
///
/// Wires domain components together around a private `TrackingSession`.
/// This is a single-use struct: `execute` consumes the owned components,
/// so calling it twice will fail.
pub struct AnalyzeVideoUseCase {
    reader: Option<Box<dyn VideoReader>>,
    detector: Option<Box<dyn ObjectDetector>>,
    options: AnalyzeOptions,
    on_progress: Option<ProgressFn>,
}

impl AnalyzeVideoUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        detector: Box<dyn ObjectDetector>,
        options: AnalyzeOptions,
        on_progress: Option<ProgressFn>,
    ) -> Self {
        Self {
            reader: Some(reader),
            detector: Some(detector),
            options,
            on_progress,
        }
    }

    pub fn execute(&mut self, path: &Path) -> Result<VideoReport, Box<dyn std::error::Error>> {
        if self.options.detection_stride == 0 {
            return Err("Detection stride must be at least 1".into());
        }
        let mut reader = self.reader.take().ok_or("Pipeline already executed")?;
        let mut detector = self.detector.take().ok_or("Pipeline already executed")?;
        let on_progress = self.on_progress.take();

        let metadata = reader.open(path)?;
        let expected_total = match metadata.total_frames {
            0 => self.options.max_frames,
            n => n.min(self.options.max_frames),
        };
        log::info!(
            "Analyzing {}: {expected_total} frames expected",
            metadata.file_name()
        );

        let outcome = run_frames(
            reader.as_mut(),
            detector.as_mut(),
            &self.options,
            expected_total,
            on_progress.as_deref(),
        );
        reader.close();
        let (mut history, frames_read) = outcome?;

        // Aggregates cover every sampled frame; only the returned
        // history is capped.
        let summary = TrackingSummary::from_history(&history);
        history.truncate(self.options.history_limit);

        log::info!(
            "Finished {}: {frames_read} frames read, {} unique objects",
            metadata.file_name(),
            summary.total_unique_objects
        );

        Ok(VideoReport {
            success: true,
            filename: metadata.file_name(),
            total_frames: frames_read,
            total_unique_objects: summary.total_unique_objects,
            object_classes: summary.object_classes,
            tracking_history: history,
            message: "Video processed successfully".to_string(),
        })
    }
}

/// Reads frames until the source ends or the cap is reached, tracking
/// every stride-th frame. Returns the untruncated history and the
/// number of frames read.
///
/// The cap check sits between pulling a frame and looking at it, so one
/// extra pull past the cap is discarded unexamined and a read error
/// there never surfaces.
fn run_frames(
    reader: &mut dyn VideoReader,
    detector: &mut dyn ObjectDetector,
    options: &AnalyzeOptions,
    expected_total: usize,
    on_progress: Option<&(dyn Fn(usize, usize) -> bool + Send)>,
) -> Result<(Vec<FrameRecord>, usize), Box<dyn std::error::Error>> {
    let mut session = TrackingSession::new();
    let mut history: Vec<FrameRecord> = Vec::new();
    let mut frames_read = 0usize;

    for result in reader.frames() {
        if frames_read >= options.max_frames {
            break;
        }
        let frame = result?;
        frames_read += 1;

        if frames_read % options.detection_stride == 0 {
            let detections = detector.detect(&frame)?;
            let mut objects = session.submit_frame(&detections);
            for object in &mut objects {
                object.frame = Some(frames_read);
            }
            log::debug!(
                "Frame {frames_read}: {} objects, {} live tracks",
                objects.len(),
                session.track_count()
            );
            if !objects.is_empty() {
                history.push(FrameRecord {
                    frame: frames_read,
                    objects,
                });
            }
        }

        if let Some(callback) = on_progress {
            if !callback(frames_read, expected_total) {
                return Err("Cancelled".into());
            }
        }
    }

    Ok((history, frames_read))
}
