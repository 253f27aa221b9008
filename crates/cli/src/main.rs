use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use trackstream_core::detection::domain::object_detector::ObjectDetector;
use trackstream_core::detection::infrastructure::replay_detector::ReplayDetector;
use trackstream_core::pipeline::analyze_video_use_case::{
    AnalyzeOptions, AnalyzeVideoUseCase, ProgressFn,
};
use trackstream_core::pipeline::detect_image_use_case::DetectImageUseCase;
use trackstream_core::shared::constants::{BATCH_FRAME_CAP, DETECTION_STRIDE, HISTORY_LIMIT};
use trackstream_core::streaming::connection_registry::ConnectionRegistry;
use trackstream_core::streaming::frame_decoder::FrameDecoder;
use trackstream_core::streaming::infrastructure::image_file_decoder::ImageFileDecoder;
use trackstream_core::streaming::infrastructure::stdio_transport::StdioTransport;
use trackstream_core::streaming::stream_session::StreamSession;
use trackstream_core::video::domain::video_reader::VideoReader;
use trackstream_core::video::infrastructure::image_sequence_reader::ImageSequenceReader;

/// Object tracking across video frames: stable ids for detections.
#[derive(Parser)]
#[command(name = "trackstream")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a frame source and print a tracking report.
    Analyze {
        /// Video frames: a directory of images or a single image file.
        frames: PathBuf,

        /// Detection log to replay, one JSON array per frame.
        #[arg(long)]
        detections: PathBuf,

        /// Stop reading after this many frames.
        #[arg(long, default_value_t = BATCH_FRAME_CAP)]
        max_frames: usize,

        /// Run detection on every Nth frame.
        #[arg(long, default_value_t = DETECTION_STRIDE)]
        stride: usize,

        /// Keep at most this many history entries in the report.
        #[arg(long, default_value_t = HISTORY_LIMIT)]
        history_limit: usize,

        /// Pretty-print the report.
        #[arg(long)]
        pretty: bool,
    },

    /// Serve a stream session over stdin/stdout, one JSON message per line.
    Stream {
        /// Detection log to replay, one JSON array per frame.
        #[arg(long)]
        detections: PathBuf,
    },

    /// Detect objects in a single image, without tracking.
    Detect {
        /// Input image file.
        image: PathBuf,

        /// Detection log to replay; the first line covers the image.
        #[arg(long)]
        detections: PathBuf,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            frames,
            detections,
            max_frames,
            stride,
            history_limit,
            pretty,
        } => run_analyze(&frames, &detections, max_frames, stride, history_limit, pretty),
        Command::Stream { detections } => run_stream(&detections),
        Command::Detect { image, detections } => run_detect(&image, &detections),
    }
}

fn run_analyze(
    frames: &Path,
    detections: &Path,
    max_frames: usize,
    stride: usize,
    history_limit: usize,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if stride == 0 {
        return Err("Stride must be at least 1".into());
    }
    if !frames.exists() {
        return Err(format!("Input not found: {}", frames.display()).into());
    }

    let reader: Box<dyn VideoReader> = Box::new(ImageSequenceReader::new());
    let detector: Box<dyn ObjectDetector> = Box::new(ReplayDetector::from_jsonl(detections)?);
    let options = AnalyzeOptions {
        max_frames,
        detection_stride: stride,
        history_limit,
    };

    let progress: ProgressFn = Box::new(|current, total| {
        eprint!("\rProcessing frame {current}/{total}");
        true
    });

    let mut use_case = AnalyzeVideoUseCase::new(reader, detector, options, Some(progress));
    let report = use_case.execute(frames)?;
    eprintln!();

    let rendered = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");
    Ok(())
}

fn run_stream(detections: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let detector: Box<dyn ObjectDetector> = Box::new(ReplayDetector::from_jsonl(detections)?);
    let decoder: Box<dyn FrameDecoder> = Box::new(ImageFileDecoder::new());

    let registry = ConnectionRegistry::new();
    let mut transport = StdioTransport::new();
    let mut session = StreamSession::new(decoder, detector);
    session.run(&mut transport, &registry)?;
    log::info!("Stream closed ({} tracks issued)", session.track_count());
    Ok(())
}

fn run_detect(image: &Path, detections: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !image.exists() {
        return Err(format!("Input not found: {}", image.display()).into());
    }

    let reader: Box<dyn VideoReader> = Box::new(ImageSequenceReader::new());
    let detector: Box<dyn ObjectDetector> = Box::new(ReplayDetector::from_jsonl(detections)?);

    let mut use_case = DetectImageUseCase::new(reader, detector);
    let report = use_case.execute(image)?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
