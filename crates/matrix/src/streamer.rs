//! Device streamer - rate-gated bridge from the game loop to the device.
//!
//! The game loop stays synchronous; network I/O runs on an owned tokio
//! runtime behind a bounded channel. `offer` is the whole sync-side API:
//! build the device pixel array, serialize, `try_send`. A busy channel drops
//! the frame - the loop never waits on the device. Failures of any kind are
//! recorded in shared counters and go no further.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::layout::MatrixLayout;
use crate::protocol::StateUpdate;
use crate::types::STREAM_INTERVAL_MS;
use wled_raycaster_render::PixelBuffer;

/// Streaming failure kinds. Inspected for metrics only, never unwound
/// through the render loop.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("connect to {addr} failed: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("request timed out")]
    Timeout,
    #[error("device answered status {0}")]
    BadStatus(u16),
    #[error("device gave no readable status line")]
    BadResponse,
}

/// Shared throughput counters. The async task writes, the HUD reads.
#[derive(Debug, Default)]
pub struct StreamStats {
    sent: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

impl StreamStats {
    pub fn sent(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Frames discarded because the device was still busy with the last one.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn record(&self, result: &Result<(), StreamError>) {
        match result {
            Ok(()) => self.sent.fetch_add(1, Ordering::Relaxed),
            Err(_) => self.failed.fetch_add(1, Ordering::Relaxed),
        };
    }
}

/// Streamer configuration, read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamerConfig {
    pub host: String,
    pub port: u16,
    pub brightness: u8,
    /// Minimum wall-clock time between stream attempts.
    pub interval: Duration,
    /// Per-request network timeout; short so a dead device cannot stall the
    /// background task's queue.
    pub timeout: Duration,
}

impl Default for StreamerConfig {
    fn default() -> Self {
        Self {
            host: "192.168.30.119".to_string(),
            port: 80,
            brightness: 255,
            interval: Duration::from_millis(STREAM_INTERVAL_MS),
            timeout: Duration::from_millis(50),
        }
    }
}

impl StreamerConfig {
    /// Read `WLED_HOST` / `WLED_PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("WLED_HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }
        if let Ok(port) = std::env::var("WLED_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            }
        }
        config
    }

    /// `WLED_DISABLED=1` (or `true`) turns streaming off entirely.
    pub fn is_disabled() -> bool {
        matches!(
            std::env::var("WLED_DISABLED").as_deref(),
            Ok("1") | Ok("true")
        )
    }

    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Translate a small frame into the device pixel array.
///
/// Every (x, y) the layout covers lands at its device index; indices nothing
/// maps to stay black, which makes a partially configured layout visible on
/// the device instead of scrambled.
pub fn build_pixel_array(frame: &PixelBuffer, layout: &MatrixLayout) -> Vec<[u8; 3]> {
    let mut pixels = vec![[0u8; 3]; layout.pixel_count()];
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            if let Some(index) = layout.index_of(x, y) {
                if let (Some(slot), Some(color)) = (pixels.get_mut(index), frame.get(x, y)) {
                    *slot = [color.r, color.g, color.b];
                }
            }
        }
    }
    pixels
}

/// Running streamer: owned runtime, frame channel, counters.
pub struct Streamer {
    rt: Runtime,
    tx: mpsc::Sender<StateUpdate>,
    stats: Arc<StreamStats>,
    layout: MatrixLayout,
    brightness: u8,
    interval: Duration,
    last_attempt: Option<Instant>,
    target: String,
}

impl Streamer {
    /// Start the background sender.
    pub fn start(config: StreamerConfig, layout: MatrixLayout) -> Self {
        // Capacity 1: at most one frame in flight plus one queued; anything
        // more would only add latency on the device.
        let (tx, rx) = mpsc::channel::<StateUpdate>(1);
        let stats = Arc::new(StreamStats::default());

        let rt = Runtime::new().expect("Failed to create tokio runtime");
        let task_stats = Arc::clone(&stats);
        let task_config = config.clone();
        rt.spawn(async move {
            sender_task(task_config, rx, task_stats).await;
        });

        Self {
            rt,
            tx,
            stats,
            layout,
            brightness: config.brightness,
            interval: config.interval,
            last_attempt: None,
            target: config.target(),
        }
    }

    /// Start from environment variables; `None` when streaming is disabled.
    pub fn start_from_env(layout: MatrixLayout) -> Option<Self> {
        if StreamerConfig::is_disabled() {
            return None;
        }
        Some(Self::start(StreamerConfig::from_env(), layout))
    }

    pub fn stats(&self) -> Arc<StreamStats> {
        Arc::clone(&self.stats)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// True when enough wall-clock time has passed since the last attempt.
    /// Lets the caller skip the downsampling work entirely between attempts.
    pub fn due(&self, now: Instant) -> bool {
        match self.last_attempt {
            Some(last) => now.duration_since(last) >= self.interval,
            None => true,
        }
    }

    /// Hand a downsampled frame to the background sender.
    ///
    /// Returns true when the frame was queued; false when it was dropped
    /// because the previous one is still in flight. Either way the call
    /// returns immediately.
    pub fn offer(&mut self, frame: &PixelBuffer, now: Instant) -> bool {
        self.last_attempt = Some(now);
        let pixels = build_pixel_array(frame, &self.layout);
        let payload = StateUpdate::frame(pixels, self.brightness);
        match self.tx.try_send(payload) {
            Ok(()) => true,
            Err(_) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// Send the all-off payload and tear the runtime down, giving the
    /// background task a moment to drain.
    pub fn shutdown(self) {
        let _ = self
            .tx
            .blocking_send(StateUpdate::blackout(self.layout.pixel_count()));
        drop(self.tx);
        self.rt.shutdown_timeout(Duration::from_millis(250));
    }
}

/// Background task: drain the channel, one POST per payload.
async fn sender_task(
    config: StreamerConfig,
    mut rx: mpsc::Receiver<StateUpdate>,
    stats: Arc<StreamStats>,
) {
    while let Some(payload) = rx.recv().await {
        let result = post_state(&config, &payload).await;
        stats.record(&result);
    }
}

/// POST one state payload to the device, bounded by the config timeout.
async fn post_state(config: &StreamerConfig, payload: &StateUpdate) -> Result<(), StreamError> {
    let body = serde_json::to_string(payload)?;
    let addr = config.target();

    let request = async {
        let mut stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| StreamError::Connect {
                addr: addr.clone(),
                source,
            })?;

        let head = format!(
            "POST /json/state HTTP/1.1\r\nHost: {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            config.host,
            body.len()
        );
        stream.write_all(head.as_bytes()).await?;
        stream.write_all(body.as_bytes()).await?;

        // Only the status line matters; the device closes the connection.
        let mut response = Vec::with_capacity(256);
        let mut buf = [0u8; 256];
        loop {
            let n = stream.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            response.extend_from_slice(&buf[..n]);
            if response.contains(&b'\n') {
                break;
            }
        }

        match parse_status_line(&response) {
            Some(status) if (200..300).contains(&status) => Ok(()),
            Some(status) => Err(StreamError::BadStatus(status)),
            None => Err(StreamError::BadResponse),
        }
    };

    match tokio::time::timeout(config.timeout, request).await {
        Ok(result) => result,
        Err(_) => Err(StreamError::Timeout),
    }
}

/// Pull the status code out of an `HTTP/1.x NNN ...` status line.
fn parse_status_line(response: &[u8]) -> Option<u16> {
    let line = response.split(|&b| b == b'\n').next()?;
    let text = std::str::from_utf8(line).ok()?;
    let mut parts = text.split_whitespace();
    let version = parts.next()?;
    if !version.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse::<u16>().ok()
}
