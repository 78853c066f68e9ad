//! Orientation sensor feed.
//!
//! A file or FIFO produces one reading per line: `beta gamma` in degrees.
//! Either value may be `null` or `-` while the sensor is not reporting.
//! Opening the feed stands in for the orientation permission prompt.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use shadoll_tilt::{PermissionError, PermissionPrompt, PermissionState};
use tracing::{debug, info, warn};

/// One orientation reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// Parse a `beta gamma` line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<SensorReading> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut fields = line.split(|c: char| c.is_whitespace() || c == ',').filter(|f| !f.is_empty());
    let beta = parse_axis(fields.next()?);
    let gamma = fields.next().and_then(parse_axis);
    Some(SensorReading { beta, gamma })
}

fn parse_axis(field: &str) -> Option<f64> {
    match field {
        "null" | "-" => None,
        value => value.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

/// Reader side of the feed, owned by the event loop.
#[derive(Debug)]
pub struct SensorFeed {
    readings: Receiver<SensorReading>,
    running: Arc<AtomicBool>,
}

impl SensorFeed {
    /// Create the feed and the prompt that opens it on first grant.
    pub fn new(path: PathBuf) -> (Self, SensorPrompt) {
        let (tx, rx) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let prompt = SensorPrompt {
            path,
            sender: tx,
            running: running.clone(),
            reader_alive: Arc::new(AtomicBool::new(false)),
        };
        (
            Self {
                readings: rx,
                running,
            },
            prompt,
        )
    }

    /// Readings that arrived since the last call.
    pub fn drain(&self) -> Vec<SensorReading> {
        self.readings.try_iter().collect()
    }
}

impl Drop for SensorFeed {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Starts the reader thread, which opens the feed.
///
/// Opening happens on the reader thread because a FIFO blocks until a
/// writer connects. The grant lasts while the reader is alive; once it
/// exits the next prompt starts a new one.
#[derive(Debug)]
pub struct SensorPrompt {
    path: PathBuf,
    sender: Sender<SensorReading>,
    running: Arc<AtomicBool>,
    reader_alive: Arc<AtomicBool>,
}

impl PermissionPrompt for SensorPrompt {
    fn request(&mut self) -> Result<PermissionState, PermissionError> {
        if self.reader_alive.load(Ordering::Acquire) {
            return Ok(PermissionState::Granted);
        }

        // A stat never blocks, even on a FIFO.
        fs::metadata(&self.path).map_err(|e| {
            PermissionError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;

        let sender = self.sender.clone();
        let running = self.running.clone();
        let alive = self.reader_alive.clone();
        let path = self.path.clone();
        alive.store(true, Ordering::Release);
        thread::Builder::new()
            .name("sensor-feed".to_string())
            .spawn(move || {
                match File::open(&path) {
                    Ok(file) => {
                        info!(path = %path.display(), "opened orientation sensor feed");
                        read_feed(BufReader::new(file), sender, running, &path);
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "cannot open orientation sensor feed");
                    }
                }
                alive.store(false, Ordering::Release);
            })
            .map_err(|e| {
                self.reader_alive.store(false, Ordering::Release);
                PermissionError::Prompt(e.to_string())
            })?;

        Ok(PermissionState::Granted)
    }
}

fn read_feed(reader: impl BufRead, sender: Sender<SensorReading>, running: Arc<AtomicBool>, path: &Path) {
    for line in reader.lines() {
        if !running.load(Ordering::Relaxed) {
            break;
        }
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "sensor feed read failed");
                break;
            }
        };
        let Some(reading) = parse_line(&line) else {
            continue;
        };
        if sender.send(reading).is_err() {
            break;
        }
    }
    debug!(path = %path.display(), "sensor feed closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::time::{Duration, Instant};

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("12.5 -30"),
            Some(SensorReading {
                beta: Some(12.5),
                gamma: Some(-30.0)
            })
        );
        assert_eq!(
            parse_line("  40,  null "),
            Some(SensorReading {
                beta: Some(40.0),
                gamma: None
            })
        );
        assert_eq!(
            parse_line("- 7"),
            Some(SensorReading {
                beta: None,
                gamma: Some(7.0)
            })
        );
        assert_eq!(
            parse_line("NaN inf"),
            Some(SensorReading {
                beta: None,
                gamma: None
            })
        );
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("# comment"), None);
    }

    #[test]
    fn test_read_feed_forwards_readings() {
        let (tx, rx) = mpsc::channel();
        let input = Cursor::new("1 2\n\nbad\n3 4\n");
        read_feed(input, tx, Arc::new(AtomicBool::new(true)), Path::new("mem"));
        let readings: Vec<SensorReading> = rx.try_iter().collect();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].beta, Some(1.0));
        assert_eq!(readings[1], SensorReading { beta: None, gamma: None });
        assert_eq!(readings[2].gamma, Some(4.0));
    }

    #[test]
    fn test_stopped_reader_forwards_nothing() {
        let (tx, rx) = mpsc::channel();
        read_feed(Cursor::new("1 2\n"), tx, Arc::new(AtomicBool::new(false)), Path::new("mem"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_missing_feed_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let (_feed, mut prompt) = SensorFeed::new(dir.path().join("missing"));
        assert!(matches!(prompt.request(), Err(PermissionError::Unavailable(_))));
    }

    fn wait_for_reader_exit(prompt: &SensorPrompt) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while prompt.reader_alive.load(Ordering::Acquire) {
            assert!(Instant::now() < deadline, "reader never exited");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_prompt_reads_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "8 -9").unwrap();
        file.flush().unwrap();

        let (feed, mut prompt) = SensorFeed::new(file.path().to_path_buf());
        assert_eq!(prompt.request().unwrap(), PermissionState::Granted);

        let reading = feed.readings.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(
            reading,
            SensorReading {
                beta: Some(8.0),
                gamma: Some(-9.0)
            }
        );
    }

    #[test]
    fn test_prompt_restarts_reader_after_feed_ends() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2").unwrap();
        file.flush().unwrap();

        let (feed, mut prompt) = SensorFeed::new(file.path().to_path_buf());
        assert_eq!(prompt.request().unwrap(), PermissionState::Granted);
        feed.readings.recv_timeout(Duration::from_secs(5)).unwrap();
        wait_for_reader_exit(&prompt);

        // The grant lapsed with the reader, so the feed is opened again.
        assert_eq!(prompt.request().unwrap(), PermissionState::Granted);
        let reading = feed.readings.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(reading.beta, Some(1.0));
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_without_writer_does_not_block_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("orientation.fifo");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status().unwrap();
        assert!(status.success());

        let (feed, mut prompt) = SensorFeed::new(fifo.clone());
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            let granted = prompt.request();
            done_tx.send(granted).unwrap();
        });
        let granted = done_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("prompt blocked on a FIFO with no writer");
        assert_eq!(granted.unwrap(), PermissionState::Granted);

        // A late writer still reaches the reader.
        let mut writer = std::fs::OpenOptions::new().write(true).open(&fifo).unwrap();
        writeln!(writer, "3 4").unwrap();
        drop(writer);
        let reading = feed.readings.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(reading.gamma, Some(4.0));
    }
}
