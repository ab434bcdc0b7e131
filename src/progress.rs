// Progress bars on stderr using indicatif.
// Bars share one MultiProgress and are skipped entirely when disabled (--debug).

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs;
use std::path::Path;

pub struct ProgressManager {
    multi: Option<MultiProgress>,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        let multi = if enabled {
            Some(MultiProgress::with_draw_target(ProgressDrawTarget::stderr()))
        } else {
            None
        };
        Self { multi }
    }

    pub fn is_enabled(&self) -> bool {
        self.multi.is_some()
    }

    // Byte-progress bar sized to the file on disk, labelled with its file name.
    pub fn new_file_bar(&self, path: &str, label: &str) -> Option<ProgressBar> {
        let mp = self.multi.as_ref()?;
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let bar = mp.add(ProgressBar::new(size));
        bar.set_style(byte_style());
        bar.set_prefix(format!("{} {}", label, basename(path)));
        Some(bar)
    }

    // Counter bar for per-record work (SQL statements).
    pub fn new_record_bar(&self, total: u64, label: &str) -> Option<ProgressBar> {
        let mp = self.multi.as_ref()?;
        let bar = mp.add(ProgressBar::new(total));
        bar.set_style(record_style());
        bar.set_prefix(label.to_string());
        Some(bar)
    }
}

fn byte_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:28} {bytes:>10}/{total_bytes:<10} [{bar:40}] {percent:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█ ")
}

fn record_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:28} {pos:>6}/{len:<6} [{bar:40}] {percent:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█ ")
}

// File name only, for compact labels and SQL header comments.
pub fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}
