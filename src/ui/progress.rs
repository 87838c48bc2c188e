use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const UPLOAD_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records uploaded ({eta})";

pub struct ProgressReporter {
    upload_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            upload_progress: None,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_upload(&mut self, total_records: usize) {
        if !self.enabled {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template(UPLOAD_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_records as u64);
        pb.set_style(style);
        pb.set_message("Uploading records");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.upload_progress = Some(pb);
    }

    pub fn update_upload(&self, current: usize) {
        if let Some(ref pb) = self.upload_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_upload(&self, uploaded: usize, total: usize) {
        if let Some(ref pb) = self.upload_progress {
            if uploaded == total {
                pb.finish_with_message("✓ Upload complete");
            } else {
                pb.abandon_with_message(format!("✗ Upload aborted ({uploaded}/{total})"));
            }
        }
    }
}
