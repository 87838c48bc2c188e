use std::time::{Duration, Instant};

use crate::{
    core::error::Result,
    discovery::DiscoveredFile,
    reporting::logging,
    store::RecordStore,
    ui::ProgressReporter,
    upload::encoder::record_for,
};

/// Outcome of a completed upload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub duration: Duration,
}

/// Write one record per file, in order, stopping at the first failure.
///
/// Records written before a failure stay written; the remaining files are
/// not read.
pub async fn upload_all<S>(
    store: &S,
    files: &[DiscoveredFile],
    kind: &str,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<UploadSummary>
where
    S: RecordStore + Sync + ?Sized,
{
    let start = Instant::now();
    if let Some(progress) = progress.as_deref_mut() {
        progress.start_upload(files.len());
    }

    let mut uploaded = 0;
    for file in files {
        logging::log_uploading(file.relative_path());

        let outcome = match record_for(file, kind) {
            Ok(record) => store.put_record(&record).await,
            Err(err) => Err(err),
        };

        if let Err(err) = outcome {
            let elapsed = start.elapsed().as_millis();
            logging::log_upload_complete(uploaded, files.len(), elapsed);
            if let Some(progress) = progress.as_deref() {
                progress.finish_upload(uploaded, files.len());
            }
            return Err(err);
        }

        uploaded += 1;
        if let Some(progress) = progress.as_deref() {
            progress.update_upload(uploaded);
        }
    }

    let duration = start.elapsed();
    logging::log_upload_complete(uploaded, files.len(), duration.as_millis());
    if let Some(progress) = progress.as_deref() {
        progress.finish_upload(uploaded, files.len());
    }

    Ok(UploadSummary { uploaded, duration })
}
