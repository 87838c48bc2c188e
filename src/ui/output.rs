use crate::{
    discovery::DiscoveredFile,
    upload::{UploadSummary, record_key},
};

/// Echo the two inputs of the run
pub fn display_run_header(files_dir: &str, credentials_file: &str) {
    println!("files directory: '{files_dir}'");
    println!("credentials file: '{credentials_file}'");
}

/// List the records a real run would write
pub fn display_dry_run(files: &[DiscoveredFile], kind: &str) {
    println!("\nDry run: {} record(s) of kind {kind}", files.len());
    for (i, line) in dry_run_lines(files).iter().enumerate() {
        println!("{:4}. {line}", i + 1);
    }
}

fn dry_run_lines(files: &[DiscoveredFile]) -> Vec<String> {
    files
        .iter()
        .map(|file| {
            let encoding = if file.is_binary() { "base64" } else { "text" };
            format!("{} ({encoding})", record_key(file.relative_path()))
        })
        .collect()
}

/// Final line of a successful run
pub fn display_summary(summary: &UploadSummary, base_url: &str) {
    println!(
        "\nUploaded {} file(s) to {base_url} in {}ms",
        summary.uploaded,
        summary.duration.as_millis()
    );
}
