use super::*;

#[test]
fn upload_progress_defaults_incomplete() {
    let progress = UploadProgress::default();
    assert!(!progress.can_start());
    assert_eq!(progress.start_label(), "Upload Data Files First");
}

#[test]
fn one_upload_is_not_enough() {
    let mut progress = UploadProgress::default();
    progress.mark(UploadKind::Scenarios);
    assert!(progress.is_uploaded(UploadKind::Scenarios));
    assert!(!progress.is_uploaded(UploadKind::TrainingResources));
    assert!(!progress.can_start());
}

#[test]
fn both_uploads_enable_start() {
    let mut progress = UploadProgress::default();
    progress.mark(UploadKind::TrainingResources);
    progress.mark(UploadKind::Scenarios);
    assert!(progress.can_start());
    assert_eq!(progress.start_label(), "Start Assessment");
}

#[test]
fn repeated_upload_is_idempotent() {
    let mut progress = UploadProgress::default();
    progress.mark(UploadKind::Scenarios);
    progress.mark(UploadKind::Scenarios);
    assert_eq!(progress, UploadProgress { scenarios: true, training: false });
}
