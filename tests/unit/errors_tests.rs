/*!
 * Tests for error types and conversions
 */

use std::io;
use std::path::PathBuf;
use legendcount::errors::{AppError, CorpusError};

#[test]
fn test_corpusError_directoryRead_shouldDisplayPathAndCause() {
    let error = CorpusError::DirectoryRead {
        path: PathBuf::from("legends"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to read directory"));
    assert!(display.contains("legends"));
    assert!(display.contains("No such file or directory"));
}

#[test]
fn test_corpusError_fromRead_withInvalidData_shouldBeEncoding() {
    let error = CorpusError::from_read(
        "a.srt",
        io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    );
    assert!(matches!(error, CorpusError::Encoding { .. }));
    assert!(format!("{}", error).contains("not valid UTF-8"));
}

#[test]
fn test_corpusError_fromRead_withPermissionDenied_shouldBeFileRead() {
    let error = CorpusError::from_read("a.srt", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert!(matches!(error, CorpusError::FileRead { .. }));
    assert_eq!(error.path(), &PathBuf::from("a.srt"));
}

#[test]
fn test_appError_fromCorpusError_shouldWrapCorrectly() {
    let corpus_error = CorpusError::Encoding { path: PathBuf::from("b.srt") };
    let app_error: AppError = corpus_error.into();

    assert!(matches!(app_error, AppError::Corpus(_)));
    assert!(format!("{}", app_error).contains("Corpus error"));
}

#[test]
fn test_appError_fromIoError_shouldBeOutputError() {
    let app_error: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
    assert!(matches!(app_error, AppError::Output(_)));
    assert!(format!("{}", app_error).contains("pipe closed"));
}
