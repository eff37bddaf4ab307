pub mod http;

use std::future::Future;

use crate::error::SuicError;

/// Source of raw file content addressed by registry-relative path.
/// Implemented over HTTP for real runs and by in-memory fakes in tests.
pub trait FileSource {
    fn fetch_text(&self, path: &str) -> impl Future<Output = Result<String, SuicError>> + Send;
}
