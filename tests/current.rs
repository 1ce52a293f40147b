//! End-to-end behavior of the process-wide source context.
//!
//! `SourceContext::current()` reads `source-context.json` from the directory
//! of the running executable, so this test plants a real file next to the
//! test binary. It lives in its own test binary on purpose: the cached
//! context is process-wide, and nothing else may touch it first.

use source_context::{SourceContext, SOURCE_CONTEXT_FILE};
use std::path::PathBuf;
use std::sync::Barrier;

const THREADS: usize = 16;

/// Path of the source context file next to this test binary.
fn planted_file() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // test binary name
    path.push(SOURCE_CONTEXT_FILE);
    path
}

#[test]
fn test_current_loads_once_and_caches_for_the_process() {
    let path = planted_file();
    std::fs::write(
        &path,
        r#"{"url":"https://github.com/example/repo","git":{"revisionId":"abc123"}}"#,
    )
    .unwrap();

    // Release every thread into the first-ever current() call at once; all
    // of them must land on the same initialized instance.
    let barrier = Barrier::new(THREADS);
    let contexts: Vec<&'static SourceContext> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    SourceContext::current()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = contexts[0];
    for context in &contexts {
        assert!(
            std::ptr::eq(first, *context),
            "concurrent callers observed different instances"
        );
    }
    assert_eq!(
        first.git_repo_url(),
        Some("https://github.com/example/repo")
    );
    assert_eq!(first.git_sha(), Some("abc123"));

    // Deleting the file must change nothing: it was read exactly once and
    // the result is cached for the process lifetime.
    std::fs::remove_file(&path).unwrap();
    let after_delete = SourceContext::current();
    assert!(std::ptr::eq(first, after_delete));
    assert_eq!(after_delete.git_sha(), Some("abc123"));
    assert_eq!(
        after_delete.git_repo_url(),
        Some("https://github.com/example/repo")
    );
}
