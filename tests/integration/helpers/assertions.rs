//! Assertions shared by the integration tests.

use std::process::Output;

/// Asserts that the command exited successfully, printing its stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Asserts that the command failed and that stderr mentions `needle`.
pub fn assert_failure_mentions(output: &Output, needle: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "Command unexpectedly succeeded");
    assert!(stderr.contains(needle), "Expected '{needle}' in stderr: {stderr}");
}

/// Number of positions at which two equal-length strings differ.
pub fn mismatches(a: &str, b: &str) -> usize {
    assert_eq!(a.len(), b.len(), "{a} and {b} differ in length");
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Asserts every pair of barcodes differs in at least `min_distance` positions.
pub fn assert_min_pairwise_distance<S: AsRef<str>>(barcodes: &[S], min_distance: usize) {
    for (i, a) in barcodes.iter().enumerate() {
        for b in &barcodes[i + 1..] {
            let d = mismatches(a.as_ref(), b.as_ref());
            assert!(d >= min_distance, "{} and {} are {d} apart", a.as_ref(), b.as_ref());
        }
    }
}
