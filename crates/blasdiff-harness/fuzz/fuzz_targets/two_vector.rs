#![no_main]
use libfuzzer_sys::{Corpus, fuzz_target};

/// Differential target for the two-vector routines (daxpy, dcopy, ddot,
/// dswap, drot).
fuzz_target!(|data: &[u8]| -> Corpus {
    if blasdiff_harness::fuzz_two_vector(data).is_accepted() {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
