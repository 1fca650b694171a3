#![no_main]
use libfuzzer_sys::{Corpus, fuzz_target};

/// Differential target for the single-vector routines (idamax, dnrm2,
/// dasum, dscal). A divergence between the two families panics out of
/// the entry point and is reported as a crash.
fuzz_target!(|data: &[u8]| -> Corpus {
    if blasdiff_harness::fuzz_one_vector(data).is_accepted() {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
