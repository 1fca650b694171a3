//! Fault isolation: run a unit of work, converting a panic into a value.
//!
//! A routine under test may panic on a contract violation (zero stride,
//! short buffer). The harness must observe that panic on both families
//! and compare the payloads, so the boundary here catches the unwind and
//! turns it into a [`Fault`] instead of letting it escape. There is no
//! retry and no recovery; the caller decides what a captured fault means.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A captured abnormal termination, made comparable across families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    /// The panic payload as text. `&str` and `String` payloads are carried
    /// verbatim; anything else collapses to a placeholder tagged with the
    /// payload's type id.
    pub message: String,
}

impl Fault {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            // No readable text to carry; keep the type id so payloads of
            // different types still compare unequal. Two non-string
            // payloads of the same type remain indistinguishable.
            format!("<non-string panic payload: {:?}>", payload.type_id())
        };
        Fault { message }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Run `f`, capturing a panic as `Err(Fault)`.
///
/// The closure typically mutates operand clones owned by the caller;
/// `AssertUnwindSafe` is sound here because a half-mutated clone is
/// exactly what the oracle wants to compare after a fault.
pub fn run_captured<T>(f: impl FnOnce() -> T) -> Result<T, Fault> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| Fault::from_payload(payload.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_return_passes_through() {
        assert_eq!(run_captured(|| 41 + 1), Ok(42));
    }

    #[test]
    fn str_panic_is_captured_verbatim() {
        let fault = run_captured(|| panic!("blas: zero x stride")).unwrap_err();
        assert_eq!(fault.message, "blas: zero x stride");
    }

    #[test]
    fn formatted_panic_is_captured_verbatim() {
        let n = 7;
        let fault = run_captured(|| panic!("bad n: {n}")).unwrap_err();
        assert_eq!(fault.message, "bad n: 7");
    }

    #[test]
    fn non_string_payload_gets_placeholder() {
        let fault =
            run_captured(|| std::panic::panic_any(1234usize)).unwrap_err();
        assert!(fault.message.starts_with("<non-string panic payload"));
    }

    #[test]
    fn non_string_payloads_of_different_types_compare_unequal() {
        let a = run_captured(|| std::panic::panic_any(1234usize)).unwrap_err();
        let b = run_captured(|| std::panic::panic_any(1234u32)).unwrap_err();
        let c = run_captured(|| std::panic::panic_any(1234usize)).unwrap_err();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn mutations_before_the_fault_are_visible() {
        let mut buf = vec![0.0f64; 3];
        let result: Result<(), Fault> = run_captured(|| {
            buf[0] = 1.0;
            panic!("stop");
        });
        assert!(result.is_err());
        assert_eq!(buf, vec![1.0, 0.0, 0.0]);
    }
}
