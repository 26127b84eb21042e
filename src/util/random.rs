//! Injectable randomness for move selection.
//!
//! The browser implementation draws from `Math.random`; tests inject a
//! deterministic source so random-move behavior is checkable.

/// A source of random indices.
pub trait RandomSource {
    /// Pick an index in `0..len`, or `None` when `len` is zero.
    fn pick_index(&mut self, len: usize) -> Option<usize>;
}

/// Browser randomness via `js_sys::Math::random`. Outside the browser
/// (SSR builds) it never picks, which keeps automatic moves client-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        #[cfg(feature = "hydrate")]
        {
            // Math.random() is in [0, 1), so the floor is always < len.
            let index = (js_sys::Math::random() * len as f64).floor() as usize;
            Some(index.min(len - 1))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
