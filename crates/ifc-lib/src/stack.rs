//! Stack growth for the recursive presenter.
//!
//! Declaration graphs nest arbitrarily deep (scopes in scopes, templates of
//! templates). Each recursive step runs through [`ensure_sufficient_stack`],
//! which grows the stack on native targets and is a passthrough on wasm32.

/// Grow when less than this remains (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
