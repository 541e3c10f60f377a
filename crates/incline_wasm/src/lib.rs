//! WASM bridge for the Incline core library.
//!
//! One [`WasmSession`] owns the whole simulator state for a page. The
//! UI drives it through merge-patch updates and reads plain objects
//! back; nothing here computes, it only translates.

mod forces;
mod guided;
mod session;

pub use session::WasmSession;
