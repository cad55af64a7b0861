//! Bridge Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das Ein-Byte-Protokoll zu MAX, die LED-Muster,
//! die HAL-Traits sowie Color Renderer und Edge Notifier.

#![no_std]

pub mod logic;
pub mod mirror;
pub mod notifier;
pub mod renderer;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{SELF_TEST_SEQUENCE, merge_port_bits, pattern_for_code, port_shift_for};
pub use mirror::StatusMirror;
pub use notifier::EdgeNotifier;
pub use renderer::ColorRenderer;
pub use traits::{
    ByteSink, ByteSource, LedError, LinkError, PatternPort, PortLayoutError, StatusIndicator,
    spin_until_ready,
};
pub use types::{OutputPattern, PATTERN_MASK, RenderStep, TOGGLE_NOTIFICATION};
