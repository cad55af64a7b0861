// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von bridge-core
pub use bridge_core::{
    ByteSink, ByteSource, ColorRenderer, EdgeNotifier, LedError, LinkError, OutputPattern,
    PatternPort, RenderStep, StatusIndicator, TOGGLE_NOTIFICATION,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate baut nur für riscv32imac-unknown-none-elf (esp-hal, esp-rtos).
// Alles Testbare liegt deshalb in bridge-core:
//
// - Mapping Color Code → OutputPattern, Register-Merge, Selbsttest-Sequenz
// - ColorRenderer (Poll-Schleife, Selbsttest) gegen den PatternPort/ByteSource Trait
// - StatusMirror gegen den StatusIndicator Trait
// - Lage des LED-Ports im OUT-Register (port_shift_for)
// - EdgeNotifier gegen den ByteSink Trait
//
// Die Host-Tests in bridge-tests fahren diese Logik mit Mock-Implementierungen.
// Hier bleiben nur die dünnen Trait-Implementierungen für die Hardware (hal/)
// und die Task-Verdrahtung (tasks/, bin/main.rs).
