// Task-Modul: Enthält die Embassy Tasks
//
// Der Render-Task ist die Vordergrund-Schleife. Der Schalter läuft
// nicht als Task, sondern direkt im GPIO-Interrupt (siehe hal::switch).

pub mod render;

// Re-export Tasks für einfachen Import
pub use render::{color_render_logic, color_render_task};
