// Schalter-Interrupt: jede Flanke am Schalter-Pin → 'C' an MAX
//
// Schalter-Pin und Notifier (mit UART TX) liegen in statischen
// critical_section::Mutex, weil der Handler keine Parameter bekommt.

use core::cell::RefCell;

use bridge_core::EdgeNotifier;
use critical_section::Mutex;
use defmt::{error, info, trace};
use esp_hal::gpio::{Event, Input, Io};
use esp_hal::handler;

use crate::hal::UartByteSink;

/// Edge Notifier mit der echten UART-Sendeseite
pub type SwitchNotifier = EdgeNotifier<UartByteSink<'static>>;

static SWITCH: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));
static NOTIFIER: Mutex<RefCell<Option<SwitchNotifier>>> = Mutex::new(RefCell::new(None));

/// Registriert den GPIO-Handler und aktiviert den Interrupt auf jede Flanke
///
/// # Parameter
/// - `io`: IO_MUX Treiber (Handler gilt für alle GPIO-Interrupts)
/// - `switch`: Schalter-Pin, bereits als Input mit Pull-Up konfiguriert
/// - `notifier`: Edge Notifier, übernimmt die UART-Sendeseite
pub fn install_switch_interrupt(
    io: &mut Io<'_>,
    mut switch: Input<'static>,
    notifier: SwitchNotifier,
) {
    io.set_interrupt_handler(switch_edge_handler);

    critical_section::with(|cs| {
        switch.listen(Event::AnyEdge);
        SWITCH.borrow_ref_mut(cs).replace(switch);
        NOTIFIER.borrow_ref_mut(cs).replace(notifier);
    });

    info!("Switch: interrupt armed (any edge)");
}

/// GPIO Interrupt-Handler
///
/// Läuft komplett in einer Critical Section: Interrupts sind maskiert, der
/// Handler kann sich nicht selbst unterbrechen. Eine Flanke während des
/// Sendens setzt das Latch erneut und löst danach einen weiteren Aufruf aus.
#[handler]
fn switch_edge_handler() {
    critical_section::with(|cs| {
        let mut switch = SWITCH.borrow_ref_mut(cs);
        let Some(switch) = switch.as_mut() else {
            return;
        };

        // Interrupt von einem anderen GPIO
        if !switch.is_interrupt_set() {
            return;
        }
        switch.clear_interrupt();

        if let Some(notifier) = NOTIFIER.borrow_ref_mut(cs).as_mut() {
            match notifier.on_edge(cs) {
                Ok(()) => trace!("Switch: edge notified"),
                Err(e) => error!("Switch: notification failed: {}", e),
            }
        }
    });
}
