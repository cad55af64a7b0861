// Color Render Task - Color Codes von MAX → LED-Port
use bridge_core::{
    ByteSource, ColorRenderer, PatternPort, RenderStep, SELF_TEST_SEQUENCE, StatusIndicator,
    StatusMirror,
};
use defmt::{debug, error, info, warn};
use embassy_futures::yield_now;
use embassy_time::Timer;
use esp_hal_smartled::smart_led_buffer;

use crate::config::{RMT_CLOCK_MHZ, SELF_TEST_STEP_MS, STATUS_LED_BRIGHTNESS};
use crate::hal::{GpioPatternPort, RmtStatusLed, UartByteSource};

/// Color Render Logic - Vordergrund-Schleife ohne Hardware-Abhängigkeit
///
/// Pollt die Empfangsseite (non-blocking). Liegt ein Byte an, wird es sofort
/// übersetzt und auf den Port gelegt (IDLE → DISPATCH → IDLE). Ohne Byte gibt
/// die Schleife die CPU an den Executor zurück.
///
/// # Parameter
/// - `source`: UART RX (Hardware oder Mock)
/// - `renderer`: Color Renderer mit dem LED-Port
/// - `mirror`: Status-LED Spiegelung
pub async fn color_render_logic<R: ByteSource, P: PatternPort, L: StatusIndicator>(
    mut source: R,
    mut renderer: ColorRenderer<P>,
    mut mirror: StatusMirror<L>,
) -> ! {
    info!("Render: waiting for color codes");

    loop {
        match renderer.poll_mirrored(&mut source, &mut mirror) {
            Ok(RenderStep::Dispatched { code, pattern }) => {
                info!("Render: {=u8:#x} -> {}", code, pattern);
                if let Some(e) = mirror.take_error() {
                    error!("Status LED: {}", e);
                }
            }
            Ok(RenderStep::Idle) => yield_now().await,
            Err(e) => {
                // Symbol verwerfen, Port behält das letzte Muster
                warn!("Render: dropped symbol ({}), keeping {}", e, renderer.current());
                yield_now().await;
            }
        }
    }
}

/// Color Render Task - Embassy Task für die Vordergrund-Schleife
///
/// Initialisiert die Status-LED, führt den Selbsttest aus und ruft dann
/// die `color_render_logic()` Funktion auf.
///
/// # Parameter
/// - `source`: UART1 RX
/// - `port`: LED-Port (GPIO18..21)
/// - `gpio8`: GPIO8 Peripheral für die Status-LED
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn color_render_task(
    source: UartByteSource<'static>,
    port: GpioPatternPort<'static>,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    // Ohne Status-LED läuft die Bridge weiter, nur ohne Spiegelung
    let status = RmtStatusLed::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer)
        .inspect_err(|e| error!("Status LED init failed: {}", e))
        .ok();
    let mut mirror = StatusMirror::new(status, STATUS_LED_BRIGHTNESS);

    let mut renderer = ColorRenderer::new(port);
    mirror.show(renderer.current());
    debug!("Render: port initialized to {}", renderer.current());

    if SELF_TEST_STEP_MS > 0 {
        info!("Self-test: {} steps @ {}ms", SELF_TEST_SEQUENCE.len(), SELF_TEST_STEP_MS);
    }
    renderer
        .self_test(&mut mirror, SELF_TEST_STEP_MS, Timer::after_millis)
        .await;

    if let Some(e) = mirror.take_error() {
        error!("Status LED: {} ({} failed writes)", e, mirror.failures());
    }

    color_render_logic(source, renderer, mirror).await
}
