// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Io, Level, Output, OutputConfig, Pin, Pull};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, DataBits, Parity, StopBits, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use defmt::info;
use max_led_bridge::EdgeNotifier;
use max_led_bridge::config::MAX_BAUD_RATE;
use max_led_bridge::hal::{
    GpioPatternPort, UartByteSink, UartByteSource, install_switch_interrupt,
};
use max_led_bridge::tasks::color_render_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Konfiguriert Pins, UART und Schalter-Interrupt, startet die Embassy
/// Runtime und spawnt den Render-Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED-Port: GPIO18..21, High = alle LEDs aus (active-low)
    let led_gpios = [
        peripherals.GPIO18.number(),
        peripherals.GPIO19.number(),
        peripherals.GPIO20.number(),
        peripherals.GPIO21.number(),
    ];
    let led_pins = [
        Output::new(peripherals.GPIO18, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO19, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO20, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO21, Level::High, OutputConfig::default()),
    ];
    let port =
        GpioPatternPort::new(led_pins, led_gpios).expect("LED pins must be consecutive GPIOs");

    // Serielle Verbindung zu MAX: 9600 8N1, keine Flusskontrolle
    let uart_config = UartConfig::default()
        .with_baudrate(MAX_BAUD_RATE)
        .with_data_bits(DataBits::_8)
        .with_parity(Parity::None)
        .with_stop_bits(StopBits::_1);
    let uart = Uart::new(peripherals.UART1, uart_config)
        .expect("Failed to configure UART1")
        .with_rx(peripherals.GPIO4)
        .with_tx(peripherals.GPIO5);
    let (rx, tx) = uart.split();
    info!("UART1 ready @ {} baud", MAX_BAUD_RATE);

    // Schalter: TX gehört ab hier nur noch dem Interrupt-Handler
    let mut io = Io::new(peripherals.IO_MUX);
    let switch = Input::new(peripherals.GPIO9, InputConfig::default().with_pull(Pull::Up));
    install_switch_interrupt(&mut io, switch, EdgeNotifier::new(UartByteSink::new(tx)));

    // Spawn Render Task (Vordergrund-Schleife: RX → LED-Port)
    spawner
        .spawn(color_render_task(
            UartByteSource::new(rx),
            port,
            peripherals.GPIO8,
            peripherals.RMT,
        ))
        .unwrap();

    // Main-Loop: schläft (Arbeit läuft im Task und im Interrupt)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
