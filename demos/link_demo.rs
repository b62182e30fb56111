//! Scripted link session example.
//!
//! Boots the firmware against a simulated radio, then replays what a phone
//! app does when the user taps "vibrate": connect, send "ON", send "OFF"
//! half a second later, disconnect.
//!
//! Pins and radio are simulated, so this runs on the host.

use std::time::Duration;

use haptic_link::error::DriverError;
use haptic_link::link::{AdvertisingPayload, StackError, WirelessStack};
use haptic_link::{
    Firmware, FirmwareConfig, Level, LinkEvent, MotorControllerBuilder, PinDriver, PinId,
};

/// Delay provider backed by the host clock.
struct HostDelay;

impl embedded_hal::delay::DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Pin driver that prints every level change.
struct PrintingPins;

impl PinDriver for PrintingPins {
    fn is_ready(&self) -> bool {
        true
    }

    fn configure(&mut self, pin: PinId) -> Result<(), DriverError> {
        println!("  [gpio] P0.{:02} -> output, low", pin.0);
        Ok(())
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), DriverError> {
        println!("  [gpio] P0.{:02} -> {:?}", pin.0, level);
        Ok(())
    }
}

/// Radio that accepts every request.
struct SimulatedRadio;

impl WirelessStack for SimulatedRadio {
    fn enable(&mut self) -> Result<(), StackError> {
        println!("  [radio] enabled");
        Ok(())
    }

    fn register_service(&mut self) -> Result<(), StackError> {
        println!("  [radio] UART service registered");
        Ok(())
    }

    fn start_advertising(
        &mut self,
        name: &str,
        payload: &AdvertisingPayload,
    ) -> Result<(), StackError> {
        println!(
            "  [radio] advertising '{}' with {:02X?}",
            name,
            payload.advertising_data()
        );
        Ok(())
    }
}

fn main() {
    println!("=== Link Session Example ===\n");

    let config = FirmwareConfig::default();

    let motor = MotorControllerBuilder::new()
        .driver(PrintingPins)
        .delay(HostDelay)
        .from_config(&config)
        .build()
        .expect("Failed to build motor controller");

    println!("Booting:");
    let mut radio = SimulatedRadio;
    let mut firmware = Firmware::start(motor, &mut radio, &config);
    println!("Boot stage: {:?}\n", firmware.stage());

    let phone: u16 = 0x0001;

    println!("Phone connects:");
    firmware
        .handle_event(LinkEvent::Connected(phone))
        .expect("connect");

    println!("\nPhone sends \"ON\":");
    firmware
        .handle_event(LinkEvent::DataReceived {
            handle: &phone,
            data: b"ON",
        })
        .expect("on");
    println!("Motor: {:?}", firmware.motor_state());

    std::thread::sleep(Duration::from_millis(500));

    println!("\nPhone sends \"OFF\":");
    firmware
        .handle_event(LinkEvent::DataReceived {
            handle: &phone,
            data: b"OFF",
        })
        .expect("off");
    println!("Motor: {:?}", firmware.motor_state());

    println!("\nPhone disconnects:");
    firmware
        .handle_event(LinkEvent::Disconnected {
            handle: &phone,
            reason: 0x13,
        })
        .expect("disconnect");
    println!("Motor: {:?}", firmware.motor_state());

    println!("\n=== Example Complete ===");
}
