//! Boot sequence and top-level event entry point.
//!
//! Brings the motor pins and the wireless stack up in a fixed order. A failed
//! stage is logged and stops the sequence; the firmware stays alive with the
//! motor off instead of panicking or rebooting, leaving recovery to an
//! external watchdog.

use embedded_hal::delay::DelayNs;

use crate::config::FirmwareConfig;
use crate::driver::PinDriver;
use crate::error::{Error, LinkError, Result};
use crate::link::{AdvertisingPayload, LinkEvent, LinkSessionManager, WirelessStack};
use crate::motor::{MotorController, MotorState};

/// Boot stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootStage {
    /// Configure the motor control pins.
    MotorPins,
    /// Enable the wireless stack.
    StackEnable,
    /// Register the UART service.
    ServiceRegistration,
    /// Start advertising.
    Advertising,
    /// Everything is up; events are accepted.
    Ready,
}

/// Running firmware: the link session manager plus how far boot got.
pub struct Firmware<H, D, DELAY>
where
    D: PinDriver,
    DELAY: DelayNs,
{
    link: LinkSessionManager<H, D, DELAY>,
    stage: BootStage,
    fault: Option<Error>,
}

impl<H, D, DELAY> Firmware<H, D, DELAY>
where
    H: PartialEq,
    D: PinDriver,
    DELAY: DelayNs,
{
    /// Run the boot sequence.
    ///
    /// Never fails outright: check [`is_ready`](Self::is_ready) and
    /// [`fault`](Self::fault) for the outcome.
    pub fn start<S>(
        mut motor: MotorController<D, DELAY>,
        stack: &mut S,
        config: &FirmwareConfig,
    ) -> Self
    where
        S: WirelessStack,
    {
        info!("Vibration motor controller starting");

        let mut stage = BootStage::MotorPins;
        let fault = match boot(&mut motor, stack, config, &mut stage) {
            Ok(()) => {
                stage = BootStage::Ready;
                info!("Setup complete, advertising as '{}'", config.device_name());
                None
            }
            Err(e) => {
                error!("Boot halted at {:?}: {:?}", stage, e);
                Some(e)
            }
        };

        Self {
            link: LinkSessionManager::new(motor),
            stage,
            fault,
        }
    }

    /// Stage reached: `Ready` on success, otherwise the stage that failed.
    #[inline]
    pub fn stage(&self) -> BootStage {
        self.stage
    }

    /// Whether every boot stage succeeded.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.stage == BootStage::Ready
    }

    /// Error that halted boot, if any.
    #[inline]
    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }

    /// Get the link session manager.
    #[inline]
    pub fn link(&self) -> &LinkSessionManager<H, D, DELAY> {
        &self.link
    }

    /// Current motor state.
    #[inline]
    pub fn motor_state(&self) -> MotorState {
        self.link.motor_state()
    }

    /// Dispatch one inbound event.
    ///
    /// Dropped with a warning if boot did not complete.
    pub fn handle_event(&mut self, event: LinkEvent<'_, H>) -> Result<()> {
        if !self.is_ready() {
            warn!("Event dropped, boot halted at {:?}", self.stage);
            return Ok(());
        }
        self.link.handle_event(event)
    }
}

fn boot<D, DELAY, S>(
    motor: &mut MotorController<D, DELAY>,
    stack: &mut S,
    config: &FirmwareConfig,
    stage: &mut BootStage,
) -> Result<()>
where
    D: PinDriver,
    DELAY: DelayNs,
    S: WirelessStack,
{
    *stage = BootStage::MotorPins;
    motor.init()?;

    *stage = BootStage::StackEnable;
    stack
        .enable()
        .map_err(|e| Error::Link(LinkError::StackEnable(e)))?;

    *stage = BootStage::ServiceRegistration;
    stack
        .register_service()
        .map_err(|e| Error::Link(LinkError::ServiceRegistration(e)))?;

    *stage = BootStage::Advertising;
    let payload = AdvertisingPayload::from_config(config)?;
    stack
        .start_advertising(config.device_name(), &payload)
        .map_err(|e| Error::Link(LinkError::AdvertisingStart(e)))?;

    Ok(())
}
