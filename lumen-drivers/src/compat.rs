//! embedded-hal 1.0 interoperability
//!
//! Adapters that let the driver run on peripherals exposing the
//! standard embedded-hal traits. The display protocol has no error
//! path, so fallible HAL operations are degraded to fire-and-forget
//! here; a system that needs bus-fault detection must supervise above
//! the driver.

use lumen_hal::{DelayMs, OutputPin, SpiBus};

/// Adapter from `embedded_hal::digital::OutputPin`
///
/// Tracks the last driven level locally because the embedded-hal base
/// trait has no state query.
pub struct OutputPinAdapter<P> {
    pin: P,
    high: bool,
}

impl<P: embedded_hal::digital::OutputPin> OutputPinAdapter<P> {
    /// Wrap a HAL pin; the level is reported as low until first driven
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    /// Release the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: embedded_hal::digital::OutputPin> OutputPin for OutputPinAdapter<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Adapter from `embedded_hal::spi::SpiBus`
pub struct SpiBusAdapter<S> {
    spi: S,
}

impl<S: embedded_hal::spi::SpiBus> SpiBusAdapter<S> {
    /// Wrap a HAL SPI bus
    pub fn new(spi: S) -> Self {
        Self { spi }
    }

    /// Release the wrapped bus
    pub fn release(self) -> S {
        self.spi
    }
}

impl<S: embedded_hal::spi::SpiBus> SpiBus for SpiBusAdapter<S> {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.read(buf)
    }
}

/// Adapter from `embedded_hal::delay::DelayNs`
pub struct DelayAdapter<D> {
    delay: D,
}

impl<D: embedded_hal::delay::DelayNs> DelayAdapter<D> {
    /// Wrap a HAL delay source
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: embedded_hal::delay::DelayNs> DelayMs for DelayAdapter<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct HalPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for HalPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for HalPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_pin_adapter_tracks_level() {
        let mut pin = OutputPinAdapter::new(HalPin::default());
        assert!(pin.is_set_low());

        pin.set_high();
        assert!(pin.is_set_high());
        assert!(pin.release().high);
    }

    #[derive(Default)]
    struct HalDelay {
        total_ns: u64,
    }

    impl embedded_hal::delay::DelayNs for HalDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_delay_adapter_converts_ms() {
        let mut delay = DelayAdapter::new(HalDelay::default());
        delay.delay_ms(3);
        assert_eq!(delay.delay.total_ns, 3_000_000);
    }
}
