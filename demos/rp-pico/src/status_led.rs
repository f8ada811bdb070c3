use digit_matrix::StatusLed;
use embedded_hal::digital::OutputPin;

/// Drives a push-pull output pin as the status indicator.
pub struct PushPullStatusLed<P: OutputPin>(pub P);

impl<P: OutputPin> StatusLed for PushPullStatusLed<P> {
    fn set_state(&mut self, on: bool) {
        if on {
            let _ = self.0.set_high();
        } else {
            let _ = self.0.set_low();
        }
    }
}
