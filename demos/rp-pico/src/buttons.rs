use digit_matrix::ButtonPin;
use embedded_hal::digital::InputPin;

/// Adapts an active-low input pin to the digit-matrix `ButtonPin` trait.
///
/// The buttons sit between the GPIO and ground with the internal pull-up
/// enabled, so a low level means pressed.
pub struct ActiveLowButton<P: InputPin>(pub P);

impl<P: InputPin> ButtonPin for ActiveLowButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.0.is_low().unwrap_or(false)
    }
}
