//! Digit counter demo for the Pico-based LED matrix board.
//!
//! Button A (GPIO5) advances the displayed digit, button B (GPIO6)
//! retreats it, both with wraparound. The 5x5 WS2812 matrix hangs off
//! GPIO7; the red status LED on GPIO13 blinks five times a second while
//! the loop runs.

#![no_std]
#![no_main]

use core::cell::RefCell;

use critical_section::Mutex;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio,
    pac::{self, interrupt},
    pio::PIOExt,
    watchdog::Watchdog,
};
use palette::Srgb;
use rtt_target::{rprintln, rtt_init_print};

use digit_matrix::{
    BlinkController, ButtonChannel, ButtonEvents, ButtonInput, DigitPanel, TimeSource,
};
use rp_pico_demo::buttons::ActiveLowButton;
use rp_pico_demo::status_led::PushPullStatusLed;
use rp_pico_demo::time::{HardwareTimer, Instant, SystickDelay};
use rp_pico_demo::ws2812::Ws2812Bus;

const WS2812_PIN_ID: u8 = 7;

/// Foreground color for lit pixels: a dim violet
const FOREGROUND: Srgb<u8> = Srgb::new(50, 0, 60);

type IncrementPin = gpio::Pin<gpio::bank0::Gpio5, gpio::FunctionSioInput, gpio::PullUp>;
type DecrementPin = gpio::Pin<gpio::bank0::Gpio6, gpio::FunctionSioInput, gpio::PullUp>;

/// Everything the button interrupt needs: the debouncing input machine
/// (which owns the pins) and the monotonic clock.
struct ButtonIrqState {
    input: ButtonInput<'static, ActiveLowButton<IncrementPin>, ActiveLowButton<DecrementPin>, Instant>,
    clock: HardwareTimer,
}

/// Pending-event hand-off between the interrupt handler and the main loop.
static BUTTON_EVENTS: ButtonEvents = ButtonEvents::new();

static BUTTON_IRQ: Mutex<RefCell<Option<ButtonIrqState>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Status LED on GPIO13, blinked from the main loop
    let status = PushPullStatusLed(pins.gpio13.into_push_pull_output());
    let delay = SystickDelay::new(cortex_m::delay::Delay::new(
        core.SYST,
        clocks.system_clock.freq().to_Hz(),
    ));
    let mut blink = BlinkController::new(status, delay);

    // Buttons: active-low with pull-ups, falling-edge interrupts
    let increment_pin = pins.gpio5.into_pull_up_input();
    let decrement_pin = pins.gpio6.into_pull_up_input();
    increment_pin.set_interrupt_enabled(gpio::Interrupt::EdgeLow, true);
    decrement_pin.set_interrupt_enabled(gpio::Interrupt::EdgeLow, true);

    let input = ButtonInput::new(
        ActiveLowButton(increment_pin),
        ActiveLowButton(decrement_pin),
        &BUTTON_EVENTS,
    );
    critical_section::with(|cs| {
        BUTTON_IRQ.borrow(cs).replace(Some(ButtonIrqState {
            input,
            clock: HardwareTimer::new(timer),
        }));
    });

    // WS2812 chain on GPIO7 via PIO0
    let _ws_data: gpio::Pin<_, gpio::FunctionPio0, _> = pins.gpio7.into_function();
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let bus = Ws2812Bus::new(
        &mut pio,
        sm0,
        WS2812_PIN_ID,
        clocks.system_clock.freq().to_Hz(),
    );

    // Renders digit 0 before the loop starts
    let mut panel = DigitPanel::new(bus, FOREGROUND);
    rprintln!("showing digit {}", panel.digit().value());

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    loop {
        blink.run_cycle();

        if panel.poll_events(&BUTTON_EVENTS) {
            rprintln!("showing digit {}", panel.digit().value());
        }
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        let mut state = BUTTON_IRQ.borrow_ref_mut(cs);
        let Some(state) = state.as_mut() else {
            return;
        };

        let now = state.clock.now();

        let increment = state.input.increment_pin_mut();
        if increment.0.interrupt_status(gpio::Interrupt::EdgeLow) {
            increment.0.clear_interrupt(gpio::Interrupt::EdgeLow);
            state.input.handle_edge(ButtonChannel::Increment, now);
        }

        let decrement = state.input.decrement_pin_mut();
        if decrement.0.interrupt_status(gpio::Interrupt::EdgeLow) {
            decrement.0.clear_interrupt(gpio::Interrupt::EdgeLow);
            state.input.handle_edge(ButtonChannel::Decrement, now);
        }
    });
}
