//! WS2812 serial output over a PIO state machine.
//!
//! Implements the digit-matrix `PixelBus` by pushing packed GRB words into
//! the PIO TX FIFO. The state machine generates the 800 kHz pulse-coded
//! signaling; each FIFO word carries one pixel in its top 24 bits.

use digit_matrix::{PixelBus, PixelWord};
use rp_pico::hal::pio::{
    Buffers, PIO, PIOBuilder, PIOExt, PinDir, Running, ShiftDirection, StateMachine,
    StateMachineIndex, Tx, UninitStateMachine,
};

/// Wire bit rate of the chain.
const BIT_RATE_HZ: u32 = 800_000;

/// Cycles per wire bit produced by the program below (T1 + T2 + T3).
const CYCLES_PER_BIT: u32 = 10;

/// Pixel bus over a running WS2812 state machine.
pub struct Ws2812Bus<P: PIOExt, SM: StateMachineIndex> {
    tx: Tx<(P, SM)>,
    _sm: StateMachine<(P, SM), Running>,
}

impl<P: PIOExt, SM: StateMachineIndex> Ws2812Bus<P, SM> {
    /// Installs the WS2812 program and starts the state machine on `pin_id`.
    ///
    /// The pin must already be handed to the PIO function. Words are pulled
    /// 24 bits at a time, most significant bit first, matching the packed
    /// GRB word layout.
    pub fn new(
        pio: &mut PIO<P>,
        sm: UninitStateMachine<(P, SM)>,
        pin_id: u8,
        system_clock_hz: u32,
    ) -> Self {
        // Side-set pulse shaping: T1 = 2, T2 = 5, T3 = 3 cycles
        let program = pio_proc::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]",
            "    jmp !x do_zero side 1 [1]",
            "do_one:",
            "    jmp bitloop    side 1 [4]",
            "do_zero:",
            "    nop            side 0 [4]",
            ".wrap",
        );

        let installed = pio.install(&program.program).unwrap();

        let bit_clock_hz = BIT_RATE_HZ * CYCLES_PER_BIT;
        let int = (system_clock_hz / bit_clock_hz) as u16;
        let frac = (((system_clock_hz % bit_clock_hz) as u64 * 256) / bit_clock_hz as u64) as u8;

        let (mut sm, _, tx) = PIOBuilder::from_installed_program(installed)
            .side_set_pin_base(pin_id)
            .out_shift_direction(ShiftDirection::Left)
            .autopull(true)
            .pull_threshold(24)
            .buffers(Buffers::OnlyTx)
            .clock_divisor_fixed_point(int, frac)
            .build(sm);
        sm.set_pindirs([(pin_id, PinDir::Output)]);

        Self {
            tx,
            _sm: sm.start(),
        }
    }
}

impl<P: PIOExt, SM: StateMachineIndex> PixelBus for Ws2812Bus<P, SM> {
    fn write(&mut self, word: PixelWord) {
        // One indivisible serial encoding per word; spin until the FIFO
        // accepts it.
        while !self.tx.write(word.value()) {
            core::hint::spin_loop();
        }
    }
}
