#![no_std]
#![no_main]

use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::digital::{OutputPin, PinState};
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown},
    pac::{self, interrupt},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use lamp_cycler::{
    COOL_PIN, Edge, EdgeEvent, GpioChannels, LampController, LampError, StandardLampConfig,
    TimeDuration, TimeSource, TriggerOutcome, WARM_PIN,
};
use rp_pico_lamp::edge_interrupt;
use rp_pico_lamp::time::{Duration, HardwareTimer, Instant};

type ChannelPin = Pin<DynPinId, FunctionSioOutput, PullDown>;
type ButtonPin = Pin<DynPinId, FunctionSioInput, PullDown>;
type Lamp = LampController<Instant, GpioChannels<ChannelPin, ChannelPin>, 4>;

/// Everything the GPIO interrupt handler owns
struct IrqContext {
    lamp: Lamp,
    button: ButtonPin,
    edge: Edge,
    timer: HardwareTimer,
}

static IRQ_CONTEXT: Mutex<RefCell<Option<IrqContext>>> = Mutex::new(RefCell::new(None));

#[cfg(not(feature = "cool-start"))]
fn lamp_config() -> Result<StandardLampConfig<Duration>, LampError> {
    StandardLampConfig::variant_a()
}

#[cfg(feature = "cool-start")]
fn lamp_config() -> Result<StandardLampConfig<Duration>, LampError> {
    StandardLampConfig::variant_b()
}

/// Why initialization stopped
#[derive(Debug)]
enum Fault {
    Clocks,
    Config(LampError),
    Wiring { pin: u8, expected: u8 },
}

impl From<LampError> for Fault {
    fn from(err: LampError) -> Self {
        Fault::Config(err)
    }
}

fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}

/// Halt with the on-board LED lit
fn fault(led: &mut impl OutputPin, cause: Fault) -> ! {
    rprintln!("FAULT: {:?}", cause);
    let _ = led.set_high();
    halt()
}

fn check_wiring(pin: u8, expected: u8) -> Result<(), Fault> {
    if pin != expected {
        return Err(Fault::Wiring { pin, expected });
    }
    Ok(())
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Warm/Cool Lamp ===");
    rprintln!("Starting initialization...");

    // Get peripherals
    let Some(mut pac) = pac::Peripherals::take() else {
        rprintln!("FAULT: peripherals already taken");
        halt()
    };

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Pins come up before the clocks so a clock fault can still be shown
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut fault_led = pins.led.into_push_pull_output_in_state(PinState::Low);

    // Configure clocks (125 MHz)
    let Ok(clocks) = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    ) else {
        fault(&mut fault_led, Fault::Clocks)
    };

    let config = match lamp_config() {
        Ok(config) => config,
        Err(err) => fault(&mut fault_led, err.into()),
    };

    // Channels sink current; start high (dark) until the startup state is applied
    let warm = pins
        .gpio19
        .into_pull_type::<PullDown>()
        .into_push_pull_output_in_state(PinState::High)
        .into_dyn_pin();
    let cool = pins
        .gpio18
        .into_pull_type::<PullDown>()
        .into_push_pull_output_in_state(PinState::High)
        .into_dyn_pin();

    #[cfg(not(feature = "cool-start"))]
    let button = pins.gpio27.into_pull_down_input().into_dyn_pin();
    #[cfg(feature = "cool-start")]
    let button = pins.gpio28.into_pull_down_input().into_dyn_pin();

    let wiring = check_wiring(warm.id().num, WARM_PIN)
        .and_then(|()| check_wiring(cool.id().num, COOL_PIN))
        .and_then(|()| check_wiring(button.id().num, u8::from(config.button)));
    if let Err(cause) = wiring {
        fault(&mut fault_led, cause);
    }
    rprintln!("Channels configured: warm GPIO{}, cool GPIO{}", WARM_PIN, COOL_PIN);

    let edge = config.edge;
    rprintln!(
        "Button configured on GPIO{} ({:?} edge, {} us debounce)",
        button.id().num,
        edge,
        config.debounce.as_micros()
    );

    let timer = HardwareTimer::new(Timer::new(pac.TIMER, &mut pac.RESETS, &clocks));

    let mut lamp = match LampController::new(GpioChannels::new(warm, cool), config) {
        Ok(lamp) => lamp,
        Err(err) => fault(&mut fault_led, err.into()),
    };

    lamp.start();
    rprintln!(
        "Startup state {}: {:?}",
        lamp.active_index(),
        lamp.current_state()
    );

    button.set_interrupt_enabled(edge_interrupt(edge), true);

    critical_section::with(|cs| {
        IRQ_CONTEXT.borrow(cs).replace(Some(IrqContext {
            lamp,
            button,
            edge,
            timer,
        }));
    });

    // SAFETY: the handler only touches IRQ_CONTEXT, which is fully initialized above
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    rprintln!("=== System Ready ===");

    loop {
        cortex_m::asm::wfi();
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        let mut slot = IRQ_CONTEXT.borrow_ref_mut(cs);
        let Some(ctx) = slot.as_mut() else {
            return;
        };

        let irq = edge_interrupt(ctx.edge);
        if !ctx.button.interrupt_status(irq) {
            return;
        }
        ctx.button.clear_interrupt(irq);

        let event = EdgeEvent::new(ctx.button.id().num, ctx.edge, ctx.timer.now());
        match ctx.lamp.on_edge(event) {
            TriggerOutcome::Accepted => {
                rprintln!(
                    "Press at {} us -> state {}: {:?}",
                    event.timestamp.ticks(),
                    ctx.lamp.active_index(),
                    ctx.lamp.current_state()
                );
            }
            TriggerOutcome::Bounced => {
                rprintln!("Bounce at {} us dropped", event.timestamp.ticks());
            }
            outcome => {
                rprintln!("Edge ignored: {:?}", outcome);
            }
        }
    });
}
