//! Detent - Interface Board Firmware
//!
//! Firmware for the STM32F042K6 front-panel interface board. Reports a
//! rotary encoder and a coin hopper level sensor to the host over the
//! I2C bus, and powers up the display.

#![no_std]
#![no_main]

mod board;
mod channels;
mod config;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::adc::{self, Adc, AdcChannel};
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Flex, Level, Output, Pull, Speed};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::peripherals::{ADC1, I2C1};
use embassy_time::Duration;
use {defmt_rtt as _, panic_probe as _};

use detent_core::display::DisplayRails;
use detent_core::{BoardCommands, BoardConfig};
use detent_hal_stm32f0::i2c::slave_addr_config;
use detent_hal_stm32f0::{EdgeLine, Iwdg, OutputLine, PulledUpLine};
use detent_protocol::Transport;

use crate::board::BoardControl;
use crate::channels::{ENCODER, MEASUREMENT, PENDING_INPUT};
use crate::config::board_config;
use crate::tasks::HopperConfig;

bind_interrupts!(struct Irqs {
    I2C1 => i2c::EventInterruptHandler<I2C1>, i2c::ErrorInterruptHandler<I2C1>;
    ADC1 => adc::InterruptHandler<ADC1>;
    EXTI0_1 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI0_1>;
    EXTI4_15 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI4_15>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent interface firmware starting...");

    let p = embassy_stm32::init(Default::default());

    let config = match board_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid board config: {:?}, using defaults", e);
            BoardConfig::default()
        }
    };
    info!(
        "Board config: address={:#04x}, threshold={}, settle={}ms",
        config.address.get(),
        config.hopper_threshold,
        config.settle_ms
    );

    // Display power lines (PB0=RES with external pull-up, PA2=EN_3V3, PA3=EN_BOOST)
    let rails = DisplayRails::new(
        PulledUpLine::new(Flex::new(p.PB0)),
        OutputLine::new(Output::new(p.PA2, Level::Low, Speed::Low)),
        OutputLine::new(Output::new(p.PA3, Level::Low, Speed::Low)),
    );

    // Bus target (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.timeout = Duration::from_millis(100);

    let i2c = I2c::new(
        p.I2C1, p.PB6, p.PB7, Irqs, p.DMA1_CH2, p.DMA1_CH3, i2c_config,
    )
    .into_slave_multimaster(slave_addr_config(&config.target()));

    let transport = Transport::new(
        BoardCommands::new(&ENCODER, &PENDING_INPUT, &MEASUREMENT),
        BoardControl::new(Iwdg::new(p.IWDG)),
    );

    // Encoder (PA4=A, PA5=B, PA1=Button)
    let enc_a = EdgeLine::new(ExtiInput::new(p.PA4, p.EXTI4, Pull::Up, Irqs));
    let enc_b = EdgeLine::new(ExtiInput::new(p.PA5, p.EXTI5, Pull::Up, Irqs));
    let enc_btn = EdgeLine::new(ExtiInput::new(p.PA1, p.EXTI1, Pull::Up, Irqs));

    // Hopper sensor (PA0=phototransistor, PA7=IR LED, PA6=level output)
    let adc = Adc::new(p.ADC1, Irqs);
    let sensor = p.PA0.degrade_adc();
    let led = OutputLine::new(Output::new(p.PA7, Level::Low, Speed::Low));
    let hopper_out = OutputLine::new(Output::new(p.PA6, Level::Low, Speed::Low));
    let hopper_config = HopperConfig {
        threshold: config.hopper_threshold,
        settle_ms: config.settle_ms,
    };

    // Spawn tasks
    spawner.spawn(tasks::display_power_task(rails)).unwrap();
    spawner.spawn(tasks::encoder_task(enc_a, enc_b)).unwrap();
    spawner.spawn(tasks::button_task(enc_btn)).unwrap();
    spawner.spawn(tasks::input_task()).unwrap();
    spawner
        .spawn(tasks::hopper_task(adc, sensor, led, hopper_out, hopper_config))
        .unwrap();
    spawner.spawn(tasks::bus_task(i2c, transport)).unwrap();

    info!("All tasks spawned");
}
