//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! [`crate::channels`].

pub mod bus;
pub mod button;
pub mod display;
pub mod encoder;
pub mod hopper;
pub mod input;

pub use bus::bus_task;
pub use button::button_task;
pub use display::display_power_task;
pub use encoder::encoder_task;
pub use hopper::{hopper_task, HopperConfig};
pub use input::input_task;
