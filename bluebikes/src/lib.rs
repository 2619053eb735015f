#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod stations;
pub mod trips;

pub use self::stations::{Station, StationID};
pub use self::trips::Trip;
