pub mod airframe;
pub mod atmosphere;
pub mod constants;
pub mod drag;
pub mod flight;
pub mod forces;
pub mod kinematics;
pub mod lift;

pub use airframe::{Airframe, ConfigError, DragLaw};
pub use atmosphere::Atmosphere;
pub use flight::{evaluate, FlightState, ForceBreakdown};
