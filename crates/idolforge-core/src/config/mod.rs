mod settings;

pub use settings::{Availability, ForgeConfig};
