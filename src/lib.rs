pub mod config;
pub mod intake;
pub mod observability;

pub use config::Config;
pub use intake::HttpIntake;
