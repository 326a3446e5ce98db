//! Use cases - the orchestration logic behind the service entry point

pub mod aggregate;
pub mod run_wall_bounce;
