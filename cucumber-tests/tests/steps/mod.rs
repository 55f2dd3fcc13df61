pub mod setup_steps;
