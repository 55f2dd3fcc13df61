//! Cucumber BDD suite for otp-enroll
//!
//! The shared `World` lives here; step definitions are compiled into the
//! `cucumber_tests` test binary (`tests/steps/`), scenarios under `features/`.

pub mod features;
