use cucumber::World;
use otp_enroll_core::{SetupError, TotpSetup, TotpSetupGenerator};

#[derive(Debug, World)]
pub struct EnrollWorld {
    pub generator: TotpSetupGenerator,
    pub last_setup: Option<TotpSetup>,
    pub previous_setup: Option<TotpSetup>,
    pub last_error: Option<SetupError>,
}

impl Default for EnrollWorld {
    fn default() -> Self {
        Self {
            generator: TotpSetupGenerator::new(),
            last_setup: None,
            previous_setup: None,
            last_error: None,
        }
    }
}

impl EnrollWorld {
    /// Store the outcome of a generation call, keeping the previous success around
    pub fn record(&mut self, result: Result<TotpSetup, SetupError>) {
        match result {
            Ok(setup) => {
                self.previous_setup = self.last_setup.take();
                self.last_setup = Some(setup);
                self.last_error = None;
            }
            Err(e) => {
                self.last_setup = None;
                self.last_error = Some(e);
            }
        }
    }

    pub fn setup(&self) -> &TotpSetup {
        self.last_setup.as_ref().expect("No setup generated")
    }
}
