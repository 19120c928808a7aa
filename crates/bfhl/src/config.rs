use bfhl_core::identity::IdentityRecord;
use bfhl_core::record::Processor;

/// Identity reported in every success record.
#[derive(Debug, Clone, clap::Args)]
pub struct IdentityArgs {
    /// Full name used to derive the user id
    #[clap(long, env = "BFHL_FULL_NAME", global = true, default_value = "john_doe")]
    pub full_name: String,

    /// Email reported in success records
    #[clap(long, env = "BFHL_EMAIL", global = true, default_value = "john@xyz.com")]
    pub email: String,

    /// Roll number reported in success records
    #[clap(long, env = "BFHL_ROLL_NUMBER", global = true, default_value = "ABCD123")]
    pub roll_number: String,
}

impl IdentityArgs {
    pub fn identity(&self) -> IdentityRecord {
        IdentityRecord::new(&self.full_name, &self.email, &self.roll_number)
    }
}

impl crate::Global {
    /// Processor bound to the configured identity and the system clock.
    pub fn processor(&self) -> Processor {
        Processor::with_system_clock(self.identity.identity())
    }
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::Parser;

    #[test]
    fn test_identity_defaults() {
        let app = App::try_parse_from(["bfhl", "process", "a"]).unwrap();
        let identity = app.global.identity.identity();

        assert_eq!(identity.full_name, "john_doe");
        assert_eq!(identity.email, "john@xyz.com");
        assert_eq!(identity.roll_number, "ABCD123");
    }

    #[test]
    fn test_identity_flags_after_subcommand() {
        let app = App::try_parse_from([
            "bfhl",
            "serve",
            "--full-name",
            "Jane_Roe",
            "--roll-number",
            "XYZ789",
        ])
        .unwrap();
        let identity = app.global.identity.identity();

        assert_eq!(identity.full_name, "Jane_Roe");
        assert_eq!(identity.roll_number, "XYZ789");
    }
}
