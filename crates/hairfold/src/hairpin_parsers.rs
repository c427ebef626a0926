use clap::Args;
use anyhow::Result;
use anyhow::bail;
use hf_hairpin::ScanParameters;
use hf_hairpin::PrecursorParameters;
use hf_hairpin::PRECURSOR_MIN_LENGTH_FLOOR;

#[derive(Debug, Args)]
pub struct ScanArguments {
    /// Minimum number of base pairs in a stem.
    #[arg(long, default_value_t = 3)]
    pub min_stem: usize,

    /// Minimum number of unpaired bases in a hairpin loop.
    #[arg(long, default_value_t = 3)]
    pub min_loop: usize,

    /// Maximum number of unpaired bases in a hairpin loop.
    #[arg(long, default_value_t = 30)]
    pub max_loop: usize,

    /// Disallow G-U wobble pairs.
    #[arg(long)]
    pub no_wobble: bool,
}

impl ScanArguments {
    pub fn parameters(&self) -> ScanParameters {
        ScanParameters::new(self.min_stem, self.min_loop, self.max_loop)
            .with_wobble(!self.no_wobble)
    }
}

#[derive(Debug, Args)]
pub struct PrecursorArguments {
    /// Minimum precursor length (never below 55).
    #[arg(long, default_value_t = 55)]
    pub min_length: usize,

    /// Maximum precursor length.
    #[arg(long, default_value_t = 120)]
    pub max_length: usize,

    /// Maximum length of the mature and star arms.
    #[arg(long, default_value_t = 22)]
    pub mature_length: usize,
}

impl PrecursorArguments {
    /// Contradicting bounds are not an error for the analyzer, but
    /// on the command line they are almost certainly a typo.
    pub fn validate(&self) -> Result<()> {
        let min = self.min_length.max(PRECURSOR_MIN_LENGTH_FLOOR);
        if self.max_length < min {
            bail!("max-length ({}) must be at least {} (min-length, never below {})",
                self.max_length, min, PRECURSOR_MIN_LENGTH_FLOOR);
        }
        if self.mature_length == 0 {
            bail!("mature-length must be > 0");
        }
        Ok(())
    }

    pub fn parameters(&self) -> PrecursorParameters {
        PrecursorParameters {
            min_length: self.min_length,
            max_length: self.max_length,
            mature_length: self.mature_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_arguments() {
        let args = ScanArguments { min_stem: 4, min_loop: 3, max_loop: 8, no_wobble: true };
        let params = args.parameters();
        assert_eq!(params, ScanParameters::new(4, 3, 8).with_wobble(false));
    }

    #[test]
    fn test_precursor_arguments_validate() {
        let ok = PrecursorArguments { min_length: 20, max_length: 60, mature_length: 22 };
        assert!(ok.validate().is_ok());
        assert_eq!(ok.parameters().effective_min_length(), 55);

        let bad = PrecursorArguments { min_length: 20, max_length: 50, mature_length: 22 };
        assert!(bad.validate().is_err());

        let bad = PrecursorArguments { min_length: 60, max_length: 100, mature_length: 0 };
        assert!(bad.validate().is_err());
    }
}
