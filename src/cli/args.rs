use clap::Parser;
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_FILE_PATH;

#[derive(Parser, Debug)]
#[command(name = "min-temp-predictor")]
#[command(about = "Predict overnight minimum temperature from midday observations and report its error")]
#[command(version)]
pub struct Cli {
    /// Delimited input table with Midday_Temperature, Midday_Dew_Point, Wind_Speed and Cloud_Cover columns
    #[arg(default_value = DEFAULT_FILE_PATH)]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_path() {
        let cli = Cli::try_parse_from(["min-temp-predictor"]).unwrap();
        assert_eq!(cli.file, PathBuf::from(DEFAULT_FILE_PATH));
    }

    #[test]
    fn test_file_path_override() {
        let cli = Cli::try_parse_from(["min-temp-predictor", "data/leuchars.csv"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("data/leuchars.csv"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["min-temp-predictor", "--verbose"]).is_err());
    }
}
