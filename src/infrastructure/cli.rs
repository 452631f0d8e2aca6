use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 30.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(long, help = "Do not capture the mouse")]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["clonkbot"]).unwrap();

        assert_eq!(cli.tick_rate, 30.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["clonkbot", "-t", "10", "--frame-rate", "24", "--no-mouse"])
            .unwrap();

        assert_eq!(cli.tick_rate, 10.0);
        assert_eq!(cli.frame_rate, 24.0);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_rejects_non_numeric_rate() {
        assert!(Cli::try_parse_from(["clonkbot", "--tick-rate", "fast"]).is_err());
    }
}
