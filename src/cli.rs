// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::camera::NavigationMode;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cube-sandbox")]
#[command(about = "Textured cubes with trackball and first-person cameras", long_about = None)]
pub struct Cli {
    /// Settings file (JSON); command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial navigation mode
    #[arg(long, value_enum)]
    pub mode: Option<NavigationMode>,

    /// Camera movement speed in units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Image applied to every cube face (PNG or JPEG); a checkerboard otherwise
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Hide the overlay panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mode_and_speed() {
        let cli = Cli::parse_from(["cube-sandbox", "--mode", "first-person", "--speed", "4"]);
        assert_eq!(cli.mode, Some(NavigationMode::FirstPerson));
        assert_eq!(cli.speed, Some(4.0));
        assert!(!cli.no_ui);
    }

    #[test]
    fn flags_are_optional() {
        let cli = Cli::parse_from(["cube-sandbox"]);
        assert!(cli.mode.is_none());
        assert!(cli.config.is_none());
        assert!(cli.texture.is_none());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["cube-sandbox", "--mode", "orbit"]).is_err());
    }
}
