use std::{env, path::PathBuf};

pub const USAGE: &str = "Usage: calgrid [--config PATH] [--theme NAME] [--no-sample] [--help]";

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub theme: Option<String>,
    pub sample: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            theme: None,
            sample: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Run(CliOptions),
    Help,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--theme" => {
                let name = args
                    .next()
                    .ok_or_else(|| "--theme requires a name".to_string())?;
                options.theme = Some(name);
            }
            "--no-sample" => {
                options.sample = false;
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliMode::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_with_sample_events() {
        assert_eq!(parse_args(args(&[])), Ok(CliMode::Run(CliOptions::default())));
    }

    #[test]
    fn all_options_are_parsed() {
        let mode = parse_args(args(&["--config", "/tmp/cal.toml", "--theme", "nord", "--no-sample"]));

        assert_eq!(
            mode,
            Ok(CliMode::Run(CliOptions {
                config_path: Some(PathBuf::from("/tmp/cal.toml")),
                theme: Some("nord".to_string()),
                sample: false,
            }))
        );
    }

    #[test]
    fn help_wins_over_other_flags() {
        assert_eq!(parse_args(args(&["--no-sample", "--help"])), Ok(CliMode::Help));
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--theme"])).is_err());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert_eq!(
            parse_args(args(&["--agenda"])),
            Err("Unknown argument: --agenda".to_string())
        );
    }
}
