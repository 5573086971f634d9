use std::ffi::OsString;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{info, Level};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("zenbmp")
        .about("Decode an uncompressed BMP, print its headers and show it")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .help("BMP file to open")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("noinfo")
            .long("noinfo")
            .action(ArgAction::SetTrue)
            .help("Do not print the header summary"))
        .arg(Arg::new("nodisplay")
            .long("nodisplay")
            .action(ArgAction::SetTrue)
            .help("Do not display the image"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about decoding progress"))
}

/// Rewrite `-noinfo` / `-nodisplay` to their double-dash forms so clap does
/// not read them as bundles of short flags.
pub fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let long = match arg.to_str() {
                Some("-noinfo") => Some("--noinfo"),
                Some("-nodisplay") => Some("--nodisplay"),
                _ => None,
            };
            long.map_or(arg, OsString::from)
        })
        .collect()
}

/// Exit status for a command line clap cannot parse. Kept apart from every
/// `ErrorKind::exit_code()`.
pub const USAGE_EXIT_CODE: i32 = 64;

/// Exit status for a clap parse result: help and version requests succeed,
/// anything else is a usage error.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => USAGE_EXIT_CODE,
    }
}

/// Options the viewer passes on to the decode and display steps.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub path: PathBuf,
    pub show_info: bool,
    pub show_display: bool,
}

/// `None` when no file was given.
pub fn parse_options(options: &ArgMatches) -> Option<ViewOptions> {
    let path = options.get_one::<PathBuf>("in")?.clone();
    Some(ViewOptions {
        path,
        show_info: !options.get_flag("noinfo"),
        show_display: !options.get_flag("nodisplay"),
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if simple_logger::init_with_level(log_level).is_ok() {
        info!("Log level :{}", log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let args = normalize_args(args.iter().map(OsString::from));
        create_cmd_args().get_matches_from(args)
    }

    #[test]
    fn legacy_single_dash_flags_are_accepted() {
        let opts = parse_options(&matches(&["zenbmp", "a.bmp", "-noinfo", "-nodisplay"])).unwrap();
        assert_eq!(opts.path, PathBuf::from("a.bmp"));
        assert!(!opts.show_info);
        assert!(!opts.show_display);
    }

    #[test]
    fn flags_are_independent() {
        let opts = parse_options(&matches(&["zenbmp", "a.bmp", "--nodisplay"])).unwrap();
        assert!(opts.show_info);
        assert!(!opts.show_display);
    }

    #[test]
    fn unknown_flags_get_their_own_exit_code() {
        let args = normalize_args(["zenbmp", "a.bmp", "-nodisplay", "-foo"].map(OsString::from));
        let err = create_cmd_args().try_get_matches_from(args).unwrap_err();
        let code = usage_exit_code(&err);
        assert_eq!(code, USAGE_EXIT_CODE);
        assert!((1..=17).all(|kind_code| kind_code != code));
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = create_cmd_args()
            .try_get_matches_from(["zenbmp", "--help"])
            .unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);
    }

    #[test]
    fn missing_file_yields_no_options() {
        assert!(parse_options(&matches(&["zenbmp"])).is_none());
    }
}
