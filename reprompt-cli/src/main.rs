mod demo;

use clap::{Parser, ValueEnum};
use reprompt::utils::{
    ConfigError, ElementConfig, ElementPreset, JsonFormatter, LineSource, MessageFormatter,
    RawFormatter, Terminal, TerminalOptions,
};
use std::io;

/// Repetition type-checking and range-checking data validation, demonstrated
/// on a whole number, a fractional number and a configurable element.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Element type to use, with its stock name and bounds.
    #[arg(short, long, value_enum, default_value_t = Preset::WholeNumber)]
    preset: Preset,

    /// Element configuration as JSON, overrides --preset.
    /// e.g. '{"kind":"float","name":"fractional number","low":28.6,"high":73.2}'
    #[arg(short, long)]
    element: Option<String>,

    /// How retry messages are written.
    #[arg(short, long, value_enum, default_value_t = Format::Raw)]
    format: Format,

    /// Give up after this many invalid inputs for a single prompt.
    #[arg(short, long)]
    max_retries: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    WholeNumber,
    BigWholeNumber,
    FractionalNumber,
    BigFractionalNumber,
    Character,
    Boolean,
    String,
}

impl From<Preset> for ElementPreset {
    fn from(value: Preset) -> Self {
        match value {
            Preset::WholeNumber => ElementPreset::WholeNumber,
            Preset::BigWholeNumber => ElementPreset::BigWholeNumber,
            Preset::FractionalNumber => ElementPreset::FractionalNumber,
            Preset::BigFractionalNumber => ElementPreset::BigFractionalNumber,
            Preset::Character => ElementPreset::Character,
            Preset::Boolean => ElementPreset::Boolean,
            Preset::String => ElementPreset::String,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Raw,
    Json,
}

fn element_config(args: &Args) -> Result<ElementConfig, ConfigError> {
    match &args.element {
        Some(json) => ElementConfig::from_json(json),
        None => Ok(ElementPreset::from(args.preset).config()),
    }
}

fn main() {
    let args = Args::parse();

    let element = element_config(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });

    let formatter: Box<dyn MessageFormatter> = match args.format {
        Format::Raw => Box::new(RawFormatter),
        Format::Json => Box::new(JsonFormatter),
    };

    let options = TerminalOptions {
        max_retries: args.max_retries,
        ..TerminalOptions::default()
    };

    let mut terminal =
        Terminal::new(LineSource::stdin(), io::stdout(), formatter).with_options(options);

    if let Err(e) = demo::instruct(&mut terminal).and_then(|_| demo::run(&mut terminal, &element))
    {
        eprintln!("\n{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reprompt::utils::{ElementKind, ElementValue};

    fn args(flags: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("reprompt").chain(flags.iter().copied()))
            .expect("flags should parse")
    }

    #[test]
    fn test_cli_default_preset_is_whole_number() {
        let element = element_config(&args(&[])).unwrap();
        assert_eq!(element.name(), "whole number");
        assert_eq!(element.low(), &ElementValue::Integer(17));
        assert_eq!(element.high(), &ElementValue::Integer(52));
    }

    #[test]
    fn test_cli_big_presets() {
        let element = element_config(&args(&["--preset", "big-whole-number"])).unwrap();
        assert_eq!(element.kind(), ElementKind::Integer);
        assert_eq!(element.name(), "big whole number");

        let element = element_config(&args(&["--preset", "big-fractional-number"])).unwrap();
        assert_eq!(element.kind(), ElementKind::Float);
        assert_eq!(element.name(), "big fractional number");
    }

    #[test]
    fn test_cli_every_preset_is_selectable() {
        for name in [
            "whole-number",
            "big-whole-number",
            "fractional-number",
            "big-fractional-number",
            "character",
            "boolean",
            "string",
        ] {
            let parsed = args(&["--preset", name]);
            let element = element_config(&parsed).unwrap();
            assert_eq!(element, ElementPreset::from(parsed.preset).config());
        }
    }

    #[test]
    fn test_cli_element_json_overrides_preset() {
        let element = element_config(&args(&[
            "--preset",
            "character",
            "--element",
            r#"{"kind":"integer","name":"age","low":0,"high":120}"#,
        ]))
        .unwrap();
        assert_eq!(element.name(), "age");
        assert_eq!(element.kind(), ElementKind::Integer);
    }
}
