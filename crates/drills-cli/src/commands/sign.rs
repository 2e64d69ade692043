use std::io::{BufRead, Write};

use anyhow::Result;
use drills_core::input::Prompter;
use drills_core::sign::{classify_str, describe, Sign, NOT_A_NUMBER_MESSAGE};
use drills_core::DrillError;

use crate::config::DrillsConfig;

/// Classify one number. A value that is not a number is reported on
/// `output` and the run still succeeds; only I/O failures are errors.
pub fn run<R: BufRead, W: Write>(
    config: &DrillsConfig,
    arg: Option<&str>,
    input: R,
    output: W,
) -> Result<Option<Sign>> {
    let mut prompter = Prompter::new(input, output).show_prompts(config.show_prompts);

    let raw = match arg {
        Some(raw) => Ok(raw.to_string()),
        None => prompter.ask_line("Enter a number to check", "a number to check"),
    };

    match raw.and_then(|raw| classify_str(&raw)) {
        Ok((value, sign)) => {
            writeln!(prompter.writer(), "{}", describe(value, sign))?;
            Ok(Some(sign))
        }
        Err(DrillError::Io(e)) => Err(e.into()),
        Err(e) => {
            log::warn!("[Drills::Sign] Rejected input: {}", e);
            writeln!(prompter.writer(), "{}", NOT_A_NUMBER_MESSAGE)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet() -> DrillsConfig {
        DrillsConfig {
            show_prompts: false,
            ..DrillsConfig::default()
        }
    }

    fn classify(line: &str) -> (Option<Sign>, String) {
        let mut out = Vec::new();
        let sign = run(&quiet(), None, Cursor::new(line.to_string()), &mut out).unwrap();
        (sign, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_each_sign() {
        assert_eq!(
            classify("5\n"),
            (Some(Sign::Positive), "The number 5 is Positive\n".to_string())
        );
        assert_eq!(
            classify("-3.2\n"),
            (Some(Sign::Negative), "The number -3.2 is Negative\n".to_string())
        );
        assert_eq!(
            classify("0\n"),
            (Some(Sign::Zero), "The number 0 is Zero\n".to_string())
        );
    }

    #[test]
    fn text_is_reported_not_raised() {
        let (sign, text) = classify("abc\n");
        assert_eq!(sign, None);
        assert_eq!(text, format!("{}\n", NOT_A_NUMBER_MESSAGE));
    }

    #[test]
    fn closed_input_is_reported_not_raised() {
        let (sign, text) = classify("");
        assert_eq!(sign, None);
        assert!(text.contains("did not enter a number"));
    }

    #[test]
    fn argument_skips_the_prompt() {
        let mut out = Vec::new();
        run(&DrillsConfig::default(), Some("12"), Cursor::new(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "The number 12 is Positive\n");
    }
}
