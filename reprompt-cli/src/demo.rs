//! The six demonstrations: type-checking for a whole number, a fractional
//! number and the configured element, then the same three with range-checking.

use reprompt::utils::{ElementConfig, InputSource, MessageFormatter, ReadError, Terminal};
use std::io::Write;

const INSTRUCTIONS: &str = "
Demonstration of repetition type-checking
data validation and repetition range checking
data validation.

For the prompts that follow, try typing inputs
outside of the given range, or even using a
wrong data type.

";

pub fn instruct<S, W, F>(terminal: &mut Terminal<S, W, F>) -> Result<(), ReadError>
where
    S: InputSource,
    W: Write,
    F: MessageFormatter,
{
    terminal.prompt(INSTRUCTIONS)
}

pub fn run<S, W, F>(
    terminal: &mut Terminal<S, W, F>,
    element: &ElementConfig,
) -> Result<(), ReadError>
where
    S: InputSource,
    W: Write,
    F: MessageFormatter,
{
    terminal.prompt("Enter a whole number: ")?;
    let whole: i32 = terminal.read("a whole number")?;
    echo(terminal, whole)?;

    terminal.prompt("Enter a fractional number: ")?;
    let fractional: f32 = terminal.read("a fractional number")?;
    echo(terminal, fractional)?;

    terminal.prompt(&format!("Enter an element ({}): ", element.name()))?;
    let value = terminal.read_element(element)?;
    echo(terminal, value)?;

    terminal.prompt("Enter a whole number between 6 and 37: ")?;
    let whole: i32 = terminal.read_in_range("a whole number", 6, 37)?;
    echo(terminal, whole)?;

    terminal.prompt("Enter a fractional number between 5.5 and 42.8: ")?;
    let fractional: f32 = terminal.read_in_range("a fractional number", 5.5, 42.8)?;
    echo(terminal, fractional)?;

    terminal.prompt(&format!(
        "Enter an element ({}) between {} and {}: ",
        element.name(),
        element.low(),
        element.high()
    ))?;
    let value = terminal.read_element_in_range(element)?;
    echo(terminal, value)
}

fn echo<S, W, F>(
    terminal: &mut Terminal<S, W, F>,
    value: impl std::fmt::Display,
) -> Result<(), ReadError>
where
    S: InputSource,
    W: Write,
    F: MessageFormatter,
{
    terminal.prompt(&format!("You entered {}\n\n", value))
}
