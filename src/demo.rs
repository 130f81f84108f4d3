use crate::config::DemoConfig;
use crate::errors::{fail_with_cannot_convert_value, ProgramError};
use crate::numeric::root;
use crate::pointer_array::PointerArray;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::rc::Rc;

fn label(text: &str, cfg: &DemoConfig) -> String {
    if cfg.color {
        text.red().bold().to_string()
    } else {
        text.to_string()
    }
}

fn report_root(out: &mut impl Write, value: f64, cfg: &DemoConfig) -> Result<()> {
    match root(value) {
        Ok(result) => writeln!(out, "root({}) = {}", value, result)?,
        Err(e) => writeln!(out, "{} {}", label("Domain error:", cfg), e)?,
    }
    Ok(())
}

/// Runs the fixed demonstration sequence, writing one line per step.
pub fn run_demo(out: &mut impl Write, cfg: &DemoConfig) -> Result<()> {
    // A specific kind raised as ConversionError, intercepted as the root kind.
    let raised: Result<(), ProgramError> =
        fail_with_cannot_convert_value().map_err(ProgramError::from);
    if let Err(e) = raised {
        writeln!(out, "{} {}", label("ProgramError:", cfg), e.describe())?;
    }

    let mut errors: PointerArray<ProgramError> = PointerArray::new();
    errors.add(Rc::new(ProgramError::insufficient_privileges()));
    errors.add(Rc::new(ProgramError::cannot_cast_to_interface()));
    let first = errors.at(0).context("reading first stored error")?;
    writeln!(out, "{} {}", label("ProgramError:", cfg), first.describe())?;

    let mut strings: PointerArray<String> = PointerArray::new();
    strings.add(Rc::new("Hello".to_string()));
    strings.add(Rc::new("World".to_string()));
    let second = strings.at(1).context("reading second stored string")?;
    writeln!(out, "stringArray[1] = {}", second)?;

    match root(-5.0) {
        Ok(result) => writeln!(out, "Result: {}", result)?,
        Err(e) => writeln!(out, "{} {}", label("Domain error:", cfg), e)?,
    }

    for &value in &cfg.sqrt_inputs {
        report_root(out, value, cfg)?;
    }

    out.flush().context("flushing demo output")?;
    Ok(())
}
