//! Four-function calculator behind two text fields.

use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FromStr for Op {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        match s {
            "add" => Ok(Op::Add),
            "subtract" => Ok(Op::Subtract),
            "multiply" => Ok(Op::Multiply),
            "divide" => Ok(Op::Divide),
            _ => Err(()),
        }
    }
}

/// Where user-facing failures go. Called at most once per submission.
pub trait Alert {
    fn alert(&mut self, msg: &str);
}

/// Decimal or exponent notation, or the spelled-out `Infinity`. The
/// lowercase `inf`/`nan` spellings `f64::from_str` also takes are refused.
fn parse_field(raw: &str) -> Result<f64> {
    let s = raw.trim();
    match s {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return Err(Error::InvalidNumber);
    }
    match s.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(Error::InvalidNumber),
    }
}

/// Number-to-text the way the result field shows it: `Infinity`, `NaN`,
/// and exponent form `1e+21` outside `[1e-6, 1e21)`.
fn display_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let a = v.abs();
    if a != 0.0 && !(1e-6..1e21).contains(&a) {
        let e = format!("{v:e}");
        return match e.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => e,
        };
    }
    format!("{v}")
}

pub fn evaluate(op: Op, lhs: f64, rhs: f64) -> Result<f64> {
    match op {
        Op::Add => Ok(lhs + rhs),
        Op::Subtract => Ok(lhs - rhs),
        Op::Multiply => Ok(lhs * rhs),
        Op::Divide if rhs == 0.0 => Err(Error::DivideByZero),
        Op::Divide => Ok(lhs / rhs),
    }
}

/// Handle one form submission. Returns the result text, or `None` after
/// raising exactly one alert.
pub fn submit(op: &str, lhs: &str, rhs: &str, alert: &mut impl Alert) -> Option<String> {
    let operands = parse_field(lhs).and_then(|a| Ok((a, parse_field(rhs)?)));
    let (a, b) = match operands {
        Ok(v) => v,
        Err(e) => {
            log::debug!("rejected operands {lhs:?}, {rhs:?}");
            alert.alert(&e.to_string());
            return None;
        }
    };
    let Ok(op) = op.parse::<Op>() else {
        return Some("Result: Unknown operation".to_owned());
    };
    match evaluate(op, a, b) {
        Ok(v) => Some(format!("Result: {}", display_number(v))),
        Err(e) => {
            alert.alert(&e.to_string());
            None
        }
    }
}
