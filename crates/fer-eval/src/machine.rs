//! The stack machine: token parsing, static validation, and execution.
//!
//! Memory cells live for the duration of one [`evaluate`] call; nothing leaks
//! across calls. [`validate`] is a purely lexical check — a program that
//! validates can still underflow the stack at execution time, and callers must
//! handle both failure paths.

use std::collections::HashMap;

use fer_core::errors::{Error, Result};

use crate::op::Op;

/// A parsed instruction token.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// A numeric literal to push.
    Literal(f64),
    /// An operator from the fixed table.
    Operator(Op),
    /// A memory command with its cell key.
    Command(Command),
}

/// A memory command. The key keeps the original case of the instruction
/// text, so `STO:k` and `RCL:K` address different cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Pop the top value and store it, overwriting any previous value.
    Store(char),
    /// Push the stored value; fails if the cell is undefined.
    Recall(char),
    /// Remove the cell. Deleting an absent cell is a no-op.
    Delete(char),
}

/// Parse a single raw token. The token is trimmed; operator and command
/// names are matched case-insensitively, command arguments keep their case.
fn parse_token(raw: &str) -> Result<Token> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(Token::Literal(value));
    }
    let folded = trimmed.to_uppercase();
    if let Some(op) = Op::from_token(&folded) {
        return Ok(Token::Operator(op));
    }
    if let Some((name, arg)) = trimmed.split_once(':') {
        let mut chars = arg.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(Error::InvalidInstruction(trimmed.to_string())),
        };
        return match name.to_uppercase().as_str() {
            "STO" => Ok(Token::Command(Command::Store(key))),
            "RCL" => Ok(Token::Command(Command::Recall(key))),
            "DEL" => Ok(Token::Command(Command::Delete(key))),
            _ => Err(Error::InvalidInstruction(trimmed.to_string())),
        };
    }
    Err(Error::InvalidInstruction(trimmed.to_string()))
}

/// Check that every token of `instructions` is a recognizable literal,
/// operator, or well-formed memory command.
///
/// This is a lexical check only: it does not track stack depth, so a program
/// that validates may still fail at execution time with
/// [`Error::StackUnderflow`] or [`Error::UndefinedMemory`].
pub fn validate(instructions: &[String]) -> Result<()> {
    for raw in instructions {
        parse_token(raw)?;
    }
    Ok(())
}

/// Execute `instructions` over a stack seeded with `initial_stack`.
///
/// The seed values are pushed in order, so the last element starts on top.
/// Returns the top of the stack after the program ran; any values below it
/// are discarded.
pub fn evaluate(instructions: &[String], initial_stack: &[f64]) -> Result<f64> {
    log::trace!(
        "evaluating {} instructions over {} seed values",
        instructions.len(),
        initial_stack.len()
    );
    let mut stack: Vec<f64> = initial_stack.to_vec();
    let mut memory: HashMap<char, f64> = HashMap::new();

    for raw in instructions {
        match parse_token(raw)? {
            Token::Literal(value) => stack.push(value),
            Token::Operator(op) => apply(op, &mut stack)?,
            Token::Command(cmd) => match cmd {
                Command::Store(key) => {
                    let value = pop(&mut stack, "STO")?;
                    memory.insert(key, value);
                }
                Command::Recall(key) => match memory.get(&key) {
                    Some(value) => stack.push(*value),
                    None => return Err(Error::UndefinedMemory(key)),
                },
                Command::Delete(key) => {
                    memory.remove(&key);
                }
            },
        }
    }

    stack
        .pop()
        .ok_or_else(|| Error::StackUnderflow("end of program".to_string()))
}

fn pop(stack: &mut Vec<f64>, op: &str) -> Result<f64> {
    stack
        .pop()
        .ok_or_else(|| Error::StackUnderflow(op.to_string()))
}

/// Execute one operator. For binary operators the first pop is the
/// right-hand operand.
fn apply(op: Op, stack: &mut Vec<f64>) -> Result<()> {
    let tok = op.token();
    match op {
        Op::ConstE => stack.push(std::f64::consts::E),
        Op::ConstPi => stack.push(std::f64::consts::PI),

        Op::Dup => {
            let v = pop(stack, tok)?;
            stack.push(v);
            stack.push(v);
        }
        Op::Swap => {
            let a = pop(stack, tok)?;
            let b = pop(stack, tok)?;
            stack.push(a);
            stack.push(b);
        }

        Op::Floor => {
            let v = pop(stack, tok)?;
            stack.push(v.floor());
        }
        Op::Ceil => {
            let v = pop(stack, tok)?;
            stack.push(v.ceil());
        }
        Op::Round => {
            let places = pop(stack, tok)?;
            let v = pop(stack, tok)?;
            let mult = 10_f64.powi(places as i32);
            stack.push((v * mult).round() / mult);
        }
        Op::NanZero => {
            let v = pop(stack, tok)?;
            stack.push(if v.is_nan() { 0.0 } else { v });
        }
        Op::InfClamp => {
            let v = pop(stack, tok)?;
            let clamped = if v == f64::INFINITY {
                f64::MAX
            } else if v == f64::NEG_INFINITY {
                f64::MIN
            } else {
                v
            };
            stack.push(clamped);
        }

        _ => {
            let rhs = pop(stack, tok)?;
            let lhs = pop(stack, tok)?;
            let result = match op {
                Op::Add => lhs + rhs,
                Op::Sub => lhs - rhs,
                Op::Mul => lhs * rhs,
                Op::Div => lhs / rhs,
                Op::IntDiv => (lhs / rhs).floor(),
                Op::Pow => lhs.powf(rhs),
                Op::Mod => lhs - rhs * (lhs / rhs).floor(),
                Op::Gt => bool_value(lhs > rhs),
                Op::Lt => bool_value(lhs < rhs),
                Op::Ge => bool_value(lhs >= rhs),
                Op::Le => bool_value(lhs <= rhs),
                Op::Eq => bool_value(lhs == rhs),
                Op::ApproxEq => bool_value(lhs as f32 == rhs as f32),
                _ => unreachable!("non-binary operators handled above"),
            };
            stack.push(result);
        }
    }
    Ok(())
}

fn bool_value(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn program(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn literal_parsing_trims_whitespace() {
        assert_eq!(parse_token("  3.5 ").unwrap(), Token::Literal(3.5));
        assert_eq!(parse_token("-2").unwrap(), Token::Literal(-2.0));
    }

    #[test]
    fn operator_matching_is_case_folded() {
        assert_eq!(parse_token("mod").unwrap(), Token::Operator(Op::Mod));
        assert_eq!(parse_token("dup").unwrap(), Token::Operator(Op::Dup));
        assert_eq!(parse_token("pi").unwrap(), Token::Operator(Op::ConstPi));
    }

    #[test]
    fn command_argument_keeps_case() {
        assert_eq!(
            parse_token("sto:k").unwrap(),
            Token::Command(Command::Store('k'))
        );
        assert_eq!(
            parse_token("STO:K").unwrap(),
            Token::Command(Command::Store('K'))
        );
    }

    #[test]
    fn malformed_commands_rejected() {
        assert!(matches!(
            parse_token("STO:AB"),
            Err(Error::InvalidInstruction(_))
        ));
        assert!(matches!(
            parse_token("STO:"),
            Err(Error::InvalidInstruction(_))
        ));
        assert!(matches!(
            parse_token("PUT:A"),
            Err(Error::InvalidInstruction(_))
        ));
        assert!(matches!(
            parse_token("garbage"),
            Err(Error::InvalidInstruction(_))
        ));
    }

    #[test]
    fn seed_stack_order_preserved() {
        // Last seed element on top: 5 - 3, not 3 - 5.
        assert_eq!(evaluate(&program(&["-"]), &[5.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn floored_division_and_modulo_agree() {
        assert_eq!(evaluate(&program(&["-7", "2", "\\"]), &[]).unwrap(), -4.0);
        assert_eq!(evaluate(&program(&["-7", "2", "MOD"]), &[]).unwrap(), 1.0);
        assert_eq!(evaluate(&program(&["7", "2", "\\"]), &[]).unwrap(), 3.0);
        assert_eq!(evaluate(&program(&["7", "2", "%"]), &[]).unwrap(), 1.0);
    }

    #[test]
    fn round_pops_place_count_first() {
        assert_eq!(
            evaluate(&program(&["2.347", "2", "ROUND"]), &[]).unwrap(),
            2.35
        );
        assert_eq!(
            evaluate(&program(&["2.347", "0", "ROUND"]), &[]).unwrap(),
            2.0
        );
    }

    #[test]
    fn nan_and_infinity_cleanup() {
        // 0/0 is NaN; NAN0 turns it into 0.
        assert_eq!(
            evaluate(&program(&["0", "0", "/", "NAN0"]), &[]).unwrap(),
            0.0
        );
        // 1/0 is +inf; INFMAX clamps to f64::MAX.
        assert_eq!(
            evaluate(&program(&["1", "0", "/", "INFMAX"]), &[]).unwrap(),
            f64::MAX
        );
    }

    #[test]
    fn memory_is_local_to_one_call() {
        let store = program(&["42", "STO:A", "0"]);
        assert_eq!(evaluate(&store, &[]).unwrap(), 0.0);
        let recall = program(&["RCL:A"]);
        assert!(matches!(
            evaluate(&recall, &[]),
            Err(Error::UndefinedMemory('A'))
        ));
    }

    #[test]
    fn delete_is_idempotent() {
        let p = program(&["1", "STO:A", "DEL:A", "DEL:A", "0"]);
        assert_eq!(evaluate(&p, &[]).unwrap(), 0.0);
    }

    #[test]
    fn empty_program_with_empty_stack_underflows() {
        assert!(matches!(
            evaluate(&[], &[]),
            Err(Error::StackUnderflow(_))
        ));
    }

    #[test]
    fn validate_accepts_runtime_underflow() {
        // Lexically fine, dynamically underflows.
        let p = program(&["+"]);
        assert!(validate(&p).is_ok());
        assert!(matches!(evaluate(&p, &[]), Err(Error::StackUnderflow(_))));
    }
}
