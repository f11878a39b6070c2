//! The fixed operator table of the evaluator.

/// An operator from the fixed table.
///
/// Tokens are matched case-insensitively; `token()` returns the canonical
/// spelling used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+` — addition.
    Add,
    /// `-` — subtraction.
    Sub,
    /// `*` — multiplication.
    Mul,
    /// `/` — floating-point division.
    Div,
    /// `\` — integer division, flooring toward negative infinity.
    IntDiv,
    /// `**` — power.
    Pow,
    /// `%` / `MOD` — floored modulo, consistent with `\`.
    Mod,
    /// `>` — pushes 1 if lhs > rhs, else 0.
    Gt,
    /// `<` — pushes 1 if lhs < rhs, else 0.
    Lt,
    /// `>=` — pushes 1 if lhs >= rhs, else 0.
    Ge,
    /// `<=` — pushes 1 if lhs <= rhs, else 0.
    Le,
    /// `=` — exact equality, pushes 1 or 0.
    Eq,
    /// `~=` — approximate equality at reduced (`f32`) precision.
    ApproxEq,
    /// `DUP` — duplicate the top value.
    Dup,
    /// `SWAP` — exchange the two top values.
    Swap,
    /// `FLOOR` — round toward negative infinity.
    Floor,
    /// `CEIL` — round toward positive infinity.
    Ceil,
    /// `ROUND` — round to a number of decimal places (pops the place count,
    /// then the value).
    Round,
    /// `NAN0` — replace NaN with 0.
    NanZero,
    /// `INFMAX` — clamp ±∞ to the numeric maximum/minimum.
    InfClamp,
    /// `E` — push Euler's number.
    ConstE,
    /// `PI` — push π.
    ConstPi,
}

impl Op {
    /// Look up an operator by its case-folded token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            "\\" => Some(Op::IntDiv),
            "**" => Some(Op::Pow),
            "%" | "MOD" => Some(Op::Mod),
            ">" => Some(Op::Gt),
            "<" => Some(Op::Lt),
            ">=" => Some(Op::Ge),
            "<=" => Some(Op::Le),
            "=" => Some(Op::Eq),
            "~=" => Some(Op::ApproxEq),
            "DUP" => Some(Op::Dup),
            "SWAP" => Some(Op::Swap),
            "FLOOR" => Some(Op::Floor),
            "CEIL" => Some(Op::Ceil),
            "ROUND" => Some(Op::Round),
            "NAN0" => Some(Op::NanZero),
            "INFMAX" => Some(Op::InfClamp),
            "E" => Some(Op::ConstE),
            "PI" => Some(Op::ConstPi),
            _ => None,
        }
    }

    /// Canonical token spelling, for error messages.
    pub fn token(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::IntDiv => "\\",
            Op::Pow => "**",
            Op::Mod => "MOD",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Ge => ">=",
            Op::Le => "<=",
            Op::Eq => "=",
            Op::ApproxEq => "~=",
            Op::Dup => "DUP",
            Op::Swap => "SWAP",
            Op::Floor => "FLOOR",
            Op::Ceil => "CEIL",
            Op::Round => "ROUND",
            Op::NanZero => "NAN0",
            Op::InfClamp => "INFMAX",
            Op::ConstE => "E",
            Op::ConstPi => "PI",
        }
    }
}
