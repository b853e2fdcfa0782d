use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Operands of a binary numeric operator after promotion.
/// Mixing an integer with a float promotes both to float.
enum Numbers {
    Integers(i64, i64),
    Floats(f64, f64),
}

impl Numbers {
    fn new(lhs: &Val, rhs: &Val) -> Option<Numbers> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Some(Numbers::Integers(*l, *r)),
            (Integer(l), Float(r)) => Some(Numbers::Floats(*l as f64, *r)),
            (Float(l), Integer(r)) => Some(Numbers::Floats(*l, *r as f64)),
            (Float(l), Float(r)) => Some(Numbers::Floats(*l, *r)),
            _ => None,
        }
    }
}

fn mismatch(op: &str, lhs: &Val, rhs: &Val) -> Error {
    error!(TypeError; "{} {} {}", lhs.type_name(), rhs.type_name(), op)
}

fn mismatch_unary(op: &str, val: &Val) -> Error {
    error!(TypeError; "{} {}", val.type_name(), op)
}

fn overflow() -> Error {
    error!(ArithmeticError; "OVERFLOW")
}

fn division_by_zero() -> Error {
    error!(ArithmeticError; "DIVISION BY ZERO")
}

/// Floored quotient and remainder of two floats. The quotient is taken
/// from the remainder so that `l == q * r + m` holds as closely as floats
/// allow, with `m` carrying the sign of `r`.
fn float_div_mod(l: f64, r: f64) -> (f64, f64) {
    let mut m = l % r;
    let mut q = (l - m) / r;
    if m != 0.0 {
        if (m < 0.0) != (r < 0.0) {
            m += r;
            q -= 1.0;
        }
    } else {
        m = 0.0_f64.copysign(r);
    }
    if q != 0.0 {
        let floor = q.floor();
        q = if q - floor > 0.5 { floor + 1.0 } else { floor };
    } else {
        q = 0.0_f64.copysign(l / r);
    }
    (q, m)
}

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        if let (Val::String(l), Val::String(r)) = (&lhs, &rhs) {
            return Ok(Val::String(format!("{}{}", l, r).into()));
        }
        match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(l, r)) => match l.checked_add(r) {
                Some(i) => Ok(Val::Integer(i)),
                None => Err(overflow()),
            },
            Some(Numbers::Floats(l, r)) => Ok(Val::Float(l + r)),
            None => Err(mismatch("+", &lhs, &rhs)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(l, r)) => match l.checked_sub(r) {
                Some(i) => Ok(Val::Integer(i)),
                None => Err(overflow()),
            },
            Some(Numbers::Floats(l, r)) => Ok(Val::Float(l - r)),
            None => Err(mismatch("-", &lhs, &rhs)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(l, r)) => match l.checked_mul(r) {
                Some(i) => Ok(Val::Integer(i)),
                None => Err(overflow()),
            },
            Some(Numbers::Floats(l, r)) => Ok(Val::Float(l * r)),
            None => Err(mismatch("*", &lhs, &rhs)),
        }
    }

    /// True division. The result is a float even for two integers.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(l, r)) => (l as f64, r as f64),
            Some(Numbers::Floats(l, r)) => (l, r),
            None => return Err(mismatch("/", &lhs, &rhs)),
        };
        if r == 0.0 {
            return Err(division_by_zero());
        }
        Ok(Val::Float(l / r))
    }

    /// Floor division, rounding toward negative infinity.
    pub fn divide_int(lhs: Val, rhs: Val) -> Result<Val> {
        match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(_, 0)) => Err(division_by_zero()),
            Some(Numbers::Integers(l, r)) => match l.checked_div(r) {
                Some(q) => {
                    if (l % r != 0) && ((l < 0) != (r < 0)) {
                        Ok(Val::Integer(q - 1))
                    } else {
                        Ok(Val::Integer(q))
                    }
                }
                None => Err(overflow()),
            },
            Some(Numbers::Floats(_, r)) if r == 0.0 => Err(division_by_zero()),
            Some(Numbers::Floats(l, r)) => Ok(Val::Float(float_div_mod(l, r).0)),
            None => Err(mismatch("//", &lhs, &rhs)),
        }
    }

    /// Remainder of floor division. The sign follows the divisor.
    pub fn modulo(lhs: Val, rhs: Val) -> Result<Val> {
        match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(_, 0)) => Err(division_by_zero()),
            Some(Numbers::Integers(l, r)) => {
                let m = l.wrapping_rem(r);
                if m != 0 && ((m < 0) != (r < 0)) {
                    Ok(Val::Integer(m + r))
                } else {
                    Ok(Val::Integer(m))
                }
            }
            Some(Numbers::Floats(_, r)) if r == 0.0 => Err(division_by_zero()),
            Some(Numbers::Floats(l, r)) => Ok(Val::Float(float_div_mod(l, r).1)),
            None => Err(mismatch("%", &lhs, &rhs)),
        }
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = match Numbers::new(&lhs, &rhs) {
            Some(Numbers::Integers(l, r)) if r >= 0 => {
                return match u32::try_from(r).ok().and_then(|r| l.checked_pow(r)) {
                    Some(i) => Ok(Val::Integer(i)),
                    None => Err(overflow()),
                };
            }
            Some(Numbers::Integers(l, r)) => (l as f64, r as f64),
            Some(Numbers::Floats(l, r)) => (l, r),
            None => return Err(mismatch("**", &lhs, &rhs)),
        };
        if l == 0.0 && r < 0.0 {
            return Err(division_by_zero());
        }
        let result = l.powf(r);
        if result.is_nan() && !l.is_nan() && !r.is_nan() {
            return Err(error!(ArithmeticError; "MATH DOMAIN"));
        }
        Ok(Val::Float(result))
    }

    fn integers(op: &str, lhs: &Val, rhs: &Val) -> Result<(i64, i64)> {
        match (lhs, rhs) {
            (Val::Integer(l), Val::Integer(r)) => Ok((*l, *r)),
            _ => Err(mismatch(op, lhs, rhs)),
        }
    }

    pub fn bit_and(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers("&", &lhs, &rhs)?;
        Ok(Val::Integer(l & r))
    }

    pub fn bit_or(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers("|", &lhs, &rhs)?;
        Ok(Val::Integer(l | r))
    }

    pub fn bit_xor(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers("^", &lhs, &rhs)?;
        Ok(Val::Integer(l ^ r))
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers("<<", &lhs, &rhs)?;
        if r < 0 {
            return Err(error!(ArithmeticError; "NEGATIVE SHIFT COUNT"));
        }
        if l == 0 {
            return Ok(Val::Integer(0));
        }
        if r >= 64 {
            return Err(overflow());
        }
        let shifted = l << r;
        if shifted >> r != l {
            return Err(overflow());
        }
        Ok(Val::Integer(shifted))
    }

    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        let (l, r) = Operation::integers(">>", &lhs, &rhs)?;
        if r < 0 {
            return Err(error!(ArithmeticError; "NEGATIVE SHIFT COUNT"));
        }
        if r >= 64 {
            return Ok(Val::Integer(if l < 0 { -1 } else { 0 }));
        }
        Ok(Val::Integer(l >> r))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(Operation::equal_bool(&lhs, &rhs)))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(!Operation::equal_bool(&lhs, &rhs)))
    }

    /// Values of unrelated kinds are simply unequal.
    fn equal_bool(lhs: &Val, rhs: &Val) -> bool {
        use Val::*;
        match Numbers::new(lhs, rhs) {
            Some(Numbers::Integers(l, r)) => l == r,
            Some(Numbers::Floats(l, r)) => l == r,
            None => match (lhs, rhs) {
                (String(l), String(r)) => l == r,
                (Bool(l), Bool(r)) => l == r,
                (Quotation(l), Quotation(r)) => l == r,
                _ => false,
            },
        }
    }

    /// `None` when the values are unordered, which only happens with NaN.
    fn ordering(op: &str, lhs: &Val, rhs: &Val) -> Result<Option<Ordering>> {
        use Val::*;
        match Numbers::new(lhs, rhs) {
            Some(Numbers::Integers(l, r)) => Ok(Some(l.cmp(&r))),
            Some(Numbers::Floats(l, r)) => Ok(l.partial_cmp(&r)),
            None => match (lhs, rhs) {
                (String(l), String(r)) => Ok(Some(l.cmp(r))),
                (Bool(l), Bool(r)) => Ok(Some(l.cmp(r))),
                _ => Err(mismatch(op, lhs, rhs)),
            },
        }
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering("<", &lhs, &rhs)?;
        Ok(Val::Bool(matches!(ord, Some(Ordering::Less))))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering("<=", &lhs, &rhs)?;
        Ok(Val::Bool(matches!(
            ord,
            Some(Ordering::Less) | Some(Ordering::Equal)
        )))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(">", &lhs, &rhs)?;
        Ok(Val::Bool(matches!(ord, Some(Ordering::Greater))))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        let ord = Operation::ordering(">=", &lhs, &rhs)?;
        Ok(Val::Bool(matches!(
            ord,
            Some(Ordering::Greater) | Some(Ordering::Equal)
        )))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(lhs.is_truthy() && rhs.is_truthy()))
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(lhs.is_truthy() || rhs.is_truthy()))
    }

    pub fn not(val: Val) -> Result<Val> {
        Ok(Val::Bool(!val.is_truthy()))
    }

    pub fn invert(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) => Ok(Val::Integer(!n)),
            _ => Err(mismatch_unary("~", &val)),
        }
    }

    pub fn to_int(val: Val) -> Result<Val> {
        use Val::*;
        match &val {
            Integer(_) => Ok(val),
            Float(n) => {
                let t = n.trunc();
                if !t.is_finite() || t < i64::MIN as f64 || t >= i64::MAX as f64 {
                    Err(error!(ArithmeticError; "CANNOT CONVERT {} TO INTEGER", val))
                } else {
                    Ok(Integer(t as i64))
                }
            }
            String(s) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(Integer(n)),
                Err(_) => Err(error!(ArithmeticError; "INVALID INTEGER {}", val.repr())),
            },
            Bool(b) => Ok(Integer(*b as i64)),
            Quotation(_) => Err(mismatch_unary("int", &val)),
        }
    }

    pub fn to_float(val: Val) -> Result<Val> {
        use Val::*;
        match &val {
            Integer(n) => Ok(Float(*n as f64)),
            Float(_) => Ok(val),
            String(s) => match s.trim().parse::<f64>() {
                Ok(n) => Ok(Float(n)),
                Err(_) => Err(error!(ArithmeticError; "INVALID FLOAT {}", val.repr())),
            },
            Bool(b) => Ok(Float(if *b { 1.0 } else { 0.0 })),
            Quotation(_) => Err(mismatch_unary("float", &val)),
        }
    }

    pub fn to_str(val: Val) -> Result<Val> {
        match val {
            Val::String(_) => Ok(val),
            _ => Ok(Val::String(val.to_string().into())),
        }
    }

    pub fn to_bool(val: Val) -> Result<Val> {
        Ok(Val::Bool(val.is_truthy()))
    }
}
