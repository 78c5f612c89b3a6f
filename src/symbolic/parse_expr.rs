use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    brackets_balanced, find_leftmost_outside_brackets, find_matching_bracket,
    find_rightmost_outside_brackets,
};
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedPlotter::symbolic::symbolic_engine::Expr;
/// let input = "x^2.3 * ln(x + 1)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, Rust function: {}  \n", input, parsed_function(1.0));
/// ```
//                  search recursion diagram
//                "x^2+exp(x)+ln(x)/x"              |
//                |       left  | right             |
//                |_________________________________|
//                |           div by last +         |
//                |_________________________________|
//                | x^2+exp(x)  |  ln(x)/x          |
//                |       |     |          |        |
//                |_____ \|/    |          |        |
//                |    div by + |          |        |
//                |_____________|__________|________|
//                |  x^2 |exp(x)| ln(x) / x         |
//                |______|______|_________\|/_______|
//                  etc...
//
// Splitting at the rightmost +/- (and the rightmost */ /) keeps the usual
// left associativity: a-b-c parses as (a-b)-c. The power operator splits at
// the leftmost '^' instead, so a^b^c parses as a^(b^c).

// lowered at parse time, the evaluator has no dedicated square root node
fn sqrt_expr(inner: Box<Expr>) -> Expr {
    Expr::Pow(inner, Box::new(Expr::Const(0.5)))
}

// Finds the rightmost binary '+' or '-' outside brackets. A sign is binary
// only if something precedes it that can terminate an operand; this skips
// unary signs ("-x", "2*-3") and exponents of scientific notation ("2e-3").
fn find_rightmost_add_sub(input: &str) -> Option<(usize, char)> {
    let mut bracket_depth = 0;
    let mut last_op: Option<(usize, char)> = None;
    let mut prev_char: Option<char> = None;
    let mut prev_prev_char: Option<char> = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            '+' | '-' if bracket_depth == 0 => {
                let after_operator = matches!(prev_char, Some('+' | '-' | '*' | '/' | '^' | '('));
                let sci_exponent = matches!(prev_char, Some('e' | 'E'))
                    && prev_prev_char.is_some_and(|p| p.is_ascii_digit() || p == '.');
                if prev_char.is_some() && !after_operator && !sci_exponent {
                    last_op = Some((i, c));
                }
            }
            _ => {}
        }
        if !c.is_whitespace() {
            prev_prev_char = prev_char;
            prev_char = Some(c);
        }
    }
    last_op
}

pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }

    // addition and subtraction
    if let Some((pos, op)) = find_rightmost_add_sub(input) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        if right.is_empty() {
            return Err(format!("missing right operand for '{}' in '{}'", op, input));
        }
        let lhs = parse_expression_func(left)?.boxed();
        let rhs = parse_expression_func(right)?.boxed();
        return Ok(match op {
            '+' => Expr::Add(lhs, rhs),
            _ => Expr::Sub(lhs, rhs),
        });
    }

    // multiplication and division
    if let Some((pos, op)) = find_rightmost_outside_brackets(input, &['*', '/']) {
        let left = input[..pos].trim();
        let right = input[pos + 1..].trim();
        if left.is_empty() || right.is_empty() {
            return Err(format!("missing operand for '{}' in '{}'", op, input));
        }
        let lhs = parse_expression_func(left)?.boxed();
        let rhs = parse_expression_func(right)?.boxed();
        return Ok(match op {
            '*' => Expr::Mul(lhs, rhs),
            _ => Expr::Div(lhs, rhs),
        });
    }

    // unary sign, checked before '^' so that it binds looser than the power
    // operator: -x^2 is -(x^2), while (-x)^2 still squares the negation
    if let Some(rest) = input.strip_prefix('-') {
        return Ok(Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(parse_expression_func(rest)?),
        ));
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_expression_func(rest);
    }

    // power, leftmost split keeps right associativity
    if let Some(pos) = find_leftmost_outside_brackets(input, '^') {
        let base = input[..pos].trim();
        let exponent = input[pos + 1..].trim();
        if base.is_empty() || exponent.is_empty() {
            return Err(format!("missing operand for '^' in '{}'", input));
        }
        let base_expr = parse_expression_func(base)?;
        let exponent_expr = if let Ok(value) = exponent.parse::<f64>() {
            Expr::Const(value)
        } else {
            parse_expression_func(exponent)?
        };
        return Ok(Expr::Pow(Box::new(base_expr), Box::new(exponent_expr)));
    }

    // named functions; both mathematical (tg, arctg) and programming (tan,
    // atan) spellings are accepted, anything else is rejected
    let functions: [(&str, fn(Box<Expr>) -> Expr); 17] = [
        ("exp", Expr::Exp),
        ("ln", Expr::Ln),
        ("log", Expr::Ln),
        ("sqrt", sqrt_expr),
        ("sin", Expr::sin),
        ("cos", Expr::cos),
        ("tg", Expr::tg),
        ("tan", Expr::tg),
        ("ctg", Expr::ctg),
        ("cot", Expr::ctg),
        ("arcsin", Expr::arcsin),
        ("asin", Expr::arcsin),
        ("arccos", Expr::arccos),
        ("acos", Expr::arccos),
        ("arctg", Expr::arctg),
        ("arctan", Expr::arctg),
        ("atan", Expr::arctg),
    ];
    for (name, constructor) in functions {
        if input.starts_with(name) && input[name.len()..].starts_with('(') {
            if let Some(end) = find_matching_bracket(input, name.len()) {
                if end == input.len() - 1 {
                    let inner = &input[name.len() + 1..end];
                    return Ok(constructor(parse_expression_func(inner)?.boxed()));
                }
            }
            return Err(format!("unmatched brackets in '{}'", input));
        }
    }

    // constants
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }

    // variables
    if input.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && input.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Ok(Expr::Var(input.to_string()));
    }

    // expression that is all in brackets
    if input.starts_with('(') && input.ends_with(')') {
        if let Some(end) = find_matching_bracket(input, 0) {
            if end == input.len() - 1 {
                return parse_expression_func(&input[1..end]);
            }
        }
        return Err(format!("unmatched brackets in '{}'", input));
    }

    Err(format!("cannot parse '{}'", input))
}

impl Expr {
    /// Parses a string into a symbolic expression over the constrained
    /// grammar: `+ - * / ^`, unary minus, brackets, numeric constants,
    /// variables, and the enumerated function set (exp, ln/log, sqrt, sin,
    /// cos, tg/tan, ctg/cot, arcsin/asin, arccos/acos, arctg/atan/arctan).
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        if !brackets_balanced(input) {
            return Err(format!("unmatched brackets in '{}'", input));
        }
        parse_expression_func(input)
    }
}
