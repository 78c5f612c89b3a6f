/// Converts user-facing notation into the evaluator's expected syntax.
///
/// Removes every whitespace character and rewrites the `**` exponent alias to
/// the evaluator's power operator `^`, so Python-style powers stay accepted.
/// Total function over all string inputs, no validation; syntactic
/// correctness is deferred to the parser.
///
/// Idempotent: the output contains no whitespace and no `**`, so normalizing
/// it again is the identity.
pub fn normalize(raw: &str) -> String {
    let without_whitespace: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    without_whitespace.replace("**", "^")
}
