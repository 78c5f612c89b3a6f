// the collection of utility functions mainly for bracket parsing and proceeding

/// check that every '(' has a matching ')' in the right order
pub fn brackets_balanced(s: &str) -> bool {
    let mut depth: i32 = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

// finds the rightmost occurrence of any of the given operators at bracket
// depth zero; rightmost split keeps left associativity for + - * /
pub fn find_rightmost_outside_brackets(input: &str, operators: &[char]) -> Option<(usize, char)> {
    let mut bracket_depth = 0;
    let mut last_op_pos = None;
    let mut last_op_char = ' ';

    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && operators.contains(&c) => {
                last_op_pos = Some(i); // updates to LAST match
                last_op_char = c; // remembers which operator
            }
            _ => {}
        }
    }

    last_op_pos.map(|pos| (pos, last_op_char))
}

// finds the leftmost occurrence of the given operator at bracket depth zero;
// leftmost split keeps right associativity for '^'
pub fn find_leftmost_outside_brackets(input: &str, operator: char) -> Option<usize> {
    let mut bracket_depth = 0;
    for (i, c) in input.char_indices() {
        match c {
            '(' => bracket_depth += 1,
            ')' => bracket_depth -= 1,
            _ if bracket_depth == 0 && c == operator => return Some(i),
            _ => {}
        }
    }
    None
}

/// finds the position of the ')' matching the '(' at `open_pos`;
/// None when `open_pos` is not a '(' or the bracket never closes
pub fn find_matching_bracket(input: &str, open_pos: usize) -> Option<usize> {
    if input[open_pos..].chars().next() != Some('(') {
        return None;
    }
    let mut stack = 0;
    for (i, c) in input[open_pos..].char_indices() {
        if c == '(' {
            stack += 1;
        } else if c == ')' {
            stack -= 1;
            if stack == 0 {
                return Some(open_pos + i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_balanced() {
        assert!(brackets_balanced("sin(x) * (x + 1)"));
        assert!(!brackets_balanced("(x + 1"));
        assert!(!brackets_balanced("x + 1)"));
        assert!(!brackets_balanced(")x("));
    }

    #[test]
    fn test_find_rightmost_outside_brackets() {
        assert_eq!(
            find_rightmost_outside_brackets("a*b/c", &['*', '/']),
            Some((3, '/'))
        );
        assert_eq!(
            find_rightmost_outside_brackets("(a*b)", &['*', '/']),
            None
        );
    }

    #[test]
    fn test_find_leftmost_outside_brackets() {
        assert_eq!(find_leftmost_outside_brackets("x^2^3", '^'), Some(1));
        assert_eq!(find_leftmost_outside_brackets("(x^2)", '^'), None);
    }

    #[test]
    fn test_find_matching_bracket() {
        assert_eq!(find_matching_bracket("sin(cos(x))", 3), Some(10));
        assert_eq!(find_matching_bracket("sin(cos(x))", 7), Some(9));
        assert_eq!(find_matching_bracket("sin(x", 3), None);
        assert_eq!(find_matching_bracket("sin(x)", 0), None);
    }
}
