#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedPlotter::symbolic::symbolic_engine::Expr;
/// let input = "x^2 + sin(x)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let parsed_function = parsed_expression.lambdify1D();
/// println!("{}, Rust function at 1.0: {}  \n", input, parsed_function(1.0));
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing and control results
///# Example#
/// ```
/// use RustedPlotter::symbolic::symbolic_engine::Expr;
/// let input = "exp(x) + ln(x)";
/// // here you've got symbolic expression
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// // return vec of all arguments
/// let all = parsed_expression.all_arguments_are_variables();
/// assert_eq!(all, vec!["x".to_string()]);
/// // convert symbolic expression to a Rust function and evaluate the function
/// let f = parsed_expression.lambdify1D();
/// println!("f(1.0) = {}", f(1.0));
/// ```
pub mod symbolic_engine;
///________________________________________________________________________________________________________________________________________________
/// turn a symbolic expression of one variable into a Rust closure
pub mod symbolic_lambdify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
