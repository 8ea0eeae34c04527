/// The evaluator module computes the integer value of a syntax tree.
///
/// The evaluator walks the AST recursively and performs checked integer
/// arithmetic, with floor semantics for division.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces the complete token
/// sequence: integer literals and the single-character symbols
/// `( ) + - * /`. Whitespace is skipped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Reports lexical errors for unknown characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule. Chains of
/// same-precedence operators are folded left-associatively in loops.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces operator precedence and associativity.
/// - Reports missing operands and unbalanced parentheses.
pub mod parser;
