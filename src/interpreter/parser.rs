/// Parser entry points.
///
/// Holds the `ParseResult` alias, the top-level `expression` rule and the
/// slice-based `parse`/`parse_all` functions used by callers.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative `+`/`-` and `*`/`/` chains as loops.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles the optional leading sign of a sum, integer literals and
/// parenthesized groups.
pub mod unary;
