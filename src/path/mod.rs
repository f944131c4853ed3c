//! Location-Path Engine
//!
//! Restricted path subset:
//! - child, descendant-or-self, attribute and self axes (`/`, `//`, `@`,
//!   `.` abbreviations and the explicit `axis::` forms)
//! - name tests and `*`, positional predicates (`[N]`)
//! - compiled paths reusable across trees and threads

pub mod axes;
pub mod compiler;
pub mod eval;
pub mod lexer;
pub mod nodeset;
pub mod parser;

pub use compiler::{compile, CompiledPath};
pub use eval::{evaluate, evaluate_from};
pub use nodeset::NodeSet;
pub use parser::{Axis, NameTest, Step};
