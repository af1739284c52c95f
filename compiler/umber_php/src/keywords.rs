//! PHP reserved-word tables.
//!
//! All lookups take an already-lowercased identifier. Matching is bucketed
//! by length so most identifiers are rejected after one comparison.

/// General keywords, classified as plain `Keyword`.
pub fn is_keyword(name: &str) -> bool {
    match name.len() {
        2 => matches!(name, "as" | "do" | "fn" | "if" | "or"),
        3 => matches!(name, "and" | "die" | "for" | "new" | "try" | "var" | "xor"),
        4 => matches!(
            name,
            "case" | "echo" | "else" | "eval" | "exit" | "goto" | "list" | "self"
        ),
        5 => matches!(
            name,
            "array"
                | "break"
                | "catch"
                | "clone"
                | "endif"
                | "final"
                | "print"
                | "throw"
                | "while"
                | "yield"
        ),
        6 => matches!(
            name,
            "elseif" | "endfor" | "global" | "parent" | "public" | "return" | "static" | "switch"
        ),
        7 => matches!(
            name,
            "__dir__"
                | "declare"
                | "default"
                | "extends"
                | "finally"
                | "foreach"
                | "include"
                | "private"
                | "require"
        ),
        8 => matches!(
            name,
            "__file__" | "__line__" | "abstract" | "continue" | "endwhile"
        ),
        9 => matches!(
            name,
            "__class__" | "__trait__" | "cfunction" | "endswitch" | "insteadof" | "protected"
        ),
        10 => matches!(
            name,
            "__method__" | "enddeclare" | "endforeach" | "implements" | "instanceof"
        ),
        12 => matches!(
            name,
            "__function__" | "include_once" | "old_function" | "require_once"
        ),
        13 => name == "__namespace__",
        15 => name == "__halt_compiler",
        _ => false,
    }
}

/// `namespace` and `use`.
pub fn is_namespace_keyword(name: &str) -> bool {
    matches!(name, "namespace" | "use")
}

/// Keywords that open a type declaration.
pub fn is_declaration_keyword(name: &str) -> bool {
    matches!(name, "class" | "interface" | "trait")
}
