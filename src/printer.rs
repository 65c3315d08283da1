//! Canonical pretty-printing of parsed programs.
//!
//! Renders an AST back to pseudocode source: one statement per line, block
//! bodies indented by four spaces, `;`-joined groups kept on one line.
//! Re-parsing the printed form yields the same tree, which the test suite
//! relies on and which makes the CLI's tree view readable as ordinary
//! pseudocode.
//!
//! Expressions are printed by their `Display` impl without inserting
//! parentheses: the parser only ever builds trees whose shape agrees with
//! the precedence table, and source parentheses survive as grouping nodes.

use std::fmt::Write;

use crate::ast::{Program, Stmt};

/// Renders a program in canonical form.
///
/// # Parameters
/// - `program`: The parsed program.
///
/// # Returns
/// The canonical source text, terminated with a newline.
#[must_use]
pub fn pretty(program: &Program) -> String {
    let mut out = String::new();
    for statement in &program.statements {
        write_statement(&mut out, statement, 0);
    }
    out
}

/// Writes one statement at the given indentation depth.
fn write_statement(out: &mut String, statement: &Stmt, depth: usize) {
    indent(out, depth);

    match statement {
        Stmt::Assign { .. } | Stmt::Swap { .. } | Stmt::Multi { .. } | Stmt::Read { .. }
        | Stmt::Write { .. } => {
            write_simple_statement(out, statement);
            out.push('\n');
        },
        Stmt::If { condition,
                   then_block,
                   else_block,
                   .. } => {
            let _ = writeln!(out, "daca {condition} atunci");
            write_block(out, then_block, depth + 1);
            if !else_block.is_empty() {
                indent(out, depth);
                out.push_str("altfel\n");
                write_block(out, else_block, depth + 1);
            }
            indent(out, depth);
            out.push_str("sf\n");
        },
        Stmt::For { var,
                    from,
                    to,
                    step,
                    body,
                    .. } => {
            let _ = write!(out, "pentru {var} <- {from}, {to}");
            if let Some(step) = step {
                let _ = write!(out, ", {step}");
            }
            out.push_str(" executa\n");
            write_block(out, body, depth + 1);
            indent(out, depth);
            out.push_str("sf\n");
        },
        Stmt::While { condition, body, .. } => {
            let _ = writeln!(out, "cat timp {condition} executa");
            write_block(out, body, depth + 1);
            indent(out, depth);
            out.push_str("sf\n");
        },
        Stmt::DoWhile { body, condition, .. } => {
            out.push_str("executa\n");
            write_block(out, body, depth + 1);
            indent(out, depth);
            let _ = writeln!(out, "cat timp {condition}");
        },
        Stmt::RepeatUntil { body, condition, .. } => {
            out.push_str("repeta\n");
            write_block(out, body, depth + 1);
            indent(out, depth);
            let _ = writeln!(out, "pana cand {condition}");
        },
    }
}

/// Writes a simple statement inline, with no indentation or newline.
///
/// Shared by the top-level statement writer and the `;`-group writer.
fn write_simple_statement(out: &mut String, statement: &Stmt) {
    match statement {
        Stmt::Assign { name, value, .. } => {
            let _ = write!(out, "{name} <- {value}");
        },
        Stmt::Swap { left, right, .. } => {
            let _ = write!(out, "{left} <-> {right}");
        },
        Stmt::Multi { statements, .. } => {
            for (index, inner) in statements.iter().enumerate() {
                if index > 0 {
                    out.push_str("; ");
                }
                write_simple_statement(out, inner);
            }
        },
        Stmt::Read { names, .. } => {
            out.push_str("citeste ");
            out.push_str(&names.join(", "));
        },
        Stmt::Write { values, .. } => {
            out.push_str("scrie ");
            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{value}");
            }
        },
        // Block statements never appear inside a `;` group.
        _ => unreachable!(),
    }
}

fn write_block(out: &mut String, statements: &[Stmt], depth: usize) {
    for statement in statements {
        write_statement(out, statement, depth);
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}
