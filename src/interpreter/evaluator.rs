/// Evaluation of binary operations.
pub mod binary;
/// Execution of the conditional and the condition-tested loops.
pub mod control;
/// The evaluation context and the expression/statement dispatchers.
pub mod core;
/// Execution of the counted `pentru` loop.
pub mod for_loop;
/// Execution of the simple statements: assign, swap, read, write.
pub mod statements;
/// Evaluation of unary operations.
pub mod unary;
