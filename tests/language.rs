use pseudocod::{interpreter::io::BufferedIo, linter, printer};

fn run_with_input(source: &str, input: &str) -> Result<String, String> {
    let mut io = BufferedIo::new(input);
    match pseudocod::run(source, &mut io) {
        Ok(()) => Ok(io.output().to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn assert_output(source: &str, expected: &str) {
    match run_with_input(source, "") {
        Ok(output) => assert_eq!(output, expected, "Wrong output for:\n{source}"),
        Err(e) => panic!("Script failed: {e}\nScript:\n{source}"),
    }
}

fn assert_output_with_input(source: &str, input: &str, expected: &str) {
    match run_with_input(source, input) {
        Ok(output) => assert_eq!(output, expected, "Wrong output for:\n{source}"),
        Err(e) => panic!("Script failed: {e}\nScript:\n{source}"),
    }
}

fn assert_error(source: &str, fragment: &str) {
    match run_with_input(source, "") {
        Ok(output) => {
            panic!("Script succeeded with output {output:?} but was expected to fail:\n{source}")
        },
        Err(e) => assert!(e.contains(fragment),
                          "Error {e:?} does not mention {fragment:?}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x <- 3; y <- 4\nscrie x + y", "7\n");
    assert_output("scrie 7 * 9", "63\n");
    assert_output("scrie 8 - 5", "3\n");
    assert_output("scrie 10 % 3", "1\n");
    assert_output("scrie (1 + 2) * 3", "9\n");
    assert_output("scrie -2 + 3", "1\n");
}

#[test]
fn division_produces_decimals() {
    assert_output("scrie 5 / 2", "2.5\n");
    assert_output("scrie 4 / 2", "2\n");
}

#[test]
fn write_concatenates_with_no_separator() {
    assert_output("scrie \"a\", 1 + 1, \"b\"", "a2b\n");
    assert_output("a <- 5; b <- 2; a <-> b\nscrie a, b", "25\n");
}

#[test]
fn swap_exchanges_values() {
    assert_output("a <- 5\nb <- 2\na <-> b\nscrie a\nscrie b", "2\n5\n");
    assert_output("a <- 1\nb <- 2\na <--> b\nscrie a, b", "21\n");
}

#[test]
fn if_zero_is_falsy() {
    assert_output("daca 0 atunci scrie 1 altfel scrie 2 sf", "2\n");
    assert_output("daca 3 atunci scrie 1 altfel scrie 2 sf", "1\n");
    assert_output("daca 0 atunci scrie 1 sf\nscrie 9", "9\n");
}

#[test]
fn for_loop_end_is_inclusive() {
    assert_output("pentru i <- 1, 3 executa scrie i sf", "1\n2\n3\n");
    assert_output("pentru i <- 1, 6, 2 executa scrie i sf", "1\n3\n5\n");
    assert_output("pentru i <- 3, 1, -1 executa scrie i sf", "3\n2\n1\n");
    assert_output("pentru i <- 3, 1 executa scrie i sf", "");
}

#[test]
fn while_is_pre_test() {
    assert_output("x <- 0\ncat timp x < 3 executa x <- x + 1 sf\nscrie x", "3\n");
    assert_output("x <- 9\ncat timp x < 3 executa x <- x + 1 sf\nscrie x", "9\n");
}

#[test]
fn do_while_runs_at_least_once() {
    assert_output("x <- 0\nexecuta x <- x + 1 cat timp x < 3\nscrie x", "3\n");
    assert_output("x <- 5\nexecuta x <- x + 1 cat timp x < 3\nscrie x", "6\n");
}

#[test]
fn repeat_until_stops_when_condition_holds() {
    assert_output("x <- 0\nrepeta x <- x + 1 pana cand x >= 3\nscrie x", "3\n");
    // The body always runs once, even when the condition already holds.
    assert_output("x <- 5\nrepeta x <- x + 1 pana cand x >= 3\nscrie x", "6\n");
}

#[test]
fn or_binds_tighter_than_and() {
    // The published precedence table is inverted: `1 sau 0 si 0` reads as
    // `(1 sau 0) si 0`, not `1 sau (0 si 0)`.
    assert_output("scrie 1 sau 0 si 0", "0\n");
    assert_output("scrie 1 sau (0 si 0)", "1\n");
}

#[test]
fn not_swallows_the_remaining_chain() {
    // `not 0 si 0` reads as `not (0 si 0)`.
    assert_output("scrie not 0 si 0", "1\n");
    assert_output("scrie (not 0) si 0", "0\n");
}

#[test]
fn logic_short_circuits() {
    // The skipped side would divide by zero if it were evaluated.
    assert_output("scrie 1 sau 1 / 0", "1\n");
    assert_output("scrie 0 si 1 / 0", "0\n");
}

#[test]
fn uppercase_logic_keywords() {
    assert_output("scrie 1 SI 1", "1\n");
    assert_output("scrie 0 SAU 0", "0\n");
    assert_output("scrie NOT 1", "0\n");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_output("scrie 2 < 3", "1\n");
    assert_output("scrie 2 >= 3", "0\n");
    assert_output("scrie 2 != 3", "1\n");
    assert_output("scrie 2 = 2", "1\n");
}

#[test]
fn strings_compare_lexicographically() {
    assert_output("scrie \"abc\" < \"abd\"", "1\n");
    assert_output("scrie \"abc\" = \"abc\"", "1\n");
    assert_output("scrie 'abc' != 'abd'", "1\n");
}

#[test]
fn sqrt_and_truncation() {
    assert_output("scrie \u{221a}9", "3\n");
    assert_output("scrie \u{221a}(9 + 16)", "5\n");
    assert_output("scrie [7 / 2]", "3\n");
    assert_output("scrie [2.9]", "2\n");
    // Truncation rounds toward zero and is idempotent.
    assert_output("scrie [-7 / 2]", "-3\n");
    assert_output("scrie [[2.9]]", "2\n");
}

#[test]
fn read_stores_numbers_or_text() {
    assert_output_with_input("citeste a, b, c\nscrie a + c\nscrie b",
                             "5 abc 2.5",
                             "7.5\nabc\n");
    assert_output_with_input("citeste n\npentru i <- 1, n executa scrie i sf",
                             "2",
                             "1\n2\n");
}

#[test]
fn division_by_zero_is_error() {
    assert_error("scrie 5 / 0", "Division by zero");
    assert_error("scrie 5 % 0", "Division by zero");
}

#[test]
fn failing_write_produces_no_output() {
    match run_with_input("scrie 1\nscrie 2, 5 / 0", "") {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => assert!(e.contains("Division by zero"), "Unexpected error: {e}"),
    }
    // Only the first statement's line is written; the failing one is dropped
    // entirely, including the pieces evaluated before the failure.
    let mut io = BufferedIo::new("");
    let _ = pseudocod::run("scrie 1\nscrie 2, 5 / 0", &mut io);
    assert_eq!(io.output(), "1\n");
}

#[test]
fn unknown_variable_is_error() {
    assert_error("scrie x", "Unknown variable 'x'");
    assert_error("a <- 1\na <-> b", "Unknown variable 'b'");
    assert_error("x <- 1; y <- z; x <- 2", "Unknown variable 'z'");
}

#[test]
fn text_has_no_truth_value() {
    assert_error("daca \"x\" atunci scrie 1 sf", "Type error");
    assert_error("scrie \"x\" sau 1", "Type error");
}

#[test]
fn mixed_type_operations_are_errors() {
    assert_error("scrie \"a\" + 1", "Type error");
    assert_error("scrie 1 = \"1\"", "Cannot compare");
}

#[test]
fn zero_step_is_error() {
    assert_error("pentru i <- 1, 3, 0 executa scrie i sf", "step");
}

#[test]
fn negative_sqrt_is_error() {
    assert_error("scrie \u{221a}(0 - 4)", "square root");
}

#[test]
fn exhausted_input_is_error() {
    assert_error("citeste a", "No more input");
}

#[test]
fn unrecognized_character_is_error() {
    assert_error("scrie 1 $", "Unrecognized character");
}

#[test]
fn missing_sf_is_error() {
    assert_error("daca 1 atunci scrie 1", "end of input");
    assert_error("pentru i <- 1, 3 executa scrie i", "end of input");
}

#[test]
fn identifier_alone_is_error() {
    assert_error("x", "Unexpected");
}

#[test]
fn comments_are_ignored() {
    assert_output("# un comentariu\nscrie 1 # alt comentariu\nscrie 2", "1\n2\n");
}

#[test]
fn linter_folds_textbook_notation() {
    assert_output("x \u{2190} 5\nscrie x", "5\n");
    assert_output("daca 1 \u{2260} 2 atunci scrie \"da\" sf", "da\n");
    assert_output_with_input("cite\u{219}te a\nscrie a \u{2264} 3", "2", "1\n");
}

#[test]
fn linter_normalizes_diacritics_and_symbols() {
    assert_eq!(linter::normalize("cite\u{219}te a"), "citeste a\n");
    assert_eq!(linter::normalize("p\u{e2}n\u{103} c\u{e2}nd"), "pana cand\n");
    assert_eq!(linter::normalize("x \u{2265} 2"), "x >= 2\n");
    assert_eq!(linter::normalize("a <---> b"), "a <-> b\n");
}

#[test]
fn nested_blocks() {
    assert_output(concat!("pentru i <- 1, 2 executa\n",
                          "    pentru j <- 1, 2 executa\n",
                          "        daca i = j atunci scrie i, j sf\n",
                          "    sf\n",
                          "sf"),
                  "11\n22\n");
}

#[test]
fn multiplication_is_commutative() {
    assert_output("a <- 2.5\nb <- 4\nscrie a * b\nscrie b * a", "10\n10\n");
}

#[test]
fn printer_round_trip() {
    let source = concat!("citeste n\n",
                         "s <- 0; p <- 1\n",
                         "pentru i <- 1, n, 2 executa\n",
                         "    s <- s + i\n",
                         "    daca s > 10 atunci\n",
                         "        scrie \"mare\"\n",
                         "    altfel\n",
                         "        scrie \"mic\", s\n",
                         "    sf\n",
                         "sf\n",
                         "cat timp s > 0 executa s <- s - [\u{221a}s] sf\n",
                         "repeta p <- p * 2 pana cand p >= n sau not s < 0\n",
                         "executa p <- p - 1 cat timp p > 0\n");

    let program = pseudocod::parse(source).expect("source should parse");
    let canonical = printer::pretty(&program);

    let reparsed = pseudocod::parse(&canonical).expect("canonical form should parse");
    assert_eq!(printer::pretty(&reparsed), canonical);

    let again = pseudocod::parse(&printer::pretty(&reparsed)).expect("round trip should parse");
    assert_eq!(reparsed, again);
}

#[test]
fn test_script_file() {
    let script = std::fs::read_to_string("tests/example.pseudo").expect("missing file");
    let mut io = BufferedIo::new("4 7");
    if let Err(e) = pseudocod::run(&script, &mut io) {
        panic!("Script failed: {e}");
    }
    assert_eq!(io.output(), "media este 5.5\n");
}
