use std::fs;

use turtle_logo::{
    Program,
    ast::Instruction,
    build_fan, build_path, build_path_3d,
    error::ParseFailure,
    interpreter::{
        lexer::{DELIMITERS, tokenize},
        variables::Variable,
    },
    parse, parse_with_delimiters,
    render::to_svg,
    turtle::point::Point2,
    view::ViewConfig,
};
use walkdir::WalkDir;

const EPSILON: f64 = 0.001;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "logo"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match parse(&content) {
            Ok(program) => {
                let points = build_path(&program.instructions);
                assert_eq!(points.len(), program.instructions.forward_count() + 1);
                assert!(to_svg(&[points], &ViewConfig::default()).is_ok());
            },
            Err(e) => panic!("Demo {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn assert_success(src: &str) -> Program {
    parse(src).unwrap_or_else(|e| panic!("Program failed: {e}"))
}

fn assert_failure(src: &str) -> ParseFailure {
    match parse(src) {
        Ok(program) => {
            panic!("Program succeeded but was expected to fail: {}", program.instructions)
        },
        Err(e) => e,
    }
}

fn assert_path(src: &str, expected: &[(f64, f64)]) {
    let path = build_path(&assert_success(src).instructions);
    assert_eq!(path.len(), expected.len(), "{src} walked {path:?}");
    for (point, &(x, y)) in path.iter().zip(expected) {
        assert!(point.distance_max(Point2::new(x, y)) < EPSILON,
                "{src}: expected ({x}, {y}), got {point}");
    }
}

fn variable(name: char) -> Variable {
    Variable::new(name).unwrap()
}

#[test]
fn whitespace_only_input_has_no_tokens() {
    assert!(tokenize("", DELIMITERS).is_empty());
    assert!(tokenize(" \t\r\n \u{0B}\u{0C}  ", DELIMITERS).is_empty());
}

#[test]
fn tokenizer_splits_on_any_delimiter() {
    let expected = ["break", "this", "string", "up"];
    assert_eq!(tokenize("break this string up", &[' ']), expected);
    assert_eq!(tokenize("break this string up", DELIMITERS), expected);
    assert_eq!(tokenize("break\tthis\n\nstring   up", DELIMITERS), expected);
}

#[test]
fn square_walk() {
    assert_path("{ FD 20 RT 90 FD 20 LT 90 FD 20 RT 180 FD 40 RT 90 FD 20 }",
                &[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0), (40.0, 20.0), (0.0, 20.0), (0.0, 0.0)]);
}

#[test]
fn program_spread_over_lines() {
    assert_path("{\n\tFD 20\n\tRT 90\n\tFD 20\n}\n", &[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0)]);
}

#[test]
fn set_and_polish() {
    let program = assert_success("{ SET A := 3 4 + ; FD A }");
    assert!((program.variables.get(variable('A')) - 7.0).abs() < EPSILON);
    assert_path("{ SET A := 3 4 + ; FD A }", &[(0.0, 0.0), (7.0, 0.0)]);
}

#[test]
fn polish_operators() {
    let cases = [("2 3 -", -1.0),
                 ("2 3 *", 6.0),
                 ("3 2 /", 1.5),
                 ("2 3 ^", 8.0),
                 ("1 2 3 + *", 5.0),
                 ("5", 5.0)];
    for (expression, expected) in cases {
        let program = assert_success(&format!("{{ SET B := {expression} ; }}"));
        let value = program.variables.get(variable('B'));
        assert!((value - expected).abs() < EPSILON, "{expression} gave {value}");
    }
}

#[test]
fn variables_feed_expressions() {
    let program = assert_success("{ SET A := 2 ; SET B := A A * ; SET C := B -A + ; FD C }");
    assert!((program.variables.get(variable('C')) - 2.0).abs() < EPSILON);
    assert!(matches!(program.instructions.as_slice(), [Instruction::Forward(d)] if (d - 2.0).abs() < EPSILON));
}

#[test]
fn do_loop_unrolls() {
    let program = assert_success("{ DO A FROM 1 TO 3 { FD 10 RT 90 } }");
    assert_eq!(program.instructions.len(), 6);
    assert!((program.variables.get(variable('A')) - 3.0).abs() < EPSILON);
    assert_path("{ DO A FROM 1 TO 3 { FD 10 RT 90 } }",
                &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
}

#[test]
fn do_loop_counter_is_visible_in_body() {
    assert_path("{ DO A FROM 1 TO 3 { FD A } }", &[(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (6.0, 0.0)]);
}

#[test]
fn instructions_after_loop_run_once() {
    let program = assert_success("{ DO A FROM 1 TO 2 { RT 90 } FD 5 }");
    assert_eq!(program.instructions.len(), 3);
    assert_eq!(program.instructions.forward_count(), 1);
}

#[test]
fn redundant_instruction_warns() {
    let program = assert_success("{ FD 0 }");
    assert!(program.warnings.iter().any(|w| w.to_string().contains("redundant")),
            "{:?}",
            program.warnings);
    assert_eq!(program.instructions.len(), 1);
}

#[test]
fn malformed_polish_fails() {
    let failure = assert_failure("{ SET A := 1 2 ; }");
    assert!(failure.errors().count() > 0);
    assert!(failure.to_string().contains("Parsing failed"));
}

#[test]
fn operator_without_operands_fails() {
    assert_failure("{ SET A := + ; }");
    assert_failure("{ SET A := 1 + ; }");
}

#[test]
fn empty_program() {
    assert!(assert_failure("").is_empty_program());
    assert!(assert_failure(" \n\t ").is_empty_program());
}

#[test]
fn missing_closing_brace() {
    let failure = assert_failure("{ FD 10");
    assert!(failure.ran_out_of_tokens());
    assert!(failure.to_string().contains("expected program to end with a \"}\""));
}

#[test]
fn grammar_violations() {
    assert_failure("FD 10 }");
    assert_failure("{ FD }");
    assert_failure("{ FD X1 }");
    assert_failure("{ JUMP 10 }");
    assert_failure("{ SET a := 1 ; }");
    assert_failure("{ SET -A := 1 ; }");
    assert_failure("{ DO A 1 TO 3 { FD 1 } }");
    assert_failure("{ DO A FROM 1 TO 3 FD 1 }");
}

#[test]
fn failure_keeps_partial_instructions() {
    let failure = assert_failure("{ FD 10 RT 90 FD }");
    assert_eq!(failure.partial_instructions().len(), 2);
}

#[test]
fn trailing_tokens_warn() {
    let program = assert_success("{ FD 1 } FD 2");
    assert_eq!(program.instructions.len(), 1);
    assert!(!program.warnings.is_empty());
}

#[test]
fn custom_delimiters() {
    let program = parse_with_delimiters("{,FD,5,}", &[',']).unwrap();
    assert_eq!(program.instructions.len(), 1);
}

#[test]
fn empty_instruction_list_stays_home() {
    assert_path("{ }", &[(0.0, 0.0)]);
}

#[test]
fn fan_and_spatial_walks() {
    let program = assert_success("{ FD 10 }");

    let fan = build_fan(&program.instructions, 2);
    assert_eq!(fan.len(), 2);
    assert!(fan[1].last().unwrap().distance_max(Point2::new(-10.0, 0.0)) < EPSILON);

    let spatial = build_path_3d(&program.instructions).project_xy();
    assert!(spatial.last().unwrap().distance_max(Point2::new(10.0, 0.0)) < EPSILON);
}
