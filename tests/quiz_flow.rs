use std::fs;

use csv_quiz::{LoadError, Quiz, QuizError, Score, ValidationError};

fn write_problems(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("problems.csv");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

fn play(contents: &str, answers: &str) -> (Score, String) {
    let (_dir, path) = write_problems(contents);
    let quiz = Quiz::from_csv(&path).unwrap();

    let mut output = Vec::new();
    let score = quiz.run_with(&mut answers.as_bytes(), &mut output).unwrap();
    (score, String::from_utf8(output).unwrap())
}

#[test]
fn scores_matching_answer() {
    let (score, output) = play("2+2;3;4;2\n", "2\n");

    assert_eq!(score, Score { correct: 1, total: 1 });
    assert_eq!(output.lines().last(), Some("You scored 1 out of 1."));
}

#[test]
fn wrong_answer_scores_zero() {
    let (_, output) = play("2+2;3;4;2\n", "4\n");
    assert_eq!(output.lines().last(), Some("You scored 0 out of 1."));
}

#[test]
fn mixed_answers_over_several_problems() {
    let problems = "\
5+5;8;10;12;2
Capital of France?;Berlin;Madrid;Paris;Rome;3
\"Bits in a byte; usually?\";4;8;2
9-4;5;4;1
";
    let (score, output) = play(problems, "2\nthree\n2\n\n");

    assert_eq!(score, Score { correct: 2, total: 4 });
    assert!(output.contains(
        "Problem #2: Capital of France?\n1) Berlin\n2) Madrid\n3) Paris\n4) Rome\n"
    ));
    assert!(output.contains("Problem #3: Bits in a byte; usually?\n"));
    assert!(output.contains("Expected number, but got: three\n"));
    assert!(output.contains("Failed to read your answer: unexpected newline\n"));
    assert_eq!(output.lines().last(), Some("You scored 2 out of 4."));
}

#[test]
fn loaded_quiz_keeps_file_order() {
    let (_dir, path) = write_problems("1+1;2;3;1\nCapital of Italy?;Rome;Milan;Turin;1\n");

    let quiz = Quiz::from_csv(&path).unwrap();
    let questions = quiz.app().questions();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].text(), "1+1");
    assert_eq!(questions[1].options(), ["Rome", "Milan", "Turin"]);
    assert!(quiz.app().answers().is_empty());
}

#[test]
fn short_row_aborts_before_prompting() {
    let (_dir, path) = write_problems("2+2;4\n");

    let err = Quiz::from_csv(&path).err().unwrap();

    assert!(matches!(
        err,
        QuizError::Load(LoadError::Validation(ValidationError::NotEnoughFields { row: 1, .. }))
    ));
}

#[test]
fn out_of_range_answer_cites_row() {
    let (_dir, path) = write_problems("1+1;2;3;1\n2+2;3;4;5\n");

    let err = Quiz::from_csv(&path).err().unwrap();

    assert_eq!(
        err.to_string(),
        "invalid answer for 2 row: must be an option number, got: 5"
    );
}

#[test]
fn missing_file_fails_to_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = Quiz::from_csv(temp_dir.path().join("nope.csv")).err().unwrap();

    assert!(matches!(err, QuizError::Load(LoadError::Open { .. })));
}
