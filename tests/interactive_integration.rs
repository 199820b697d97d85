use std::io::Write;
use std::process::{Command, Stdio};

const START: &str = "\
5 | N| G| R| S| D|
4 |__|__|__|__| P|
3 |__|__|__|__|__|
2 | p|__|__|__|__|
1 | d| s| r| g| n|
    a  b  c  d  e

Captures UPPER: 
Captures lower: 

";

fn play(input: &str, args: &[&str]) -> (String, Option<i32>) {
    let exe = env!("CARGO_BIN_EXE_box_shogi");
    let mut child = Command::new(exe)
        .args(args)
        .env_remove("BOX_SHOGI_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn box_shogi binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("binary did not finish");
    (
        String::from_utf8(output.stdout).expect("utf-8 output"),
        output.status.code(),
    )
}

#[test]
fn illegal_first_move_transcript() {
    let (stdout, code) = play("move a1 a2\n", &["-i"]);
    let expected = format!(
        "{START}lower> lower player action: move a1 a2\n{START}UPPER player wins.  Illegal move.\n"
    );
    assert_eq!(stdout, expected);
    assert_eq!(code, Some(0));
}

#[test]
fn empty_line_is_illegal_without_echo() {
    let (stdout, _) = play("\n", &["-i"]);
    assert!(!stdout.contains("player action"));
    assert!(stdout.ends_with("UPPER player wins.  Illegal move.\n"));
}

#[test]
fn turns_alternate_until_input_closes() {
    let (stdout, code) = play("move a2 a3\nmove e4 e3\n", &["-i"]);
    assert!(stdout.contains("lower> lower player action: move a2 a3\n"));
    assert!(stdout.contains("UPPER> UPPER player action: move e4 e3\n"));
    assert!(stdout.contains("3 | p|__|__|__| P|\n"));
    assert!(!stdout.contains("wins"));
    assert_eq!(code, Some(0));
}

#[test]
fn missing_mode_flag_prints_usage() {
    let (stdout, code) = play("", &[]);
    assert!(stdout.is_empty());
    assert_eq!(code, Some(2));
}
