use hatch::error::Error;
use hatch::prompt::{InputEvent, InputSource, ScriptedInput};

#[test]
fn test_scripted_input_replays_in_order() {
    let mut input = ScriptedInput::new(vec![
        InputEvent::line("simple-app"),
        InputEvent::Down,
        InputEvent::Confirm,
    ]);
    let choices = vec!["a".to_string(), "b".to_string()];

    assert_eq!(input.read_line("name", "").unwrap(), InputEvent::line("simple-app"));
    assert_eq!(input.read_key("type", &choices, 0).unwrap(), InputEvent::Down);
    assert_eq!(input.remaining(), 1);
    assert_eq!(input.read_line("other", "x").unwrap(), InputEvent::Confirm);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_scripted_input_exhausted() {
    let mut input = ScriptedInput::default();
    assert!(matches!(input.read_line("name", ""), Err(Error::InputExhausted)));
}
