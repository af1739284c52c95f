use super::*;

#[test]
fn starts_at_root() {
    let stack = ModeStack::new();
    assert_eq!(stack.top(), Mode::Root);
    assert_eq!(stack.depth(), 1);
}

#[test]
fn push_and_pop() {
    let mut stack = ModeStack::new();
    stack.push(Mode::EmbeddedHost);
    stack.push(Mode::Code);
    assert_eq!(stack.top(), Mode::Code);
    assert_eq!(stack.pop(), Some(Mode::Code));
    assert_eq!(stack.top(), Mode::EmbeddedHost);
    assert_eq!(
        stack.as_slice(),
        &[Mode::Root, Mode::EmbeddedHost][..]
    );
}

#[test]
fn root_is_never_popped() {
    let mut stack = ModeStack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.top(), Mode::Root);
    assert_eq!(stack.depth(), 1);
}

#[test]
fn reset_truncates_to_root() {
    let mut stack = ModeStack::new();
    for _ in 0..10 {
        stack.push(Mode::DoubleQuotedString);
        stack.push(Mode::DollarInterpolation);
    }
    stack.reset();
    assert_eq!(stack, ModeStack::new());
}

#[test]
fn display_names() {
    assert_eq!(Mode::BraceInterpolation.to_string(), "brace-interpolation");
    assert_eq!(Mode::EmbeddedHost.to_string(), "embedded-host");
}
