use super::*;

#[test]
fn test_parse_mod_shortcut() {
    let shortcut = Shortcut::parse("mod+e").unwrap();
    assert_eq!(shortcut.key, "e");
    assert!(shortcut.modifiers.cmd);
    assert!(!shortcut.modifiers.shift);
}

#[test]
fn test_parse_is_case_insensitive_and_trims() {
    let shortcut = Shortcut::parse("  Cmd+R ").unwrap();
    assert_eq!(shortcut, Shortcut::new("r", Modifiers::cmd()));
}

#[test]
fn test_parse_errors() {
    assert_eq!(Shortcut::parse(""), Err(ShortcutParseError::Empty));
    assert_eq!(Shortcut::parse("cmd+shift"), Err(ShortcutParseError::MissingKey));
    assert_eq!(
        Shortcut::parse("cmd+e+r"),
        Err(ShortcutParseError::UnknownToken("r".to_string()))
    );
    assert_eq!(
        Shortcut::parse("cmd+wat"),
        Err(ShortcutParseError::UnknownKey("wat".to_string()))
    );
}

#[test]
fn test_accelerator_matches_ctrl_or_cmd() {
    let export = Shortcut::parse("mod+e").unwrap();
    assert!(export.matches(&KeyPress::new("e", Modifiers::cmd())));
    assert!(export.matches(&KeyPress::new("e", Modifiers::ctrl())));
    assert!(export.matches(&KeyPress::new(
        "e",
        Modifiers {
            cmd: true,
            ctrl: true,
            ..Default::default()
        }
    )));
}

#[test]
fn test_accelerator_required() {
    let export = Shortcut::parse("mod+e").unwrap();
    assert!(!export.matches(&KeyPress::new("e", Modifiers::default())));
    assert!(!export.matches(&KeyPress::new("r", Modifiers::cmd())));
}

#[test]
fn test_shift_must_match() {
    let export = Shortcut::parse("mod+e").unwrap();
    let shifted = KeyPress::new(
        "E",
        Modifiers {
            ctrl: true,
            shift: true,
            ..Default::default()
        },
    );
    assert!(!export.matches(&shifted));
}

#[test]
fn test_modifiers_from_names() {
    let modifiers = Modifiers::from_names(&["meta", "Shift", "bogus"]);
    assert!(modifiers.cmd);
    assert!(modifiers.shift);
    assert!(!modifiers.ctrl);
    assert_eq!(modifiers.to_string(), "cmd+shift");
}

#[test]
fn test_display_per_platform() {
    let reset = Shortcut::parse("mod+r").unwrap();
    assert_eq!(reset.display_for_platform(Platform::MacOS), "⌘R");
    assert_eq!(reset.display_for_platform(Platform::Linux), "Ctrl+R");
}

#[test]
fn test_display_follows_current_platform() {
    let export = Shortcut::parse("mod+shift+e").unwrap();
    assert_eq!(export.to_string(), export.display());
    assert_eq!(
        export.display(),
        export.display_for_platform(Platform::current())
    );
}

#[test]
fn test_known_keys() {
    assert!(is_known_key("e"));
    assert!(is_known_key("7"));
    assert!(is_known_key("f12"));
    assert!(!is_known_key("f13"));
    assert!(!is_known_key("wat"));
    assert_eq!(canonicalize_key("Esc"), "escape");
}
