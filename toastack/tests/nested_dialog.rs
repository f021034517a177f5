use toastack::{
    Buffer, Button, Column, Dialog, DialogConfig, DialogHandle, Event, EventOutcome, Rect,
    Registry, TextBlock, ToastConfig, ToastHost, Toaster,
};

const SCREEN: Rect = Rect::new(0, 0, 60, 24);

struct Screen {
    // Fields drop in declaration order: the dialog (and its nested host) must
    // be released before the root host.
    dialog: Dialog,
    root: ToastHost,
    toaster: Toaster,
    registry: Registry,
}

fn screen(close_on_outside: bool) -> Screen {
    let registry = Registry::new();
    let toaster = Toaster::new(registry.clone());
    let root = ToastHost::mount(&registry, ToastConfig::new("root").message("root notice"));

    let inner_toaster = toaster.clone();
    let content = Column::new()
        .child(TextBlock::new("Count: 0"))
        .child(Button::new("Show Toast", move || inner_toaster.show()));

    let dialog = Dialog::new(
        &registry,
        DialogConfig::new()
            .title("Interested in becoming a storekeeper?")
            .description("Get in touch and our team will guide you.")
            .close_on_outside(close_on_outside)
            .toast(ToastConfig::new("dialog").message("dialog notice")),
        content,
    );

    Screen {
        dialog,
        root,
        toaster,
        registry,
    }
}

fn draw(screen: &Screen) -> Buffer {
    let mut buf = Buffer::new(SCREEN.width, SCREEN.height);
    buf.put_str(1, 10, "page content", &Default::default(), SCREEN.width);
    screen.root.render(&mut buf, SCREEN);
    screen.dialog.render(&mut buf, SCREEN);
    buf
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_toast_follows_dialog_open_and_close() {
    let s = screen(true);
    assert_eq!(s.registry.depth(), 1);

    s.dialog.open();
    assert_eq!(s.registry.depth(), 2);

    s.toaster.show();
    assert!(!s.root.is_visible());
    let buf = draw(&s);
    assert!(buf.find_row("dialog notice").is_some());
    assert!(buf.find_row("root notice").is_none());

    // Tap outside the panel, away from the notice box.
    let outcome = s.dialog.handle_event(&Event::click(0, 8), SCREEN);
    assert_eq!(outcome, EventOutcome::Consumed);
    assert!(!s.dialog.is_open());
    assert_eq!(s.registry.depth(), 1);

    s.toaster.show();
    assert!(s.root.is_visible());
    let buf = draw(&s);
    assert!(buf.find_row("root notice").is_some());
    assert!(buf.find_row("dialog notice").is_none());

    assert_eq!(s.registry.audit(), Ok(()));
}

#[test]
fn test_button_inside_dialog_targets_nested_host() {
    let s = screen(false);
    s.dialog.open();

    let content = s.dialog.layout(SCREEN).content;
    let outcome = s
        .dialog
        .handle_event(&Event::click(content.x + 1, content.y + 1), SCREEN);
    assert_eq!(outcome, EventOutcome::Consumed);

    assert!(!s.root.is_visible());
    let refs = s.toaster.show_refs();
    assert_eq!(refs.len(), 2);
    assert!(refs[1].visible);
    assert_eq!(refs[1].label, "dialog");
}

#[test]
fn test_nested_toast_close_button_does_not_close_dialog() {
    let s = screen(true);
    s.dialog.open();
    s.toaster.show();

    let buf = draw(&s);
    let row = buf.find_row("✕").unwrap();
    let col = buf
        .row_text(row)
        .chars()
        .position(|c| c == '✕')
        .unwrap() as u16;

    let outcome = s.dialog.handle_event(&Event::click(col, row), SCREEN);
    assert_eq!(outcome, EventOutcome::Consumed);
    assert!(s.dialog.is_open());
    assert!(!s.toaster.show_refs()[1].visible);
}

#[test]
fn test_reopening_dialog_mounts_fresh_host() {
    let s = screen(true);

    s.dialog.open();
    let first = s.dialog.nested_host().unwrap();
    s.toaster.show();
    s.dialog.close();

    s.dialog.open();
    let second = s.dialog.nested_host().unwrap();
    assert_ne!(first, second);
    assert_eq!(s.registry.depth(), 2);
    assert!(!s.toaster.show_refs()[1].visible, "fresh host starts hidden");
}

#[test]
fn test_dropping_screen_with_open_dialog_is_clean() {
    let s = screen(true);
    let registry = s.registry.clone();
    s.dialog.open();
    drop(s);

    assert!(registry.is_empty());
    assert_eq!(registry.audit(), Ok(()));
}

#[test]
fn test_closing_twice_does_not_pop_root() {
    let s = screen(true);
    s.dialog.open();
    s.dialog.close();
    s.dialog.close();
    assert_eq!(s.registry.depth(), 1);
    assert_eq!(s.registry.stats().redundant_pops, 0);
}
