//! The index screen: a page with a root toast host and a storekeeper dialog.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use toastack::{
    Buffer, Button, Color, Column, Dialog, DialogConfig, DialogHandle, Event, FnLayer,
    Illustration, Key, Layer, Rect, Registry, Style, TextBlock, ToastConfig, ToastHost, Toaster,
};

const TITLE: &str = "Interested in becoming a SIX Storekeeper?";
const DESCRIPTION: &str = "If you want to join SIX as a storekeeper, get in touch with us and our team will guide you through the next steps";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct IndexScreen {
    // Dropped in declaration order: the dialog's nested host has to be
    // released before the root host.
    dialog: Rc<Dialog>,
    page: Column,
    root: ToastHost,
    toaster: Toaster,
    count: Rc<Cell<u32>>,
}

impl IndexScreen {
    pub fn new(registry: &Registry) -> Self {
        let toaster = Toaster::new(registry.clone());
        let root = ToastHost::mount(registry, ToastConfig::new("root"));
        let status = Rc::new(RefCell::new(String::from("r: refs  t: toast  m: modal  q: quit")));
        let count = Rc::new(Cell::new(0));

        let dialog = Rc::new(Dialog::new(
            registry,
            DialogConfig::new()
                .title(TITLE)
                .description(DESCRIPTION)
                .illustrator(
                    Illustration::new(["  ┌─┬─┐", "  │▒│▒│  SIX", "  └─┴─┘"])
                        .style(Style::new().foreground(Color::oklch(0.55, 0.2, 25.0))),
                )
                .close_on_outside(true)
                .toast(ToastConfig::new("storekeeper toast").margin(4)),
            dialog_content(&toaster, &status, &count),
        ));

        let page = page_content(&toaster, &dialog, &status);

        Self {
            dialog,
            page,
            root,
            toaster,
            count,
        }
    }

    fn page_area(screen: Rect) -> Rect {
        screen.inset(4, 2)
    }

    pub fn render(&self, buf: &mut Buffer, screen: Rect) {
        let page_bg = Color::oklch(0.22, 0.02, 250.0).to_rgb();
        buf.fill(screen, page_bg);
        self.page.render(buf, Self::page_area(screen));
        self.root.render(buf, screen);
        self.dialog.render(buf, screen);
    }

    pub fn handle_event(&self, event: &Event, screen: Rect) -> Flow {
        if self.dialog.handle_event(event, screen).is_consumed() {
            return Flow::Continue;
        }
        if self.root.handle_event(event, screen).is_consumed() {
            return Flow::Continue;
        }

        match event {
            Event::Click { .. } => {
                self.page.handle_event(event, Self::page_area(screen));
            }
            Event::Key { key, .. } => match key {
                Key::Char('q') => return Flow::Quit,
                Key::Char('t') => self.toaster.show(),
                Key::Char('h') => self.toaster.hide(),
                Key::Char('r') => {
                    self.toaster.show_refs();
                }
                Key::Char('m') => self.dialog.open(),
                Key::Char('+') if self.dialog.is_open() => {
                    self.count.set(self.count.get() + 1);
                }
                _ => {}
            },
            Event::Resize { width, height } => {
                log::debug!("resized to {}x{}", width, height);
            }
        }

        Flow::Continue
    }
}

fn describe_refs(toaster: &Toaster) -> String {
    let refs = toaster.show_refs();
    let entries: Vec<String> = refs.iter().map(ToString::to_string).collect();
    format!("depth {}: {}", refs.len(), entries.join(", "))
}

fn status_line(status: &Rc<RefCell<String>>) -> impl Layer + 'static {
    let status = Rc::clone(status);
    FnLayer::new(1, move |buf: &mut Buffer, area: Rect| {
        let style = Style::new().dim();
        buf.put_str(area.x, area.y, &status.borrow(), &style, area.right());
    })
}

fn page_content(toaster: &Toaster, dialog: &Rc<Dialog>, status: &Rc<RefCell<String>>) -> Column {
    let refs_toaster = toaster.clone();
    let refs_status = Rc::clone(status);
    let show_toaster = toaster.clone();
    let modal = Rc::clone(dialog);

    Column::new()
        .gap(1)
        .child(TextBlock::new("toastack demo").style(Style::new().bold()))
        .child(Button::new("Show Stack Refs", move || {
            *refs_status.borrow_mut() = describe_refs(&refs_toaster);
        }))
        .child(Button::new("Show Toast", move || show_toaster.show()))
        .child(Button::new("Show Modal", move || modal.open()))
        .child(status_line(status))
}

fn dialog_content(
    toaster: &Toaster,
    status: &Rc<RefCell<String>>,
    count: &Rc<Cell<u32>>,
) -> Column {
    let shown = Rc::clone(count);
    let increase = Rc::clone(count);
    let refs_toaster = toaster.clone();
    let refs_status = Rc::clone(status);
    let show_toaster = toaster.clone();

    Column::new()
        .gap(1)
        .child(FnLayer::new(1, move |buf: &mut Buffer, area: Rect| {
            let text = format!("Count: {}", shown.get());
            buf.put_str(area.x, area.y, &text, &Style::new(), area.right());
        }))
        .child(Button::new("Increase", move || {
            increase.set(increase.get() + 1);
        }))
        .child(Button::new("Show Stack Refs", move || {
            *refs_status.borrow_mut() = describe_refs(&refs_toaster);
        }))
        .child(Button::new("Show Toast", move || show_toaster.show()))
        .child(status_line(status))
}
