//! Browser bindings: drives the hook from real DOM cells.
//!
//! Every listener holds only a weak reference to its hook, and every
//! listener is removed on `destroyed` or when the hook is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Window};

use crate::{
    BoardHook, BoardSurface, CellAttrs, CellSource, ClickDecision, HookConfig, HookError, Host,
    Point, PositionalEvent, Size,
};

type Inner = BoardHook<DomSurface, DomHost>;
type Listener = Closure<dyn FnMut(Event)>;

/// Installs the panic hook when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Routes `tracing` output at `level` and above to the browser console.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) -> Result<(), JsError> {
    let level: tracing::Level = level
        .parse()
        .map_err(|_| JsError::new(&format!("unknown log level: {}", level)))?;
    tracing_subscriber::fmt()
        .with_writer(MakeWebConsoleWriter::new())
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .try_init()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// A board hook bound to a LiveView-style container element.
#[wasm_bindgen(js_name = BoardHook)]
pub struct WebBoardHook {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen(js_class = BoardHook)]
impl WebBoardHook {
    /// Creates a hook for the board rendered inside `root`.
    ///
    /// `push_event(name, payload)` forwards positional selections to the
    /// host. `config` is a plain object of [`HookConfig`] fields; `undefined`
    /// selects the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        root: HtmlElement,
        push_event: Function,
        config: JsValue,
    ) -> Result<WebBoardHook, JsError> {
        let config: HookConfig = if config.is_undefined() || config.is_null() {
            HookConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(HookError::from)?;

        let window = web_sys::window().ok_or(HookError::MissingGlobal("window"))?;
        let document = window
            .document()
            .ok_or(HookError::MissingGlobal("document"))?;

        let inner = Rc::new_cyclic(|weak: &Weak<RefCell<Inner>>| {
            let surface = DomSurface {
                window,
                document,
                root,
                table: None,
                listeners: Listeners::new(weak),
                config: config.clone(),
                root_listening: false,
                globally_listening: false,
            };
            let host = DomHost {
                push: push_event,
                event_name: config.event_name.clone(),
                pending: Vec::new(),
            };
            RefCell::new(BoardHook::new(surface, host, &config))
        });
        Ok(WebBoardHook { inner })
    }

    /// Attaches listeners and marks draggable pieces. Call once per mount.
    pub fn mounted(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.surface_mut().listen_root();
        inner.mounted();
    }

    /// Re-binds to the re-rendered cells. Call after every update.
    pub fn updated(&self) {
        self.inner.borrow_mut().updated();
    }

    /// Removes every listener and any drag proxy. Call once per unmount.
    pub fn destroyed(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.destroyed();
        inner.surface_mut().unlisten_root();
    }

    /// Returns true while a drag gesture is in progress.
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().is_dragging()
    }
}

/// Forwards positional events to the host's `pushEvent`.
///
/// Events are queued while the hook is borrowed and delivered afterwards, so
/// a host that reacts synchronously can call back into the hook.
pub struct DomHost {
    push: Function,
    event_name: String,
    pending: Vec<PositionalEvent>,
}

impl Host for DomHost {
    fn push_event(&mut self, event: &PositionalEvent) {
        self.pending.push(event.clone());
    }
}

struct Delivery {
    push: Function,
    event_name: String,
    events: Vec<PositionalEvent>,
}

impl DomHost {
    fn take_delivery(&mut self) -> Option<Delivery> {
        if self.pending.is_empty() {
            return None;
        }
        Some(Delivery {
            push: self.push.clone(),
            event_name: self.event_name.clone(),
            events: std::mem::take(&mut self.pending),
        })
    }
}

impl Delivery {
    fn deliver(self) {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let name = JsValue::from_str(&self.event_name);
        for event in self.events {
            let payload = match event.serialize(&serializer) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to encode positional event");
                    continue;
                }
            };
            if let Err(e) = self.push.call2(&JsValue::NULL, &name, &payload) {
                tracing::warn!(error = ?e, "host rejected positional event");
            }
        }
    }
}

struct Listeners {
    click: Listener,
    pointer_down: Listener,
    pointer_move: Listener,
    pointer_up: Listener,
    pointer_cancel: Listener,
    native_drag: Listener,
}

impl Listeners {
    fn new(hook: &Weak<RefCell<Inner>>) -> Self {
        Listeners {
            click: listener(hook, on_click),
            pointer_down: listener(hook, on_pointer_down),
            pointer_move: listener(hook, on_pointer_move),
            pointer_up: listener(hook, on_pointer_up),
            pointer_cancel: listener(hook, |inner, _| inner.on_pointer_cancel()),
            native_drag: Closure::new(|evt: Event| evt.prevent_default()),
        }
    }
}

fn listener(hook: &Weak<RefCell<Inner>>, handler: fn(&mut Inner, &Event)) -> Listener {
    let hook = hook.clone();
    Closure::new(move |evt: Event| {
        let Some(hook) = hook.upgrade() else {
            return;
        };
        let delivery = {
            let Ok(mut inner) = hook.try_borrow_mut() else {
                return;
            };
            handler(&mut *inner, &evt);
            inner.host_mut().take_delivery()
        };
        if let Some(delivery) = delivery {
            delivery.deliver();
        }
    })
}

fn on_click(inner: &mut Inner, evt: &Event) {
    let cell = target_element(evt).and_then(|el| inner.surface().cell_containing(&el));
    if inner.on_click(cell.as_ref()) == ClickDecision::Veto {
        evt.prevent_default();
        evt.stop_propagation();
    }
}

fn on_pointer_down(inner: &mut Inner, evt: &Event) {
    evt.prevent_default();
    let Some(point) = pointer_position(evt) else {
        return;
    };
    let cell = target_element(evt).and_then(|el| inner.surface().cell_containing(&el));
    inner.on_pointer_down(cell.as_ref(), point);
}

fn on_pointer_move(inner: &mut Inner, evt: &Event) {
    if let Some(point) = pointer_position(evt) {
        inner.on_pointer_move(point);
    }
}

fn on_pointer_up(inner: &mut Inner, evt: &Event) {
    match pointer_position(evt) {
        Some(point) => {
            inner.on_pointer_up(point);
        }
        None => inner.on_pointer_cancel(),
    }
}

fn target_element(evt: &Event) -> Option<Element> {
    evt.target()?.dyn_into::<Element>().ok()
}

fn pointer_position(evt: &Event) -> Option<Point> {
    let mouse = evt.dyn_ref::<MouseEvent>()?;
    Some(Point::new(mouse.client_x() as f64, mouse.client_y() as f64))
}

fn add_listener(target: &EventTarget, kind: &str, listener: &Listener, capture: bool) {
    let callback = listener.as_ref().unchecked_ref();
    if let Err(e) = target.add_event_listener_with_callback_and_bool(kind, callback, capture) {
        tracing::warn!(kind, error = ?e, "failed to attach listener");
    }
}

fn remove_listener(target: &EventTarget, kind: &str, listener: &Listener, capture: bool) {
    let callback = listener.as_ref().unchecked_ref();
    if let Err(e) = target.remove_event_listener_with_callback_and_bool(kind, callback, capture) {
        tracing::warn!(kind, error = ?e, "failed to detach listener");
    }
}

/// The board as rendered in a `<table>` inside the hook's root element.
pub struct DomSurface {
    window: Window,
    document: Document,
    root: HtmlElement,
    table: Option<Element>,
    listeners: Listeners,
    config: HookConfig,
    root_listening: bool,
    globally_listening: bool,
}

impl DomSurface {
    /// Attaches the capturing click listener to the root element.
    fn listen_root(&mut self) {
        if !self.root_listening {
            add_listener(&self.root, "click", &self.listeners.click, true);
            self.root_listening = true;
        }
    }

    fn unlisten_root(&mut self) {
        if self.root_listening {
            remove_listener(&self.root, "click", &self.listeners.click, true);
            self.root_listening = false;
        }
    }

    /// Returns the board cell enclosing `el`, if it belongs to this board.
    fn cell_containing(&self, el: &Element) -> Option<Element> {
        let cell = el.closest("td").ok()??;
        self.root.contains(Some(cell.as_ref())).then_some(cell)
    }

    fn piece_image(cell: &Element) -> Option<HtmlElement> {
        cell.query_selector("img").ok()??.dyn_into::<HtmlElement>().ok()
    }

    fn set_attribute(el: &Element, name: &str, value: &str) {
        if let Err(e) = el.set_attribute(name, value) {
            tracing::trace!(name, error = ?e, "attribute not set");
        }
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = el.style().set_property(property, value) {
            tracing::trace!(property, error = ?e, "style not applied");
        }
    }
}

impl CellSource for DomSurface {
    type Cell = Element;

    fn cells(&self) -> Vec<Element> {
        let Some(table) = &self.table else {
            return Vec::new();
        };
        let Ok(nodes) = table.query_selector_all(&self.config.cell_selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attrs(&self, cell: &Element) -> CellAttrs {
        CellAttrs {
            row: cell.get_attribute(&self.config.row_attribute),
            col: cell.get_attribute(&self.config.col_attribute),
            val: cell.get_attribute(&self.config.val_attribute),
        }
    }
}

impl BoardSurface for DomSurface {
    type Proxy = HtmlElement;

    fn bind(&mut self) {
        self.table = self.root.query_selector("table").ok().flatten();
        if let Some(table) = &self.table {
            add_listener(table, "pointerdown", &self.listeners.pointer_down, true);
            add_listener(table, "dragstart", &self.listeners.native_drag, true);
        }
    }

    fn unbind(&mut self) {
        if let Some(table) = &self.table {
            remove_listener(table, "pointerdown", &self.listeners.pointer_down, true);
            remove_listener(table, "dragstart", &self.listeners.native_drag, true);
        }
    }

    fn cell_at(&self, point: Point) -> Option<Element> {
        let el = self
            .document
            .element_from_point(point.x as f32, point.y as f32)?;
        self.cell_containing(&el)
    }

    fn set_draggable_cue(&mut self, cell: &Element, draggable: bool) {
        let Some(img) = Self::piece_image(cell) else {
            return;
        };
        // Native drag stays off everywhere; the pointer-driven drag replaces it.
        Self::set_attribute(&img, "draggable", "false");
        Self::set_attribute(cell, "draggable", "false");
        Self::set_style(&img, "cursor", if draggable { "grab" } else { "default" });
    }

    fn set_hover(&mut self, cell: &Element, hovered: bool) {
        let classes = cell.class_list();
        let result = if hovered {
            classes.add_1(&self.config.hover_class)
        } else {
            classes.remove_1(&self.config.hover_class)
        };
        if let Err(e) = result {
            tracing::trace!(error = ?e, "hover class not toggled");
        }
    }

    fn play_rejection_cue(&mut self, cell: &Element) {
        let flash = Object::new();
        let settle = Object::new();
        let property = JsValue::from_str("backgroundColor");
        let built = Reflect::set(&flash, &property, &self.config.reject_color.as_str().into())
            .and_then(|_| Reflect::set(&settle, &property, &JsValue::from_str("")));
        if let Err(e) = built {
            tracing::trace!(error = ?e, "rejection keyframes not built");
            return;
        }
        let keyframes: Object = Array::of2(&flash, &settle).into();
        cell.animate_with_f64(Some(&keyframes), f64::from(self.config.reject_duration_ms));
    }

    fn spawn_proxy(&mut self, cell: &Element) -> Option<(HtmlElement, Size)> {
        let img = Self::piece_image(cell)?;
        let rect = img.get_bounding_client_rect();
        let proxy = img
            .clone_node_with_deep(true)
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;

        let width = format!("{}px", rect.width());
        let height = format!("{}px", rect.height());
        let opacity = self.config.proxy_opacity.to_string();
        let z_index = self.config.proxy_z_index.to_string();
        for (property, value) in [
            ("position", "fixed"),
            ("width", width.as_str()),
            ("height", height.as_str()),
            ("max-width", "none"),
            ("max-height", "none"),
            ("pointer-events", "none"),
            ("opacity", opacity.as_str()),
            ("z-index", z_index.as_str()),
            ("object-fit", "contain"),
            ("border", "none"),
        ] {
            Self::set_style(&proxy, property, value);
        }

        self.document.body()?.append_child(&proxy).ok()?;
        Some((proxy, Size::new(rect.width(), rect.height())))
    }

    fn move_proxy(&mut self, proxy: &HtmlElement, top_left: Point) {
        Self::set_style(proxy, "left", &format!("{}px", top_left.x));
        Self::set_style(proxy, "top", &format!("{}px", top_left.y));
    }

    fn remove_proxy(&mut self, proxy: HtmlElement) {
        proxy.remove();
    }

    fn listen_global(&mut self) {
        if self.globally_listening {
            return;
        }
        add_listener(&self.window, "pointermove", &self.listeners.pointer_move, false);
        add_listener(&self.window, "pointerup", &self.listeners.pointer_up, false);
        add_listener(&self.window, "pointercancel", &self.listeners.pointer_cancel, false);
        self.globally_listening = true;
    }

    fn unlisten_global(&mut self) {
        if !self.globally_listening {
            return;
        }
        remove_listener(&self.window, "pointermove", &self.listeners.pointer_move, false);
        remove_listener(&self.window, "pointerup", &self.listeners.pointer_up, false);
        remove_listener(&self.window, "pointercancel", &self.listeners.pointer_cancel, false);
        self.globally_listening = false;
    }
}

impl Drop for DomSurface {
    fn drop(&mut self) {
        self.unlisten_global();
        self.unbind();
        self.unlisten_root();
    }
}
