use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use tokeidai_core::{ClockTheme, HostMessage, ThemeError};
use wasm_bindgen::JsCast;
use web_sys::{Event, MessageEvent};

thread_local! {
    static THEME: RefCell<Rc<ClockTheme>> = RefCell::new(Rc::new(ClockTheme::default()));
    static THEME_HOOKS: RefCell<Vec<(u64, Rc<dyn Fn()>)>> = RefCell::new(Vec::new());
    static NEXT_HOOK_ID: Cell<u64> = Cell::new(1);
    static HOST_LISTENER: RefCell<Option<EventListener>> = RefCell::new(None);
}

pub(crate) fn current_theme() -> Rc<ClockTheme> {
    THEME.with(|slot| slot.borrow().clone())
}

/// Replaces the active theme and notifies hooks. Setting an identical theme
/// is a no-op.
pub(crate) fn set_theme(next: ClockTheme) {
    let hooks = THEME.with(|slot| {
        let mut slot = slot.borrow_mut();
        if **slot == next {
            return Vec::new();
        }
        *slot = Rc::new(next);
        THEME_HOOKS.with(|hooks| hooks.borrow().iter().map(|(_, hook)| hook.clone()).collect())
    });
    for hook in hooks {
        hook();
    }
}

pub(crate) fn add_theme_hook(hook: Rc<dyn Fn()>) -> u64 {
    let id = NEXT_HOOK_ID.with(|next| {
        let id = next.get();
        next.set(id.saturating_add(1));
        id
    });
    THEME_HOOKS.with(|hooks| hooks.borrow_mut().push((id, hook)));
    id
}

pub(crate) fn remove_theme_hook(id: u64) {
    THEME_HOOKS.with(|hooks| {
        hooks.borrow_mut().retain(|(hook_id, _)| *hook_id != id);
    });
}

/// Applies a host message if it was posted from `own_origin`.
pub(crate) fn handle_host_message(
    origin: &str,
    own_origin: &str,
    raw: &str,
) -> Result<(), ThemeError> {
    if origin != own_origin {
        return Err(ThemeError::UntrustedOrigin {
            origin: origin.to_string(),
        });
    }
    let HostMessage::Theme { theme } = HostMessage::parse(raw)?;
    let next = current_theme().merged(&theme)?;
    set_theme(next);
    Ok(())
}

/// Listens for configuration pushed by an embedding page via `postMessage`.
pub(crate) fn install_host_listener() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(own_origin) = window.location().origin() else {
        gloo::console::warn!("host listener not installed: page origin unavailable");
        return;
    };
    let listener = EventListener::new(&window, "message", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MessageEvent>() else {
            return;
        };
        let Some(raw) = event.data().as_string() else {
            return;
        };
        match handle_host_message(&event.origin(), &own_origin, &raw) {
            Ok(()) => gloo::console::log!("theme updated from host"),
            Err(err) => gloo::console::warn!("ignored host message", err.to_string()),
        }
    });
    HOST_LISTENER.with(|slot| {
        *slot.borrow_mut() = Some(listener);
    });
}
