use std::rc::Rc;

use tokeidai_core::ClockTheme;
use yew::prelude::*;

use crate::clock_view::ClockView;
use crate::prefs;
use crate::theme_runtime;

const CLOCK_RADIUS: f64 = 100.0;
const CLOCK_MARGIN: f64 = 40.0;
const FONT_LINK_ID: &str = "tokeidai-font";

#[function_component(App)]
pub(crate) fn app() -> Html {
    let theme = use_state(theme_runtime::current_theme);
    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let hook = Rc::new(move || {
                theme.set(theme_runtime::current_theme());
            });
            let id = theme_runtime::add_theme_hook(hook);
            move || {
                theme_runtime::remove_theme_hook(id);
            }
        });
    }
    use_effect_with((*theme).clone(), |theme| {
        apply_document_head(theme);
        || ()
    });

    let muted = use_state(prefs::load_muted_preference);
    let muted_value = *muted;
    let on_toggle_mute = {
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*muted;
            prefs::save_muted_preference(next);
            muted.set(next);
        })
    };
    let (volume_icon, volume_title) = if muted_value {
        ("\u{1F507}", "Unmute")
    } else {
        ("\u{1F50A}", "Mute")
    };

    html! {
        <div class="page" style={page_style(&theme)}>
            <div class="content" style={content_style(&theme)}>
                <div
                    class="volume-control"
                    title={volume_title}
                    onclick={on_toggle_mute}
                >
                    { volume_icon }
                </div>
                <h1 class="title">{ theme.name.clone() }</h1>
                <ClockView
                    clock_radius={CLOCK_RADIUS}
                    margin={CLOCK_MARGIN}
                    theme={(*theme).clone()}
                />
            </div>
        </div>
    }
}

fn page_style(theme: &ClockTheme) -> String {
    match theme.background_image() {
        Some(src) => format!("background-image: url(\"{src}\");"),
        None => String::new(),
    }
}

fn content_style(theme: &ClockTheme) -> String {
    format!(
        "color: {}; font-family: '{}', sans-serif;",
        theme.primary_color,
        theme.font_family_name()
    )
}

/// Keeps the document title and the font stylesheet link in step with the
/// theme.
fn apply_document_head(theme: &ClockTheme) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&theme.name);
    let existing = document.get_element_by_id(FONT_LINK_ID);
    let Some(href) = theme.font_stylesheet() else {
        if let Some(link) = existing {
            link.remove();
        }
        return;
    };
    let link = match existing {
        Some(link) => link,
        None => {
            let Ok(link) = document.create_element("link") else {
                gloo::console::warn!("failed to create font link");
                return;
            };
            link.set_id(FONT_LINK_ID);
            let _ = link.set_attribute("rel", "stylesheet");
            if let Some(head) = document.head() {
                let _ = head.append_child(&link);
            }
            link
        }
    };
    if link.get_attribute("href").as_deref() != Some(href) {
        let _ = link.set_attribute("href", href);
    }
}
