use std::cell::RefCell;
use std::rc::Rc;

use tokeidai_core::svg_attr::{fmt_num, rotate, translate};
use tokeidai_core::{
    ClockLayoutParams, ClockModel, ClockTheme, FaceLabel, FaceLayout, HandKind, HandSet,
    HandSpec, HandSprite, TickMark, TimeSource,
};
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::browser_time::BrowserClock;
use crate::ticker::{ClockTicker, TICK_PERIOD_MS};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const CONTAINER_PADDING: f64 = 40.0;
const BACKGROUND_SIZE: &str = "100px";

struct HandNode {
    kind: HandKind,
    element: Element,
}

/// SVG nodes of one drawn clock. The face is built once; ticks only rewrite
/// the hand transforms.
pub(crate) struct ClockFace {
    svg: Element,
    hands: Vec<HandNode>,
    model: RefCell<ClockModel>,
    time: Rc<dyn TimeSource>,
}

impl ClockFace {
    pub(crate) fn mount(
        host: &Element,
        params: ClockLayoutParams,
        theme: &ClockTheme,
        time: Rc<dyn TimeSource>,
    ) -> Result<Rc<Self>, String> {
        let document = host
            .owner_document()
            .ok_or_else(|| "clock host is detached from a document".to_string())?;
        let model = ClockModel::initialize(params, &theme.hand_style(), time.now());

        let svg = create_svg_element(&document, "svg")?;
        let size = fmt_num(model.face().canvas_size());
        let _ = svg.set_attribute("xmlns", SVG_NS);
        let _ = svg.set_attribute("class", "clock");
        let _ = svg.set_attribute("width", &size);
        let _ = svg.set_attribute("height", &size);
        let _ = svg.set_attribute("style", &svg_style(theme));

        let face = create_svg_element(&document, "g")?;
        let _ = face.set_attribute("class", "clock-face");
        let center = model.face().center();
        let _ = face.set_attribute("transform", &translate(center, center));
        draw_face(&document, &face, model.face())?;

        let hands_group = create_svg_element(&document, "g")?;
        let _ = hands_group.set_attribute("class", "clock-hands");
        let overlay = create_svg_element(&document, "g")?;
        let _ = overlay.set_attribute("class", "face-overlay");
        let cover = create_svg_element(&document, "circle")?;
        let _ = cover.set_attribute("class", "hands-cover");
        let _ = cover.set_attribute("cx", "0");
        let _ = cover.set_attribute("cy", "0");
        let _ = cover.set_attribute("r", &fmt_num(model.face().cover_radius));
        let _ = overlay.append_child(&cover);
        let _ = face.append_child(&hands_group);
        let _ = face.append_child(&overlay);

        let mut hands = Vec::with_capacity(HandKind::ALL.len());
        for hand in model.hands().iter() {
            let element = build_hand(&document, hand)?;
            let _ = hands_group.append_child(&element);
            hands.push(HandNode {
                kind: hand.kind(),
                element,
            });
        }

        let _ = svg.append_child(&face);
        host.append_child(&svg)
            .map_err(|_| "failed to attach clock svg".to_string())?;

        Ok(Rc::new(Self {
            svg,
            hands,
            model: RefCell::new(model),
            time,
        }))
    }

    /// Samples the time source and moves the hands. A re-entrant call while a
    /// tick is running is skipped. Transforms are written only when the model
    /// reports a change; returns whether they were.
    pub(crate) fn tick(&self) -> bool {
        let now = self.time.now();
        let Ok(mut model) = self.model.try_borrow_mut() else {
            return false;
        };
        if !model.tick(now) {
            return false;
        }
        self.apply_hands(model.hands());
        true
    }

    fn apply_hands(&self, hands: &HandSet) {
        for node in &self.hands {
            let transform = hands.get(node.kind).transform();
            let _ = node.element.set_attribute("transform", &transform);
        }
    }

    /// Colors and background only; hand sprites need a remount.
    pub(crate) fn restyle(&self, theme: &ClockTheme) {
        let _ = self.svg.set_attribute("style", &svg_style(theme));
    }

    pub(crate) fn unmount(&self) {
        if let Some(parent) = self.svg.parent_node() {
            let _ = parent.remove_child(&self.svg);
        }
    }

    #[cfg(test)]
    pub(crate) fn node_count(&self) -> u32 {
        self.svg.get_elements_by_tag_name("*").length()
    }

    #[cfg(test)]
    pub(crate) fn svg_style_attr(&self) -> Option<String> {
        self.svg.get_attribute("style")
    }

    #[cfg(test)]
    pub(crate) fn hand_transform(&self, kind: HandKind) -> Option<String> {
        self.hands
            .iter()
            .find(|node| node.kind == kind)
            .and_then(|node| node.element.get_attribute("transform"))
    }
}

/// A drawn clock plus the interval driving it. Dropping it stops the interval
/// before the nodes are removed.
pub(crate) struct MountedClock {
    face: Rc<ClockFace>,
    ticker: ClockTicker,
}

impl MountedClock {
    pub(crate) fn mount(
        host: &Element,
        params: ClockLayoutParams,
        theme: &ClockTheme,
        time: Rc<dyn TimeSource>,
    ) -> Result<Self, String> {
        let face = ClockFace::mount(host, params, theme, time)?;
        let mut ticker = ClockTicker::new();
        let face_for_tick = Rc::clone(&face);
        ticker.start(TICK_PERIOD_MS, move || {
            face_for_tick.tick();
        });
        gloo::console::log!("clock mounted", params.clock_radius(), params.margin());
        Ok(Self { face, ticker })
    }

    pub(crate) fn restyle(&self, theme: &ClockTheme) {
        self.face.restyle(theme);
    }
}

impl Drop for MountedClock {
    fn drop(&mut self) {
        self.ticker.stop();
        self.face.unmount();
        gloo::console::log!("clock unmounted");
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ClockViewProps {
    pub(crate) clock_radius: f64,
    pub(crate) margin: f64,
    pub(crate) theme: Rc<ClockTheme>,
}

#[function_component(ClockView)]
pub(crate) fn clock_view(props: &ClockViewProps) -> Html {
    let host_ref = use_node_ref();
    let mounted = use_mut_ref(|| None::<MountedClock>);
    let params = ClockLayoutParams::new(props.clock_radius, props.margin);
    {
        let host_ref = host_ref.clone();
        let mounted = mounted.clone();
        let theme = props.theme.clone();
        // Only geometry and hand sprites force a redraw of the face.
        use_effect_with(
            (
                params.clock_radius().to_bits(),
                params.margin().to_bits(),
                props.theme.hand_style(),
            ),
            move |_| {
                *mounted.borrow_mut() = host_ref.cast::<Element>().and_then(|host| {
                    match MountedClock::mount(&host, params, &theme, Rc::new(BrowserClock)) {
                        Ok(mounted) => Some(mounted),
                        Err(err) => {
                            gloo::console::warn!("clock mount failed", err);
                            None
                        }
                    }
                });
                move || {
                    let clock = mounted.borrow_mut().take();
                    drop(clock);
                }
            },
        );
    }
    {
        let mounted = mounted.clone();
        use_effect_with(props.theme.clone(), move |theme| {
            if let Some(clock) = mounted.borrow().as_ref() {
                clock.restyle(theme);
            }
            || ()
        });
    }
    let style = format!(
        "width: {}px;",
        fmt_num(params.canvas_size() + CONTAINER_PADDING)
    );
    html! {
        <div class="clock-container" style={style} ref={host_ref}></div>
    }
}

fn svg_style(theme: &ClockTheme) -> String {
    let mut style = format!("stroke: {}; fill: {};", theme.text_color, theme.text_color);
    if let Some(src) = theme.background_image() {
        style.push_str(&format!(
            " background: url(\"{src}\") center / {BACKGROUND_SIZE} no-repeat;"
        ));
    }
    style
}

fn create_svg_element(document: &Document, tag: &str) -> Result<Element, String> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|_| format!("failed to create svg <{tag}>"))
}

fn draw_face(document: &Document, face: &Element, layout: &FaceLayout) -> Result<(), String> {
    for tick in &layout.second_ticks {
        let node = build_tick(document, tick)?;
        let _ = face.append_child(&node);
    }
    for label in &layout.second_labels {
        let node = build_label(document, label)?;
        let _ = face.append_child(&node);
    }
    for tick in &layout.hour_ticks {
        let node = build_tick(document, tick)?;
        let _ = face.append_child(&node);
    }
    for label in &layout.hour_labels {
        let node = build_label(document, label)?;
        let _ = face.append_child(&node);
    }
    Ok(())
}

fn build_tick(document: &Document, tick: &TickMark) -> Result<Element, String> {
    let line = create_svg_element(document, "line")?;
    let _ = line.set_attribute("class", tick.class.css_class());
    let _ = line.set_attribute("x1", "0");
    let _ = line.set_attribute("x2", "0");
    let _ = line.set_attribute("y1", &fmt_num(tick.y1));
    let _ = line.set_attribute("y2", &fmt_num(tick.y2));
    let _ = line.set_attribute("transform", &rotate(tick.rotation));
    Ok(line)
}

fn build_label(document: &Document, label: &FaceLabel) -> Result<Element, String> {
    let text = create_svg_element(document, "text")?;
    let _ = text.set_attribute("class", label.class.css_class());
    let _ = text.set_attribute("text-anchor", "middle");
    let _ = text.set_attribute("x", &fmt_num(label.x));
    let _ = text.set_attribute("y", &fmt_num(label.y));
    text.set_text_content(Some(&label.value.to_string()));
    Ok(text)
}

fn build_hand(document: &Document, hand: &HandSpec) -> Result<Element, String> {
    let element = match hand.sprite() {
        HandSprite::Line => {
            let line = create_svg_element(document, "line")?;
            let _ = line.set_attribute("x1", "0");
            let _ = line.set_attribute("y1", &fmt_num(hand.balance()));
            let _ = line.set_attribute("x2", "0");
            let _ = line.set_attribute("y2", &fmt_num(hand.length()));
            line
        }
        HandSprite::Image { href } => {
            let image = create_svg_element(document, "image")?;
            let extent = fmt_num(hand.sprite_extent());
            let _ = image.set_attribute("href", href);
            let _ = image.set_attribute_ns(Some(XLINK_NS), "xlink:href", href);
            let _ = image.set_attribute("x", "0");
            let _ = image.set_attribute("y", "0");
            let _ = image.set_attribute("width", &extent);
            let _ = image.set_attribute("height", &extent);
            image
        }
    };
    let _ = element.set_attribute("class", hand.kind().css_class());
    let _ = element.set_attribute("transform", &hand.transform());
    Ok(element)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;

    use console_error_panic_hook::set_once as set_panic_hook;
    use tokeidai_core::{FixedTime, WallTime};
    use wasm_bindgen_test::*;

    use crate::ticker::active_tickers;

    wasm_bindgen_test_configure!(run_in_browser);

    struct SteppingTime(Cell<WallTime>);

    impl TimeSource for SteppingTime {
        fn now(&self) -> WallTime {
            self.0.get()
        }
    }

    fn test_host() -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let host = document.create_element("div").expect("create host");
        document
            .body()
            .expect("body available")
            .append_child(&host)
            .expect("append host");
        host
    }

    fn line_theme() -> ClockTheme {
        let mut theme = ClockTheme::default();
        theme.hour_hand_image = None;
        theme.minute_hand_image = None;
        theme
    }

    #[wasm_bindgen_test]
    fn mount_draws_every_primitive_once() {
        set_panic_hook();
        let host = test_host();
        let params = ClockLayoutParams::new(100.0, 40.0);
        let time = Rc::new(FixedTime(WallTime::new(3, 0, 0)));
        let face = ClockFace::mount(&host, params, &line_theme(), time).expect("mount");
        let layout = FaceLayout::new(params);
        // face group, hands group, overlay group and three hands
        let expected = layout.primitive_count() as u32 + 6;
        assert_eq!(face.node_count(), expected);
        assert_eq!(
            face.hand_transform(HandKind::Hour).as_deref(),
            Some("rotate(90)")
        );
        assert_eq!(
            face.hand_transform(HandKind::Minute).as_deref(),
            Some("rotate(0)")
        );

        assert!(!face.tick());
        assert!(!face.tick());
        assert_eq!(face.node_count(), expected);
        face.unmount();
        assert_eq!(host.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn tick_rewrites_only_hand_transforms() {
        set_panic_hook();
        let host = test_host();
        let time = Rc::new(SteppingTime(Cell::new(WallTime::new(9, 59, 58))));
        let face = ClockFace::mount(
            &host,
            ClockLayoutParams::new(100.0, 40.0),
            &line_theme(),
            time.clone(),
        )
        .expect("mount");
        let count = face.node_count();
        time.0.set(WallTime::new(9, 59, 59));
        assert!(face.tick());
        assert_eq!(
            face.hand_transform(HandKind::Second).as_deref(),
            Some("rotate(354)")
        );
        time.0.set(WallTime::new(10, 0, 0));
        assert!(face.tick());
        assert_eq!(
            face.hand_transform(HandKind::Hour).as_deref(),
            Some("rotate(300)")
        );
        assert_eq!(
            face.hand_transform(HandKind::Second).as_deref(),
            Some("rotate(0)")
        );
        assert_eq!(face.node_count(), count);
        face.unmount();
    }

    #[wasm_bindgen_test]
    fn image_hands_use_sprite_offset() {
        set_panic_hook();
        let host = test_host();
        let mut theme = ClockTheme::default();
        theme.hour_hand_image = Some("assets/hour-hand.svg".to_string());
        theme.minute_hand_image = Some("assets/minute-hand.svg".to_string());
        theme.hand_image_angle_adjustment = -142.0;
        let time = Rc::new(FixedTime(WallTime::new(3, 0, 0)));
        let face = ClockFace::mount(&host, ClockLayoutParams::new(100.0, 40.0), &theme, time)
            .expect("mount");
        assert_eq!(
            face.hand_transform(HandKind::Hour).as_deref(),
            Some("rotate(-52)")
        );
        assert_eq!(
            face.hand_transform(HandKind::Second).as_deref(),
            Some("rotate(0)")
        );
        face.unmount();
    }

    #[wasm_bindgen_test]
    fn mount_cycles_leave_no_active_tickers() {
        set_panic_hook();
        let host = test_host();
        let baseline = active_tickers();
        for _ in 0..20 {
            let mounted = MountedClock::mount(
                &host,
                ClockLayoutParams::new(100.0, 40.0),
                &line_theme(),
                Rc::new(FixedTime(WallTime::new(12, 0, 0))),
            )
            .expect("mount");
            assert_eq!(active_tickers(), baseline + 1);
            assert_eq!(host.child_element_count(), 1);
            drop(mounted);
        }
        assert_eq!(active_tickers(), baseline);
        assert_eq!(host.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn zero_radius_mounts() {
        set_panic_hook();
        let host = test_host();
        let mounted = MountedClock::mount(
            &host,
            ClockLayoutParams::new(0.0, 0.0),
            &line_theme(),
            Rc::new(FixedTime(WallTime::new(1, 2, 3))),
        );
        assert!(mounted.is_ok());
    }

    #[wasm_bindgen_test]
    fn unchanged_tick_writes_nothing() {
        set_panic_hook();
        let host = test_host();
        let time = Rc::new(FixedTime(WallTime::new(8, 20, 40)));
        let params = ClockLayoutParams::new(100.0, 40.0);
        let face = ClockFace::mount(&host, params, &line_theme(), time).expect("mount");
        let hour = face
            .hands
            .iter()
            .find(|node| node.kind == HandKind::Hour)
            .map(|node| node.element.clone())
            .expect("hour hand");
        let _ = hour.set_attribute("transform", "rotate(1)");
        assert!(!face.tick());
        assert_eq!(hour.get_attribute("transform").as_deref(), Some("rotate(1)"));
        face.unmount();
    }

    #[wasm_bindgen_test]
    fn restyle_keeps_face_nodes() {
        set_panic_hook();
        let host = test_host();
        let mounted = MountedClock::mount(
            &host,
            ClockLayoutParams::new(100.0, 40.0),
            &line_theme(),
            Rc::new(FixedTime(WallTime::new(3, 0, 0))),
        )
        .expect("mount");
        let count = mounted.face.node_count();
        let svg = host.first_element_child().expect("svg");

        let mut recolored = line_theme();
        recolored.text_color = "#123456".to_string();
        mounted.restyle(&recolored);

        assert_eq!(mounted.face.node_count(), count);
        assert!(mounted
            .face
            .svg_style_attr()
            .is_some_and(|style| style.contains("stroke: #123456")));
        assert_eq!(host.first_element_child(), Some(svg));
        assert_eq!(
            mounted.face.hand_transform(HandKind::Hour).as_deref(),
            Some("rotate(90)")
        );
    }
}
