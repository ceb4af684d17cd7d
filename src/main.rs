//! Tidepool entry point
//!
//! Handles platform-specific initialization and mounts the page backdrop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use tidepool::web::{ShapeFieldAnimator, diorama, load_theme};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tidepool starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let theme = load_theme(&document);

        let (bands, sprites) = diorama::apply(&document, &theme);
        log::info!("Diorama styled: {} bands, {} sprites", bands, sprites);

        let Some(element) = document.get_element_by_id("backdrop") else {
            log::warn!("No #backdrop canvas on this page; diorama only");
            return;
        };
        let canvas: HtmlCanvasElement = element.dyn_into().expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        match ShapeFieldAnimator::mount(canvas, theme, seed) {
            Ok(animator) => {
                let animator = Rc::new(RefCell::new(animator));
                setup_resize_listener(animator);
                log::info!("Tidepool running!");
            }
            Err(err) => log::warn!("Backdrop failed to mount: {:?}", err),
        }
    }

    /// Rebuild the backdrop whenever the window changes size.
    ///
    /// The forgotten listener also keeps the animator alive for the page
    /// lifetime.
    fn setup_resize_listener(animator: Rc<RefCell<ShapeFieldAnimator>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Err(err) = animator.borrow_mut().resize() {
                log::warn!("Backdrop resize failed: {:?}", err);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tidepool (native) starting...");
    log::info!("The backdrop targets the browser - build the wasm target for the real thing");

    println!("\nRunning headless field check...");
    headless_field_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_field_check() {
    use tidepool::field::{shape_count, tick};
    use tidepool::{RecordingSurface, ShapeField, Theme};

    let theme = Theme::default();
    let mut field = ShapeField::new(1920, 1080, &theme, 42);
    assert_eq!(field.shapes.len(), shape_count(1920, 1080));

    let mut surface = RecordingSurface::new();
    for _ in 0..240 {
        tick(&mut field, &mut surface);
    }
    assert!(
        field
            .shapes
            .iter()
            .all(|s| s.vel.x.abs() <= 0.75 && s.vel.y.abs() <= 0.75)
    );
    println!("✓ Field check passed ({} shapes)", field.shapes.len());
}
