//! Bridge between the page and the imperative `scene::engine::Scene`.
//!
//! ARCHITECTURE
//! ============
//! The scene crate owns projection and painting. This host mounts it on a
//! full-viewport canvas, drives it from an animation-frame loop, keeps the
//! backing store in step with the layout size, and forwards pointer drags
//! for orbiting. Unmounting stops the loop.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use scene::engine::Scene;
#[cfg(feature = "hydrate")]
use scene::input::Button;

#[cfg(feature = "hydrate")]
use crate::util::frame_loop::FrameLoop;

#[cfg(feature = "hydrate")]
fn sync_viewport(scene: &mut Scene, canvas: &web_sys::HtmlCanvasElement) {
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    scene.set_viewport(f64::from(canvas.client_width()), f64::from(canvas.client_height()), dpr);
}

#[cfg(feature = "hydrate")]
fn pointer_point(canvas: &web_sys::HtmlCanvasElement, ev: &leptos::ev::PointerEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top())
}

/// Full-viewport animated backdrop.
#[component]
pub fn SceneHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let scene = Rc::new(RefCell::new(None::<Scene>));
    #[cfg(feature = "hydrate")]
    let frame_loop = StoredValue::new_local(None::<FrameLoop>);

    #[cfg(feature = "hydrate")]
    {
        let scene = Rc::clone(&scene);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if scene.borrow().is_some() {
                return;
            }
            let instance = match Scene::new(canvas.clone()) {
                Ok(instance) => instance,
                Err(err) => {
                    log::warn!("scene: canvas context unavailable: {err:?}");
                    return;
                }
            };
            *scene.borrow_mut() = Some(instance);

            let scene_for_frame = Rc::clone(&scene);
            let started = FrameLoop::start(move |now_ms| {
                if let Some(scene) = scene_for_frame.borrow_mut().as_mut() {
                    sync_viewport(scene, &canvas);
                    if let Err(err) = scene.render(now_ms) {
                        log::warn!("scene: render failed: {err:?}");
                    }
                }
            });
            match started {
                Ok(handle) => frame_loop.set_value(Some(handle)),
                Err(err) => log::warn!("scene: frame loop not started: {err:?}"),
            }
        });
    }

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        frame_loop.try_update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.stop();
                log::debug!("scene: frame loop stopped");
            }
        });
    });

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let scene = Rc::clone(&scene);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let (x, y) = pointer_point(&canvas, &ev);
                let button = Button::from_dom(ev.button());
                let grabbed = scene
                    .borrow_mut()
                    .as_mut()
                    .is_some_and(|scene| scene.on_pointer_down(x, y, button));
                if grabbed {
                    ev.prevent_default();
                    if let Err(err) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("scene: pointer capture refused: {err:?}");
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let scene = Rc::clone(&scene);
            move |ev: leptos::ev::PointerEvent| {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                let (x, y) = pointer_point(&canvas, &ev);
                if let Some(scene) = scene.borrow_mut().as_mut() {
                    scene.on_pointer_move(x, y);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let scene = Rc::clone(&scene);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(scene) = scene.borrow_mut().as_mut() {
                    scene.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            let scene = Rc::clone(&scene);
            move |ev: leptos::ev::WheelEvent| {
                let consumed = scene.borrow().as_ref().is_some_and(Scene::on_wheel);
                if consumed {
                    ev.prevent_default();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <div class="scene" aria-hidden="true">
            <canvas
                class="scene__canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up.clone()
                on:pointercancel=on_pointer_up
                on:wheel=on_wheel
            ></canvas>
        </div>
    }
}
