//! Staggered scheduling
//!
//! Applies an action to each item of a sequence, delaying every subsequent
//! item by a fixed step, and runs a finish action once after the last item.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;

use crate::error::{EffectsError, Result};

/// Source of one-off delayed callbacks.
///
/// The browser implementation is [`WindowTimers`]; tests drive a manual queue.
pub trait Timers {
    /// Run `callback` once after roughly `delay_ms` milliseconds.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<()>;
}

/// [`Timers`] backed by `window.setTimeout`
#[derive(Debug, Clone)]
pub struct WindowTimers {
    window: web_sys::Window,
}

impl WindowTimers {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(EffectsError::NoWindow)?;
        Ok(Self { window })
    }
}

impl Timers for WindowTimers {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Result<()> {
        // The closure frees itself after its single invocation.
        let function = Closure::once_into_js(move || callback());
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(function.unchecked_ref(), timeout)?;
        Ok(())
    }
}

/// Applies `action` to each item, delaying each subsequent call by `step_delay_ms`.
///
/// Item `i` runs after `i * step_delay_ms` on its own timer. `on_finish` runs
/// exactly once, synchronously after the action of the structurally last item,
/// whichever order the host fires its timers in. For an empty sequence
/// `on_finish` runs immediately, before this function returns.
///
/// If a timer cannot be registered, `on_finish` runs before the error is
/// returned. Timers registered before the failure still fire their actions.
pub fn stagger<T, I, F, G>(
    timers: &dyn Timers,
    items: I,
    step_delay_ms: u32,
    action: F,
    on_finish: G,
) -> Result<()>
where
    T: 'static,
    I: IntoIterator<Item = T>,
    F: Fn(T, usize) + 'static,
    G: FnOnce() + 'static,
{
    let items: Vec<T> = items.into_iter().collect();
    if items.is_empty() {
        on_finish();
        return Ok(());
    }

    let last_index = items.len() - 1;
    let action = Rc::new(action);
    let finish: Rc<Cell<Option<Box<dyn FnOnce()>>>> = Rc::new(Cell::new(Some(Box::new(on_finish))));

    let finish_slot = Rc::clone(&finish);
    for (index, item) in items.into_iter().enumerate() {
        let action = Rc::clone(&action);
        let finish = Rc::clone(&finish);
        let delay = step_delay(index, step_delay_ms);
        let registered = timers.set_timeout(
            delay,
            Box::new(move || {
                action(item, index);
                if index == last_index {
                    if let Some(finish) = finish.take() {
                        finish();
                    }
                }
            }),
        );
        if let Err(err) = registered {
            // the last item's timer was never registered, so nothing else can finish
            if let Some(finish) = finish_slot.take() {
                finish();
            }
            return Err(err);
        }
    }

    log::debug!("staggered {} items at {}ms steps", last_index + 1, step_delay_ms);
    Ok(())
}

fn step_delay(index: usize, step_delay_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_delay_ms)
}
