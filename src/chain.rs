//! Handler-slot composition.
//!
//! The scheduler configuration exposes named callback slots that the host
//! application may already occupy. [`chain_handler`] lets an additional
//! handler share such a slot without displacing what is there: the slot
//! ends up holding one composed callback that runs the pre-existing
//! handler first and the new one second, synchronously, with the same
//! argument object.
//!
//! # Reference
//! Gamma et al. (1994), "Design Patterns", Decorator

use crate::models::{Handler, HandlerSlot};

/// Composes `handler` into `slot`, preserving call order.
///
/// An empty slot receives `handler` directly. An occupied slot is
/// replaced with a composed callback invoking the existing handler, then
/// `handler`, both with the same argument. Return values are not
/// composed; handlers communicate by mutating the argument.
///
/// Not idempotent: chaining the same handler twice composes it twice.
/// Wiring steps must therefore run at most once per configuration
/// lifetime.
pub fn chain_handler<A: 'static>(slot: &mut HandlerSlot<A>, handler: Handler<A>) {
    *slot = Some(match slot.take() {
        None => handler,
        Some(mut existing) => {
            let mut handler = handler;
            Box::new(move |args: &mut A| {
                existing(args);
                handler(args);
            })
        }
    });
}
