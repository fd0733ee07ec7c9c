//! Scoped locale overrides
//!
//! The "current locale" is per-call-context state carried on a per-thread
//! stack, never a shared mutable field, so concurrent units of work cannot
//! observe each other's override. [`LocaleGuard`] pushes on creation and
//! pops on drop, which restores the prior locale on every exit path —
//! normal return and unwinding alike.

use crate::locale::Locale;
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static LOCALE_STACK: RefCell<Vec<Locale>> = const { RefCell::new(Vec::new()) };
}

/// The innermost active locale override on this thread, if any
pub fn current_override() -> Option<Locale> {
    LOCALE_STACK.with(|stack| stack.borrow().last().cloned())
}

/// RAII guard for a scoped locale override
///
/// Prefer [`Translator::with_locale`](crate::Translator::with_locale); the
/// guard form exists for callers that cannot express the scope as a closure.
#[derive(Debug)]
pub struct LocaleGuard {
    // Must drop on the thread that created it.
    _not_send: PhantomData<*const ()>,
}

impl LocaleGuard {
    /// Push a locale override for the lifetime of the guard
    pub fn new(locale: impl Into<Locale>) -> Self {
        LOCALE_STACK.with(|stack| stack.borrow_mut().push(locale.into()));
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        LOCALE_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}
