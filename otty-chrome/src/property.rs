use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::errors::ChromeError;

/// Stable identifier of a readable chrome property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChromeProperty {
    OuterMarginSize,
    CornerRadius,
    MinimumWidth,
    MinimumHeight,
    ResizeBorderWidth,
    TitleBarHeight,
    EffectiveOuterMargin,
    OuterMarginThickness,
    EffectiveCornerRadius,
    CornerGeometry,
    ContentPadding,
    ResizeBorderPadding,
    TitleRowHeight,
}

impl ChromeProperty {
    pub const ALL: [ChromeProperty; 13] = [
        ChromeProperty::OuterMarginSize,
        ChromeProperty::CornerRadius,
        ChromeProperty::MinimumWidth,
        ChromeProperty::MinimumHeight,
        ChromeProperty::ResizeBorderWidth,
        ChromeProperty::TitleBarHeight,
        ChromeProperty::EffectiveOuterMargin,
        ChromeProperty::OuterMarginThickness,
        ChromeProperty::EffectiveCornerRadius,
        ChromeProperty::CornerGeometry,
        ChromeProperty::ContentPadding,
        ChromeProperty::ResizeBorderPadding,
        ChromeProperty::TitleRowHeight,
    ];

    /// Properties whose value follows the host window state, in the order
    /// they are announced after a state transition.
    pub const STATE_DEPENDENT: [ChromeProperty; 5] = [
        ChromeProperty::ResizeBorderPadding,
        ChromeProperty::EffectiveOuterMargin,
        ChromeProperty::OuterMarginThickness,
        ChromeProperty::EffectiveCornerRadius,
        ChromeProperty::CornerGeometry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChromeProperty::OuterMarginSize => "outer_margin_size",
            ChromeProperty::CornerRadius => "corner_radius",
            ChromeProperty::MinimumWidth => "minimum_width",
            ChromeProperty::MinimumHeight => "minimum_height",
            ChromeProperty::ResizeBorderWidth => "resize_border_width",
            ChromeProperty::TitleBarHeight => "title_bar_height",
            ChromeProperty::EffectiveOuterMargin => "effective_outer_margin",
            ChromeProperty::OuterMarginThickness => "outer_margin_thickness",
            ChromeProperty::EffectiveCornerRadius => "effective_corner_radius",
            ChromeProperty::CornerGeometry => "corner_geometry",
            ChromeProperty::ContentPadding => "content_padding",
            ChromeProperty::ResizeBorderPadding => "resize_border_padding",
            ChromeProperty::TitleRowHeight => "title_row_height",
        }
    }

    pub fn depends_on_state(self) -> bool {
        Self::STATE_DEPENDENT.contains(&self)
    }
}

impl fmt::Display for ChromeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromeProperty {
    type Err = ChromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|property| property.name() == s)
            .ok_or_else(|| ChromeError::UnknownProperty(s.to_string()))
    }
}

/// Handle returned by [`PropertyNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type PropertyCallback = Rc<dyn Fn(ChromeProperty)>;

struct Subscriber {
    id: SubscriptionId,
    filter: Option<ChromeProperty>,
    callback: PropertyCallback,
}

/// Synchronous change-notification registry.
///
/// Callbacks run on the caller's thread, in registration order. Each
/// dispatch works on a snapshot of the registry, so callbacks may subscribe
/// or unsubscribe; such changes take effect from the next dispatch.
///
/// Notifications raised from inside a callback are queued behind the
/// current round and delivered once it completes.
#[derive(Default)]
pub struct PropertyNotifier {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
    pending: RefCell<VecDeque<ChromeProperty>>,
    dispatching: Cell<bool>,
}

/// Clears the dispatching flag even if a callback unwinds.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl PropertyNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` whenever `property` may have changed.
    pub fn subscribe<F>(
        &self,
        property: ChromeProperty,
        callback: F,
    ) -> SubscriptionId
    where
        F: Fn(ChromeProperty) + 'static,
    {
        self.register(Some(property), Rc::new(callback))
    }

    /// Call `callback` for every property change.
    pub fn subscribe_all<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ChromeProperty) + 'static,
    {
        self.register(None, Rc::new(callback))
    }

    /// Drop a subscription. Returns `false` for unknown ids.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|subscriber| subscriber.id != id);
        subscribers.len() != before
    }

    pub fn notify(&self, property: ChromeProperty) {
        self.notify_each([property]);
    }

    pub fn notify_each<I>(&self, properties: I)
    where
        I: IntoIterator<Item = ChromeProperty>,
    {
        self.pending.borrow_mut().extend(properties);
        if self.dispatching.replace(true) {
            return;
        }

        let _guard = DispatchGuard(&self.dispatching);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(property) = next else {
                break;
            };
            self.dispatch(property);
        }
    }

    /// Whether a dispatch round is running on this notifier.
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.get()
    }

    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dispatch(&self, property: ChromeProperty) {
        let callbacks: Vec<PropertyCallback> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|subscriber| {
                subscriber.filter.is_none_or(|filter| filter == property)
            })
            .map(|subscriber| Rc::clone(&subscriber.callback))
            .collect();

        log::trace!(
            "property {property} changed, {} subscriber(s)",
            callbacks.len()
        );
        for callback in callbacks {
            callback(property);
        }
    }

    fn register(
        &self,
        filter: Option<ChromeProperty>,
        callback: PropertyCallback,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            filter,
            callback,
        });
        id
    }
}
