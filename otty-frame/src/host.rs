use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use otty_chrome::{
    HostWindow, ObserverId, Point, Size, StateObserver, WindowState,
};

use crate::errors::HostError;

/// Window operation waiting to be turned into an iced task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum WindowRequest {
    Minimize,
    Unminimize,
    Maximize,
    Unmaximize,
    Close,
    /// iced opens the system menu at the cursor, so `at` (the screen-space
    /// pointer the chrome computed) is only reported in the logs.
    ShowSystemMenu { at: Point },
}

/// Host window backed by the iced runtime.
///
/// iced applies window operations asynchronously through tasks, so this
/// host mirrors the window state locally and queues the operations the
/// update loop drains after every event.
#[derive(Default)]
pub(crate) struct FrameHost {
    state: Cell<WindowState>,
    position: Cell<Point>,
    pointer: Cell<Point>,
    size: Cell<Size>,
    closing: Cell<bool>,
    requests: RefCell<VecDeque<WindowRequest>>,
    observers: RefCell<Vec<(ObserverId, StateObserver)>>,
    next_observer: Cell<u64>,
}

impl FrameHost {
    pub(crate) fn new(size: Size) -> Rc<Self> {
        let host = Self::default();
        host.size.set(size);
        Rc::new(host)
    }

    pub(crate) fn set_position(&self, position: Point) {
        self.position.set(position);
    }

    pub(crate) fn set_pointer(&self, pointer: Point) {
        self.pointer.set(pointer);
    }

    pub(crate) fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub(crate) fn size(&self) -> Size {
        self.size.get()
    }

    /// Record a state the platform reached on its own.
    pub(crate) fn sync_state(&self, state: WindowState) {
        if self.state.replace(state) != state {
            self.notify(state);
        }
    }

    /// Record the state the platform reported for the window.
    pub(crate) fn sync_platform(&self, minimized: bool, maximized: bool) {
        let state = if minimized {
            WindowState::Minimized
        } else if maximized {
            WindowState::Maximized
        } else {
            WindowState::Normal
        };
        self.sync_state(state);
    }

    pub(crate) fn request_system_menu(&self, at: Point) {
        self.push(WindowRequest::ShowSystemMenu { at });
    }

    /// Take every queued request in submission order.
    pub(crate) fn take_requests(&self) -> Vec<WindowRequest> {
        self.requests.borrow_mut().drain(..).collect()
    }

    fn push(&self, request: WindowRequest) {
        self.requests.borrow_mut().push_back(request);
    }

    fn notify(&self, state: WindowState) {
        let observers: Vec<StateObserver> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(state);
        }
    }
}

impl HostWindow for FrameHost {
    type Error = HostError;

    fn state(&self) -> WindowState {
        self.state.get()
    }

    fn set_state(&self, state: WindowState) -> Result<(), HostError> {
        if self.closing.get() {
            return Err(HostError::Closing);
        }

        let current = self.state.get();
        if current == state {
            return Ok(());
        }

        match (current, state) {
            (_, WindowState::Minimized) => self.push(WindowRequest::Minimize),
            (WindowState::Minimized, WindowState::Maximized) => {
                self.push(WindowRequest::Unminimize);
                self.push(WindowRequest::Maximize);
            },
            (_, WindowState::Maximized) => self.push(WindowRequest::Maximize),
            (WindowState::Maximized, WindowState::Normal) => {
                self.push(WindowRequest::Unmaximize)
            },
            (_, WindowState::Normal) => self.push(WindowRequest::Unminimize),
        }

        self.sync_state(state);
        Ok(())
    }

    fn position(&self) -> Point {
        self.position.get()
    }

    fn pointer_position(&self) -> Point {
        self.pointer.get()
    }

    fn close(&self) -> Result<(), HostError> {
        if !self.closing.replace(true) {
            self.push(WindowRequest::Close);
        }
        Ok(())
    }

    fn subscribe_state_changed(&self, observer: StateObserver) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    fn unsubscribe_state_changed(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(known, _)| *known != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> Rc<FrameHost> {
        FrameHost::new(Size::new(800.0, 600.0))
    }

    fn observed(host: &FrameHost) -> Rc<RefCell<Vec<WindowState>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        host.subscribe_state_changed(Rc::new(move |state| {
            sink.borrow_mut().push(state)
        }));
        seen
    }

    #[test]
    fn given_normal_window_when_maximized_then_queues_request_and_notifies() {
        let host = host();
        let seen = observed(&host);

        host.set_state(WindowState::Maximized)
            .expect("open window accepts state changes");

        assert_eq!(host.take_requests(), vec![WindowRequest::Maximize]);
        assert_eq!(*seen.borrow(), vec![WindowState::Maximized]);
        assert!(host.take_requests().is_empty());
    }

    #[test]
    fn given_maximized_window_when_restored_then_unmaximizes() {
        let host = host();
        host.sync_state(WindowState::Maximized);

        host.set_state(WindowState::Normal)
            .expect("open window accepts state changes");

        assert_eq!(host.take_requests(), vec![WindowRequest::Unmaximize]);
    }

    #[test]
    fn given_minimized_window_when_maximized_then_unminimizes_first() {
        let host = host();
        host.sync_state(WindowState::Minimized);

        host.set_state(WindowState::Maximized)
            .expect("open window accepts state changes");

        assert_eq!(
            host.take_requests(),
            vec![WindowRequest::Unminimize, WindowRequest::Maximize]
        );
    }

    #[test]
    fn given_same_state_when_set_then_nothing_happens() {
        let host = host();
        let seen = observed(&host);

        host.set_state(WindowState::Normal)
            .expect("open window accepts state changes");

        assert!(host.take_requests().is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn given_platform_state_when_synced_then_notifies_without_request() {
        let host = host();
        let seen = observed(&host);

        host.sync_state(WindowState::Minimized);
        host.sync_state(WindowState::Minimized);

        assert!(host.take_requests().is_empty());
        assert_eq!(*seen.borrow(), vec![WindowState::Minimized]);
    }

    #[test]
    fn given_platform_report_when_synced_then_minimized_wins_over_maximized() {
        let host = host();
        let seen = observed(&host);

        host.sync_platform(true, true);
        host.sync_platform(false, true);
        host.sync_platform(false, false);

        assert!(host.take_requests().is_empty());
        assert_eq!(
            *seen.borrow(),
            vec![
                WindowState::Minimized,
                WindowState::Maximized,
                WindowState::Normal
            ]
        );
    }

    #[test]
    fn given_close_requested_twice_when_draining_then_single_close_queued() {
        let host = host();

        host.close().expect("close never fails");
        host.close().expect("close never fails");

        assert_eq!(host.take_requests(), vec![WindowRequest::Close]);
        assert_eq!(
            host.set_state(WindowState::Minimized),
            Err(HostError::Closing)
        );
    }

    #[test]
    fn given_unsubscribed_observer_when_state_changes_then_not_called() {
        let host = host();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = host.subscribe_state_changed(Rc::new(move |state| {
            sink.borrow_mut().push(state)
        }));

        host.unsubscribe_state_changed(id);
        host.sync_state(WindowState::Maximized);

        assert!(seen.borrow().is_empty());
    }
}
