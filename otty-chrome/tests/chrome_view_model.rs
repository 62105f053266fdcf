use std::cell::{Cell, RefCell};
use std::rc::Rc;

use otty_chrome::{
    ChromeCommand, ChromeConfig, ChromeProperty, ChromeViewModel, Command,
    HostWindow, ObserverId, Point, RowHeight, StateObserver, Thickness,
    WindowState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HostFailure(&'static str);

#[derive(Default)]
struct FakeWindow {
    state: Cell<WindowState>,
    position: Cell<Point>,
    pointer: Cell<Point>,
    close_requests: Cell<u32>,
    reject_state_changes: Cell<bool>,
    observers: RefCell<Vec<(ObserverId, StateObserver)>>,
    next_observer: Cell<u64>,
}

impl FakeWindow {
    fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn place(&self, position: Point, pointer: Point) {
        self.position.set(position);
        self.pointer.set(pointer);
    }
}

impl HostWindow for FakeWindow {
    type Error = HostFailure;

    fn state(&self) -> WindowState {
        self.state.get()
    }

    fn set_state(&self, state: WindowState) -> Result<(), HostFailure> {
        if self.reject_state_changes.get() {
            return Err(HostFailure("state change rejected"));
        }
        if self.state.replace(state) == state {
            return Ok(());
        }

        let observers: Vec<StateObserver> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(state);
        }
        Ok(())
    }

    fn position(&self) -> Point {
        self.position.get()
    }

    fn pointer_position(&self) -> Point {
        self.pointer.get()
    }

    fn close(&self) -> Result<(), HostFailure> {
        self.close_requests.set(self.close_requests.get() + 1);
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

type MenuRequests = Rc<RefCell<Vec<Point>>>;

fn chrome_with_menu(
    window: &Rc<FakeWindow>,
) -> (ChromeViewModel<FakeWindow>, MenuRequests) {
    let requests: MenuRequests = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&requests);
    let chrome = ChromeViewModel::builder()
        .with_host(Rc::clone(window))
        .with_config(ChromeConfig::default())
        .with_system_menu(
            move |_: &FakeWindow, at: Point| -> Result<(), HostFailure> {
                sink.borrow_mut().push(at);
                Ok(())
            },
        )
        .build()
        .expect("host window is provided");
    (chrome, requests)
}

fn record_changes(
    chrome: &ChromeViewModel<FakeWindow>,
) -> Rc<RefCell<Vec<ChromeProperty>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    chrome.subscribe_all(move |property| sink.borrow_mut().push(property));
    seen
}

#[test]
fn given_restored_window_when_maximized_then_geometry_and_notifications_follow()
 {
    let window = FakeWindow::new();
    let (chrome, _) = chrome_with_menu(&window);
    let seen = record_changes(&chrome);

    assert_eq!(chrome.effective_outer_margin(), 20);
    assert_eq!(chrome.effective_corner_radius(), 10);
    assert_eq!(chrome.resize_border_padding(), Thickness::uniform(26));
    assert_eq!(chrome.title_row_height(), RowHeight(48));

    chrome
        .execute(ChromeCommand::Maximize)
        .expect("maximize should succeed");

    assert_eq!(window.state(), WindowState::Maximized);
    assert_eq!(chrome.effective_outer_margin(), 0);
    assert_eq!(chrome.effective_corner_radius(), 0);
    assert_eq!(chrome.resize_border_padding(), Thickness::uniform(6));
    assert_eq!(chrome.title_row_height(), RowHeight(48));
    assert_eq!(chrome.content_padding(), Thickness::uniform(6));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    for property in ChromeProperty::STATE_DEPENDENT {
        assert!(seen.contains(&property), "missing {property}");
    }
    assert!(!seen.contains(&ChromeProperty::ContentPadding));
    assert!(!seen.contains(&ChromeProperty::TitleRowHeight));
}

#[test]
fn given_window_when_maximize_toggled_twice_then_state_round_trips() {
    let window = FakeWindow::new();
    let (chrome, _) = chrome_with_menu(&window);

    chrome
        .maximize_command()
        .execute()
        .expect("first toggle should succeed");
    assert_eq!(window.state(), WindowState::Maximized);

    chrome
        .maximize_command()
        .execute()
        .expect("second toggle should succeed");
    assert_eq!(window.state(), WindowState::Normal);
}

#[test]
fn given_minimized_window_when_maximize_invoked_then_window_is_maximized() {
    let window = FakeWindow::new();
    let (chrome, _) = chrome_with_menu(&window);

    chrome
        .execute(ChromeCommand::Minimize)
        .expect("minimize should succeed");
    assert_eq!(window.state(), WindowState::Minimized);
    assert_eq!(chrome.effective_outer_margin(), 20);

    chrome
        .execute(ChromeCommand::Maximize)
        .expect("maximize should succeed");
    assert_eq!(window.state(), WindowState::Maximized);
}

#[test]
fn given_pointer_in_window_when_system_menu_requested_then_uses_screen_space() {
    let window = FakeWindow::new();
    let (chrome, requests) = chrome_with_menu(&window);
    window.place(Point::new(100.0, 50.0), Point::new(10.0, 5.0));

    chrome
        .execute(ChromeCommand::ShowSystemMenu)
        .expect("menu should open");

    window.place(Point::new(300.0, 200.0), Point::new(12.0, 8.0));
    chrome
        .show_system_menu_command()
        .execute()
        .expect("menu should open again");

    assert_eq!(
        *requests.borrow(),
        vec![Point::new(110.0, 55.0), Point::new(312.0, 208.0)]
    );
}

#[test]
fn given_close_when_invoked_twice_then_each_request_reaches_host() {
    let window = FakeWindow::new();
    let (chrome, _) = chrome_with_menu(&window);

    chrome.close_command().execute().expect("close should succeed");
    chrome.execute(ChromeCommand::Close).expect("close should succeed");

    assert_eq!(window.close_requests.get(), 2);
}

#[test]
fn given_host_rejecting_changes_when_commands_run_then_error_is_unchanged() {
    let window = FakeWindow::new();
    let (chrome, _) = chrome_with_menu(&window);
    let seen = record_changes(&chrome);
    window.reject_state_changes.set(true);

    let err = chrome
        .execute(ChromeCommand::Minimize)
        .expect_err("host rejects state changes");

    assert_eq!(err, HostFailure("state change rejected"));
    assert_eq!(window.state(), WindowState::Normal);
    assert!(seen.borrow().is_empty());
}

#[test]
fn given_failing_menu_service_when_requested_then_error_is_unchanged() {
    let window = FakeWindow::new();
    let chrome = ChromeViewModel::builder()
        .with_host(Rc::clone(&window))
        .with_system_menu(
            |_: &FakeWindow, _: Point| -> Result<(), HostFailure> {
                Err(HostFailure("no menu"))
            },
        )
        .build()
        .expect("host window is provided");

    let err = chrome
        .execute(ChromeCommand::ShowSystemMenu)
        .expect_err("menu service fails");
    assert_eq!(err, HostFailure("no menu"));
}

#[test]
fn given_every_command_when_invoked_in_any_order_then_none_panics() {
    let window = FakeWindow::new();
    let (chrome, requests) = chrome_with_menu(&window);

    for command in ChromeCommand::ALL.into_iter().rev() {
        chrome.execute(command).expect("command should succeed");
    }

    assert_eq!(window.close_requests.get(), 1);
    assert_eq!(requests.borrow().len(), 1);
}

#[test]
fn given_filtered_subscription_when_reconfigured_then_only_matching_fires() {
    let window = FakeWindow::new();
    let (mut chrome, _) = chrome_with_menu(&window);
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    chrome.subscribe(ChromeProperty::CornerGeometry, move |_| {
        counter.set(counter.get() + 1)
    });

    chrome.set_resize_border_width(8);
    assert_eq!(hits.get(), 0);

    chrome.set_corner_radius(4);
    assert_eq!(hits.get(), 1);
    assert_eq!(chrome.content_padding(), Thickness::uniform(8));
    assert_eq!(chrome.resize_border_padding(), Thickness::uniform(28));
}

#[test]
fn given_subscriber_changing_state_when_notified_then_rounds_stay_ordered() {
    let window = FakeWindow::new();
    let (chrome, _) = chrome_with_menu(&window);
    let seen = record_changes(&chrome);
    let nested_window = Rc::clone(&window);
    let fired = Rc::new(Cell::new(false));
    chrome.subscribe(ChromeProperty::ResizeBorderPadding, move |_| {
        if !fired.replace(true) {
            nested_window
                .set_state(WindowState::Minimized)
                .expect("fake window accepts state changes");
        }
    });

    chrome
        .execute(ChromeCommand::Maximize)
        .expect("maximize should succeed");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 10);
    assert_eq!(seen[..5], ChromeProperty::STATE_DEPENDENT);
    assert_eq!(seen[5..], ChromeProperty::STATE_DEPENDENT);
    assert_eq!(window.state(), WindowState::Minimized);
}
