#![allow(dead_code)]

use e_arrange::{WindowError, WindowGeometry, WindowHandle, WindowResult, WindowView};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Activate(usize),
    Resize(usize, i32, i32),
    Move(usize, i32, i32),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// In-memory window that records every mutating call into a shared log
pub struct MockWindow {
    pub id: usize,
    pub title: String,
    pub geometry: WindowGeometry,
    pub active: bool,
    pub activate_error: Option<fn() -> WindowError>,
    pub move_error: Option<fn() -> WindowError>,
    log: CallLog,
}

impl MockWindow {
    pub fn new(id: usize, log: &CallLog) -> Self {
        Self {
            id,
            title: format!("window {}", id),
            geometry: WindowGeometry::new(10, 10, 300, 200),
            active: false,
            activate_error: None,
            move_error: None,
            log: Rc::clone(log),
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

impl WindowView for MockWindow {
    fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl WindowHandle for MockWindow {
    fn activate(&mut self) -> WindowResult<()> {
        self.log.borrow_mut().push(Call::Activate(self.id));
        if let Some(make_err) = self.activate_error {
            return Err(make_err());
        }
        self.active = true;
        Ok(())
    }

    fn resize_to(&mut self, width: i32, height: i32) -> WindowResult<()> {
        self.log.borrow_mut().push(Call::Resize(self.id, width, height));
        self.geometry.width = width;
        self.geometry.height = height;
        Ok(())
    }

    fn move_to(&mut self, x: i32, y: i32) -> WindowResult<()> {
        self.log.borrow_mut().push(Call::Move(self.id, x, y));
        if let Some(make_err) = self.move_error {
            return Err(make_err());
        }
        self.geometry.left = x;
        self.geometry.top = y;
        Ok(())
    }
}

pub fn new_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn windows(count: usize, log: &CallLog) -> Vec<MockWindow> {
    (0..count).map(|id| MockWindow::new(id, log)).collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
