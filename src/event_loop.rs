use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// The single message pump driving the shell.
///
/// One loop owns the thread: it polls the input driver, hands events to the
/// handler, and calls the handler with `None` once per poll interval so the
/// caller can tick animations and redraw. Nothing else in the crate reads
/// input.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the handler returns `ControlFlow::Quit`.
    ///
    /// The handler receives `Some(event)` for input and `None` on idle ticks.
    /// When input arrives, the queue is drained before the next idle tick;
    /// otherwise high-frequency bursts (mouse drags, key repeat) would back
    /// up behind rendering and the pointer would lag the window it is
    /// dragging.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
