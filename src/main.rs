use std::time::Duration;

use clap::Parser;

use decoy_os::apps::AppKind;
use decoy_os::drivers::InputDriver;
use decoy_os::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use decoy_os::error::ShellError;
use decoy_os::event_loop::{ControlFlow, EventLoop};
use decoy_os::session::{Session, SessionOptions};
use decoy_os::tracing_sub;

/// A simulated penetration-testing desktop environment for the terminal.
/// Nothing it shows is real: scans, captures, and tunnels are all theater.
#[derive(Debug, Parser)]
#[command(name = "decoy-os", version)]
struct Cli {
    /// Skip the boot splash and login screen.
    #[arg(long)]
    skip_boot: bool,

    /// Idle tick interval in milliseconds (drives animations).
    #[arg(long, default_value_t = 80)]
    tick_ms: u64,

    /// Disable mouse capture (keyboard only).
    #[arg(long)]
    no_mouse: bool,

    /// Open these applications once the desktop mounts. Repeatable.
    #[arg(long, value_enum)]
    open: Vec<AppKind>,
}

fn main() -> Result<(), ShellError> {
    let cli = Cli::parse();
    tracing_sub::init_default();

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(!cli.no_mouse)?;

    let mut session = Session::new(SessionOptions {
        skip_boot: cli.skip_boot,
        open: cli.open,
    });

    let mut events = EventLoop::new(&mut input, Duration::from_millis(cli.tick_ms.max(1)));
    events.run(|_, event| {
        match event {
            Some(event) => session.handle_event(&event),
            None => {
                session.tick();
                output.draw(|frame| session.render(frame))?;
            }
        }
        Ok(if session.should_quit() {
            ControlFlow::Quit
        } else {
            ControlFlow::Continue
        })
    })?;

    output.exit()?;
    Ok(())
}
