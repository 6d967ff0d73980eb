//! Hosted application content.
//!
//! Every "application" on this desktop is a simulation: scripted transcripts
//! and random noise, no real network or file-system access. The window
//! manager only sees them through [`AppContent`], so adding an app means one
//! new variant on [`AppKind`] plus one arm in [`AppKind::launch`].

use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod breach;
pub mod browser;
pub mod calculator;
pub mod code_editor;
pub mod file_explorer;
pub mod notes;
pub mod pdf_viewer;
pub mod portscan;
pub mod settings;
pub mod sniffer;
pub mod terminal;
pub mod vpn;

/// Tag identifying which content a window frame hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum AppKind {
    Terminal,
    FileExplorer,
    Browser,
    /// Themed breach-sequence variant of the terminal.
    Breach,
    Sniffer,
    PortScan,
    CodeEditor,
    Notes,
    Calculator,
    PdfViewer,
    Vpn,
    Settings,
}

impl AppKind {
    /// Build the content component this kind hosts.
    pub fn launch(self) -> Box<dyn AppContent> {
        match self {
            AppKind::Terminal => Box::new(terminal::TerminalApp::new()),
            AppKind::FileExplorer => Box::new(file_explorer::FileExplorerApp::new()),
            AppKind::Browser => Box::new(browser::BrowserApp::new()),
            AppKind::Breach => Box::new(breach::BreachApp::new()),
            AppKind::Sniffer => Box::new(sniffer::SnifferApp::new()),
            AppKind::PortScan => Box::new(portscan::PortScanApp::new()),
            AppKind::CodeEditor => Box::new(code_editor::CodeEditorApp::new()),
            AppKind::Notes => Box::new(notes::NotesApp::new()),
            AppKind::Calculator => Box::new(calculator::CalculatorApp::new()),
            AppKind::PdfViewer => Box::new(pdf_viewer::PdfViewerApp::new()),
            AppKind::Vpn => Box::new(vpn::VpnApp::new()),
            AppKind::Settings => Box::new(settings::SettingsApp::new()),
        }
    }
}

/// Something an app asks the desktop to do on its behalf.
///
/// This is the one path where hosted content drives the window manager
/// instead of being passively rendered (the breach sequence opens windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRequest {
    OpenWindow(AppKind),
}

/// Rendering/input context handed to content components.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentContext {
    focused: bool,
}

impl ContentContext {
    pub const fn new(focused: bool) -> Self {
        Self { focused }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }
}

/// Contract between the desktop and a hosted application.
///
/// `tick` advances time-driven simulations; `take_requests` drains anything
/// the app wants the desktop to do. Both default to inert.
pub trait AppContent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ContentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ContentContext) -> bool {
        false
    }

    fn tick(&mut self) {}

    fn take_requests(&mut self) -> Vec<AppRequest> {
        Vec::new()
    }
}
