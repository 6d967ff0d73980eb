//! Initial layout metadata for freshly opened windows.
//!
//! Stateless: position depends only on how many windows are already open
//! (diagonal cascade with modulo wrap so the stagger never walks off
//! screen), and size/title/icon are fixed per application kind.

use crate::apps::AppKind;

use super::registry::{Point, Size};

pub const CASCADE_ORIGIN_X: i32 = 6;
pub const CASCADE_ORIGIN_Y: i32 = 2;
pub const CASCADE_STEP_X: i32 = 4;
pub const CASCADE_STEP_Y: i32 = 2;
pub const CASCADE_WRAP_X: i32 = 32;
pub const CASCADE_WRAP_Y: i32 = 12;

/// Where the next window opens, given the current open-window count.
pub fn cascade_origin(open_count: usize) -> Point {
    let n = open_count as i32;
    Point {
        x: CASCADE_ORIGIN_X + (n * CASCADE_STEP_X) % CASCADE_WRAP_X,
        y: CASCADE_ORIGIN_Y + (n * CASCADE_STEP_Y) % CASCADE_WRAP_Y,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AppMetadata {
    pub title: &'static str,
    pub icon: &'static str,
    pub size: Size,
}

/// Fixed per-kind display metadata and windowed size.
pub fn metadata(kind: AppKind) -> AppMetadata {
    let (title, icon, width, height) = match kind {
        AppKind::Terminal => ("Terminal", ">_", 64, 16),
        AppKind::FileExplorer => ("File Explorer", "▤", 66, 18),
        AppKind::Browser => ("Web Browser", "●", 72, 20),
        AppKind::Breach => ("SYSTEM BREACH - Data Extraction", ">_", 68, 18),
        AppKind::Sniffer => ("Packet Sniffer", "∿", 72, 20),
        AppKind::PortScan => ("Port Scanner", "⌖", 66, 18),
        AppKind::CodeEditor => ("Code Editor", "≔", 72, 20),
        AppKind::Notes => ("Notes", "≡", 60, 16),
        AppKind::Calculator => ("Calculator", "±", 26, 14),
        AppKind::PdfViewer => ("PDF Viewer", "□", 64, 20),
        AppKind::Vpn => ("Secure VPN", "◈", 48, 15),
        AppKind::Settings => ("Settings", "✦", 60, 18),
    };
    AppMetadata {
        title,
        icon,
        size: Size { width, height },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_windows_cascade_to_distinct_spots() {
        let a = cascade_origin(0);
        let b = cascade_origin(1);
        let c = cascade_origin(2);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn cascade_wraps_instead_of_drifting() {
        for n in 0..200 {
            let p = cascade_origin(n);
            assert!(p.x < CASCADE_ORIGIN_X + CASCADE_WRAP_X);
            assert!(p.y < CASCADE_ORIGIN_Y + CASCADE_WRAP_Y);
            assert!(p.x >= CASCADE_ORIGIN_X);
            assert!(p.y >= CASCADE_ORIGIN_Y);
        }
    }

    #[test]
    fn calculator_is_narrower_than_browser() {
        assert!(metadata(AppKind::Calculator).size.width < metadata(AppKind::Browser).size.width);
    }

    #[test]
    fn breach_window_carries_themed_title() {
        assert!(metadata(AppKind::Breach).title.starts_with("SYSTEM BREACH"));
        // same hosted content family, same icon
        assert_eq!(
            metadata(AppKind::Breach).icon,
            metadata(AppKind::Terminal).icon
        );
    }
}
