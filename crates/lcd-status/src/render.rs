//! Frame layout: logo on top, clock line below it, optional text below that.

use std::time::{SystemTime, UNIX_EPOCH};

use lcd::{Surface, SurfaceError, Whence};

/// Gap in pixels between the logo and the first text line.
const LOGO_GAP: i64 = 1;

/// Redraw the whole frame.
pub fn frame(surface: &mut Surface, clock: &str, text: Option<&str>) {
    let height = surface.height();
    surface.seek(0, Whence::Set);
    surface.clear(height);

    let mut row = 0;
    match surface.draw_logo() {
        Ok(()) => row = i64::from(surface.logo_size().1).saturating_add(LOGO_GAP),
        // narrow panels simply go without
        Err(SurfaceError::UnsupportedLogo { .. }) => {}
        Err(err) => tracing::warn!(%err, "logo not drawn"),
    }

    let line_height = i64::from(surface.font_height());
    line(surface, row, clock);
    if let Some(text) = text {
        line(surface, row.saturating_add(line_height), text);
    }
}

fn line(surface: &mut Surface, y: i64, text: &str) {
    surface.set_x(0);
    surface.set_y(y);
    surface.put_string(text);
}

/// `HH:MM:SS` of `now` in UTC.
pub fn clock(now: SystemTime) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_or(0, |since| since.as_secs());
    // Constant non-zero divisors.
    #[allow(clippy::arithmetic_side_effects)]
    let (h, m, s) = {
        let of_day = secs % 86_400;
        (of_day / 3600, of_day / 60 % 60, of_day % 60)
    };
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    #![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]
    use super::*;
    use std::time::Duration;

    use lcd::logo::LOGO_128X8_GRAY4;
    use lcd::Geometry;

    fn surface(width: u32, height: u32, bpp: u32) -> Surface {
        Surface::with_geometry(Geometry::new(width, height, bpp).unwrap())
    }

    fn row_is_blank(s: &Surface, row: usize) -> bool {
        let stride = s.stride();
        s.as_bytes()[row * stride..(row + 1) * stride]
            .iter()
            .all(|&b| b == 0)
    }

    #[test]
    fn test_clock_formats_utc() {
        let t = UNIX_EPOCH + Duration::from_secs(3 * 86_400 + 13 * 3600 + 7 * 60 + 9);
        assert_eq!(clock(t), "13:07:09");
        assert_eq!(clock(UNIX_EPOCH), "00:00:00");
    }

    #[test]
    fn test_frame_layout_with_logo() {
        let mut s = surface(128, 64, 4);
        frame(&mut s, "12:34:56", Some("ok"));

        assert_eq!(&s.as_bytes()[..512], LOGO_128X8_GRAY4.as_slice());
        // clock on rows 9..17, text on rows 17..25
        assert!(row_is_blank(&s, 8));
        assert!((9..17).any(|row| !row_is_blank(&s, row)));
        assert!((17..25).any(|row| !row_is_blank(&s, row)));
        assert!((25..64).all(|row| row_is_blank(&s, row)));
    }

    #[test]
    fn test_frame_without_logo_starts_at_top() {
        let mut s = surface(64, 16, 4);
        frame(&mut s, "00:00:00", None);
        assert!((0..8).any(|row| !row_is_blank(&s, row)));
        assert!((8..16).all(|row| row_is_blank(&s, row)));
    }

    #[test]
    fn test_frame_replaces_previous_content() {
        let mut s = surface(64, 16, 4);
        frame(&mut s, "88:88:88", Some("long line of text"));
        let mut fresh = surface(64, 16, 4);
        frame(&mut fresh, "11:11:11", None);

        frame(&mut s, "11:11:11", None);
        assert_eq!(s.as_bytes(), fresh.as_bytes());
    }
}
