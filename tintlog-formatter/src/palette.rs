use crossterm::style::{Color, ContentStyle, Stylize};

// 24-step grayscale ramp of the 256-color cube (steps 0-23 map to 232-255),
// same ramp the original palette is expressed in
fn gray(step: u8) -> Color {
    Color::AnsiValue(232 + step.min(23))
}

pub(crate) fn time() -> ContentStyle {
    ContentStyle::new().with(gray(15))
}

pub(crate) fn panic() -> ContentStyle {
    ContentStyle::new().with(Color::DarkRed).bold()
}

pub(crate) fn fatal() -> ContentStyle {
    ContentStyle::new().with(Color::DarkRed).bold()
}

pub(crate) fn error() -> ContentStyle {
    ContentStyle::new().with(Color::DarkRed)
}

// bright yellow, bold
pub(crate) fn warn() -> ContentStyle {
    ContentStyle::new().with(Color::Yellow).bold()
}

// bright cyan
pub(crate) fn info() -> ContentStyle {
    ContentStyle::new().with(Color::Cyan)
}

pub(crate) fn debug() -> ContentStyle {
    ContentStyle::new().with(Color::DarkMagenta)
}

pub(crate) fn trace() -> ContentStyle {
    ContentStyle::new().with(gray(15))
}

pub(crate) fn key() -> ContentStyle {
    ContentStyle::new().with(gray(15))
}

pub(crate) fn value() -> ContentStyle {
    ContentStyle::new().with(gray(19))
}

pub(crate) fn command_header() -> ContentStyle {
    ContentStyle::new().with(gray(10))
}

pub(crate) fn command() -> ContentStyle {
    ContentStyle::new().with(gray(15))
}

pub(crate) fn command_success() -> ContentStyle {
    ContentStyle::new().with(Color::DarkGreen).bold()
}

pub(crate) fn command_fail() -> ContentStyle {
    ContentStyle::new().with(Color::DarkRed).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_maps_into_ramp() {
        assert_eq!(gray(0), Color::AnsiValue(232));
        assert_eq!(gray(15), Color::AnsiValue(247));
        assert_eq!(gray(23), Color::AnsiValue(255));
    }

    #[test]
    fn test_gray_clamps_past_ramp_end() {
        assert_eq!(gray(200), Color::AnsiValue(255));
    }
}
