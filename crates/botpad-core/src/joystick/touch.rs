//! Touch point selection
//!
//! A `touchmove` can carry several active touches (another finger on a
//! different control, say). Only one of them drives the stick.

/// Pick the touch that drives the stick.
///
/// Touches are scanned in list order and the first one accepted by
/// `is_on_joystick` wins; the rest are ignored for this event.
pub fn select_touch<T, I, F>(touches: I, mut is_on_joystick: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    touches.into_iter().find(|touch| is_on_joystick(touch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct FakeTouch {
        id: u32,
        on_joystick: bool,
    }

    fn touch(id: u32, on_joystick: bool) -> FakeTouch {
        FakeTouch { id, on_joystick }
    }

    #[test]
    fn test_first_match_wins() {
        let touches = [touch(1, false), touch(2, true), touch(3, true)];
        let picked = select_touch(touches, |t| t.on_joystick);
        assert_eq!(picked.map(|t| t.id), Some(2));
    }

    #[test]
    fn test_no_match() {
        let touches = [touch(1, false), touch(2, false)];
        assert!(select_touch(touches, |t| t.on_joystick).is_none());
    }

    #[test]
    fn test_empty_list() {
        let touches: Vec<FakeTouch> = Vec::new();
        assert!(select_touch(touches, |_| true).is_none());
    }

    #[test]
    fn test_stops_scanning_after_match() {
        let touches = [touch(1, true), touch(2, true)];
        let mut seen = 0;
        select_touch(touches, |t| {
            seen += 1;
            t.on_joystick
        });
        assert_eq!(seen, 1);
    }
}
