//! Grid placement for theme listings.
//!
//! Themes are laid out three to a row with alternating colors. The last row
//! may be short; a lone trailing item is centered and a trailing pair ends
//! on the right.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Start => "",
            Self::Center => "text-center",
            Self::End => "text-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Success,
}

impl Tone {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Danger => "text-danger",
            Self::Success => "text-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub align: Align,
    pub tone: Tone,
}

/// Placement of item `index` in a grid holding `count` items.
#[must_use]
pub fn placement(index: usize, count: usize) -> Placement {
    let is_last = index + 1 == count;
    let column = (index + 1) % 3;

    let align = if (count % 3 == 2 && is_last) || column == 0 {
        Align::End
    } else if (count % 3 == 1 && is_last) || column == 2 {
        Align::Center
    } else {
        Align::Start
    };

    let tone = if index % 2 == 0 {
        Tone::Danger
    } else {
        Tone::Success
    };

    Placement { align, tone }
}

/// A record decorated with its grid classes for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Placed<T> {
    #[serde(flatten)]
    pub item: T,
    pub align: &'static str,
    pub color: &'static str,
}

#[must_use]
pub fn place<T>(items: Vec<T>) -> Vec<Placed<T>> {
    let count = items.len();
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let Placement { align, tone } = placement(i, count);
            Placed {
                item,
                align: align.class(),
                color: tone.class(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligns(count: usize) -> Vec<Align> {
        (0..count).map(|i| placement(i, count).align).collect()
    }

    #[test]
    fn test_full_rows_follow_column() {
        use Align::{Center, End, Start};
        assert_eq!(aligns(3), vec![Start, Center, End]);
        assert_eq!(aligns(6), vec![Start, Center, End, Start, Center, End]);
    }

    #[test]
    fn test_lone_trailing_item_is_centered() {
        let row = aligns(7);
        assert_eq!(row[6], Align::Center);
        assert_eq!(row[5], Align::End);
    }

    #[test]
    fn test_trailing_pair_ends_right() {
        let row = aligns(8);
        assert_eq!(row[6], Align::Start);
        assert_eq!(row[7], Align::End);
    }

    #[test]
    fn test_single_item() {
        assert_eq!(aligns(1), vec![Align::Center]);
    }

    #[test]
    fn test_tones_alternate() {
        let tones: Vec<Tone> = (0..4).map(|i| placement(i, 4).tone).collect();
        assert_eq!(
            tones,
            vec![Tone::Danger, Tone::Success, Tone::Danger, Tone::Success]
        );
    }

    #[test]
    fn test_place_keeps_items_and_sets_classes() {
        let placed = place(vec!["a", "b"]);
        assert_eq!(placed[0].item, "a");
        assert_eq!(placed[0].color, "text-danger");
        assert_eq!(placed[0].align, "");
        assert_eq!(placed[1].color, "text-success");
        assert_eq!(placed[1].align, "text-end");
    }
}
