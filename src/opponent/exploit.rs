use super::style::Style;

/// Counter-strategy deltas applied to our own profile.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize)]
pub struct Exploit {
    pub steal_bonus: f32,
    pub bluff_delta: f32,
    pub value_size_delta: f32,
    pub call_down_delta: f32,
}

impl From<Style> for Exploit {
    fn from(style: Style) -> Self {
        let (steal_bonus, bluff_delta, value_size_delta, call_down_delta) = match style {
            // steal more, bluff and call less
            Style::Rock => (0.15, -0.10, 0.00, -0.15),
            // value bet big, never bluff
            Style::Fish => (0.00, -0.20, 0.30, 0.00),
            // bigger value, looser calls
            Style::Lag => (0.00, 0.00, 0.10, 0.15),
            Style::Tag | Style::Unknown => (0.00, 0.00, 0.00, 0.00),
        };
        Self {
            steal_bonus,
            bluff_delta,
            value_size_delta,
            call_down_delta,
        }
    }
}

impl Exploit {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_styles_do_nothing() {
        assert!(Exploit::from(Style::Tag).is_noop());
        assert!(Exploit::from(Style::Unknown).is_noop());
    }

    #[test]
    fn fish_get_value() {
        let e = Exploit::from(Style::Fish);
        assert!(e.value_size_delta > 0.0);
        assert!(e.bluff_delta < 0.0);
    }

    #[test]
    fn rocks_get_stolen_from() {
        let e = Exploit::from(Style::Rock);
        assert!(e.steal_bonus > 0.0);
        assert!(e.call_down_delta < 0.0);
    }
}
