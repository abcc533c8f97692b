/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: minimal terminal, compact hints
    Compact,
    /// 60-99 cols: panes stacked vertically
    Normal,
    /// 100+ cols: panes side by side
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Source and target panes share a row
    pub fn side_by_side(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(220), Breakpoint::Wide);
    }

    #[test]
    fn panes_go_side_by_side_when_wide() {
        assert!(Breakpoint::Wide.side_by_side());
        assert!(!Breakpoint::Normal.side_by_side());
        assert!(Breakpoint::Normal.at_least(Breakpoint::Compact));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }
}
