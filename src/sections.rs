/// Anchored sections of the page, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Countdown,
    About,
    Timeline,
    Gallery,
    Wisdom,
    MilestoneReflection,
    Tributes,
}

impl Section {
    /// Sections listed in the top navigation.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Timeline,
        Section::Gallery,
        Section::Wisdom,
        Section::Tributes,
    ];

    /// Sections listed under the footer's quick access.
    pub const QUICK_ACCESS: [Section; 4] = [
        Section::About,
        Section::Timeline,
        Section::Gallery,
        Section::Tributes,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Countdown => "countdown",
            Section::About => "about",
            Section::Timeline => "timeline",
            Section::Gallery => "gallery",
            Section::Wisdom => "wisdom",
            Section::MilestoneReflection => "milestone-reflection",
            Section::Tributes => "tributes",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "Our Hero",
            Section::Hero => "Home",
            Section::Countdown => "Countdown",
            Section::Timeline => "Timeline",
            Section::Gallery => "Gallery",
            Section::Wisdom => "Wisdom",
            Section::MilestoneReflection => "Milestone Reflection",
            Section::Tributes => "Tributes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_is_labelled_as_the_hero() {
        assert_eq!(Section::About.nav_label(), "Our Hero");
        assert_eq!(Section::Tributes.nav_label(), "Tributes");
    }

    #[test]
    fn ids_are_unique() {
        let all = [
            Section::Hero,
            Section::Countdown,
            Section::About,
            Section::Timeline,
            Section::Gallery,
            Section::Wisdom,
            Section::MilestoneReflection,
            Section::Tributes,
        ];
        let mut ids: Vec<_> = all.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }
}
