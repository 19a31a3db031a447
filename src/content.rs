//! Static text and imagery shown on the page.

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Wisdom {
    pub text: &'static str,
    pub category: &'static str,
    pub reference: &'static str,
}

pub struct Achievement {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Virtue {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Tribute {
    pub name: &'static str,
    pub relation: &'static str,
    pub message: &'static str,
}

impl Tribute {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

const IMAGE_BASE: &str = "https://kelechieze.wordpress.com/wp-content/uploads/2026/01";

pub fn photo(name: &str) -> String {
    format!("{}/{}.jpeg", IMAGE_BASE, name)
}

pub const BIRTH_NOTE: &str = "born on January 31st";
pub const CELEBRATION_TITLE: &str = "January 31st Celebration";
pub const MILESTONE_ORDINAL: &str = "63rd";
pub const FAMILY_PHONE: &str = "+1 (202) 555-0143";
pub const COPYRIGHT: &str = "© 2024 CRAFTED WITH LOVE FOR DAD'S GOLDEN MILESTONE.";

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "1961",
        title: "The Beginning",
        description: "A future legend was born on a cold January morning.",
    },
    Milestone {
        year: "1997",
        title: "First Child",
        description: "Had his first child Emmanuel, beginning his journey as a father.",
    },
    Milestone {
        year: "2000",
        title: "Second Child",
        description: "Had his second child Kelechi, expanding his loving family.",
    },
    Milestone {
        year: "2001",
        title: "Third Child",
        description: "Had his third child Onyinye, completing his beautiful family.",
    },
    Milestone {
        year: "Today",
        title: "Legacy",
        description: "The pillar of our home, radiating love and strength.",
    },
];

pub const WISDOM: &[Wisdom] = &[
    Wisdom {
        text: "Let your yes be yes and your no be no. Whatever is more than this comes from evil.",
        category: "Character",
        reference: "Matthew 5:37",
    },
    Wisdom {
        text: "Do not be anxious about anything, but in every situation, present your requests to God.",
        category: "Approach",
        reference: "Philippians 4:6",
    },
    Wisdom {
        text: "Unless the Lord builds the house, the builders labor in vain. Unless the Lord watches over the city, the guards stand watch in vain.",
        category: "Unity",
        reference: "Psalm 127:1",
    },
    Wisdom {
        text: "Love is patient, love is kind. It does not envy, it does not boast, it is not proud.",
        category: "Virtue",
        reference: "1 Corinthians 13:4",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { value: "63", label: "Golden Years" },
    Achievement { value: "∞", label: "Heart & Soul" },
    Achievement { value: "100%", label: "Strength" },
    Achievement { value: "Legend", label: "Status" },
];

pub const VIRTUES: &[Virtue] = &[
    Virtue {
        title: "Brilliance",
        description: "Facing every challenge with a sharp mind and steady hand.",
    },
    Virtue {
        title: "Devotion",
        description: "Putting family first, in every single breath and action taken.",
    },
];

pub const TRIBUTES: &[Tribute] = &[
    Tribute {
        name: "Dorothy Eze",
        relation: "Beloved Wife",
        message: "My dearest husband, for all these years you have been the rock of our family. Your unwavering love, faith, and strength have been the foundation of our beautiful life together. Every day with you is a blessing.",
    },
    Tribute {
        name: "Emmanuel Eze",
        relation: "First Son",
        message: "Dad, you have been my guiding light and greatest role model. Thank you for teaching me what it means to be a man of integrity, faith, and dedication. Your legacy lives on through me and I strive every day to make you proud.",
    },
    Tribute {
        name: "Onyinye Eze",
        relation: "Daughter (Last Born)",
        message: "Daddy, my first hero and forever protector. You have always made me feel like the most special girl in the world. Your wisdom, laughter, and unconditional love are my greatest treasures. I am so blessed to be your daughter.",
    },
    Tribute {
        name: "Kelechi Eze",
        relation: "Second Son",
        message: "To my father, my mentor, my inspiration. You taught me that true strength comes from faith and compassion. Every lesson you've shared, every moment of guidance, has shaped who I am today. I am honored to carry your name and legacy forward.",
    },
];

pub const GALLERY_ROW_ONE: &[&str] = &["dad2", "dad1", "dad4", "dad5", "dad8", "dad8"];
pub const GALLERY_ROW_TWO: &[&str] = &["dad6", "dad8", "dad7", "dad3", "dad2", "dad4"];

/// Repeats a marquee row so the scroll animation never shows a gap.
pub fn marquee(row: &[&'static str]) -> Vec<&'static str> {
    row.iter().copied().cycle().take(row.len() * 3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_repeats_row_three_times() {
        let looped = marquee(GALLERY_ROW_ONE);
        assert_eq!(looped.len(), 18);
        assert_eq!(&looped[6..12], GALLERY_ROW_ONE);
    }

    #[test]
    fn tribute_initial_is_first_letter() {
        assert_eq!(TRIBUTES[0].initial(), "D");
        assert_eq!(TRIBUTES.len(), 4);
    }

    #[test]
    fn photo_urls_point_at_jpeg_uploads() {
        assert_eq!(
            photo("dad1"),
            "https://kelechieze.wordpress.com/wp-content/uploads/2026/01/dad1.jpeg"
        );
    }
}
