//! Built-in portfolio content.
//!
//! Everything here is fixed at startup. The category table feeds the
//! registry; the remaining tables are rendered directly by the UI.

use crate::model::{Category, VideoEntry};

pub const OWNER_NAME: &str = "Naqiya Khandwala";
pub const PHONE: &str = "+91 8527973777";
pub const INSTAGRAM: &str = "https://www.instagram.com/naqiyaaa_?igsh=YzAyMmc1ODhqdTJ6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub title: &'static str,
    pub quote: &'static str,
    /// 1..=5 stars
    pub rating: u8,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

/// A headline figure such as `500+ Projects Completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        title: "Reels and Tales",
        quote: "Your way of adding clips one after another says a proper story and rhythm...you show things creatively..",
        rating: 5,
        tag: "Creative Direction",
    },
    Review {
        title: "Insiya Sabuwala",
        quote: "You edited the videos in just the way I wanted, thank you for your service!",
        rating: 5,
        tag: "Client Satisfaction",
    },
    Review {
        title: "Apkireturn (Better Insights)",
        quote: "You add precision and depth to the videos, with right edits!",
        rating: 5,
        tag: "Technical Excellence",
    },
    Review {
        title: "Life Champions Ecosystem",
        quote: "You make explanation more understanding and virtually pleasing!",
        rating: 5,
        tag: "Educational Content",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Editing & Motion Design",
        icon: "🎬",
        skills: &[
            Skill { name: "DaVinci Resolve", level: 95 },
            Skill { name: "Adobe Premiere Pro", level: 90 },
            Skill { name: "Adobe After Effects", level: 88 },
        ],
    },
    SkillGroup {
        name: "Design & Visual Art",
        icon: "🎨",
        skills: &[
            Skill { name: "Adobe Illustrator", level: 92 },
            Skill { name: "Adobe Photoshop", level: 90 },
        ],
    },
];

pub const ACHIEVEMENTS: &[Stat] = &[
    Stat { value: "500+", label: "Projects Completed" },
    Stat { value: "1+", label: "Years Experience" },
    Stat { value: "10+", label: "Happy Clients" },
    Stat { value: "100%", label: "Passion Driven" },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "100%", label: "Dedication" },
    Stat { value: "7", label: "Categories" },
    Stat { value: "500+", label: "Videos Created" },
    Stat { value: "10+", label: "Satisfied Clients" },
    Stat { value: "1+", label: "Years Experience" },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Phone",
        href: "tel:+918527973777",
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/khandwalanaqiya019240?utm_source=share&utm_campaign=share_via&utm_content=profile&utm_medium=android_app",
    },
    ContactLink {
        label: "Instagram",
        href: INSTAGRAM,
    },
    ContactLink {
        label: "YouTube",
        href: "https://youtube.com/@thenaqiya?si=oSLgU74jHQ-fqnvn",
    },
    ContactLink {
        label: "Email",
        href: "mailto:khandwalanaqiya@gmail.com",
    },
];

/// Tabs on the reviews page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewsTab {
    #[default]
    Reviews,
    Graphics,
    Photos,
}

impl ReviewsTab {
    pub fn all() -> &'static [ReviewsTab] {
        &[ReviewsTab::Reviews, ReviewsTab::Graphics, ReviewsTab::Photos]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewsTab::Reviews => "Client Reviews",
            ReviewsTab::Graphics => "Graphic Design",
            ReviewsTab::Photos => "Photography",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ReviewsTab::Reviews => ReviewsTab::Graphics,
            ReviewsTab::Graphics => ReviewsTab::Photos,
            ReviewsTab::Photos => ReviewsTab::Reviews,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ReviewsTab::Reviews => ReviewsTab::Photos,
            ReviewsTab::Graphics => ReviewsTab::Reviews,
            ReviewsTab::Photos => ReviewsTab::Graphics,
        }
    }
}

/// The seven galleries of the edits page, in index-page order.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category {
            id: "fun-vlog".to_string(),
            name: "Fun/Vlog".to_string(),
            description: "Spontaneous moments and vibrant stories captured creatively.".to_string(),
            videos: vec![
                VideoEntry::new(
                    "Is this growth or just burn out?",
                    "/1.png",
                    "https://www.instagram.com/reel/DLy3oaTsgSM/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
                VideoEntry::new(
                    "Alan Turing",
                    "/Alan Turing.png",
                    "https://www.instagram.com/reel/DMFvJ8OxtlT/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
                VideoEntry::new(
                    "Virginia Woolf",
                    "/Broken glass.png",
                    "https://www.instagram.com/reel/DMfm6xCg_0K/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
            ],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-pink-500 to-violet-500".to_string(),
            accent_color: "pink".to_string(),
        },
        Category {
            id: "motivation-business".to_string(),
            name: "Motivation/Business".to_string(),
            description: "Inspiring edits with a purpose-driven message.".to_string(),
            videos: vec![
                VideoEntry::new(
                    "Top Benefits of Business Digitalization | Dr. Ajay Shesh | Life Champions Ecosystem for SME Growth",
                    "/ytTaklu.png",
                    "https://www.youtube.com/watch?v=8_nLrahoR1Q&ab_channel=LifeChampionsEcosystem",
                )
                .with_description("A video on business digitalization"),
                VideoEntry::new(
                    "Motivation pushes you, but inspiration pulls you.",
                    "/5.png",
                    "https://youtube.com/shorts/0KY0FVsYBwI?si=P3FSWPXy5HkAQZ4e",
                )
                .with_description("It's a short on how motivation and inspiration works"),
                VideoEntry::new(
                    "Money Mastery for a Better Future | Gaurav Agarwal at Saksham Summit 2024",
                    "/6.png",
                    "https://youtu.be/HNSK0KMB938?si=HeFql6ghl6pFgVjz",
                )
                .with_description(
                    "This was a series, filled with proper guidelines on how to improve in your wealth",
                ),
            ],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-blue-500 to-cyan-500".to_string(),
            accent_color: "blue".to_string(),
        },
        Category {
            id: "fashion".to_string(),
            name: "Fashion".to_string(),
            description: "Bold visuals and stylish edits for modern fashion.".to_string(),
            videos: vec![
                VideoEntry::new(
                    "Pink dress",
                    "/yt01.png",
                    "https://www.instagram.com/reel/DFH-OSOS_xq/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
                VideoEntry::new(
                    "White dress",
                    "/yt.png",
                    "https://www.instagram.com/reel/DF5EZgcyXJm/",
                ),
            ],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-rose-500 to-pink-500".to_string(),
            accent_color: "rose".to_string(),
        },
        Category {
            id: "tutorial-products".to_string(),
            name: "Tutorial/Products".to_string(),
            description: "Clear, engaging breakdowns of products and tutorials.".to_string(),
            videos: vec![
                VideoEntry::new("Knitting", "/11.png", "https://youtu.be/sx8TJEA7MZs?si=KC69tGlTPI35bSj2"),
                VideoEntry::new("DIY Clutch", "/12.png", "https://youtu.be/rJMhKXCt4Sc?si=8VUANilkfMDjthEg"),
                VideoEntry::new(
                    "Short about the tutorial",
                    "/13.png",
                    "https://youtube.com/shorts/x7DI-9brdRg?si=AqHWgyRAcHl3PjWz",
                ),
                VideoEntry::new(
                    "Company advertisement",
                    "/14.png",
                    "https://youtube.com/shorts/RihZtXARbrU?si=qym4-KYHA0Ddmgqb",
                ),
                VideoEntry::new(
                    "Stop motion product advertisement",
                    "/15.png",
                    "https://www.instagram.com/reel/DJ0_nloIVE2/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
            ],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-emerald-500 to-teal-500".to_string(),
            accent_color: "emerald".to_string(),
        },
        Category {
            id: "itr-advertise".to_string(),
            name: "ITR/Advertise".to_string(),
            description: "Concise ads and informative reels for businesses and ITR.".to_string(),
            videos: vec![
                VideoEntry::new(
                    "March 31st Tax",
                    "/tax.png",
                    "https://www.instagram.com/reel/DHn0sLSpfl-/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
                VideoEntry::new(
                    "Celebrating women's day",
                    "/yt2.png",
                    "https://www.instagram.com/reel/DG7M635NpTP/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
                VideoEntry::new(
                    "Advertisement",
                    "/ad.png",
                    "https://drive.google.com/file/d/12Hc79XZ7VEzb_HDBF9waHm4Tj-VTV3jo/view?usp=drive_link",
                ),
            ],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-orange-500 to-red-500".to_string(),
            accent_color: "orange".to_string(),
        },
        Category {
            id: "stop-motion".to_string(),
            name: "Stop Motion Videos".to_string(),
            description: "Creative stop-motion sequences that tell more with less.".to_string(),
            videos: vec![
                VideoEntry::new(
                    "Logo animation",
                    "/drive.png",
                    "https://drive.google.com/file/d/1ijoVZpe1V3eMUUkHNrFJiV2gmYkAIaqF/view?usp=drive_link",
                ),
                VideoEntry::new(
                    "Tatting Information",
                    "/17.png",
                    "https://www.instagram.com/reel/DH5zeVroatW/?utm_source=ig_web_copy_link&igsh=MzRlODBiNWFlZA==",
                ),
            ],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-purple-500 to-indigo-500".to_string(),
            accent_color: "purple".to_string(),
        },
        Category {
            id: "bts".to_string(),
            name: "Behind the Scenes (BTS)".to_string(),
            description: "Real work behind the lens, raw and unscripted moments.".to_string(),
            videos: vec![VideoEntry::new(
                "Siddharth Nigam",
                "/18.jpg",
                "https://www.linkedin.com/posts/khandwalanaqiya019240_dop-onsetlife-lowbudgethighimpact-activity-7320692669272215552-ZAbj?utm_source=social_share_send&utm_medium=member_desktop_web&rcm=ACoAAD9xMocBIbd7etcL04BYnVrIPmOMvOTRpHk",
            )],
            external_link: INSTAGRAM.to_string(),
            gradient: "from-amber-500 to-yellow-500".to_string(),
            accent_color: "amber".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_category_count_matches_table() {
        let stat = HERO_STATS.iter().find(|s| s.label == "Categories").unwrap();
        assert_eq!(stat.value, builtin_categories().len().to_string());
    }

    #[test]
    fn test_reviews_tab_cycles() {
        let mut tab = ReviewsTab::default();
        for _ in 0..ReviewsTab::all().len() {
            tab = tab.next();
        }
        assert_eq!(tab, ReviewsTab::Reviews);
        assert_eq!(ReviewsTab::Reviews.prev(), ReviewsTab::Photos);
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)));
        assert!(SKILL_GROUPS
            .iter()
            .flat_map(|g| g.skills.iter())
            .all(|s| s.level <= 100));
    }
}
